// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`clipboard`]: System clipboard via `arboard` (implements [`ClipboardWriter`])
//! - [`links`]: Default browser via `webbrowser` (implements [`LinkOpener`])
//! - [`visibility`]: Scroll-geometry sentinel tracking (implements [`VisibilityObserver`])
//!
//! [`ClipboardWriter`]: crate::application::port::ClipboardWriter
//! [`LinkOpener`]: crate::application::port::LinkOpener
//! [`VisibilityObserver`]: crate::application::port::VisibilityObserver

pub mod clipboard;
pub mod links;
pub mod visibility;

pub use clipboard::SystemClipboard;
pub use links::SystemBrowser;
pub use visibility::GeometryObserver;
