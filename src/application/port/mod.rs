// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! The UI never talks to the clipboard, the browser, or the toolkit's scroll
//! geometry directly. It goes through these traits, and infrastructure
//! adapters implement them. Tests substitute deterministic fakes.
//!
//! # Available Ports
//!
//! - [`visibility`]: Sentinel visibility observation for the reading gate
//! - [`clipboard`]: Plain-text clipboard writes
//! - [`links`]: Opening outbound URLs
//!
//! # Design Notes
//!
//! - Methods are synchronous; the Iced update loop calls them directly
//! - Fallible methods return dedicated recoverable error types

pub mod clipboard;
pub mod links;
pub mod visibility;

pub use clipboard::{ClipboardError, ClipboardWriter};
pub use links::{LinkError, LinkOpener};
pub use visibility::{
    ObservationId, ObserveOptions, RootMargin, ScrollSample, SentinelGeometry, VisibilityChange,
    VisibilityObserver, VisibilityRoot,
};
