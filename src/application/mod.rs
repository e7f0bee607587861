// SPDX-License-Identifier: MPL-2.0
//! Application layer - capability interfaces.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Infrastructure implements the ports with real system services
//! - The presentation layer (`ui`, `app`) depends on the traits only, so tests
//!   can build the whole application with fakes
//!
//! # Example
//!
//! ```ignore
//! use policy_portal::application::port::ClipboardWriter;
//!
//! fn copy(clipboard: &mut dyn ClipboardWriter, value: &str) -> bool {
//!     clipboard.write_text(value).is_ok()
//! }
//! ```

pub mod port;
