// SPDX-License-Identifier: MPL-2.0
//! Clipboard port definition.

pub use crate::error::ClipboardError;

/// Port for writing plain text to the system clipboard.
///
/// Implementations must report every failed write; the caller relies on the
/// error to avoid showing a "copied" acknowledgment for text that never
/// reached the clipboard.
pub trait ClipboardWriter {
    /// Replaces the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns a [`ClipboardError`] if no clipboard is reachable or the write
    /// is refused.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}
