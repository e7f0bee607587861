// SPDX-License-Identifier: MPL-2.0
//! System clipboard adapter built on `arboard`.

use crate::application::port::{ClipboardError, ClipboardWriter};

/// Writes to the platform clipboard.
///
/// The `arboard` handle is opened on first use and kept afterwards; on some
/// platforms (X11) dropping it early discards the copied text.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<arboard::Clipboard>,
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("connected", &self.handle.is_some())
            .finish()
    }
}

impl SystemClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        if self.handle.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.handle = Some(clipboard);
        }
        self.handle
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("clipboard not initialized".into()))
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let result = self
            .handle()?
            .set_text(text)
            .map_err(|e| ClipboardError::WriteRejected(e.to_string()));

        if result.is_err() {
            // A failed handle is not reused; the next copy reconnects.
            self.handle = None;
        }
        result
    }
}
