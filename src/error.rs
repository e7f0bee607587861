// SPDX-License-Identifier: MPL-2.0
//! Application error types.
//!
//! Every failure this application can hit is local and recoverable: a missing
//! translation falls back to its source text, an invalid preference falls back
//! to its default, and clipboard or browser failures surface as toasts. The
//! types here carry enough context for those toasts and for log lines.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Preferences Error: {0}")]
    Preferences(String),

    #[error("Clipboard Error: {0}")]
    Clipboard(#[from] ClipboardError),

    #[error("Link Error: {0}")]
    Link(#[from] LinkError),
}

/// Failure to write text to the system clipboard.
///
/// Raised by [`crate::application::port::ClipboardWriter`] implementations and
/// reported to the user instead of being swallowed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard is reachable (headless session, missing display server).
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard exists but refused the write.
    #[error("clipboard write rejected: {0}")]
    WriteRejected(String),
}

impl ClipboardError {
    /// Source string shown in the error toast, resolved through the translator.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        "Could not copy to the clipboard."
    }
}

/// Failure to hand an outbound URL to the system browser.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("could not open {url}: {reason}")]
pub struct LinkError {
    pub url: String,
    pub reason: String,
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
