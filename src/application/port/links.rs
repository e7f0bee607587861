// SPDX-License-Identifier: MPL-2.0
//! Outbound link port definition.

pub use crate::error::LinkError;

/// Port for opening an external URL in the user's browser.
///
/// Only ever called in response to an explicit click.
pub trait LinkOpener {
    /// Opens `url` in a new browsing context.
    ///
    /// # Errors
    ///
    /// Returns a [`LinkError`] if no browser could be launched.
    fn open(&mut self, url: &str) -> Result<(), LinkError>;
}
