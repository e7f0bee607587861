// SPDX-License-Identifier: MPL-2.0
//! Browser launcher adapter built on `webbrowser`.

use crate::application::port::{LinkError, LinkOpener};

/// Opens URLs with the platform's default browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl LinkOpener for SystemBrowser {
    fn open(&mut self, url: &str) -> Result<(), LinkError> {
        tracing::info!(%url, "opening external link");
        webbrowser::open(url).map_err(|e| LinkError {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}
