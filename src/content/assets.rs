// SPDX-License-Identifier: MPL-2.0
//! Embedded payment-method logos.
//!
//! Logos are looked up by payment-method id through a fixed table. Unknown ids
//! resolve to the placeholder logo instead of failing.

use iced::widget::svg;
use rust_embed::RustEmbed;
use std::borrow::Cow;

#[derive(RustEmbed)]
#[folder = "assets/logos/"]
struct Asset;

/// File name of the logo used when a method has no table entry.
pub const PLACEHOLDER_LOGO: &str = "placeholder.svg";

const LOGO_TABLE: &[(&str, &str)] = &[
    ("cih-bank", "cih-bank.svg"),
    ("payoneer", "payoneer.svg"),
    ("redotpay", "redotpay.svg"),
    ("usdt-trc20", "usdt.svg"),
    ("binance-id", "binance.svg"),
    ("wise", "wise.svg"),
];

/// Reference to an embedded logo image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoAsset {
    file_name: &'static str,
}

impl LogoAsset {
    /// Resolves the logo for a payment-method id.
    #[must_use]
    pub fn for_method(id: &str) -> Self {
        let file_name = LOGO_TABLE
            .iter()
            .find(|(method_id, _)| *method_id == id)
            .map_or(PLACEHOLDER_LOGO, |&(_, file)| file);
        Self { file_name }
    }

    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            file_name: PLACEHOLDER_LOGO,
        }
    }

    #[must_use]
    pub fn file_name(self) -> &'static str {
        self.file_name
    }

    #[must_use]
    pub fn is_placeholder(self) -> bool {
        self.file_name == PLACEHOLDER_LOGO
    }

    /// Raw SVG bytes, falling back to the placeholder if the file is missing.
    #[must_use]
    pub fn bytes(self) -> Cow<'static, [u8]> {
        if let Some(file) = Asset::get(self.file_name) {
            return file.data;
        }

        tracing::warn!(file = self.file_name, "logo missing from bundle");
        Asset::get(PLACEHOLDER_LOGO).map_or(Cow::Borrowed(&[]), |file| file.data)
    }

    /// Handle ready for an `iced` SVG widget.
    #[must_use]
    pub fn handle(self) -> svg::Handle {
        svg::Handle::from_memory(self.bytes())
    }
}
