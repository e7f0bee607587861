// SPDX-License-Identifier: MPL-2.0
//! Payment-method content.
//!
//! Content is language-specific and comes from the dictionaries (see
//! [`crate::i18n::Translator::payment_content`]); this module defines its
//! shape and the derived data the payment screen needs.

use super::assets::LogoAsset;
use serde::{Deserialize, Serialize};

/// Messaging link opened by "Contact Support".
pub const SUPPORT_CONTACT_URL: &str = "https://wa.me/1234567890";

/// Third-party hosted payment page opened by "Open Payment Page".
pub const HOSTED_PAYMENT_URL: &str = "https://wise.com/pay/business/adversolutionsllc";

/// Number of detail rows shown on a payment card.
pub const CARD_DETAIL_ROWS: usize = 2;

/// One labeled value of a payment method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodDetail {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub copyable: bool,
}

/// Localized description of one payment channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodContent {
    pub id: String,
    pub name: String,
    pub details: Vec<PaymentMethodDetail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl PaymentMethodContent {
    /// Multi-line plain-text summary used by "copy all".
    ///
    /// Layout: the name, a dash underline as long as the name (in chars), one
    /// `label: value` line per detail, then a blank line and the instructions
    /// when there are any.
    #[must_use]
    pub fn summary_text(&self) -> String {
        let underline = "-".repeat(self.name.chars().count());
        let details = self
            .details
            .iter()
            .map(|detail| format!("{}: {}", detail.label, detail.value))
            .collect::<Vec<_>>()
            .join("\n");

        let mut summary = format!("{}\n{}\n{}", self.name, underline, details);
        if let Some(instructions) = self.instructions.as_deref().filter(|text| !text.is_empty()) {
            summary.push_str("\n\n");
            summary.push_str(instructions);
        }
        summary
    }

    /// The first [`CARD_DETAIL_ROWS`] details, padded with `None` placeholders.
    #[must_use]
    pub fn card_rows(&self) -> [Option<&PaymentMethodDetail>; CARD_DETAIL_ROWS] {
        std::array::from_fn(|index| self.details.get(index))
    }
}

/// Payment content paired with its logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentMethod<'a> {
    pub content: &'a PaymentMethodContent,
    pub logo: LogoAsset,
}

impl<'a> PaymentMethod<'a> {
    #[must_use]
    pub fn new(content: &'a PaymentMethodContent) -> Self {
        Self {
            content,
            logo: LogoAsset::for_method(&content.id),
        }
    }
}

/// Attaches logos to a list of localized contents.
#[must_use]
pub fn with_logos(contents: &[PaymentMethodContent]) -> Vec<PaymentMethod<'_>> {
    contents.iter().map(PaymentMethod::new).collect()
}
