// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Strings are written in English and looked up verbatim in per-language
//! dictionaries embedded from `assets/i18n/`. Lookups never fail: a missing
//! entry yields the English source text.
//!
//! # Features
//!
//! - Three bundled languages (English, French, Arabic), Arabic rendered RTL
//! - Trimmed-key retry for strings carrying stray whitespace
//! - Localized payment-method data with fallback to the English entry

pub mod language;
pub mod resolver;

pub use language::Language;
pub use resolver::{Localizer, Translator, PAYMENT_DATA_KEY};
