// SPDX-License-Identifier: MPL-2.0
//! Source-string translation lookup.
//!
//! Dictionaries are flat JSON objects keyed by the English source string. The
//! English text *is* the key, so the base language never needs a lookup and a
//! missing entry degrades to readable English rather than a message id.
//!
//! One reserved key, [`PAYMENT_DATA_KEY`], holds an array with the localized
//! payment-method content for that language.

use super::language::Language;
use crate::content::payment::PaymentMethodContent;
use rust_embed::RustEmbed;
use serde_json::{Map, Value};
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Reserved dictionary key holding the localized payment-method array.
pub const PAYMENT_DATA_KEY: &str = "payment.data";

/// One language's dictionary: source string to translated value.
pub type Dictionary = Map<String, Value>;

/// Static translation tables for every supported language.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    dictionaries: HashMap<Language, Dictionary>,
    payment: HashMap<Language, Vec<PaymentMethodContent>>,
}

impl Translator {
    /// Loads the dictionaries embedded in the binary.
    ///
    /// A dictionary that fails to parse is skipped with a warning; lookups in
    /// that language then fall back to the source text.
    #[must_use]
    pub fn embedded() -> Self {
        let mut dictionaries = HashMap::new();

        for language in Language::ALL {
            let file_name = format!("{}.json", language.code());
            let Some(file) = Asset::get(&file_name) else {
                tracing::warn!(%file_name, "no embedded dictionary");
                continue;
            };
            match parse_dictionary(file.data.as_ref()) {
                Ok(dictionary) => {
                    dictionaries.insert(language, dictionary);
                }
                Err(err) => {
                    tracing::warn!(%file_name, error = %err, "skipping unreadable dictionary");
                }
            }
        }

        Self::from_dictionaries(dictionaries)
    }

    /// Builds a translator from already-parsed dictionaries.
    #[must_use]
    pub fn from_dictionaries(dictionaries: HashMap<Language, Dictionary>) -> Self {
        let payment = dictionaries
            .iter()
            .filter_map(|(language, dictionary)| {
                payment_entry(*language, dictionary).map(|methods| (*language, methods))
            })
            .collect();

        Self {
            dictionaries,
            payment,
        }
    }

    /// Translates `text` into `language`.
    ///
    /// Lookup order: the verbatim text, then the text trimmed of surrounding
    /// whitespace, then the text itself. Missing translations are never an
    /// error.
    #[must_use]
    pub fn resolve<'a>(&'a self, text: &'a str, language: Language) -> &'a str {
        if text.is_empty() || language.is_base() {
            return text;
        }

        let Some(dictionary) = self.dictionaries.get(&language) else {
            return text;
        };

        if let Some(Value::String(entry)) = dictionary.get(text) {
            return entry;
        }

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return text;
        }

        match dictionary.get(trimmed) {
            Some(Value::String(entry)) => entry,
            _ => text,
        }
    }

    /// Localized payment-method content for `language`.
    ///
    /// Falls back to the base language's entry, then to an empty slice.
    #[must_use]
    pub fn payment_content(&self, language: Language) -> &[PaymentMethodContent] {
        self.payment
            .get(&language)
            .or_else(|| self.payment.get(&Language::BASE))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Binds this translator to one language for rendering.
    #[must_use]
    pub fn localizer(&self, language: Language) -> Localizer<'_> {
        Localizer {
            translator: self,
            language,
        }
    }
}

/// A translator bound to the active language.
#[derive(Debug, Clone, Copy)]
pub struct Localizer<'a> {
    translator: &'a Translator,
    language: Language,
}

impl<'a> Localizer<'a> {
    #[must_use]
    pub fn tr(&self, text: &'a str) -> &'a str {
        self.translator.resolve(text, self.language)
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn payment_content(&self) -> &'a [PaymentMethodContent] {
        self.translator.payment_content(self.language)
    }
}

fn parse_dictionary(bytes: &[u8]) -> Result<Dictionary, serde_json::Error> {
    serde_json::from_slice(bytes)
}

fn payment_entry(language: Language, dictionary: &Dictionary) -> Option<Vec<PaymentMethodContent>> {
    let Value::Array(items) = dictionary.get(PAYMENT_DATA_KEY)? else {
        return None;
    };

    match serde_json::from_value(Value::Array(items.clone())) {
        Ok(methods) => Some(methods),
        Err(err) => {
            tracing::warn!(language = language.code(), error = %err, "ignoring malformed payment data");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dictionary(value: Value) -> Dictionary {
        match value {
            Value::Object(map) => map,
            _ => panic!("dictionary fixtures must be objects"),
        }
    }

    fn sample_translator() -> Translator {
        let mut dictionaries = HashMap::new();
        dictionaries.insert(
            Language::En,
            dictionary(json!({
                "payment.data": [
                    { "id": "wise", "name": "Wise", "details": [
                        { "label": "Payment Link", "value": "https://wise.com/pay/business/adversolutionsllc", "copyable": true }
                    ], "instructions": "Click the link..." }
                ]
            })),
        );
        dictionaries.insert(
            Language::Fr,
            dictionary(json!({
                "Payment Methods": "Moyens de paiement",
                "WARRANTY": "GARANTIE",
                "Copy": 42,
                "payment.data": [
                    { "id": "wise", "name": "Wise", "details": [
                        { "label": "Lien de paiement", "value": "https://wise.com/pay/business/adversolutionsllc", "copyable": true }
                    ], "instructions": "Cliquez sur le lien..." }
                ]
            })),
        );
        dictionaries.insert(
            Language::Ar,
            dictionary(json!({
                "Payment Methods": "طرق الدفع",
                "payment.data": "not-an-array"
            })),
        );
        Translator::from_dictionaries(dictionaries)
    }

    #[test]
    fn base_language_returns_source_unchanged() {
        let translator = sample_translator();
        for text in ["Payment Methods", "", "  padded  ", "unknown"] {
            assert_eq!(translator.resolve(text, Language::En), text);
        }
    }

    #[test]
    fn empty_source_is_returned_unchanged() {
        let translator = sample_translator();
        assert_eq!(translator.resolve("", Language::Fr), "");
    }

    #[test]
    fn verbatim_entry_is_used() {
        let translator = sample_translator();
        assert_eq!(
            translator.resolve("Payment Methods", Language::Fr),
            "Moyens de paiement"
        );
        assert_eq!(translator.resolve("Payment Methods", Language::Ar), "طرق الدفع");
    }

    #[test]
    fn trimmed_entry_is_used_when_verbatim_misses() {
        let translator = sample_translator();
        assert_eq!(translator.resolve("  WARRANTY \n", Language::Fr), "GARANTIE");
    }

    #[test]
    fn whitespace_only_source_is_returned_unchanged() {
        let translator = sample_translator();
        assert_eq!(translator.resolve("   ", Language::Fr), "   ");
    }

    #[test]
    fn missing_entry_falls_back_to_source() {
        let translator = sample_translator();
        assert_eq!(
            translator.resolve("Not in any dictionary", Language::Fr),
            "Not in any dictionary"
        );
    }

    #[test]
    fn non_string_entry_falls_back_to_source() {
        let translator = sample_translator();
        assert_eq!(translator.resolve("Copy", Language::Fr), "Copy");
        assert_eq!(
            translator.resolve(PAYMENT_DATA_KEY, Language::Fr),
            PAYMENT_DATA_KEY
        );
    }

    #[test]
    fn language_without_dictionary_falls_back_to_source() {
        let translator = Translator::default();
        assert_eq!(translator.resolve("WARRANTY", Language::Fr), "WARRANTY");
    }

    #[test]
    fn payment_content_prefers_requested_language() {
        let translator = sample_translator();
        let methods = translator.payment_content(Language::Fr);
        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].details[0].label, "Lien de paiement");
    }

    #[test]
    fn payment_content_falls_back_to_base_when_not_an_array() {
        let translator = sample_translator();
        let methods = translator.payment_content(Language::Ar);
        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].details[0].label, "Payment Link");
    }

    #[test]
    fn payment_content_is_empty_without_any_entry() {
        let translator = Translator::default();
        assert!(translator.payment_content(Language::Fr).is_empty());
    }

    #[test]
    fn malformed_payment_array_is_treated_as_absent() {
        let mut dictionaries = HashMap::new();
        dictionaries.insert(
            Language::Fr,
            dictionary(json!({ "payment.data": [ { "unexpected": true } ] })),
        );
        let translator = Translator::from_dictionaries(dictionaries);
        assert!(translator.payment_content(Language::Fr).is_empty());
    }

    #[test]
    fn embedded_dictionaries_cover_every_language() {
        let translator = Translator::embedded();
        assert!(!translator.payment_content(Language::En).is_empty());
        assert_ne!(
            translator.resolve("I AGREE TO THE POLICY", Language::Fr),
            "I AGREE TO THE POLICY"
        );
        assert_ne!(
            translator.resolve("I AGREE TO THE POLICY", Language::Ar),
            "I AGREE TO THE POLICY"
        );
    }

    #[test]
    fn localizer_binds_language() {
        let translator = sample_translator();
        let localizer = translator.localizer(Language::Fr);
        assert_eq!(localizer.language(), Language::Fr);
        assert_eq!(localizer.tr("Payment Methods"), "Moyens de paiement");
        assert_eq!(localizer.payment_content().len(), 1);
    }
}
