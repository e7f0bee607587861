// SPDX-License-Identifier: MPL-2.0
//! Supported interface languages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A language the portal ships a dictionary for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
    Ar,
}

impl Language {
    /// All languages in picker order.
    pub const ALL: [Language; 3] = [Language::En, Language::Fr, Language::Ar];

    /// The language source strings are written in. Never looked up.
    pub const BASE: Language = Language::En;

    /// Parses a stored or CLI-provided language code.
    ///
    /// Only exact lowercase codes are accepted; anything else is `None` so the
    /// caller can fall back to its default.
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "fr" => Some(Language::Fr),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::Ar => "ar",
        }
    }

    /// Native display name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Fr => "Français",
            Language::Ar => "العربية",
        }
    }

    #[must_use]
    pub fn flag(self) -> &'static str {
        match self {
            Language::En => "🇺🇸",
            Language::Fr => "🇫🇷",
            Language::Ar => "🇸🇦",
        }
    }

    /// Whether text in this language reads right to left.
    #[must_use]
    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Ar)
    }

    #[must_use]
    pub fn is_base(self) -> bool {
        self == Self::BASE
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.flag(), self.label())
    }
}
