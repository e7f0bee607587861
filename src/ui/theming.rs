// SPDX-License-Identifier: MPL-2.0
//! Light and dark color schemes.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub background: Color,
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub border: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,
    pub brand_soft: Color,

    // Semantic colors
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,

    pub backdrop: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            background: palette::SLATE_50,
            surface_primary: palette::WHITE,
            surface_secondary: palette::SLATE_100,
            border: palette::SLATE_200,

            text_primary: palette::SLATE_900,
            text_secondary: palette::SLATE_700,
            text_muted: palette::SLATE_500,

            brand_primary: palette::PRIMARY_600,
            brand_secondary: palette::PRIMARY_700,
            brand_soft: palette::PRIMARY_100,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            backdrop: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::SLATE_950
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: palette::SLATE_950,
            surface_primary: palette::SLATE_900,
            surface_secondary: palette::SLATE_800,
            border: palette::SLATE_700,

            text_primary: palette::SLATE_50,
            text_secondary: palette::SLATE_300,
            text_muted: palette::SLATE_500,

            brand_primary: palette::PRIMARY_400,
            brand_secondary: palette::PRIMARY_300,
            brand_soft: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_400
            },

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            backdrop: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
        }
    }

    /// Scheme for whatever theme the given Iced theme resolves to.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// The two persisted theme values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Parses a stored value; anything but `light`/`dark` is rejected.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// The operating system's current preference, light when undetectable.
    #[must_use]
    pub fn from_system() -> Self {
        Self::from_dark_flag(system_prefers_dark())
    }

    #[must_use]
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }

    #[must_use]
    pub fn colors(self) -> ColorScheme {
        match self {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
        }
    }
}

/// Queries `dark-light`; detection errors count as "not dark".
#[must_use]
pub fn system_prefers_dark() -> bool {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => true,
        Ok(_) => false,
        Err(err) => {
            tracing::debug!(error = ?err, "system theme detection failed");
            false
        }
    }
}
