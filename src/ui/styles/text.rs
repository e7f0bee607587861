// SPDX-License-Identifier: MPL-2.0
//! Text styles.

use crate::ui::theming::ColorScheme;
use iced::widget::text;
use iced::Theme;

/// Secondary captions: kickers, section headings, hints.
pub fn muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_muted),
    }
}
