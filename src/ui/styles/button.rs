// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette::WHITE, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn faded(color: Color) -> Color {
    Color {
        a: opacity::DISABLED,
        ..color
    }
}

/// Main call to action (agree, open details, contact support).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);

    let (background, shadow) = match status {
        button::Status::Active | button::Status::Pressed => (colors.brand_primary, shadow::MD),
        button::Status::Hovered => (colors.brand_secondary, shadow::LG),
        button::Status::Disabled => (faded(colors.brand_primary), shadow::NONE),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: if status == button::Status::Disabled {
            faded(WHITE)
        } else {
            WHITE
        },
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow,
        snap: true,
    }
}

/// Outlined secondary action (back, close, open payment page).
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);

    let (background, border_color) = match status {
        button::Status::Hovered => (colors.surface_secondary, colors.brand_primary),
        _ => (colors.surface_primary, colors.border),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: colors.text_primary,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Selected entry in a toggle group (active policy tab).
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered => colors.brand_secondary,
        _ => colors.brand_primary,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Unselected entry in a toggle group.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let (background, border_color) = match status {
        button::Status::Hovered => (colors.brand_soft, colors.brand_primary),
        _ => (colors.surface_primary, colors.border),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: colors.text_secondary,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Small copy button; turns green while its "copied" marker is active.
pub fn copy(copied: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let accent = if copied {
            colors.success
        } else {
            colors.brand_primary
        };
        let background = match status {
            button::Status::Hovered => Color {
                a: opacity::OVERLAY_SUBTLE * 2.0,
                ..accent
            },
            _ => Color {
                a: opacity::OVERLAY_SUBTLE,
                ..accent
            },
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: accent,
            border: Border {
                color: accent,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Borderless icon-like button (theme toggle, toast dismiss).
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(colors.surface_secondary)),
        _ => None,
    };

    button::Style {
        background,
        text_color: colors.text_secondary,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
