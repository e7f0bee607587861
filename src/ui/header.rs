// SPDX-License-Identifier: MPL-2.0
//! Application header: title badge, step indicator, language and theme
//! controls.

use crate::app::Screen;
use crate::i18n::{Language, Localizer};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles, text as text_styles};
use crate::ui::theming::ThemeMode;
use iced::alignment::Vertical;
use iced::widget::{button, pick_list, progress_bar, Column, Container, Row, Space, Text};
use iced::{Element, Length};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub localizer: Localizer<'a>,
    pub screen: Screen,
    pub theme: ThemeMode,
}

/// Messages emitted by the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    LanguageSelected(Language),
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    LanguageChanged(Language),
    ThemeToggled,
}

/// Process a header message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::LanguageSelected(language) => Event::LanguageChanged(language),
        Message::ToggleTheme => Event::ThemeToggled,
    }
}

/// Render the header.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let localizer = ctx.localizer;

    let badge = Container::new(
        Text::new(localizer.tr("Policy & Billing Hub")).size(typography::BODY_SM),
    )
    .padding([spacing::XS, spacing::MD])
    .style(container_styles::chip(true));

    let language = pick_list(
        Language::ALL,
        Some(localizer.language()),
        Message::LanguageSelected,
    )
    .padding(spacing::XS)
    .text_size(typography::BODY_SM);

    let theme_glyph = if ctx.theme.is_dark() { "☀" } else { "☾" };
    let theme_toggle = button(Text::new(theme_glyph).size(typography::TITLE_SM))
        .padding(spacing::XS)
        .on_press(Message::ToggleTheme)
        .style(button_styles::ghost);

    let top = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(badge)
        .push(Space::new().width(Length::Fill))
        .push(language)
        .push(theme_toggle);

    let steps = Screen::ALL.iter().fold(
        Row::new().spacing(spacing::SM),
        |row, &step| {
            row.push(
                Container::new(Text::new(localizer.tr(step.step_label())).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::SM])
                    .style(container_styles::chip(step == ctx.screen)),
            )
        },
    );

    let current = Row::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(localizer.tr("Currently viewing:"))
                .size(typography::BODY_SM)
                .style(text_styles::muted),
        )
        .push(Text::new(localizer.tr(ctx.screen.step_label())).size(typography::BODY_SM));

    let status = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(steps.wrap())
        .push(Space::new().width(Length::Fill))
        .push(current);

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(top)
            .push(status)
            .push(
                progress_bar(0.0..=1.0, ctx.screen.step_progress())
                    .girth(sizing::PROGRESS_BAR_HEIGHT),
            ),
    )
    .width(Length::Fill)
    .padding([spacing::MD, spacing::LG])
    .style(container_styles::panel)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_selection_is_forwarded() {
        assert_eq!(
            update(Message::LanguageSelected(Language::Ar)),
            Event::LanguageChanged(Language::Ar)
        );
    }

    #[test]
    fn theme_toggle_is_forwarded() {
        assert_eq!(update(Message::ToggleTheme), Event::ThemeToggled);
    }
}
