// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The header sits above the active step; toasts float over both.

use super::{Message, Screen};
use crate::i18n::Localizer;
use crate::ui::header;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::payment;
use crate::ui::policies;
use crate::ui::styles::container as container_styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub localizer: Localizer<'a>,
    pub screen: Screen,
    pub theme_mode: ThemeMode,
    pub policies: &'a policies::State,
    pub payment: &'a payment::State,
    pub notifications: &'a Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let localizer = ctx.localizer;

    let header = header::view(header::ViewContext {
        localizer,
        screen: ctx.screen,
        theme: ctx.theme_mode,
    })
    .map(Message::Header);

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Policies => ctx
            .policies
            .view(policies::ViewContext { localizer })
            .map(Message::Policies),
        Screen::Payment => ctx
            .payment
            .view(payment::ViewContext { localizer })
            .map(Message::Payment),
    };

    let column = Column::new().push(header).push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let base = Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container_styles::page);

    let toasts = Toast::view_overlay(ctx.notifications, localizer).map(Message::Notification);

    Stack::new()
        .push(base)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
