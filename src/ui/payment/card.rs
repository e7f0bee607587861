// SPDX-License-Identifier: MPL-2.0
//! Payment method card.

use super::Message;
use crate::content::PaymentMethod;
use crate::i18n::Localizer;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{
    button as button_styles, container as container_styles, text as text_styles,
};
use iced::alignment::Vertical;
use iced::widget::{button, svg, Column, Container, Row, Space, Text};
use iced::{Element, Length};

pub(super) fn view<'a>(
    method: PaymentMethod<'a>,
    highlighted: bool,
    localizer: Localizer<'a>,
) -> Element<'a, Message> {
    let logo = svg::Svg::new(method.logo.handle())
        .width(Length::Fixed(sizing::LOGO_SM))
        .height(Length::Fixed(sizing::LOGO_SM));

    let identity = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(logo)
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(
                    Text::new(localizer.tr("Payment Methods"))
                        .size(typography::CAPTION)
                        .style(text_styles::muted),
                )
                .push(Text::new(method.content.name.as_str()).size(typography::TITLE_SM)),
        );

    let rows = method
        .content
        .card_rows()
        .into_iter()
        .fold(Column::new().spacing(spacing::XS), |column, row| match row {
            Some(detail) => column.push(
                Container::new(
                    Column::new()
                        .spacing(spacing::XXS)
                        .push(
                            Text::new(detail.label.as_str())
                                .size(typography::CAPTION)
                                .style(text_styles::muted),
                        )
                        .push(Text::new(detail.value.as_str()).size(typography::BODY_SM)),
                )
                .width(Length::Fill)
                .padding(spacing::XS)
                .style(container_styles::field),
            ),
            None => column.push(
                Container::new(Space::new())
                    .width(Length::Fill)
                    .height(Length::Fixed(sizing::SKELETON_ROW_HEIGHT))
                    .style(container_styles::skeleton),
            ),
        });

    let open = button(
        Text::new(localizer.tr("Click on a payment method to view payment details"))
            .size(typography::BODY_SM),
    )
    .width(Length::Fill)
    .padding([spacing::XS, spacing::MD])
    .on_press(Message::OpenDetails(method.content.id.clone()))
    .style(if highlighted {
        button_styles::selected
    } else {
        button_styles::primary
    });

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(identity)
            .push(rows)
            .push(open),
    )
    .width(Length::Fixed(sizing::CARD_WIDTH))
    .padding(spacing::LG)
    .style(container_styles::panel)
    .into()
}
