// SPDX-License-Identifier: MPL-2.0
//! Payment details dialog.

use super::Message;
use crate::content::PaymentMethod;
use crate::i18n::Localizer;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::{CopyFeedback, CopyKey};
use crate::ui::styles::{
    button as button_styles, container as container_styles, text as text_styles,
};
use crate::ui::text_alignment;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, center, mouse_area, opaque, scrollable, svg, Column, Container, Row, Text};
use iced::{Element, Length};

/// Backdrop plus the centered dialog. Clicking the backdrop closes it.
pub(super) fn view<'a>(
    method: PaymentMethod<'a>,
    copy: &CopyFeedback,
    localizer: Localizer<'a>,
) -> Element<'a, Message> {
    let align = text_alignment(localizer.language());
    let content = method.content;

    let logo = svg::Svg::new(method.logo.handle())
        .width(Length::Fixed(sizing::LOGO_LG))
        .height(Length::Fixed(sizing::LOGO_LG));

    let close = button(Text::new("✕").size(typography::BODY))
        .padding(spacing::XS)
        .on_press(Message::CloseDetails)
        .style(button_styles::ghost);

    let title = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(logo)
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .width(Length::Fill)
                .push(Text::new(content.name.as_str()).size(typography::TITLE_MD))
                .push(
                    Text::new(localizer.tr("Payment Methods"))
                        .size(typography::CAPTION)
                        .style(text_styles::muted),
                ),
        )
        .push(close);

    let mut body = Column::new().spacing(spacing::MD).push(title);

    if let Some(instructions) = content.instructions.as_deref().filter(|text| !text.is_empty()) {
        body = body.push(
            Container::new(
                Text::new(instructions)
                    .size(typography::BODY)
                    .width(Length::Fill)
                    .align_x(align),
            )
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(container_styles::callout),
        );
    }

    for (index, detail) in content.details.iter().enumerate() {
        let key = CopyKey::Field(index);
        let copied = copy.is_copied(key);

        let value = Column::new()
            .spacing(spacing::XXS)
            .width(Length::Fill)
            .push(
                Text::new(detail.label.as_str())
                    .size(typography::CAPTION)
                    .style(text_styles::muted),
            )
            .push(Text::new(detail.value.as_str()).size(typography::BODY));

        let mut row = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(value);
        if detail.copyable {
            let label = if copied {
                localizer.tr("Copied!")
            } else {
                localizer.tr("Copy")
            };
            row = row.push(
                button(Text::new(label).size(typography::BODY_SM))
                    .padding([spacing::XXS, spacing::SM])
                    .on_press(Message::CopyField(index))
                    .style(button_styles::copy(copied)),
            );
        }

        body = body.push(
            Container::new(row)
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(container_styles::field),
        );
    }

    let all_copied = copy.is_copied(CopyKey::All);
    let copy_all_label = if all_copied {
        format!("✓  {}", localizer.tr("Copied!"))
    } else {
        localizer.tr("Copy Payment Information").to_owned()
    };

    let footer = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(
            button(
                Text::new(copy_all_label)
                    .size(typography::BODY)
                    .width(Length::Fill)
                    .align_x(Horizontal::Center),
            )
            .width(Length::Fill)
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .on_press(Message::CopyAll)
            .style(button_styles::copy(all_copied)),
        )
        .push(
            Text::new(localizer.tr(
                "Payment instructions are available in your preferred language.",
            ))
            .size(typography::CAPTION)
            .style(text_styles::muted),
        );

    let dialog = Container::new(scrollable(body.push(footer).padding(spacing::LG)))
        .width(Length::Fixed(sizing::MODAL_WIDTH))
        .max_height(sizing::MODAL_MAX_HEIGHT)
        .style(container_styles::modal);

    let backdrop = Container::new(center(opaque(dialog)))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container_styles::backdrop);

    mouse_area(backdrop).on_press(Message::CloseDetails).into()
}
