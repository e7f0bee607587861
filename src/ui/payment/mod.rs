// SPDX-License-Identifier: MPL-2.0
//! Payment screen: method cards, the details modal and the next-steps panel.
//!
//! Method content is looked up by id in the active language on every update
//! and render, so changing the language while the modal is open swaps its text
//! in place.

mod card;
mod modal;

use crate::application::port::{ClipboardError, ClipboardWriter};
use crate::content::payment::{with_logos, HOSTED_PAYMENT_URL, SUPPORT_CONTACT_URL};
use crate::content::{PaymentMethod, PaymentMethodContent};
use crate::i18n::Localizer;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::{CopyFeedback, CopyKey};
use crate::ui::styles::{button as button_styles, container as container_styles};
use crate::ui::text_alignment;
use iced::alignment::Vertical;
use iced::widget::{button, scrollable, Column, Container, Row, Stack, Text};
use iced::{Element, Length};
use std::time::Instant;

/// Contextual data needed to render the payment screen.
pub struct ViewContext<'a> {
    pub localizer: Localizer<'a>,
}

/// Dependencies for handling one message.
pub struct UpdateContext<'a> {
    pub methods: &'a [PaymentMethodContent],
    pub clipboard: &'a mut dyn ClipboardWriter,
    pub now: Instant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    OpenDetails(String),
    CloseDetails,
    CopyField(usize),
    CopyAll,
    ContactSupport,
    OpenPaymentPage,
    BackToPolicies,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    BackToPolicies,
    OpenLink(&'static str),
    CopyFailed(ClipboardError),
}

/// Payment screen state.
#[derive(Debug, Clone, Default)]
pub struct State {
    open_method: Option<String>,
    copy: CopyFeedback,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message, ctx: UpdateContext<'_>) -> Event {
        match message {
            Message::OpenDetails(id) => {
                if self.open_method.as_deref() != Some(id.as_str()) {
                    self.copy.clear();
                }
                tracing::debug!(method = %id, "payment details opened");
                self.open_method = Some(id);
                Event::None
            }
            Message::CloseDetails => {
                self.close_details();
                Event::None
            }
            Message::CopyField(index) => {
                let Some(detail) = self
                    .open_content(ctx.methods)
                    .and_then(|method| method.details.get(index))
                    .filter(|detail| detail.copyable)
                else {
                    return Event::None;
                };
                match self
                    .copy
                    .copy_field(ctx.clipboard, &detail.value, CopyKey::Field(index), ctx.now)
                {
                    Ok(()) => Event::None,
                    Err(err) => Event::CopyFailed(err),
                }
            }
            Message::CopyAll => {
                let Some(method) = self.open_content(ctx.methods) else {
                    return Event::None;
                };
                match self.copy.copy_all(ctx.clipboard, method, ctx.now) {
                    Ok(()) => Event::None,
                    Err(err) => Event::CopyFailed(err),
                }
            }
            Message::ContactSupport => Event::OpenLink(SUPPORT_CONTACT_URL),
            Message::OpenPaymentPage => Event::OpenLink(HOSTED_PAYMENT_URL),
            Message::BackToPolicies => {
                self.close_details();
                Event::BackToPolicies
            }
        }
    }

    /// Expires the copy acknowledgment. Returns `true` if anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.copy.tick(now)
    }

    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.open_method.is_some()
    }

    #[must_use]
    pub fn open_method(&self) -> Option<&str> {
        self.open_method.as_deref()
    }

    #[must_use]
    pub fn copy_feedback(&self) -> &CopyFeedback {
        &self.copy
    }

    fn close_details(&mut self) {
        self.open_method = None;
        self.copy.clear();
    }

    fn open_content<'m>(&self, methods: &'m [PaymentMethodContent]) -> Option<&'m PaymentMethodContent> {
        let id = self.open_method.as_deref()?;
        methods.iter().find(|method| method.id == id)
    }

    /// Render the payment screen.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let localizer = ctx.localizer;
        let methods = with_logos(localizer.payment_content());

        let page = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .push(title_block(localizer))
            .push(cards(&methods, self.open_method(), localizer))
            .push(next_steps(localizer));

        let base = scrollable(page).width(Length::Fill).height(Length::Fill);

        let open = self
            .open_method()
            .and_then(|id| methods.iter().find(|method| method.content.id == id))
            .copied();

        match open {
            Some(method) => Stack::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .push(base)
                .push(modal::view(method, &self.copy, localizer))
                .into(),
            None => base.into(),
        }
    }
}

fn title_block<'a>(localizer: Localizer<'a>) -> Element<'a, Message> {
    let align = text_alignment(localizer.language());

    let back = button(Text::new(localizer.tr("Back to policies")).size(typography::BODY_SM))
        .padding([spacing::XS, spacing::MD])
        .on_press(Message::BackToPolicies)
        .style(button_styles::secondary);

    Column::new()
        .spacing(spacing::XS)
        .push(back)
        .push(
            Text::new(localizer.tr("Payment Methods"))
                .size(typography::TITLE_LG)
                .width(Length::Fill)
                .align_x(align),
        )
        .push(
            Text::new(localizer.tr("Click on a payment method to view payment details"))
                .size(typography::BODY)
                .width(Length::Fill)
                .align_x(align),
        )
        .into()
}

fn cards<'a>(
    methods: &[PaymentMethod<'a>],
    open: Option<&str>,
    localizer: Localizer<'a>,
) -> Element<'a, Message> {
    methods
        .iter()
        .fold(Row::new().spacing(spacing::LG), |row, &method| {
            let highlighted = open == Some(method.content.id.as_str());
            row.push(card::view(method, highlighted, localizer))
        })
        .wrap()
        .vertical_spacing(spacing::LG)
        .into()
}

fn next_steps<'a>(localizer: Localizer<'a>) -> Element<'a, Message> {
    let copy = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(localizer.tr("Next Steps")).size(typography::TITLE_MD))
        .push(
            Text::new(localizer.tr("After payment, please contact support for confirmation."))
                .size(typography::BODY),
        );

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(localizer.tr("Contact Support")).size(typography::BODY))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .padding([spacing::XS, spacing::LG])
                .on_press(Message::ContactSupport)
                .style(button_styles::primary),
        )
        .push(
            button(Text::new(localizer.tr("Open Payment Page")).size(typography::BODY))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .padding([spacing::XS, spacing::LG])
                .on_press(Message::OpenPaymentPage)
                .style(button_styles::secondary),
        );

    Container::new(
        Row::new()
            .spacing(spacing::LG)
            .align_y(Vertical::Center)
            .push(copy)
            .push(actions),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(container_styles::panel)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PaymentMethodDetail;
    use crate::ui::state::COPY_FEEDBACK_DURATION;

    #[derive(Default)]
    struct RecordingClipboard {
        written: Vec<String>,
        fail: bool,
    }

    impl ClipboardWriter for RecordingClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Unavailable("denied".into()));
            }
            self.written.push(text.to_owned());
            Ok(())
        }
    }

    fn methods() -> Vec<PaymentMethodContent> {
        vec![
            PaymentMethodContent {
                id: "wise".into(),
                name: "Wise".into(),
                details: vec![PaymentMethodDetail {
                    label: "Payment Link".into(),
                    value: "https://wise.com/pay/business/adversolutionsllc".into(),
                    copyable: true,
                }],
                instructions: Some("Click the link...".into()),
            },
            PaymentMethodContent {
                id: "usdt-trc20".into(),
                name: "USDT".into(),
                details: vec![
                    PaymentMethodDetail {
                        label: "Wallet Address".into(),
                        value: "TXYZ".into(),
                        copyable: true,
                    },
                    PaymentMethodDetail {
                        label: "Network".into(),
                        value: "TRC20 (Tron)".into(),
                        copyable: false,
                    },
                ],
                instructions: None,
            },
        ]
    }

    fn send(
        state: &mut State,
        message: Message,
        clipboard: &mut RecordingClipboard,
        now: Instant,
    ) -> Event {
        let methods = methods();
        state.update(
            message,
            UpdateContext {
                methods: &methods,
                clipboard,
                now,
            },
        )
    }

    #[test]
    fn copy_all_writes_summary_and_marks_all() {
        let mut state = State::new();
        let mut clipboard = RecordingClipboard::default();
        let now = Instant::now();

        send(&mut state, Message::OpenDetails("wise".into()), &mut clipboard, now);
        let event = send(&mut state, Message::CopyAll, &mut clipboard, now);

        assert_eq!(event, Event::None);
        assert_eq!(
            clipboard.written,
            vec!["Wise\n----\nPayment Link: https://wise.com/pay/business/adversolutionsllc\n\nClick the link..."]
        );
        assert!(state.copy_feedback().is_copied(CopyKey::All));
    }

    #[test]
    fn copy_field_respects_copyable_flag() {
        let mut state = State::new();
        let mut clipboard = RecordingClipboard::default();
        let now = Instant::now();

        send(&mut state, Message::OpenDetails("usdt-trc20".into()), &mut clipboard, now);
        send(&mut state, Message::CopyField(1), &mut clipboard, now);
        assert!(clipboard.written.is_empty());

        send(&mut state, Message::CopyField(0), &mut clipboard, now);
        assert_eq!(clipboard.written, vec!["TXYZ"]);
        assert!(state.copy_feedback().is_copied(CopyKey::Field(0)));
    }

    #[test]
    fn copy_without_open_modal_does_nothing() {
        let mut state = State::new();
        let mut clipboard = RecordingClipboard::default();
        let event = send(&mut state, Message::CopyAll, &mut clipboard, Instant::now());
        assert_eq!(event, Event::None);
        assert!(clipboard.written.is_empty());
    }

    #[test]
    fn clipboard_failure_is_reported_and_leaves_no_marker() {
        let mut state = State::new();
        let mut clipboard = RecordingClipboard::default();
        let now = Instant::now();

        send(&mut state, Message::OpenDetails("wise".into()), &mut clipboard, now);
        send(&mut state, Message::CopyField(0), &mut clipboard, now);
        assert!(state.copy_feedback().is_active());

        clipboard.fail = true;
        let event = send(&mut state, Message::CopyAll, &mut clipboard, now);
        assert!(matches!(event, Event::CopyFailed(_)));
        assert!(!state.copy_feedback().is_active());
    }

    #[test]
    fn marker_expires_on_tick() {
        let mut state = State::new();
        let mut clipboard = RecordingClipboard::default();
        let now = Instant::now();

        send(&mut state, Message::OpenDetails("wise".into()), &mut clipboard, now);
        send(&mut state, Message::CopyAll, &mut clipboard, now);

        assert!(!state.tick(now + COPY_FEEDBACK_DURATION / 2));
        assert!(state.tick(now + COPY_FEEDBACK_DURATION));
        assert!(!state.copy_feedback().is_active());
    }

    #[test]
    fn closing_or_switching_method_discards_marker() {
        let mut state = State::new();
        let mut clipboard = RecordingClipboard::default();
        let now = Instant::now();

        send(&mut state, Message::OpenDetails("wise".into()), &mut clipboard, now);
        send(&mut state, Message::CopyAll, &mut clipboard, now);
        send(&mut state, Message::OpenDetails("usdt-trc20".into()), &mut clipboard, now);
        assert!(!state.copy_feedback().is_active());

        send(&mut state, Message::CopyAll, &mut clipboard, now);
        send(&mut state, Message::CloseDetails, &mut clipboard, now);
        assert!(!state.is_modal_open());
        assert!(!state.copy_feedback().is_active());
    }

    #[test]
    fn reopening_the_same_method_keeps_marker() {
        let mut state = State::new();
        let mut clipboard = RecordingClipboard::default();
        let now = Instant::now();

        send(&mut state, Message::OpenDetails("wise".into()), &mut clipboard, now);
        send(&mut state, Message::CopyAll, &mut clipboard, now);
        send(&mut state, Message::OpenDetails("wise".into()), &mut clipboard, now);
        assert!(state.copy_feedback().is_copied(CopyKey::All));
    }

    #[test]
    fn links_open_only_on_request() {
        let mut state = State::new();
        let mut clipboard = RecordingClipboard::default();
        let now = Instant::now();

        assert_eq!(
            send(&mut state, Message::ContactSupport, &mut clipboard, now),
            Event::OpenLink(SUPPORT_CONTACT_URL)
        );
        assert_eq!(
            send(&mut state, Message::OpenPaymentPage, &mut clipboard, now),
            Event::OpenLink(HOSTED_PAYMENT_URL)
        );
    }

    #[test]
    fn back_to_policies_closes_modal() {
        let mut state = State::new();
        let mut clipboard = RecordingClipboard::default();
        let now = Instant::now();

        send(&mut state, Message::OpenDetails("wise".into()), &mut clipboard, now);
        let event = send(&mut state, Message::BackToPolicies, &mut clipboard, now);
        assert_eq!(event, Event::BackToPolicies);
        assert!(!state.is_modal_open());
    }
}
