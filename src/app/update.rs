// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler forwards a component message, then turns the component's
//! event into application side effects: screen switches, preference writes,
//! browser launches and toasts.

use super::preferences::{Preferences, SAVE_WARNING};
use super::{Message, Screen, Services};
use crate::i18n::{Language, Translator};
use crate::ui::header::{self, Event as HeaderEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::payment::{self, Event as PaymentEvent};
use crate::ui::policies::{self, Event as PoliciesEvent};
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::time::Instant;

/// Toast shown when the browser could not be launched.
pub const LINK_WARNING: &str = "The link could not be opened.";

/// Mutable view of the application state handed to each handler.
pub struct UpdateContext<'a> {
    pub translator: &'a Translator,
    pub language: &'a mut Language,
    pub theme_mode: &'a mut ThemeMode,
    pub screen: &'a mut Screen,
    pub policies: &'a mut policies::State,
    pub payment: &'a mut payment::State,
    pub notifications: &'a mut notifications::Manager,
    pub services: &'a mut Services,
}

pub fn handle_header_message(ctx: &mut UpdateContext<'_>, message: header::Message) -> Task<Message> {
    match header::update(message) {
        HeaderEvent::LanguageChanged(language) => {
            *ctx.language = language;
            tracing::info!(language = language.code(), "language changed");
            persist(ctx, |store| Preferences::save_language(store, language));
        }
        HeaderEvent::ThemeToggled => {
            let theme = ctx.theme_mode.toggled();
            *ctx.theme_mode = theme;
            tracing::info!(theme = theme.code(), "theme changed");
            persist(ctx, |store| Preferences::save_theme(store, theme));
        }
    }
    Task::none()
}

pub fn handle_policies_message(
    ctx: &mut UpdateContext<'_>,
    message: policies::Message,
) -> Task<Message> {
    let (event, task) = ctx.policies.update(message);
    if event == PoliciesEvent::Agreed {
        ctx.policies.deactivate();
        switch_screen(ctx, Screen::Payment);
    }
    task.map(Message::Policies)
}

pub fn handle_payment_message(
    ctx: &mut UpdateContext<'_>,
    message: payment::Message,
) -> Task<Message> {
    let event = ctx.payment.update(
        message,
        payment::UpdateContext {
            methods: ctx.translator.payment_content(*ctx.language),
            clipboard: ctx.services.clipboard.as_mut(),
            now: Instant::now(),
        },
    );

    match event {
        PaymentEvent::None => Task::none(),
        PaymentEvent::BackToPolicies => {
            switch_screen(ctx, Screen::Policies);
            ctx.policies.activate().map(Message::Policies)
        }
        PaymentEvent::OpenLink(url) => {
            if let Err(err) = ctx.services.links.open(url) {
                tracing::warn!(error = %err, "failed to open link");
                ctx.notifications.push(Notification::warning(LINK_WARNING));
            }
            Task::none()
        }
        PaymentEvent::CopyFailed(err) => {
            tracing::warn!(error = %err, "clipboard write failed");
            ctx.notifications
                .push(Notification::error(err.user_message()));
            Task::none()
        }
    }
}

/// Escape only has meaning while the payment details modal is open.
pub fn handle_escape(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.payment.is_modal_open() {
        return handle_payment_message(ctx, payment::Message::CloseDetails);
    }
    Task::none()
}

fn switch_screen(ctx: &mut UpdateContext<'_>, target: Screen) {
    if *ctx.screen != target {
        tracing::info!(from = ?*ctx.screen, to = ?target, "screen changed");
        *ctx.screen = target;
    }
}

/// Writes one preference; a failure keeps the in-memory change and warns.
fn persist<F>(ctx: &mut UpdateContext<'_>, save: F)
where
    F: FnOnce(&mut dyn super::preferences::PreferenceStore) -> crate::error::Result<()>,
{
    let Some(store) = ctx.services.preferences.as_deref_mut() else {
        return;
    };
    if let Err(err) = save(store) {
        tracing::warn!(error = %err, "failed to save preference");
        ctx.notifications.push(Notification::warning(SAVE_WARNING));
    }
}
