// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::i18n::Language;
use crate::ui::header;
use crate::ui::notifications;
use crate::ui::payment;
use crate::ui::policies;
use crate::ui::theming::ThemeMode;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Policies(policies::Message),
    Payment(payment::Message),
    Notification(notifications::NotificationMessage),
    /// The window was resized; drives the policies layout mode.
    WindowResized(Size),
    /// Escape was pressed and nothing captured it.
    EscapePressed,
    /// Periodic tick for copy acknowledgment and toast expiry.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Session language override. Not persisted until the user changes it.
    pub lang: Option<Language>,
    /// Session theme override. Not persisted until the user toggles it.
    pub theme: Option<ThemeMode>,
    /// Optional config directory override (for settings.toml and
    /// preferences.toml). Takes precedence over `POLICY_PORTAL_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
