// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the two portal steps.
//!
//! The `App` struct wires together the screens (policies, payment), the
//! translator and the stored preferences, and translates component events into
//! side effects like preference writes, clipboard access or opening a browser.
//! Those side effects go through the ports in [`Services`] so the whole flow
//! can be driven from tests with fakes.

pub mod config;
mod message;
pub mod paths;
pub mod preferences;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::port::{ClipboardWriter, LinkOpener};
use crate::i18n::{Language, Localizer, Translator};
use crate::infrastructure::{SystemBrowser, SystemClipboard};
use crate::ui::notifications;
use crate::ui::payment;
use crate::ui::policies::{self, ReadingSettings};
use crate::ui::state::LayoutMode;
use crate::ui::theming::{self, ThemeMode};
use config::defaults::{
    MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH,
};
use config::Config;
use iced::{window, Element, Size, Subscription, Task, Theme};
use preferences::{PreferenceStore, Preferences, TomlPreferenceStore};
use std::fmt;

/// Side-effecting collaborators of the application.
pub struct Services {
    /// `None` when no config directory exists; changes then last for the
    /// session only.
    pub preferences: Option<Box<dyn PreferenceStore>>,
    pub clipboard: Box<dyn ClipboardWriter>,
    pub links: Box<dyn LinkOpener>,
}

impl Services {
    /// Production adapters: the system clipboard and the default browser.
    #[must_use]
    pub fn system(preferences: Option<Box<dyn PreferenceStore>>) -> Self {
        Self {
            preferences,
            clipboard: Box::new(SystemClipboard::new()),
            links: Box::new(SystemBrowser),
        }
    }
}

impl fmt::Debug for Services {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Services")
            .field("persistent_preferences", &self.preferences.is_some())
            .finish_non_exhaustive()
    }
}

/// Root Iced application state.
pub struct App {
    translator: Translator,
    language: Language,
    theme_mode: ThemeMode,
    screen: Screen,
    policies: policies::State,
    payment: payment::State,
    notifications: notifications::Manager,
    services: Services,
    split_breakpoint: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("language", &self.language)
            .field("theme_mode", &self.theme_mode)
            .field("modal_open", &self.payment.is_modal_open())
            .finish()
    }
}

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and preferences from disk and wires the system adapters.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let (store, store_warning) = TomlPreferenceStore::open(None);
        let store = store.map(|store| Box::new(store) as Box<dyn PreferenceStore>);

        let (mut app, task) = Self::with_services(
            &config,
            Services::system(store),
            Translator::embedded(),
            &flags,
            theming::system_prefers_dark,
        );

        for warning in [config_warning, store_warning].into_iter().flatten() {
            app.notifications
                .push(notifications::Notification::warning(warning));
        }

        tracing::info!(
            language = %app.language.code(),
            theme = app.theme_mode.code(),
            "policy portal started"
        );
        (app, task)
    }

    /// Builds the application from explicit collaborators.
    ///
    /// `system_dark` is consulted only when no theme is stored and none was
    /// passed on the command line. Flag overrides apply to this session and
    /// are not written to the store.
    pub fn with_services<F>(
        config: &Config,
        services: Services,
        translator: Translator,
        flags: &Flags,
        system_dark: F,
    ) -> (Self, Task<Message>)
    where
        F: FnOnce() -> bool,
    {
        let stored = Preferences::load(services.preferences.as_deref(), || match flags.theme {
            Some(theme) => theme.is_dark(),
            None => system_dark(),
        });

        let split_breakpoint = config.reading.split_breakpoint();
        let layout = LayoutMode::from_width(WINDOW_DEFAULT_WIDTH, split_breakpoint);

        let mut app = Self {
            translator,
            language: flags.lang.unwrap_or(stored.language),
            theme_mode: flags.theme.unwrap_or(stored.theme),
            screen: Screen::default(),
            policies: policies::State::new(
                config.consent.scope,
                ReadingSettings::from(&config.reading),
                layout,
            ),
            payment: payment::State::new(),
            notifications: notifications::Manager::new(),
            services,
            split_breakpoint,
        };

        let task = app.policies.activate().map(Message::Policies);
        (app, task)
    }

    fn localizer(&self) -> Localizer<'_> {
        self.translator.localizer(self.language)
    }

    fn title(&self) -> String {
        self.localizer().tr("Policy & Billing Hub").to_owned()
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.payment.copy_feedback().is_active(),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    /// Routes one message. Public so the whole flow can be driven headless.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            translator: &self.translator,
            language: &mut self.language,
            theme_mode: &mut self.theme_mode,
            screen: &mut self.screen,
            policies: &mut self.policies,
            payment: &mut self.payment,
            notifications: &mut self.notifications,
            services: &mut self.services,
        };

        match message {
            Message::Header(header_message) => {
                update::handle_header_message(&mut ctx, header_message)
            }
            Message::Policies(policies_message) => {
                update::handle_policies_message(&mut ctx, policies_message)
            }
            Message::Payment(payment_message) => {
                update::handle_payment_message(&mut ctx, payment_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::WindowResized(size) => {
                let layout = LayoutMode::from_width(size.width, self.split_breakpoint);
                self.policies.set_layout(layout).map(Message::Policies)
            }
            Message::EscapePressed => update::handle_escape(&mut ctx),
            Message::Tick(now) => {
                self.payment.tick(now);
                self.notifications.tick(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            localizer: self.localizer(),
            screen: self.screen,
            theme_mode: self.theme_mode,
            policies: &self.policies,
            payment: &self.payment,
            notifications: &self.notifications,
        })
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    #[must_use]
    pub fn policies(&self) -> &policies::State {
        &self.policies
    }

    #[must_use]
    pub fn payment(&self) -> &payment::State {
        &self.payment
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{ClipboardError, LinkError, ScrollSample, VisibilityRoot};
    use crate::ui::header;
    use preferences::{MemoryPreferenceStore, LANGUAGE_KEY, THEME_KEY};

    struct NullClipboard;

    impl ClipboardWriter for NullClipboard {
        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Ok(())
        }
    }

    struct NullLinks;

    impl LinkOpener for NullLinks {
        fn open(&mut self, url: &str) -> Result<(), LinkError> {
            Err(LinkError {
                url: url.to_string(),
                reason: "no browser".into(),
            })
        }
    }

    fn services(store: MemoryPreferenceStore) -> Services {
        Services {
            preferences: Some(Box::new(store)),
            clipboard: Box::new(NullClipboard),
            links: Box::new(NullLinks),
        }
    }

    fn app_with(store: MemoryPreferenceStore, flags: &Flags) -> App {
        App::with_services(
            &Config::default(),
            services(store),
            Translator::embedded(),
            flags,
            || false,
        )
        .0
    }

    fn fitting_sample() -> ScrollSample {
        ScrollSample {
            root: VisibilityRoot::ContentPane,
            viewport_height: 800.0,
            content_height: 600.0,
            offset_y: 0.0,
        }
    }

    #[test]
    fn stored_preferences_apply_at_startup() {
        let store = MemoryPreferenceStore::new()
            .with_entry(THEME_KEY, "dark")
            .with_entry(LANGUAGE_KEY, "fr");
        let app = app_with(store, &Flags::default());
        assert_eq!(app.language(), Language::Fr);
        assert_eq!(app.theme_mode(), ThemeMode::Dark);
        assert_eq!(app.screen(), Screen::Policies);
    }

    #[test]
    fn cli_overrides_win_for_the_session() {
        let store = MemoryPreferenceStore::new().with_entry(LANGUAGE_KEY, "fr");
        let flags = Flags {
            lang: Some(Language::Ar),
            theme: Some(ThemeMode::Dark),
            config_dir: None,
        };
        let app = app_with(store, &flags);
        assert_eq!(app.language(), Language::Ar);
        assert_eq!(app.theme_mode(), ThemeMode::Dark);
    }

    #[test]
    fn agreeing_is_ignored_while_locked() {
        let mut app = app_with(MemoryPreferenceStore::new(), &Flags::default());
        let _ = app.update(Message::Policies(policies::Message::Agree));
        assert_eq!(app.screen(), Screen::Policies);
    }

    #[test]
    fn agreeing_after_reading_moves_to_payment() {
        let mut app = app_with(MemoryPreferenceStore::new(), &Flags::default());
        let _ = app.update(Message::Policies(policies::Message::Scrolled(fitting_sample())));
        let _ = app.update(Message::Policies(policies::Message::Agree));
        assert_eq!(app.screen(), Screen::Payment);
    }

    #[test]
    fn leaving_policies_detaches_the_observer() {
        let mut app = app_with(MemoryPreferenceStore::new(), &Flags::default());
        let _ = app.update(Message::Policies(policies::Message::Scrolled(fitting_sample())));
        let _ = app.update(Message::Policies(policies::Message::Agree));

        assert!(app.policies().observer().options().is_none());
        assert!(app.policies().gate().observation().is_none());

        let _ = app.update(Message::Payment(payment::Message::BackToPolicies));
        assert!(app.policies().observer().options().is_some());
        assert!(app.policies().gate().observation().is_some());
    }

    #[test]
    fn back_to_policies_rearms_the_gate() {
        let mut app = app_with(MemoryPreferenceStore::new(), &Flags::default());
        let _ = app.update(Message::Policies(policies::Message::Scrolled(fitting_sample())));
        let _ = app.update(Message::Policies(policies::Message::Agree));
        let _ = app.update(Message::Payment(payment::Message::BackToPolicies));

        assert_eq!(app.screen(), Screen::Policies);
        assert!(!app.policies().can_agree());
    }

    #[test]
    fn theme_toggle_applies_immediately() {
        let store = MemoryPreferenceStore::new().with_entry(THEME_KEY, "light");
        let mut app = app_with(store, &Flags::default());
        let _ = app.update(Message::Header(header::Message::ToggleTheme));
        assert_eq!(app.theme_mode(), ThemeMode::Dark);
    }

    #[test]
    fn failed_link_open_raises_a_warning() {
        let mut app = app_with(MemoryPreferenceStore::new(), &Flags::default());
        let _ = app.update(Message::Payment(payment::Message::ContactSupport));
        assert_eq!(app.notifications().visible_count(), 1);
    }

    #[test]
    fn read_only_store_warns_but_keeps_the_change() {
        let mut store = MemoryPreferenceStore::new();
        store.read_only = true;
        let mut app = app_with(store, &Flags::default());

        let _ = app.update(Message::Header(header::Message::LanguageSelected(Language::Fr)));

        assert_eq!(app.language(), Language::Fr);
        assert_eq!(app.notifications().visible_count(), 1);
    }

    #[test]
    fn narrow_window_switches_to_single_layout() {
        let mut app = app_with(MemoryPreferenceStore::new(), &Flags::default());
        let _ = app.update(Message::WindowResized(Size::new(480.0, 800.0)));
        assert_eq!(app.policies().layout(), LayoutMode::Single);
    }

    #[test]
    fn escape_closes_the_details_modal() {
        let mut app = app_with(MemoryPreferenceStore::new(), &Flags::default());
        let _ = app.update(Message::Payment(payment::Message::OpenDetails("wise".into())));
        assert!(app.payment().is_modal_open());

        let _ = app.update(Message::EscapePressed);
        assert!(!app.payment().is_modal_open());
    }
}
