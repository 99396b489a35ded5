// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page sections.
//!
//! The `App` struct wires together the domains (sections, gallery, support,
//! localization) and translates component events into side effects like
//! config persistence, payment calls, or opening the browser. This file
//! intentionally keeps policy decisions (window size, theme resolution,
//! notification routing) close to the main update loop so it is easy to
//! audit user-facing behavior.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::content;
use crate::i18n::fluent::I18n;
use crate::ui::gallery::{carousel, lightbox};
use crate::ui::notifications;
use crate::ui::state::scroll_lock::ScrollLock;
use crate::ui::support;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges the page sections, localization,
/// and persisted preferences.
pub struct App {
    pub i18n: I18n,
    config: config::Config,
    theme_mode: ThemeMode,
    /// Resolved once from `theme_mode` so `System` does not hit the OS
    /// detection on every frame.
    is_dark: bool,
    carousel: carousel::State,
    lightbox: lightbox::State,
    support: support::State,
    /// Whether the floor plan grid under the carousel is expanded.
    plans_expanded: bool,
    /// Whether the compact navigation menu is open.
    menu_open: bool,
    /// Holds the page still while the lightbox owns the wheel.
    scroll_lock: ScrollLock,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("lightbox_open", &self.lightbox.is_open())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 780;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 760;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            config: config::Config::default(),
            theme_mode: ThemeMode::System,
            is_dark: ThemeMode::System.is_dark(),
            carousel: carousel::State::new(content::CHURCH_IMAGES),
            lightbox: lightbox::State::new(content::lightbox_images()),
            support: support::State::new(),
            plans_expanded: false,
            menu_open: false,
            scroll_lock: ScrollLock::default(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from persisted preferences and launch
    /// flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.general.theme_mode;
        app.is_dark = app.theme_mode.is_dark();
        app.config = config;

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.lightbox.is_open());
        let tick_sub = subscription::create_tick_subscription(
            self.support.has_pending_debounce(),
            self.notifications.has_notifications(),
        );
        let carousel_sub =
            subscription::create_carousel_subscription(self.carousel.should_auto_advance());

        Subscription::batch([event_sub, tick_sub, carousel_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Sections(message) => update::handle_sections_message(self, message),
            Message::Support(message) => update::handle_support_message(self, message),
            Message::Lightbox(message) => update::handle_lightbox_message(self, message),
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::Tick(now) => update::handle_tick(self, now),
            Message::ReceiptSent(result) => update::handle_receipt_sent(result),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}
