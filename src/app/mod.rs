// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the switcher and the
//! tab content screen.
//!
//! The `App` struct wires together the domains (tab store, switcher
//! component, localization, feedback) and translates component effects into
//! navigation and store mutations. Policy decisions — selection fallback on
//! close, when the animation tick runs, window sizing — stay close to the
//! main update loop so user-facing behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::feedback;
use crate::i18n::I18n;
use crate::tabs::{sample, TabId, TabStore};
use crate::ui::notifications;
use crate::ui::switcher;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 640;

/// Root Iced application state bridging the tab domain and the UI
/// components.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    store: TabStore,
    switcher: switcher::State,
    /// The externally tracked "currently open" tab.
    selected_tab: Option<TabId>,
    feedback: feedback::Conductor,
    theme_mode: ThemeMode,
    scheme: ColorScheme,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("tab_count", &self.store.len())
            .finish()
    }
}

/// Builds the window settings.
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
        let config = config::Config::default();
        Self {
            i18n: I18n::default(),
            screen: Screen::Switcher,
            store: TabStore::new(),
            switcher: switcher::State::new(&config),
            selected_tab: None,
            feedback: feedback::Conductor::new(),
            theme_mode: ThemeMode::System,
            scheme: ColorScheme::for_mode(ThemeMode::System),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from config and the seed tabs.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = match config::load() {
            Ok(config) => (config, None),
            Err(_) => (
                config::Config::default(),
                Some("notification-config-load-error"),
            ),
        };

        let store = TabStore::with_tabs(sample::seed_tabs());
        let selected_tab = store.first_id();

        let mut app = App {
            i18n: I18n::new(flags.lang, &config),
            store,
            switcher: switcher::State::new(&config),
            selected_tab,
            theme_mode: config.theme_mode,
            scheme: ColorScheme::for_mode(config.theme_mode),
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications.push(notifications::Notification::warning(key));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        // On the content screen, lead with the open tab's title.
        if self.screen == Screen::TabContent {
            if let Some(tab) = self.selected_tab.and_then(|id| self.store.get(id)) {
                return format!("{} - {}", tab.title(), app_name);
            }
        }

        app_name
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let tick_sub = subscription::create_tick_subscription(
            self.switcher.has_pending_work() || self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            store: &mut self.store,
            switcher: &mut self.switcher,
            selected_tab: &mut self.selected_tab,
            feedback: &mut self.feedback,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Switcher(switcher_message) => {
                update::handle_switcher_message(&mut ctx, switcher_message, Instant::now());
            }
            Message::Content(crate::ui::content::Message::BackToTabs) => {
                self.screen = Screen::Switcher;
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
            }
            Message::NewTab => update::handle_new_tab(&mut ctx, Instant::now()),
            Message::Tick(instant) => update::handle_tick(&mut ctx, instant),
            Message::WindowResized(size) => {
                self.switcher.set_viewport_height(size.height);
            }
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            store: &self.store,
            switcher: &self.switcher,
            selected_tab: self.selected_tab,
            scheme: &self.scheme,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs::Tab;
    use crate::ui::switcher::Phase;
    use std::sync::{Mutex, OnceLock};
    use std::time::Duration;
    use tempfile::tempdir;

    fn config_env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var("XDG_CONFIG_HOME").ok();
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var("XDG_CONFIG_HOME", value);
        } else {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }

    fn app_with_tabs(amounts: &[u32]) -> App {
        let tabs: Vec<Tab> = amounts
            .iter()
            .map(|&amount| Tab::with_amount("t", "https://apple.com", "🌐", amount))
            .collect();
        let store = TabStore::with_tabs(tabs);
        let selected_tab = store.first_id();
        App {
            store,
            selected_tab,
            ..App::default()
        }
    }

    #[test]
    fn new_starts_on_switcher_with_seed_tabs() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.screen, Screen::Switcher);
            assert_eq!(app.store.len(), 14);
            assert_eq!(app.selected_tab, app.store.first_id());
        });
    }

    #[test]
    fn closing_the_selected_tab_falls_back_to_the_first_remaining() {
        let mut app = app_with_tabs(&[10_000, 20_000]);
        let first = app.store.all()[0].id();
        let second = app.store.all()[1].id();
        assert_eq!(app.selected_tab, Some(first));

        let _ = app.update(Message::Switcher(switcher::Message::CloseRequested(first)));

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.selected_tab, Some(second));
    }

    #[test]
    fn closing_an_unselected_tab_keeps_the_selection() {
        let mut app = app_with_tabs(&[10_000, 20_000]);
        let first = app.store.all()[0].id();
        let second = app.store.all()[1].id();

        let _ = app.update(Message::Switcher(switcher::Message::CloseRequested(second)));

        assert_eq!(app.selected_tab, Some(first));
    }

    #[test]
    fn closing_the_last_tab_clears_selection_and_shows_the_switcher() {
        let mut app = app_with_tabs(&[10_000]);
        let id = app.store.all()[0].id();
        app.screen = Screen::TabContent;

        let _ = app.update(Message::Switcher(switcher::Message::CloseRequested(id)));

        assert!(app.store.is_empty());
        assert!(app.selected_tab.is_none());
        assert_eq!(app.screen, Screen::Switcher);
    }

    #[test]
    fn opening_a_tapped_tab_navigates_to_its_content() {
        let mut app = app_with_tabs(&[10_000, 20_000]);
        let second = app.store.all()[1].id();

        let _ = app.update(Message::Switcher(switcher::Message::CardPressed(second)));
        let _ = app.update(Message::Switcher(switcher::Message::OpenRequested(second)));

        assert_eq!(app.screen, Screen::TabContent);
        assert_eq!(app.selected_tab, Some(second));
    }

    #[test]
    fn back_to_tabs_returns_to_the_switcher() {
        let mut app = app_with_tabs(&[10_000]);
        app.screen = Screen::TabContent;

        let _ = app.update(Message::Content(crate::ui::content::Message::BackToTabs));

        assert_eq!(app.screen, Screen::Switcher);
    }

    #[test]
    fn new_tab_selects_itself_only_when_nothing_is_selected() {
        let mut app = app_with_tabs(&[]);
        assert!(app.selected_tab.is_none());

        let _ = app.update(Message::NewTab);
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.selected_tab, app.store.first_id());

        let first = app.selected_tab;
        let _ = app.update(Message::NewTab);
        assert_eq!(app.store.len(), 2);
        assert_eq!(app.selected_tab, first);
    }

    #[test]
    fn pinch_scenario_settles_every_card_and_counts_the_total() {
        let mut app = app_with_tabs(&[10_000, 20_000, 30_000]);
        let start = Instant::now();

        app.switcher
            .pinch_ended(0.5, &app.store, &mut app.feedback, start);
        assert_eq!(app.switcher.phase(), Phase::TransitioningToPinched);

        let _ = app.update(Message::Tick(start + Duration::from_secs(2)));

        assert_eq!(app.switcher.phase(), Phase::Pinched);
        assert_eq!(app.switcher.settled_count(), 3);
        assert_eq!(app.switcher.displayed_total(), 60_000);
    }

    #[test]
    fn window_resize_updates_the_switcher_viewport() {
        let mut app = app_with_tabs(&[10_000]);
        let _ = app.update(Message::WindowResized(iced::Size::new(400.0, 900.0)));
        assert_eq!(app.switcher.viewport_height(), 900.0);
    }

    #[test]
    fn title_includes_the_open_tab_on_the_content_screen() {
        let mut app = app_with_tabs(&[10_000]);
        assert_eq!(app.title(), app.i18n.tr("window-title"));

        app.screen = Screen::TabContent;
        assert!(app.title().starts_with("t - "));
    }

    #[test]
    fn tick_runs_only_while_work_is_pending() {
        let mut app = app_with_tabs(&[10_000]);
        assert!(!app.switcher.has_pending_work());

        app.switcher
            .double_tapped(&app.store, &mut app.feedback, Instant::now());
        assert!(app.switcher.has_pending_work());
    }
}
