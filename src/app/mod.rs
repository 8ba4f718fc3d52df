// SPDX-License-Identifier: MPL-2.0
//! Application root: the owner of the notification.
//!
//! The `App` keeps the owner-side `visible` flag and the composed message,
//! renders the toast with those props, and clears `visible` when the toast
//! reports that its dismissal finished.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::presenter::{DismissDelay, Kind, Props};
use crate::ui::notifications::{Event, Notification};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Message shown when the draft is empty.
const FALLBACK_MESSAGE: &str = "Saved";

/// Root Iced application state.
pub struct App {
    /// Loaded settings; form changes are written back into the notification section.
    config: config::Config,
    /// Directory `settings.toml` is saved to; `None` disables persistence.
    settings_dir: Option<PathBuf>,
    /// Draft typed in the form.
    draft: String,
    /// Kind selected in the picker.
    kind: Kind,
    auto_hide: bool,
    duration: DismissDelay,
    /// Raw text of the duration field.
    duration_input: String,
    duration_valid: bool,
    /// Owner-side visibility flag handed to the toast.
    visible: bool,
    /// Message and kind of the toast currently rendered.
    shown_message: String,
    shown_kind: Kind,
    notification: Notification,
    /// Startup message waiting for the startup warning to be dismissed.
    queued: Option<(String, Kind)>,
    /// Number of completed dismissals.
    dismissed: u32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("visible", &self.visible)
            .field("notification", &self.notification)
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        let duration = DismissDelay::default();
        Self {
            config: config::Config::default(),
            settings_dir: None,
            draft: String::new(),
            kind: Kind::default(),
            auto_hide: config::DEFAULT_AUTO_HIDE,
            duration,
            duration_input: duration.as_millis().to_string(),
            duration_valid: true,
            visible: false,
            shown_message: String::new(),
            shown_kind: Kind::default(),
            notification: Notification::new(),
            queued: None,
            dismissed: 0,
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    paths::init_cli_override(flags.config_dir.clone());

    // iced 0.14 requires Fn for boot; flags are cloned per call.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the config file and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let mut app = App {
            kind: flags.kind.unwrap_or_else(|| config.notification.kind()),
            auto_hide: config.notification.auto_hide() && !flags.no_auto_hide,
            settings_dir: paths::get_app_config_dir(),
            ..Self::default()
        };
        app.set_duration(config.notification.dismiss_delay());
        app.config = config;

        let mut startup_warning = config_warning.map(|key| warning_text(&key).to_string());

        if let Some(ms) = flags.duration_ms {
            match DismissDelay::from_millis(ms) {
                Ok(delay) => app.set_duration(delay),
                Err(err) => {
                    log::warn!("ignoring --duration: {err}");
                    startup_warning = Some(format!("{err}; using {} ms", app.duration.as_millis()));
                }
            }
        }

        let task = if let Some(warning) = startup_warning {
            if let Some(message) = flags.message {
                log::info!("--message deferred until the startup warning is dismissed");
                app.queued = Some((message, app.kind));
            }
            app.show(warning, Kind::Warning)
        } else if let Some(message) = flags.message {
            let kind = app.kind;
            app.show(message, kind)
        } else {
            Task::none()
        };

        (app, task)
    }

    fn title(&self) -> String {
        if self.visible {
            format!("{} - Notification presenter", self.shown_kind)
        } else {
            "Notification presenter".to_string()
        }
    }

    fn theme(&self) -> Theme {
        self.config.general.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_notification_subscription(&self.notification),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DraftChanged(draft) => {
                self.draft = draft;
                Task::none()
            }
            Message::KindSelected(kind) => {
                self.kind = kind;
                self.config.notification.kind = Some(kind);
                self.persist();
                Task::none()
            }
            Message::AutoHideToggled(auto_hide) => {
                self.auto_hide = auto_hide;
                self.config.notification.auto_hide = Some(auto_hide);
                self.persist();
                // Takes effect on the next show; a running timer is kept.
                self.sync()
            }
            Message::DurationChanged(input) => {
                match input.trim().parse::<i64>().map(DismissDelay::from_millis) {
                    Ok(Ok(delay)) => {
                        self.duration = delay;
                        self.duration_valid = true;
                        self.config.notification.duration_ms =
                            i64::try_from(delay.as_millis()).ok();
                        self.persist();
                    }
                    _ => self.duration_valid = false,
                }
                self.duration_input = input;
                Task::none()
            }
            Message::Show => {
                let message = if self.draft.trim().is_empty() {
                    FALLBACK_MESSAGE.to_string()
                } else {
                    self.draft.clone()
                };
                let kind = self.kind;
                self.show(message, kind)
            }
            Message::Hide => {
                if self.queued.take().is_some() {
                    log::debug!("hidden by owner, dropping queued message");
                }
                self.visible = false;
                self.sync()
            }
            Message::Notification(msg) => {
                let (task, event) = self.notification.update(msg);
                let task = task.map(Message::Notification);
                if event == Event::Dismissed {
                    self.dismissed += 1;
                    log::info!("notification dismissed ({} so far)", self.dismissed);
                    self.visible = false;
                    let hidden = self.sync();
                    match self.queued.take() {
                        Some((message, kind)) => {
                            let shown = self.show(message, kind);
                            Task::batch([task, hidden, shown])
                        }
                        None => Task::batch([task, hidden]),
                    }
                } else {
                    task
                }
            }
            Message::WindowCloseRequested(_) => {
                self.notification.unmount();
                iced::exit()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            draft: &self.draft,
            kind: self.kind,
            auto_hide: self.auto_hide,
            duration_input: &self.duration_input,
            duration_valid: self.duration_valid,
            visible: self.visible,
            dismissed: self.dismissed,
            notification: &self.notification,
        })
    }

    /// Shows `message`, or re-renders the visible toast with it.
    fn show(&mut self, message: String, kind: Kind) -> Task<Message> {
        self.shown_message = message;
        self.shown_kind = kind;
        self.visible = true;
        self.sync()
    }

    fn set_duration(&mut self, duration: DismissDelay) {
        self.duration = duration;
        self.duration_input = duration.as_millis().to_string();
        self.duration_valid = true;
    }

    /// Writes the settings back to disk; failures are logged and otherwise ignored.
    fn persist(&self) {
        let Some(dir) = &self.settings_dir else {
            return;
        };
        if let Err(err) = config::save_with_override(&self.config, Some(dir.clone())) {
            log::warn!("failed to save settings: {err}");
        }
    }

    fn props(&self) -> Props {
        Props {
            message: self.shown_message.clone(),
            kind: self.shown_kind,
            visible: self.visible,
            auto_hide: self.auto_hide,
            duration: self.duration,
        }
    }

    fn sync(&mut self) -> Task<Message> {
        let props = self.props();
        self.notification.sync(props).map(Message::Notification)
    }
}

/// Human-readable text for a warning key.
fn warning_text(key: &str) -> &str {
    match key {
        config::LOAD_ERROR_WARNING => "Could not read settings.toml; using defaults",
        other => other,
    }
}
