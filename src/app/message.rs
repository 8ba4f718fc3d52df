// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::presenter::Kind;
use crate::ui::notifications::NotificationMessage;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The message draft was edited.
    DraftChanged(String),
    KindSelected(Kind),
    AutoHideToggled(bool),
    /// The duration field was edited (raw text, validated on update).
    DurationChanged(String),
    /// Show the draft, or re-render the visible toast with it.
    Show,
    /// Owner-driven hide.
    Hide,
    Notification(NotificationMessage),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Message shown as soon as the window opens.
    pub message: Option<String>,
    /// Kind override for the first notification and the picker.
    pub kind: Option<Kind>,
    /// Auto-hide delay override in milliseconds; must be positive.
    pub duration_ms: Option<i64>,
    /// Disable auto-hide regardless of the config file.
    pub no_auto_hide: bool,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TOAST_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
