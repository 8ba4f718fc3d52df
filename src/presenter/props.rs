// SPDX-License-Identifier: MPL-2.0
//! Owner-supplied inputs of a presenter.

use super::Kind;
use crate::error::{Error, Result};
use std::time::Duration;

// =============================================================================
// Dismiss Delay Bounds
// =============================================================================

/// Bounds applied when a dismiss delay comes from untrusted input (config files).
pub mod delay_bounds {
    /// Default auto-hide delay in milliseconds.
    pub const DEFAULT_MS: u64 = 4000;
    /// Smallest delay accepted by [`super::DismissDelay::clamped`].
    pub const MIN_MS: u64 = 500;
    /// Largest delay accepted by [`super::DismissDelay::clamped`].
    pub const MAX_MS: u64 = 120_000;
}

/// Fixed delay between a dismissal trigger and the dismiss callback.
pub const EXIT_ANIMATION: Duration = Duration::from_millis(300);

/// Length of the fade-in played when a notification appears.
pub const ENTER_ANIMATION: Duration = Duration::from_millis(200);

// =============================================================================
// DismissDelay
// =============================================================================

/// Auto-hide delay, guaranteed to be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DismissDelay(Duration);

impl DismissDelay {
    /// Creates a delay from milliseconds, rejecting zero and negative values.
    pub fn from_millis(ms: i64) -> Result<Self> {
        if ms <= 0 {
            return Err(Error::InvalidDuration(ms));
        }
        Ok(Self(Duration::from_millis(ms.unsigned_abs())))
    }

    /// Creates a delay from milliseconds, clamping into
    /// `delay_bounds::MIN_MS..=delay_bounds::MAX_MS`.
    #[must_use]
    pub fn clamped(ms: i64) -> Self {
        let ms = ms.clamp(delay_bounds::MIN_MS as i64, delay_bounds::MAX_MS as i64);
        Self(Duration::from_millis(ms.unsigned_abs()))
    }

    /// Returns the delay as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }

    /// Returns the delay in whole milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        u64::try_from(self.0.as_millis()).unwrap_or(u64::MAX)
    }
}

impl Default for DismissDelay {
    fn default() -> Self {
        Self(Duration::from_millis(delay_bounds::DEFAULT_MS))
    }
}

impl TryFrom<Duration> for DismissDelay {
    type Error = Error;

    fn try_from(duration: Duration) -> Result<Self> {
        if duration.is_zero() {
            return Err(Error::InvalidDuration(0));
        }
        Ok(Self(duration))
    }
}

// =============================================================================
// Props
// =============================================================================

/// Everything the owner hands to a presenter on each render.
#[derive(Debug, Clone, PartialEq)]
pub struct Props {
    pub message: String,
    pub kind: Kind,
    pub visible: bool,
    pub auto_hide: bool,
    pub duration: DismissDelay,
}

impl Default for Props {
    fn default() -> Self {
        Self {
            message: String::new(),
            kind: Kind::default(),
            visible: false,
            auto_hide: true,
            duration: DismissDelay::default(),
        }
    }
}

impl Props {
    /// Creates hidden props carrying `message` with every other input at its default.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    #[must_use]
    pub fn auto_hide(mut self, auto_hide: bool) -> Self {
        self.auto_hide = auto_hide;
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: DismissDelay) -> Self {
        self.duration = duration;
        self
    }
}
