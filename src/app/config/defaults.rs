// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration.
//!
//! # Categories
//!
//! - **Notification**: auto-hide behavior and delay bounds
//! - **Window**: initial and minimum window sizes

use crate::presenter::delay_bounds;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Whether notifications hide themselves after their delay.
pub const DEFAULT_AUTO_HIDE: bool = true;

/// Default auto-hide delay in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = delay_bounds::DEFAULT_MS;

/// Minimum auto-hide delay accepted from the config file (milliseconds).
pub const MIN_DURATION_MS: u64 = delay_bounds::MIN_MS;

/// Maximum auto-hide delay accepted from the config file (milliseconds).
pub const MAX_DURATION_MS: u64 = delay_bounds::MAX_MS;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 640.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 420.0;
pub const MIN_WINDOW_WIDTH: f32 = 420.0;
pub const MIN_WINDOW_HEIGHT: f32 = 320.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_DURATION_MS > 0);
    assert!(MIN_DURATION_MS <= DEFAULT_DURATION_MS);
    assert!(DEFAULT_DURATION_MS <= MAX_DURATION_MS);
    assert!(MIN_WINDOW_WIDTH <= WINDOW_DEFAULT_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= WINDOW_DEFAULT_HEIGHT);
};
