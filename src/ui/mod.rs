// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Follows the Elm-style "state down, messages up" pattern: the owner passes
//! props down to the notification and receives an event when it dismissed.
//!
//! - [`notifications`] - Toast component driving the presenter
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod notifications;
pub mod theming;
