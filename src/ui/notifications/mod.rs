// SPDX-License-Identifier: MPL-2.0
//! Toast notification overlay.
//!
//! # Components
//!
//! - `notification` - `Notification` component driving a presenter with iced tasks
//! - `toast` - Toast widget rendering the card and its fade
//!
//! # Usage
//!
//! ```ignore
//! use crate::presenter::Props;
//! use crate::ui::notifications::{Event, Notification};
//!
//! let mut toast = Notification::new();
//! let task = toast.sync(Props::new("Saved").visible(true)).map(Message::Notification);
//!
//! // In update:
//! let (task, event) = toast.update(msg);
//! if event == Event::Dismissed { /* clear visible and sync again */ }
//! ```

mod notification;
mod toast;

pub use notification::{Event, Message as NotificationMessage, Notification};
pub use toast::{accent_color, Toast};
