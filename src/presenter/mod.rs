// SPDX-License-Identifier: MPL-2.0
//! Transient notification presenter.
//!
//! A presenter shows a dismissible, auto-expiring status message and tells
//! its owner exactly once when the dismissal has finished, so the owner can
//! clear its `visible` flag.
//!
//! # Components
//!
//! - [`state`] - UI-agnostic state machine and its timer effects
//! - [`driver`] - tokio task running a state machine with real timers
//! - [`Props`] / [`Kind`] / [`DismissDelay`] - owner inputs
//!
//! # Usage
//!
//! ```no_run
//! use iced_toast::presenter::{self, Kind, Props};
//!
//! # async fn demo() {
//! let handle = presenter::driver::spawn(
//!     Props::new("Saved").kind(Kind::Success).visible(true),
//!     || println!("dismissed"),
//! );
//! handle.close().ok();
//! # }
//! ```

pub mod driver;
mod kind;
mod props;
pub mod state;

pub use driver::PresenterHandle;
pub use kind::Kind;
pub use props::{delay_bounds, DismissDelay, Props, ENTER_ANIMATION, EXIT_ANIMATION};
pub use state::{Effect, Message, Phase, State, TimerId};
