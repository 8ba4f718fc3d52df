// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` shows transient notifications that dismiss themselves.
//!
//! The [`presenter`] module holds the toolkit-free state machine (visibility,
//! the single auto-hide timer, the exit animation and the dismiss callback)
//! plus a tokio driver for headless use. The [`ui`] and [`app`] modules render
//! it as an Iced toast inside a small demo window.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod app;
pub mod error;
pub mod presenter;
pub mod ui;

pub use app::config;
