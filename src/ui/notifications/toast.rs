// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the notification.
//!
//! The toast is a small card with a kind-colored accent border, a kind
//! glyph, the message and a close button. Its opacity follows the
//! component's fade so the enter and exit animations are visible.

use super::notification::{Message, Notification};
use crate::presenter::Kind;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast rendering entry points.
pub struct Toast;

impl Toast {
    /// Renders the toast card.
    pub fn view(notification: &Notification) -> Element<'_, Message> {
        let kind = notification.kind();
        let alpha = notification.opacity();
        let accent = with_alpha(accent_color(kind), alpha);

        let glyph = Text::new(glyph(kind))
            .size(sizing::GLYPH)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent),
            });

        let message = Text::new(notification.message())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(with_alpha(theme.palette().text, alpha)),
            });

        let close = button(Text::new("×").size(sizing::CLOSE_GLYPH))
            .on_press(Message::Close)
            .padding(spacing::XXS)
            .style(move |theme: &Theme, status| close_button_style(theme, status, alpha));

        // Layout: [glyph] [message] [close]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph).padding(spacing::XXS))
            .push(
                Container::new(message)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(close);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent, alpha))
            .into()
    }

    /// Renders the toast positioned in the bottom-right corner, or an empty
    /// zero-size container while idle.
    pub fn view_overlay(notification: &Notification) -> Element<'_, Message> {
        if notification.phase() == crate::presenter::Phase::Idle {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        Container::new(Self::view(notification))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

/// Accent color of a kind.
#[must_use]
pub fn accent_color(kind: Kind) -> Color {
    match kind {
        Kind::Success => palette::SUCCESS_500,
        Kind::Error => palette::ERROR_500,
        Kind::Warning => palette::WARNING_500,
        Kind::Info => palette::INFO_500,
    }
}

fn glyph(kind: Kind) -> &'static str {
    match kind {
        Kind::Success => "✓",
        Kind::Error => "✕",
        Kind::Warning => "!",
        Kind::Info => "i",
    }
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

fn toast_container_style(theme: &Theme, accent: Color, alpha: f32) -> container::Style {
    let bg_color = with_alpha(theme.extended_palette().background.base.color, alpha);

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: with_alpha(shadow::MD.color, alpha * opacity::OVERLAY_MEDIUM),
            ..shadow::MD
        },
        text_color: Some(with_alpha(theme.palette().text, alpha)),
        ..Default::default()
    }
}

fn close_button_style(theme: &Theme, status: button::Status, alpha: f32) -> button::Style {
    let text_color = with_alpha(theme.extended_palette().background.base.text, alpha);
    let hover_background = |level: f32| {
        Some(iced::Background::Color(Color {
            a: level * alpha,
            ..palette::GRAY_400
        }))
    };

    let (background, text_color) = match status {
        button::Status::Active => (None, text_color),
        button::Status::Hovered => (hover_background(opacity::OVERLAY_SUBTLE), text_color),
        button::Status::Pressed => (hover_background(opacity::OVERLAY_MEDIUM), text_color),
        button::Status::Disabled => (
            None,
            Color {
                a: opacity::OVERLAY_MEDIUM * alpha,
                ..text_color
            },
        ),
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
