// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window holds a small form for composing a notification; the toast
//! overlay is stacked on top of it.

use super::Message;
use crate::presenter::{Kind, Phase};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::notifications::Notification;
use iced::widget::{
    button, pick_list, text, text_input, toggler, Column, Container, Row, Space, Stack, Text,
};
use iced::{alignment, Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub draft: &'a str,
    pub kind: Kind,
    pub auto_hide: bool,
    pub duration_input: &'a str,
    pub duration_valid: bool,
    pub visible: bool,
    pub dismissed: u32,
    pub notification: &'a Notification,
}

/// Renders the form with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let form = Container::new(view_form(&ctx))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::LG);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(form)
        .push(ctx.notification.view().map(Message::Notification))
        .into()
}

fn view_form<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new("Notification presenter").size(typography::TITLE_MD);

    let draft = text_input("Message", ctx.draft)
        .on_input(Message::DraftChanged)
        .on_submit(Message::Show)
        .padding(spacing::XS);

    let kind = labeled_row(
        "Kind",
        pick_list(Kind::ALL, Some(ctx.kind), Message::KindSelected).into(),
    );

    let auto_hide = labeled_row(
        "Auto-hide",
        toggler(ctx.auto_hide)
            .on_toggle(Message::AutoHideToggled)
            .size(20.0)
            .into(),
    );

    let duration = labeled_row(
        "Duration (ms)",
        text_input("4000", ctx.duration_input)
            .on_input(Message::DurationChanged)
            .padding(spacing::XXS)
            .width(Length::Fixed(120.0))
            .into(),
    );

    let mut column = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .push(title)
        .push(draft)
        .push(kind)
        .push(auto_hide)
        .push(duration);

    if !ctx.duration_valid {
        column = column.push(
            Text::new("Duration must be a positive number of milliseconds")
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::ERROR_500),
                }),
        );
    }

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(button(Text::new("Show")).on_press(Message::Show))
        .push(button(Text::new("Hide")).on_press_maybe(ctx.visible.then_some(Message::Hide)));

    let status = Text::new(format!(
        "Phase: {} · dismissed {} time(s)",
        phase_label(ctx.notification.phase()),
        ctx.dismissed
    ))
    .size(typography::CAPTION);

    column.push(actions).push(status).into()
}

fn labeled_row<'a>(label: &'a str, control: Element<'a, Message>) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(label).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(control)
        .into()
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "idle",
        Phase::AnimatingIn => "shown",
        Phase::AnimatingOut => "closing",
    }
}
