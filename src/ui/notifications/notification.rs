// SPDX-License-Identifier: MPL-2.0
//! Iced component that drives a presenter with abortable tasks.
//!
//! Timer effects from the presenter become `Task`s sleeping on the tokio
//! executor. The component keeps the task handle of the one pending timer
//! with `abort_on_drop`, so replacing or clearing the slot cancels the timer
//! in the runtime as well.

use super::toast::Toast;
use crate::presenter::{
    self, Effect, Kind, Phase, Props, TimerId, ENTER_ANIMATION, EXIT_ANIMATION,
};
use iced::task::Handle;
use iced::{time, Element, Subscription, Task};
use std::fmt;
use std::time::{Duration, Instant};

/// Interval of animation frames while the toast fades.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Messages handled by the notification component.
#[derive(Debug, Clone)]
pub enum Message {
    /// The close button was pressed.
    Close,
    /// A timer armed by the presenter expired.
    TimerElapsed(TimerId),
    /// Animation frame.
    Frame(Instant),
}

/// Events reported to the owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// Dismissal finished; the owner should set `visible = false`.
    Dismissed,
}

/// A single toast overlay.
#[derive(Default)]
pub struct Notification {
    state: presenter::State,
    /// Pending timer task; aborted when dropped.
    timer: Option<Handle>,
    /// Phase currently being animated and when it started.
    animated_phase: Phase,
    phase_started: Option<Instant>,
    /// Time of the last animation frame.
    now: Option<Instant>,
}

impl fmt::Debug for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notification")
            .field("phase", &self.state.phase())
            .field("timer_pending", &self.timer.is_some())
            .finish()
    }
}

impl Notification {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-renders the component with the owner's props.
    pub fn sync(&mut self, props: Props) -> Task<Message> {
        let effect = self.state.handle(presenter::Message::Sync(props));
        self.apply(effect).0
    }

    /// Handles a component message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn update(&mut self, message: Message) -> (Task<Message>, Event) {
        let effect = match message {
            Message::Close => self.state.handle(presenter::Message::Close),
            Message::TimerElapsed(id) => self.state.handle(presenter::Message::TimerElapsed(id)),
            Message::Frame(now) => {
                self.now = Some(now);
                return (Task::none(), Event::None);
            }
        };
        self.apply(effect)
    }

    /// Tears the component down, cancelling any pending timer.
    pub fn unmount(&mut self) {
        let _ = self.state.handle(presenter::Message::Unmount);
        self.timer = None;
        self.track_phase();
    }

    fn apply(&mut self, effect: Effect) -> (Task<Message>, Event) {
        self.track_phase();

        match effect {
            Effect::None => (Task::none(), Event::None),
            Effect::Arm { id, delay } => {
                let (task, handle) = Task::perform(
                    async move { tokio::time::sleep(delay).await },
                    move |()| Message::TimerElapsed(id),
                )
                .abortable();
                // Replacing the slot drops, and so aborts, the previous timer.
                self.timer = Some(handle.abort_on_drop());
                (task, Event::None)
            }
            Effect::Disarm(_) => {
                self.timer = None;
                (Task::none(), Event::None)
            }
            Effect::Dismiss => {
                self.timer = None;
                (Task::none(), Event::Dismissed)
            }
        }
    }

    fn track_phase(&mut self) {
        let phase = self.state.phase();
        if phase != self.animated_phase {
            self.animated_phase = phase;
            self.phase_started = Some(Instant::now());
        }
    }

    /// Animation frames, only while a fade is running.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_fading() {
            time::every(FRAME_INTERVAL).map(Message::Frame)
        } else {
            Subscription::none()
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        Toast::view_overlay(self)
    }

    fn elapsed_in_phase(&self) -> Duration {
        match (self.phase_started, self.now) {
            (Some(started), Some(now)) => now.saturating_duration_since(started),
            _ => Duration::ZERO,
        }
    }

    /// Whether a fade-in or fade-out is in progress.
    #[must_use]
    pub fn is_fading(&self) -> bool {
        match self.state.phase() {
            Phase::Idle => false,
            Phase::AnimatingIn => self.elapsed_in_phase() < ENTER_ANIMATION,
            Phase::AnimatingOut => true,
        }
    }

    /// Current opacity of the toast, in `0.0..=1.0`.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        opacity_at(self.state.phase(), self.elapsed_in_phase())
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        self.state.message()
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.state.kind()
    }

    #[must_use]
    pub fn pending_timer(&self) -> Option<presenter::state::PendingTimer> {
        self.state.pending_timer()
    }

    #[must_use]
    pub fn has_timer_task(&self) -> bool {
        self.timer.is_some()
    }
}

/// Opacity for `phase` after `elapsed` time in it.
fn opacity_at(phase: Phase, elapsed: Duration) -> f32 {
    let progress = |total: Duration| (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0);
    match phase {
        Phase::Idle => 0.0,
        Phase::AnimatingIn => progress(ENTER_ANIMATION),
        Phase::AnimatingOut => 1.0 - progress(EXIT_ANIMATION),
    }
}
