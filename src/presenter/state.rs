// SPDX-License-Identifier: MPL-2.0
//! Visibility and animation state machine of a single notification.
//!
//! The state never touches a clock. Timers are requested through [`Effect`]s
//! and reported back with [`Message::TimerElapsed`], which lets the same
//! machine run under tokio, under iced, or under a hand-stepped test clock.
//!
//! ```text
//! Idle ──visible──▶ AnimatingIn ──timer / close──▶ AnimatingOut ──300ms──▶ Idle (Dismiss)
//! ```
//!
//! At most one timer is pending at any time. Arming a timer replaces the
//! previous one, so drivers keep exactly one timer slot.

use super::props::EXIT_ANIMATION;
use super::{Kind, Props};
use std::time::Duration;

/// Identifier of an armed timer.
///
/// Ids are unique per [`State`], so a late expiry of a cancelled timer can
/// never be mistaken for the pending one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// Why a timer is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPurpose {
    /// Auto-hide delay running while the notification is shown.
    AutoHide,
    /// Fixed exit-animation delay before the dismiss callback.
    ExitAnimation,
}

/// The timer a presenter is currently waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTimer {
    pub id: TimerId,
    pub purpose: TimerPurpose,
    pub delay: Duration,
}

/// Presentation phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing is rendered.
    #[default]
    Idle,
    /// The notification is shown (and fading in).
    AnimatingIn,
    /// Dismissal was triggered; the exit animation is running.
    AnimatingOut,
}

/// Inputs of the state machine.
#[derive(Debug, Clone)]
pub enum Message {
    /// The owner rendered the presenter with new props.
    Sync(Props),
    /// The user asked to close the notification.
    Close,
    /// A previously armed timer expired.
    TimerElapsed(TimerId),
    /// The presenter is being torn down.
    Unmount,
}

/// Side effects the driver must carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to do.
    None,
    /// Start a single-shot timer, replacing any timer already held.
    Arm { id: TimerId, delay: Duration },
    /// Cancel the held timer without replacing it.
    Disarm(TimerId),
    /// Invoke the owner's dismiss callback.
    Dismiss,
}

/// State of one notification presenter.
#[derive(Debug, Clone, Default)]
pub struct State {
    phase: Phase,
    /// Last `visible` value seen from the owner.
    visible: bool,
    message: String,
    kind: Kind,
    pending: Option<PendingTimer>,
    next_timer: u64,
    unmounted: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a presenter message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        if self.unmounted {
            return Effect::None;
        }

        match msg {
            Message::Sync(props) => self.sync(props),
            Message::Close => {
                if self.phase != Phase::AnimatingIn {
                    return Effect::None;
                }
                log::debug!("notification closed by user");
                self.begin_exit()
            }
            Message::TimerElapsed(id) => {
                let Some(pending) = self.pending.filter(|p| p.id == id) else {
                    log::trace!("ignoring stale timer {id:?}");
                    return Effect::None;
                };
                self.pending = None;
                match pending.purpose {
                    TimerPurpose::AutoHide => {
                        log::debug!("auto-hide delay elapsed");
                        self.begin_exit()
                    }
                    TimerPurpose::ExitAnimation => {
                        self.phase = Phase::Idle;
                        log::debug!("exit animation finished, dismissing");
                        Effect::Dismiss
                    }
                }
            }
            Message::Unmount => {
                self.unmounted = true;
                self.phase = Phase::Idle;
                self.disarm()
            }
        }
    }

    fn sync(&mut self, props: Props) -> Effect {
        // Content follows the owner on every render without touching timers.
        self.message = props.message;
        self.kind = props.kind;

        let was_visible = self.visible;
        self.visible = props.visible;

        match (was_visible, props.visible) {
            (false, true) => {
                self.phase = Phase::AnimatingIn;
                log::debug!(
                    "showing {} notification (auto_hide={}, duration={}ms)",
                    self.kind,
                    props.auto_hide,
                    props.duration.as_millis()
                );
                if props.auto_hide {
                    self.arm(TimerPurpose::AutoHide, props.duration.as_duration())
                } else {
                    self.disarm()
                }
            }
            (true, false) => {
                self.phase = Phase::Idle;
                log::debug!("notification hidden by owner");
                self.disarm()
            }
            _ => Effect::None,
        }
    }

    fn begin_exit(&mut self) -> Effect {
        self.phase = Phase::AnimatingOut;
        self.arm(TimerPurpose::ExitAnimation, EXIT_ANIMATION)
    }

    fn arm(&mut self, purpose: TimerPurpose, delay: Duration) -> Effect {
        let id = TimerId(self.next_timer);
        self.next_timer += 1;
        self.pending = Some(PendingTimer { id, purpose, delay });
        Effect::Arm { id, delay }
    }

    fn disarm(&mut self) -> Effect {
        match self.pending.take() {
            Some(pending) => Effect::Disarm(pending.id),
            None => Effect::None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the owner currently wants the notification shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether something is on screen (fading in, shown, or fading out).
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.phase != Phase::Idle
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn pending_timer(&self) -> Option<PendingTimer> {
        self.pending
    }

    #[must_use]
    pub fn is_unmounted(&self) -> bool {
        self.unmounted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::DismissDelay;

    fn shown(auto_hide: bool) -> Props {
        Props::new("Saved").visible(true).auto_hide(auto_hide)
    }

    fn armed_id(effect: Effect) -> TimerId {
        match effect {
            Effect::Arm { id, .. } => id,
            other => panic!("expected Arm, got {other:?}"),
        }
    }

    #[test]
    fn new_state_is_idle() {
        let state = State::new();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(!state.is_animating());
        assert!(state.pending_timer().is_none());
    }

    #[test]
    fn showing_enters_animating_in_and_arms_auto_hide() {
        let mut state = State::new();
        let effect = state.handle(Message::Sync(shown(true)));

        assert_eq!(state.phase(), Phase::AnimatingIn);
        assert!(matches!(
            effect,
            Effect::Arm { delay, .. } if delay == Duration::from_millis(4000)
        ));
        let pending = state.pending_timer().expect("timer armed");
        assert_eq!(pending.purpose, TimerPurpose::AutoHide);
    }

    #[test]
    fn showing_without_auto_hide_arms_nothing() {
        let mut state = State::new();
        let effect = state.handle(Message::Sync(shown(false)));

        assert_eq!(state.phase(), Phase::AnimatingIn);
        assert_eq!(effect, Effect::None);
        assert!(state.pending_timer().is_none());
    }

    #[test]
    fn auto_hide_expiry_starts_exit_then_dismisses() {
        let mut state = State::new();
        let auto_hide = armed_id(state.handle(Message::Sync(shown(true))));

        let effect = state.handle(Message::TimerElapsed(auto_hide));
        assert_eq!(state.phase(), Phase::AnimatingOut);
        let exit = match effect {
            Effect::Arm { id, delay } => {
                assert_eq!(delay, EXIT_ANIMATION);
                id
            }
            other => panic!("expected exit Arm, got {other:?}"),
        };

        assert_eq!(state.handle(Message::TimerElapsed(exit)), Effect::Dismiss);
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.pending_timer().is_none());
    }

    #[test]
    fn close_replaces_auto_hide_timer_with_exit_timer() {
        let mut state = State::new();
        let auto_hide = armed_id(state.handle(Message::Sync(shown(true))));

        let exit = armed_id(state.handle(Message::Close));
        assert_ne!(auto_hide, exit);
        assert_eq!(state.phase(), Phase::AnimatingOut);

        // The cancelled auto-hide timer firing late must not double-dismiss.
        assert_eq!(state.handle(Message::TimerElapsed(auto_hide)), Effect::None);
        assert_eq!(state.phase(), Phase::AnimatingOut);
        assert_eq!(state.handle(Message::TimerElapsed(exit)), Effect::Dismiss);
    }

    #[test]
    fn close_while_animating_out_is_ignored() {
        let mut state = State::new();
        state.handle(Message::Sync(shown(false)));
        let exit = armed_id(state.handle(Message::Close));

        assert_eq!(state.handle(Message::Close), Effect::None);
        assert_eq!(state.pending_timer().map(|p| p.id), Some(exit));
    }

    #[test]
    fn close_while_idle_is_ignored() {
        let mut state = State::new();
        assert_eq!(state.handle(Message::Close), Effect::None);
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn owner_hide_disarms_pending_timer_without_dismiss() {
        let mut state = State::new();
        let auto_hide = armed_id(state.handle(Message::Sync(shown(true))));

        let effect = state.handle(Message::Sync(shown(true).visible(false)));
        assert_eq!(effect, Effect::Disarm(auto_hide));
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.handle(Message::TimerElapsed(auto_hide)), Effect::None);
    }

    #[test]
    fn owner_hide_during_exit_cancels_dismiss() {
        let mut state = State::new();
        state.handle(Message::Sync(shown(false)));
        let exit = armed_id(state.handle(Message::Close));

        assert_eq!(
            state.handle(Message::Sync(shown(false).visible(false))),
            Effect::Disarm(exit)
        );
        assert_eq!(state.handle(Message::TimerElapsed(exit)), Effect::None);
    }

    #[test]
    fn rerender_while_visible_keeps_timer() {
        let mut state = State::new();
        let auto_hide = armed_id(state.handle(Message::Sync(shown(true))));

        let rerender = Props::new("Saved again")
            .kind(Kind::Error)
            .visible(true)
            .duration(DismissDelay::from_millis(10).expect("positive"));
        assert_eq!(state.handle(Message::Sync(rerender)), Effect::None);

        assert_eq!(state.message(), "Saved again");
        assert_eq!(state.kind(), Kind::Error);
        let pending = state.pending_timer().expect("still armed");
        assert_eq!(pending.id, auto_hide);
        assert_eq!(pending.delay, Duration::from_millis(4000));
    }

    #[test]
    fn disabling_auto_hide_while_visible_keeps_scheduled_timer() {
        let mut state = State::new();
        let auto_hide = armed_id(state.handle(Message::Sync(shown(true))));

        assert_eq!(state.handle(Message::Sync(shown(false))), Effect::None);
        assert_eq!(state.pending_timer().map(|p| p.id), Some(auto_hide));
    }

    #[test]
    fn showing_again_after_dismiss_starts_new_cycle() {
        let mut state = State::new();
        let auto_hide = armed_id(state.handle(Message::Sync(shown(true))));
        let exit = armed_id(state.handle(Message::TimerElapsed(auto_hide)));
        assert_eq!(state.handle(Message::TimerElapsed(exit)), Effect::Dismiss);

        // Owner reacts to the dismissal, then shows a new notification.
        state.handle(Message::Sync(shown(true).visible(false)));
        let second = armed_id(state.handle(Message::Sync(shown(true))));
        assert_ne!(second, auto_hide);
        assert_eq!(state.phase(), Phase::AnimatingIn);
    }

    #[test]
    fn dismissed_but_still_visible_stays_idle() {
        let mut state = State::new();
        state.handle(Message::Sync(shown(false)));
        let exit = armed_id(state.handle(Message::Close));
        state.handle(Message::TimerElapsed(exit));

        // Owner ignores the callback and re-renders with visible = true.
        assert_eq!(state.handle(Message::Sync(shown(false))), Effect::None);
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn unmount_disarms_and_ignores_everything_after() {
        let mut state = State::new();
        let auto_hide = armed_id(state.handle(Message::Sync(shown(true))));

        assert_eq!(state.handle(Message::Unmount), Effect::Disarm(auto_hide));
        assert!(state.is_unmounted());
        assert_eq!(state.handle(Message::TimerElapsed(auto_hide)), Effect::None);
        assert_eq!(state.handle(Message::Sync(shown(true))), Effect::None);
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn animating_only_while_visible() {
        let mut state = State::new();
        let props = [
            shown(true),
            shown(true).visible(false),
            shown(false),
            shown(false).visible(false),
        ];
        for p in props {
            state.handle(Message::Sync(p));
            if state.is_animating() {
                assert!(state.is_visible());
            }
        }
    }
}
