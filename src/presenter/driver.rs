// SPDX-License-Identifier: MPL-2.0
//! Headless tokio driver for a presenter.
//!
//! [`spawn`] moves a [`State`] onto its own task. The owner talks to it through
//! the returned [`PresenterHandle`]; the task holds the single timer slot as a
//! deadline and calls `on_dismiss` when the state asks for it. Dropping the
//! handle stops the task, so a pending timer cannot fire afterwards;
//! [`PresenterHandle::unmount`] also waits for a callback already running on
//! another worker thread.

use super::state::{Effect, Message, Phase, State, TimerId};
use super::Props;
use crate::error::{Error, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

/// Commands sent from the owner to the presenter task.
#[derive(Debug)]
enum Command {
    Sync(Props),
    Close,
}

/// Owner-side handle of a running presenter.
#[derive(Debug)]
pub struct PresenterHandle {
    commands: mpsc::UnboundedSender<Command>,
    phase: watch::Receiver<Phase>,
    /// Set on teardown; checked before every dismiss callback.
    stopped: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

/// Spawns a presenter with its initial props on the current tokio runtime.
///
/// # Panics
///
/// Panics if called outside of a tokio runtime.
pub fn spawn<F>(props: Props, on_dismiss: F) -> PresenterHandle
where
    F: FnMut() + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
    let (phase_tx, phase_rx) = watch::channel(Phase::Idle);
    let stopped = Arc::new(AtomicBool::new(false));

    let task = tokio::spawn(run(
        props,
        cmd_rx,
        phase_tx,
        Arc::clone(&stopped),
        on_dismiss,
    ));

    PresenterHandle {
        commands: cmd_tx,
        phase: phase_rx,
        stopped,
        task,
    }
}

impl PresenterHandle {
    /// Re-renders the presenter with new props.
    pub fn sync(&self, props: Props) -> Result<()> {
        self.send(Command::Sync(props))
    }

    /// Triggers the user close action.
    pub fn close(&self) -> Result<()> {
        self.send(Command::Close)
    }

    /// Returns the most recently published phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        *self.phase.borrow()
    }

    /// Waits until the phase changes and returns the new value.
    pub async fn changed(&mut self) -> Result<Phase> {
        self.phase
            .changed()
            .await
            .map_err(|_| Error::PresenterStopped)?;
        Ok(*self.phase.borrow_and_update())
    }

    /// Tears the presenter down; no dismiss callback runs after this returns.
    ///
    /// A callback that was already executing on another worker is awaited.
    pub async fn unmount(mut self) {
        self.stop();
        if let Err(err) = (&mut self.task).await {
            if err.is_panic() {
                log::warn!("presenter task panicked: {err}");
            }
        }
    }

    fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
        self.task.abort();
    }

    fn send(&self, command: Command) -> Result<()> {
        self.commands
            .send(command)
            .map_err(|_| Error::PresenterStopped)
    }
}

impl Drop for PresenterHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run<F>(
    props: Props,
    mut commands: mpsc::UnboundedReceiver<Command>,
    phase: watch::Sender<Phase>,
    stopped: Arc<AtomicBool>,
    mut on_dismiss: F,
) where
    F: FnMut(),
{
    let mut state = State::new();
    let mut deadline: Option<(TimerId, Instant)> = None;

    let effect = state.handle(Message::Sync(props));
    apply(effect, &mut deadline, &stopped, &mut on_dismiss);
    publish(&phase, &state);

    loop {
        let armed = deadline;
        let timer = async move {
            match armed {
                Some((id, at)) => {
                    time::sleep_until(at).await;
                    id
                }
                None => std::future::pending::<TimerId>().await,
            }
        };

        let message = tokio::select! {
            command = commands.recv() => match command {
                Some(Command::Sync(props)) => Message::Sync(props),
                Some(Command::Close) => Message::Close,
                None => {
                    let _ = state.handle(Message::Unmount);
                    log::debug!("presenter handle dropped, stopping");
                    break;
                }
            },
            id = timer => Message::TimerElapsed(id),
        };

        let effect = state.handle(message);
        apply(effect, &mut deadline, &stopped, &mut on_dismiss);
        publish(&phase, &state);
    }
}

fn apply<F>(
    effect: Effect,
    deadline: &mut Option<(TimerId, Instant)>,
    stopped: &AtomicBool,
    on_dismiss: &mut F,
) where
    F: FnMut(),
{
    match effect {
        Effect::None => {}
        Effect::Arm { id, delay } => {
            *deadline = Some((id, Instant::now() + delay));
        }
        Effect::Disarm(_) => {
            *deadline = None;
        }
        Effect::Dismiss => {
            *deadline = None;
            if stopped.load(Ordering::Acquire) {
                log::debug!("presenter unmounted, skipping dismiss callback");
            } else {
                on_dismiss();
            }
        }
    }
}

fn publish(phase: &watch::Sender<Phase>, state: &State) {
    phase.send_if_modified(|current| {
        if *current == state.phase() {
            false
        } else {
            *current = state.phase();
            true
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::DismissDelay;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    fn quick(ms: i64) -> Props {
        Props::new("Saved")
            .visible(true)
            .duration(DismissDelay::from_millis(ms).expect("positive"))
    }

    fn counter() -> (Arc<AtomicUsize>, impl FnMut() + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let inner = Arc::clone(&count);
        (count, move || {
            inner.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn phase_follows_auto_hide_cycle() {
        let (count, on_dismiss) = counter();
        let props = Props::new("Saved")
            .visible(true)
            .duration(DismissDelay::from_millis(1000).expect("positive"));
        let mut handle = spawn(props, on_dismiss);

        assert_eq!(handle.changed().await, Ok(Phase::AnimatingIn));
        assert_eq!(handle.changed().await, Ok(Phase::AnimatingOut));
        assert_eq!(handle.changed().await, Ok(Phase::Idle));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn close_on_idle_presenter_is_harmless() {
        let (count, on_dismiss) = counter();
        let handle = spawn(Props::new("hidden"), on_dismiss);

        handle.close().expect("presenter running");
        time::sleep(Duration::from_secs(10)).await;

        assert_eq!(handle.phase(), Phase::Idle);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn commands_fail_after_task_stops() {
        let (_count, on_dismiss) = counter();
        let handle = spawn(Props::new("x"), on_dismiss);
        handle.task.abort();
        // Let the runtime observe the abort and drop the receiver.
        tokio::task::yield_now().await;
        time::sleep(Duration::from_millis(1)).await;

        assert_eq!(handle.close(), Err(Error::PresenterStopped));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn unmount_waits_for_running_callback() {
        let entered = Arc::new(AtomicBool::new(false));
        let finished = Arc::new(AtomicBool::new(false));
        let (on_enter, on_finish) = (Arc::clone(&entered), Arc::clone(&finished));
        let handle = spawn(quick(1), move || {
            on_enter.store(true, Ordering::SeqCst);
            std::thread::sleep(Duration::from_millis(200));
            on_finish.store(true, Ordering::SeqCst);
        });

        while !entered.load(Ordering::SeqCst) {
            time::sleep(Duration::from_millis(1)).await;
        }
        handle.unmount().await;

        assert!(
            finished.load(Ordering::SeqCst),
            "callback still running after unmount returned"
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn unmount_on_worker_threads_blocks_later_callbacks() {
        let (count, on_dismiss) = counter();
        let handle = spawn(quick(1), on_dismiss);

        // Inside the exit animation.
        time::sleep(Duration::from_millis(100)).await;
        handle.unmount().await;

        time::sleep(Duration::from_millis(500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn stopped_flag_suppresses_dismiss_callback() {
        let (count, on_dismiss) = counter();
        let handle = spawn(quick(1), on_dismiss);
        handle.stopped.store(true, Ordering::Release);

        // The task keeps running; only the callback is suppressed.
        time::sleep(Duration::from_millis(500)).await;
        assert_eq!(handle.phase(), Phase::Idle);
        assert_eq!(count.load(Ordering::SeqCst), 0);
        drop(handle);
    }
}
