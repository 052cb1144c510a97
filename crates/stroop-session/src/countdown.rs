//! A cancelable round countdown.
//!
//! Replaces UI-toolkit periodic timers with a plain tokio task: it emits
//! `Tick { remaining }` once per tick period for a host's progress
//! display, and `Expired` exactly once at the deadline. Cancellation
//! consumes the receiving half, so once `cancel` returns no signal from
//! this countdown can ever be observed again — an expired-after-cancel
//! signal cannot end a round that was already stopped.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

/// A signal from a running countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownSignal {
    /// Periodic progress signal.
    Tick {
        /// Time left until the deadline.
        remaining: Duration,
    },
    /// The deadline was reached. Emitted exactly once, as the final signal.
    Expired,
}

/// Handle to a running countdown. Dropping it cancels the countdown.
#[derive(Debug)]
pub struct Countdown {
    signals: mpsc::Receiver<CountdownSignal>,
    task: JoinHandle<()>,
}

impl Countdown {
    /// Starts a countdown that expires after `duration`, ticking every
    /// `tick_period`. Must be called within a tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if `duration` or `tick_period` is zero.
    #[must_use]
    pub fn start(duration: Duration, tick_period: Duration) -> Self {
        assert!(!duration.is_zero(), "countdown duration must be positive");
        assert!(
            !tick_period.is_zero(),
            "countdown tick period must be positive"
        );

        let (tx, signals) = mpsc::channel(8);
        let task = tokio::spawn(run(tx, duration, tick_period));
        Self { signals, task }
    }

    /// Receives the next signal. Returns `None` once the countdown has
    /// expired and delivered its final `Expired` signal.
    pub async fn next_signal(&mut self) -> Option<CountdownSignal> {
        self.signals.recv().await
    }

    /// Cancels the countdown and waits for its task to stop. Consumes the
    /// receiver, so no signal can be observed after this returns.
    pub async fn cancel(self) {
        drop(self.signals);
        let _ = self.task.await;
    }
}

async fn run(tx: mpsc::Sender<CountdownSignal>, duration: Duration, tick_period: Duration) {
    let deadline = Instant::now() + duration;
    let mut ticks = time::interval_at(Instant::now() + tick_period, tick_period);

    loop {
        tokio::select! {
            () = tx.closed() => return,
            () = time::sleep_until(deadline) => {
                let _ = tx.send(CountdownSignal::Expired).await;
                return;
            }
            _ = ticks.tick() => {
                let remaining = deadline.saturating_duration_since(Instant::now());
                if remaining.is_zero() {
                    let _ = tx.send(CountdownSignal::Expired).await;
                    return;
                }
                let _ = tx.send(CountdownSignal::Tick { remaining }).await;
            }
        }
    }
}
