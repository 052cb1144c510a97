//! Host orchestration: inputs in, events out.
//!
//! `SessionRunner` owns the session, the record store, and the RNG. It
//! maps host button presses onto session operations, pumps countdown
//! signals back as tick events, and at round end compares the final
//! score against the persisted record, saving only strictly greater
//! scores. Storage write failures are logged and never block the round
//! from ending.

use std::time::Duration;

use tokio::sync::mpsc;

use stroop_core::error::GameError;
use stroop_core::palette::Palette;
use stroop_core::rng::DeterministicRng;
use stroop_store::RecordStore;

use crate::countdown::{Countdown, CountdownSignal};
use crate::domain::commands::HostInput;
use crate::domain::events::GameEvent;
use crate::domain::prompt::Answer;
use crate::domain::session::{GameSession, StartOutcome};

/// Round timing configuration.
#[derive(Debug, Clone, Copy)]
pub struct RunnerConfig {
    /// Length of one round.
    pub round_duration: Duration,
    /// Period between `Tick` events while running.
    pub tick_period: Duration,
}

impl Default for RunnerConfig {
    /// 60-second rounds with a once-per-second readout.
    fn default() -> Self {
        Self {
            round_duration: Duration::from_secs(60),
            tick_period: Duration::from_secs(1),
        }
    }
}

/// Drives one `GameSession` on behalf of a host.
#[derive(Debug)]
pub struct SessionRunner<R, S> {
    session: GameSession,
    store: S,
    rng: R,
    config: RunnerConfig,
    events: mpsc::Sender<GameEvent>,
}

impl<R, S> SessionRunner<R, S>
where
    R: DeterministicRng,
    S: RecordStore,
{
    /// Creates a runner over a fresh idle session.
    pub fn new(
        palette: Palette,
        store: S,
        mut rng: R,
        config: RunnerConfig,
        events: mpsc::Sender<GameEvent>,
    ) -> Self {
        let session = GameSession::new(palette, &mut rng);
        Self {
            session,
            store,
            rng,
            config,
            events,
        }
    }

    /// Runs until the host closes the input channel. A round in progress
    /// at hang-up is abandoned without touching the record, matching a
    /// host that simply exits mid-round.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidDuration` if the configured round
    /// duration is zero.
    pub async fn run(mut self, mut inputs: mpsc::Receiver<HostInput>) -> Result<(), GameError> {
        let mut countdown: Option<Countdown> = None;

        loop {
            tokio::select! {
                input = inputs.recv() => {
                    let Some(input) = input else {
                        if let Some(active) = countdown.take() {
                            active.cancel().await;
                        }
                        return Ok(());
                    };
                    self.handle_input(input, &mut countdown).await?;
                }
                Some(signal) = next_signal(&mut countdown) => {
                    match signal {
                        CountdownSignal::Tick { remaining } => {
                            self.emit(GameEvent::Tick {
                                remaining_millis: millis(remaining),
                            })
                            .await;
                        }
                        CountdownSignal::Expired => {
                            countdown = None;
                            self.finalize().await;
                        }
                    }
                }
            }
        }
    }

    async fn handle_input(
        &mut self,
        input: HostInput,
        countdown: &mut Option<Countdown>,
    ) -> Result<(), GameError> {
        match input {
            HostInput::StartPressed => {
                match self
                    .session
                    .start(self.config.round_duration, &mut self.rng)?
                {
                    StartOutcome::Started => {
                        *countdown = Some(Countdown::start(
                            self.config.round_duration,
                            self.config.tick_period,
                        ));
                        tracing::info!(duration = ?self.config.round_duration, "round started");
                        self.emit(GameEvent::Started {
                            duration_millis: millis(self.config.round_duration),
                            prompt: self.session.prompt().clone(),
                        })
                        .await;
                    }
                    StartOutcome::Stopped { .. } => {
                        if let Some(active) = countdown.take() {
                            active.cancel().await;
                        }
                        self.finalize().await;
                    }
                }
            }
            HostInput::YesPressed => self.apply_answer(Answer::Match).await,
            HostInput::NoPressed => self.apply_answer(Answer::Mismatch).await,
        }
        Ok(())
    }

    async fn apply_answer(&mut self, choice: Answer) {
        // While idle there is no prompt to judge; the press is dropped.
        if let Some(outcome) = self.session.answer(choice, &mut self.rng) {
            self.emit(GameEvent::Scored {
                correct: outcome.correct,
                score: outcome.score,
                prompt: outcome.prompt,
            })
            .await;
        }
    }

    /// Ends the round, compares against the record, and persists only a
    /// strictly greater score. The record never decreases, and an equal
    /// score does not rewrite it.
    async fn finalize(&mut self) {
        let score = self.session.finish();
        let record = self.store.load();
        let new_record = score > record;
        if new_record {
            if let Err(err) = self.store.save(score) {
                tracing::warn!(%err, score, "failed to persist new record");
            }
        }
        tracing::info!(score, new_record, "round finished");
        self.emit(GameEvent::Finished { score, new_record }).await;
    }

    async fn emit(&self, event: GameEvent) {
        // A departed host is not an error; events are best-effort.
        let _ = self.events.send(event).await;
    }
}

async fn next_signal(countdown: &mut Option<Countdown>) -> Option<CountdownSignal> {
    match countdown {
        Some(active) => active.next_signal().await,
        None => std::future::pending().await,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn millis(duration: Duration) -> u64 {
    duration.as_millis() as u64
}
