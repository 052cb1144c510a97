//! The round/scoring state machine.

use std::time::Duration;

use stroop_core::error::GameError;
use stroop_core::palette::Palette;
use stroop_core::rng::DeterministicRng;

use super::prompt::{Answer, Prompt};

/// Run-state of a session. The terminal state is the initial state: a
/// session is a repeatable cycle, not a single-shot object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Idle,
    Running,
}

/// What `start` did, given the current run-state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// A new round began: score reset to 0, fresh prompt drawn.
    Started,
    /// The session was already running, so `start` acted as stop: the
    /// round was finished and the final score is reported.
    Stopped {
        /// The score the stopped round finished with.
        final_score: u32,
    },
}

/// Result of evaluating one answer while running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    /// Whether the player's judgment agreed with the prompt.
    pub correct: bool,
    /// The score after adjustment.
    pub score: u32,
    /// The freshly drawn prompt for the next judgment.
    pub prompt: Prompt,
}

/// The game session: owns the current prompt, the score, and the
/// run-state. All state is mutated only by `start`, `answer`, and
/// `finish`; callers serialize access (single logical thread).
#[derive(Debug)]
pub struct GameSession {
    palette: Palette,
    state: RunState,
    score: u32,
    prompt: Prompt,
}

impl GameSession {
    /// Creates an idle session over `palette` with an initial prompt drawn.
    pub fn new(palette: Palette, rng: &mut dyn DeterministicRng) -> Self {
        let prompt = Prompt::draw(&palette, rng);
        Self {
            palette,
            state: RunState::Idle,
            score: 0,
            prompt,
        }
    }

    /// Starts a round, or stops the one in progress.
    ///
    /// While idle: resets the score to 0, draws a fresh prompt, and
    /// transitions to running. While running: acts as a stop toggle and
    /// finishes the current round instead of restarting it. The countdown
    /// that ends the round after `duration` is the caller's to run; see
    /// `crate::countdown`.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidDuration` for a zero duration, in
    /// either run-state, before any state change.
    pub fn start(
        &mut self,
        duration: Duration,
        rng: &mut dyn DeterministicRng,
    ) -> Result<StartOutcome, GameError> {
        if duration.is_zero() {
            return Err(GameError::InvalidDuration);
        }

        match self.state {
            RunState::Running => {
                let final_score = self.finish();
                Ok(StartOutcome::Stopped { final_score })
            }
            RunState::Idle => {
                self.score = 0;
                self.prompt = Prompt::draw(&self.palette, rng);
                self.state = RunState::Running;
                Ok(StartOutcome::Started)
            }
        }
    }

    /// Evaluates the player's judgment of the current prompt.
    ///
    /// Correct judgment scores +1; wrong judgment scores −1, floored at
    /// 0. Either way the prompt is redrawn. Returns `None` while idle:
    /// there is no prompt to judge, and nothing changes.
    pub fn answer(
        &mut self,
        choice: Answer,
        rng: &mut dyn DeterministicRng,
    ) -> Option<AnswerOutcome> {
        if self.state != RunState::Running {
            return None;
        }

        let correct = self.prompt.matches() == (choice == Answer::Match);
        if correct {
            self.score += 1;
        } else {
            self.score = self.score.saturating_sub(1);
        }
        self.prompt = Prompt::draw(&self.palette, rng);

        Some(AnswerOutcome {
            correct,
            score: self.score,
            prompt: self.prompt.clone(),
        })
    }

    /// Ends the round and returns the final score. Idempotent: while
    /// already idle this mutates nothing and returns the last finalized
    /// score (0 if no round has run yet).
    pub fn finish(&mut self) -> u32 {
        self.state = RunState::Idle;
        self.score
    }

    /// The current prompt. While idle this is the last computed prompt.
    #[must_use]
    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    /// The current score. While idle this is the last finalized score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether a round is in progress.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }
}

#[cfg(test)]
mod tests {
    use stroop_core::palette::Color;
    use stroop_test_support::{MockRng, SequenceRng};

    use super::*;

    const ROUND: Duration = Duration::from_secs(60);

    fn red_blue_palette() -> Palette {
        Palette::from_parallel(
            vec!["Red".to_owned(), "Blue".to_owned()],
            vec![Color(0xFFFF_0000), Color(0xFF00_00FF)],
        )
        .unwrap()
    }

    /// RNG that always draws label "Red" and swatch "Blue" — a prompt
    /// that never matches.
    fn mismatch_rng() -> SequenceRng {
        SequenceRng::new(vec![0, 1].repeat(16))
    }

    #[test]
    fn test_start_resets_score_and_transitions_to_running() {
        let mut rng = MockRng;
        let mut session = GameSession::new(red_blue_palette(), &mut rng);

        let outcome = session.start(ROUND, &mut rng).unwrap();

        assert_eq!(outcome, StartOutcome::Started);
        assert!(session.is_running());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_start_rejects_zero_duration() {
        let mut rng = MockRng;
        let mut session = GameSession::new(red_blue_palette(), &mut rng);

        let result = session.start(Duration::ZERO, &mut rng);

        assert!(matches!(result, Err(GameError::InvalidDuration)));
        assert!(!session.is_running());
    }

    #[test]
    fn test_start_while_running_stops_instead_of_restarting() {
        let mut rng = MockRng;
        let mut session = GameSession::new(red_blue_palette(), &mut rng);
        session.start(ROUND, &mut rng).unwrap();
        session.answer(Answer::Match, &mut rng).unwrap();

        let outcome = session.start(ROUND, &mut rng).unwrap();

        assert_eq!(outcome, StartOutcome::Stopped { final_score: 1 });
        assert!(!session.is_running());
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_answer_is_noop_while_idle() {
        let mut rng = mismatch_rng();
        let mut session = GameSession::new(red_blue_palette(), &mut rng);
        let prompt_before = session.prompt().clone();

        let outcome = session.answer(Answer::Match, &mut rng);

        assert!(outcome.is_none());
        assert_eq!(session.score(), 0);
        assert_eq!(*session.prompt(), prompt_before);
    }

    #[test]
    fn test_correct_mismatch_judgment_scores_a_point() {
        // Red label painted Blue: the canonical scenario.
        let mut rng = mismatch_rng();
        let mut session = GameSession::new(red_blue_palette(), &mut rng);
        session.start(ROUND, &mut rng).unwrap();
        assert!(!session.prompt().matches());

        let outcome = session.answer(Answer::Mismatch, &mut rng).unwrap();

        assert!(outcome.correct);
        assert_eq!(outcome.score, 1);
    }

    #[test]
    fn test_wrong_judgment_deducts_and_floors_at_zero() {
        let mut rng = mismatch_rng();
        let mut session = GameSession::new(red_blue_palette(), &mut rng);
        session.start(ROUND, &mut rng).unwrap();

        // Score is 0; the wrong judgment must not drive it negative.
        let outcome = session.answer(Answer::Match, &mut rng).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.score, 0);

        // Earn one, lose one.
        assert_eq!(session.answer(Answer::Mismatch, &mut rng).unwrap().score, 1);
        assert_eq!(session.answer(Answer::Match, &mut rng).unwrap().score, 0);
    }

    #[test]
    fn test_answer_redraws_the_prompt() {
        let palette = red_blue_palette();
        let mut rng = SequenceRng::new(vec![0, 0, 0, 1, 1, 0]);
        let mut session = GameSession::new(palette, &mut rng);
        session.start(ROUND, &mut rng).unwrap();
        let before = session.prompt().clone();

        let outcome = session.answer(Answer::Match, &mut rng).unwrap();

        assert_ne!(outcome.prompt, before);
        assert_eq!(*session.prompt(), outcome.prompt);
    }

    #[test]
    fn test_finish_is_idempotent() {
        let mut rng = MockRng;
        let mut session = GameSession::new(red_blue_palette(), &mut rng);
        session.start(ROUND, &mut rng).unwrap();
        session.answer(Answer::Match, &mut rng).unwrap();
        let prompt_after_round = session.prompt().clone();

        assert_eq!(session.finish(), 1);
        assert_eq!(session.finish(), 1);
        assert!(!session.is_running());
        assert_eq!(*session.prompt(), prompt_after_round);
    }

    #[test]
    fn test_finish_before_any_round_returns_zero() {
        let mut rng = MockRng;
        let mut session = GameSession::new(red_blue_palette(), &mut rng);

        assert_eq!(session.finish(), 0);
    }

    #[test]
    fn test_restart_after_finish_resets_score() {
        let mut rng = MockRng;
        let mut session = GameSession::new(red_blue_palette(), &mut rng);
        session.start(ROUND, &mut rng).unwrap();
        session.answer(Answer::Match, &mut rng).unwrap();
        session.finish();

        let outcome = session.start(ROUND, &mut rng).unwrap();

        assert_eq!(outcome, StartOutcome::Started);
        assert_eq!(session.score(), 0);
    }
}
