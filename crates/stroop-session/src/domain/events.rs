//! Host-facing events produced by the session runner.

use serde::{Deserialize, Serialize};

use super::prompt::Prompt;

/// Everything a host needs to render the round lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A round began; `prompt` is the first pair to judge.
    Started {
        /// Round length in milliseconds.
        duration_millis: u64,
        /// The opening prompt.
        prompt: Prompt,
    },
    /// An answer was evaluated and the next prompt drawn.
    Scored {
        /// Whether the judgment was correct.
        correct: bool,
        /// The adjusted score.
        score: u32,
        /// The next prompt to judge.
        prompt: Prompt,
    },
    /// Periodic countdown readout while running.
    Tick {
        /// Time left in the round, in milliseconds.
        remaining_millis: u64,
    },
    /// The round ended, by expiry or by stop.
    Finished {
        /// The final score.
        score: u32,
        /// Whether this score beat the persisted record.
        new_record: bool,
    },
}
