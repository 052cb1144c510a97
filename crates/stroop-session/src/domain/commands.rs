//! Host-facing inputs consumed by the session runner.

use serde::{Deserialize, Serialize};

/// A button press forwarded by the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostInput {
    /// Start a round, or stop the one in progress.
    StartPressed,
    /// "Yes, the word matches its color" — judged as a match.
    YesPressed,
    /// "No, it does not" — judged as a mismatch.
    NoPressed,
}
