//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
///
/// Configuration failures are the only fatal class: they abort setup before
/// a session exists. Storage failures are absorbed by callers with safe
/// defaults so gameplay is never blocked by persistence.
#[derive(Debug, Error)]
pub enum GameError {
    /// The color-name list and the color-value list have different lengths.
    #[error("color palette mismatch: {names} names but {colors} colors")]
    PaletteMismatch {
        /// Number of names supplied.
        names: usize,
        /// Number of color values supplied.
        colors: usize,
    },

    /// The color set is empty; there is nothing to draw prompts from.
    #[error("color palette is empty")]
    EmptyPalette,

    /// A color name appears more than once, breaking the name→color mapping.
    #[error("duplicate color name: {0}")]
    DuplicateColorName(String),

    /// A round duration of zero was rejected at the call boundary.
    #[error("round duration must be positive")]
    InvalidDuration,

    /// A persistence error. Non-fatal: the in-memory record stays usable.
    #[error("record storage error: {0}")]
    Storage(String),
}
