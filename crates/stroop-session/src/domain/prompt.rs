//! Prompt generation and the player's judgment of it.

use serde::{Deserialize, Serialize};
use stroop_core::palette::{ColorToken, Palette};
use stroop_core::rng::DeterministicRng;

/// The player's judgment of a prompt: does the displayed word name the
/// color it is rendered in?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    /// "Yes, the word matches its render color."
    Match,
    /// "No, the word does not match its render color."
    Mismatch,
}

/// One round's displayed pair: the word shown and the color it is
/// painted in. Both tokens are drawn independently from the palette, so
/// the swatch color is unrelated to the label's own canonical color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    /// Its name is displayed as text.
    pub label: ColorToken,
    /// Its color value is used to render that text.
    pub swatch: ColorToken,
}

impl Prompt {
    /// Draws a fresh prompt: two independent uniform draws, one for the
    /// label and one for the swatch.
    pub fn draw(palette: &Palette, rng: &mut dyn DeterministicRng) -> Self {
        Self {
            label: palette.draw_token(rng).clone(),
            swatch: palette.draw_token(rng).clone(),
        }
    }

    /// Whether the label's canonical color equals the swatch's render
    /// color. Palette names are unique, so the label token's own color is
    /// exactly the value its name maps to.
    #[must_use]
    pub fn matches(&self) -> bool {
        self.label.color == self.swatch.color
    }
}
