//! The fixed color set the game draws prompts from.
//!
//! The palette is supplied as two parallel ordered sequences (names,
//! color values) and is immutable once constructed. Names are unique;
//! color values need not be.

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::rng::DeterministicRng;

/// An opaque color value. The core never interprets it; hosts decide how
/// to render it (the default palette uses 0xAARRGGBB).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u32);

/// A named color: the pairing of a display name and its canonical value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorToken {
    /// Display name, unique within a palette.
    pub name: String,
    /// The color value canonically associated with the name.
    pub color: Color,
}

/// The fixed, validated set of color tokens.
#[derive(Debug, Clone)]
pub struct Palette {
    tokens: Vec<ColorToken>,
}

impl Palette {
    /// Builds a palette from parallel name and color sequences.
    ///
    /// # Errors
    ///
    /// Returns `GameError::PaletteMismatch` if the sequences differ in
    /// length, `GameError::EmptyPalette` if they are empty, and
    /// `GameError::DuplicateColorName` if a name repeats.
    pub fn from_parallel(names: Vec<String>, colors: Vec<Color>) -> Result<Self, GameError> {
        if names.len() != colors.len() {
            return Err(GameError::PaletteMismatch {
                names: names.len(),
                colors: colors.len(),
            });
        }
        if names.is_empty() {
            return Err(GameError::EmptyPalette);
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(GameError::DuplicateColorName(name.clone()));
            }
        }

        let tokens = names
            .into_iter()
            .zip(colors)
            .map(|(name, color)| ColorToken { name, color })
            .collect();
        Ok(Self { tokens })
    }

    /// Number of tokens in the palette. Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// A constructed palette is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Looks up the color value canonically associated with `name`.
    #[must_use]
    pub fn color_of(&self, name: &str) -> Option<Color> {
        self.tokens.iter().find(|t| t.name == name).map(|t| t.color)
    }

    /// Draws a token uniformly at random. Successive draws are independent;
    /// no de-duplication against earlier draws is performed.
    #[allow(clippy::cast_possible_truncation)]
    pub fn draw_token(&self, rng: &mut dyn DeterministicRng) -> &ColorToken {
        let max = (self.tokens.len() - 1) as u32;
        let index = rng.next_u32_range(0, max) as usize;
        &self.tokens[index]
    }
}
