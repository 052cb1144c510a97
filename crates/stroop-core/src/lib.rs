//! Stroop Core — shared domain abstractions.
//!
//! This crate defines the fundamental types the game contexts depend on:
//! the fixed color palette, the random-draw seam, and the error taxonomy.
//! It contains no infrastructure code.

pub mod error;
pub mod palette;
pub mod rng;
