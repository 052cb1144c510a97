//! Domain layer for the round/scoring context.

pub mod commands;
pub mod events;
pub mod prompt;
pub mod session;
