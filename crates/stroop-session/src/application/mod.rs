//! Application layer for the round/scoring context.

pub mod runner;
