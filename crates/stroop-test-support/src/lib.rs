//! Shared test mocks and utilities for the Stroop game crates.

mod rng;
mod store;

pub use rng::{MockRng, SequenceRng};
pub use store::{FailingRecordStore, InMemoryRecordStore};
