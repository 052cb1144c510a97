//! Stroop Session — the round/scoring bounded context.
//!
//! Responsible for the countdown-bounded round lifecycle: prompt
//! generation, answer evaluation, score adjustment, and end-of-round
//! record comparison. The domain layer is synchronous and assumes
//! serialized access; the only asynchronous piece is the cancelable
//! countdown, and the application layer wires the two together for a host.

pub mod application;
pub mod countdown;
pub mod domain;
