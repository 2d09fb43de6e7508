//! The allocation engine.
//!
//! Greedy multi-pass booking of groups into workshop sessions. The engine
//! is deliberately heuristic: passes run in a fixed order and never undo a
//! successful booking, so capacity only ever decreases and every run
//! terminates after one scan per pass.
//!
//! Randomness is injected (`rand::Rng`) and used in exactly one place: the
//! choice among qualifying sessions inside [`attempt_book`]. Seed the RNG
//! to make a run reproducible.

mod booking;
mod eligibility;
mod passes;

pub use booking::{attempt_book, BookingFailure};
pub use eligibility::available_sessions;
pub use passes::{AllocationOutcome, AllocationProblem, Allocator, AllocatorConfig, UnmetNeed};
