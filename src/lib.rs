//! Workshop allocation engine.
//!
//! Assigns student groups to capacity-limited workshop sessions subject to
//! grade eligibility, per-group session-slot exclusivity, and ranked
//! preference lists, with randomized best-effort fallback when preferences
//! cannot be satisfied. One batch run per planning cycle; greedy and
//! heuristic by design, not an optimal matching solver.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Group`, `Workshop`, `WorkshopRegistry`,
//!   `Discipline`, `ScheduleSnapshot`
//! - **`allocator`**: Eligibility checks, the booking operation, and the
//!   multi-pass allocation driver
//! - **`validation`**: Input integrity checks between loading and allocation
//! - **`loader`**: CSV ingestion of group and workshop records
//! - **`report`**: Plain-text rendering of the final schedule
//! - **`logging`**: `tracing` subscriber setup
//!
//! # Flow
//!
//! Loader produces groups and workshops → allocation passes run in fixed
//! order (priority → scarce → preference → fallback), mutating the capacity
//! ledger through a single booking operation → the schedule snapshot is
//! captured for reporting.

pub mod allocator;
pub mod loader;
pub mod logging;
pub mod models;
pub mod report;
pub mod validation;
