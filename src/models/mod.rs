//! Allocation domain models.
//!
//! Core data types for the workshop allocation problem: student groups,
//! workshops with per-session capacity, the ID-indexed workshop registry,
//! and the read-only schedule snapshot handed to reporting.

mod discipline;
mod group;
mod registry;
mod snapshot;
mod workshop;

pub use discipline::Discipline;
pub use group::{BookedSession, Group};
pub use registry::{RegistryError, WorkshopRegistry};
pub use snapshot::{
    BookedSlotView, GroupScheduleView, ScheduleSnapshot, SessionUsageView, WorkshopUsageView,
};
pub use workshop::Workshop;

/// Number of global session slots in a planning run.
///
/// Every group schedule has exactly this many entries, and every workshop
/// tracks capacity for exactly this many sessions.
pub const NUM_SESSIONS: usize = 4;
