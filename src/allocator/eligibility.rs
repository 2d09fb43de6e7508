//! Eligibility checks.
//!
//! Pure predicates over a workshop/group pair. Nothing here mutates state;
//! the booking operation composes these checks before committing a slot.

use crate::models::{Group, Workshop};

/// Session slots where this group could be booked into this workshop.
///
/// A slot qualifies when the workshop has enough remaining seats for the
/// whole roster and the group's own slot is still empty. Indices are
/// returned in ascending order, so the result is order-stable for a given
/// state; only the final random pick among them varies.
pub fn available_sessions(workshop: &Workshop, group: &Group) -> Vec<usize> {
    let seats_needed = group.roster_size() as u32;
    workshop
        .remaining
        .iter()
        .enumerate()
        .filter(|&(session, &remaining)| {
            remaining >= seats_needed && group.slot_is_free(session)
        })
        .map(|(session, _)| session)
        .collect()
}
