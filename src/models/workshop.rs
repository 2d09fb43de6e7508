//! Workshop model and capacity ledger.
//!
//! A workshop offers seats in some subset of the global session slots.
//! Remaining capacity is tracked per session and only ever decreases; a
//! session with 0 remaining seats is indistinguishable from one that was
//! never offered, which is exactly the eligibility rule the allocator needs.

use serde::{Deserialize, Serialize};

use super::{Discipline, NUM_SESSIONS};

/// A workshop with per-session capacity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workshop {
    /// Unique workshop identifier (e.g., "A3").
    pub id: String,
    /// Display name.
    pub name: String,
    /// Track this workshop belongs to.
    pub discipline: Discipline,
    /// Lowest admitted grade, inclusive ("K" is 0).
    pub min_grade: i32,
    /// Highest admitted grade, inclusive.
    pub max_grade: i32,
    /// Seats per offered session at the start of the run.
    pub nominal_capacity: u32,
    /// Remaining seats per session; 0 means not offered or full.
    pub remaining: [u32; NUM_SESSIONS],
    /// Room label.
    pub room: String,
    /// Registry indices of groups occupying each session (for reporting).
    pub occupants: [Vec<usize>; NUM_SESSIONS],
}

impl Workshop {
    /// Creates a workshop admitting all grades, offering no sessions yet.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        discipline: Discipline,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            discipline,
            min_grade: 0,
            max_grade: i32::MAX,
            nominal_capacity: 0,
            remaining: [0; NUM_SESSIONS],
            room: String::new(),
            occupants: Default::default(),
        }
    }

    /// Sets the inclusive grade range.
    pub fn with_grade_range(mut self, min_grade: i32, max_grade: i32) -> Self {
        self.min_grade = min_grade;
        self.max_grade = max_grade;
        self
    }

    /// Sets the nominal capacity and which sessions are offered.
    ///
    /// Every offered session starts with the full nominal capacity.
    pub fn with_capacity(mut self, capacity: u32, offered: [bool; NUM_SESSIONS]) -> Self {
        self.nominal_capacity = capacity;
        for (slot, &is_offered) in self.remaining.iter_mut().zip(offered.iter()) {
            *slot = if is_offered { capacity } else { 0 };
        }
        self
    }

    /// Sets the room label.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = room.into();
        self
    }

    /// Whether a grade falls within the inclusive eligibility range.
    pub fn admits_grade(&self, grade: i32) -> bool {
        self.min_grade <= grade && grade <= self.max_grade
    }

    /// Remaining seats for a session.
    pub fn session_remaining(&self, session: usize) -> u32 {
        self.remaining[session]
    }

    /// Number of sessions that currently have seats left.
    pub fn open_session_count(&self) -> usize {
        self.remaining.iter().filter(|&&seats| seats > 0).count()
    }

    /// Consumes seats in a session and records the occupying group.
    ///
    /// Callers must have verified capacity via the eligibility checks;
    /// remaining capacity never goes negative.
    pub fn take_session(&mut self, session: usize, seats: u32, group_idx: usize) {
        debug_assert!(self.remaining[session] >= seats);
        self.remaining[session] -= seats;
        self.occupants[session].push(group_idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_workshop() -> Workshop {
        Workshop::new("A3", "Watercolor", Discipline::Art)
            .with_grade_range(2, 4)
            .with_capacity(25, [true, false, true, false])
            .with_room("Room 101")
    }

    #[test]
    fn test_workshop_builder() {
        let w = sample_workshop();
        assert_eq!(w.id, "A3");
        assert_eq!(w.name, "Watercolor");
        assert_eq!(w.discipline, Discipline::Art);
        assert_eq!(w.min_grade, 2);
        assert_eq!(w.max_grade, 4);
        assert_eq!(w.nominal_capacity, 25);
        assert_eq!(w.remaining, [25, 0, 25, 0]);
        assert_eq!(w.room, "Room 101");
    }

    #[test]
    fn test_admits_grade_inclusive() {
        let w = sample_workshop();
        assert!(!w.admits_grade(1));
        assert!(w.admits_grade(2));
        assert!(w.admits_grade(3));
        assert!(w.admits_grade(4));
        assert!(!w.admits_grade(5));
    }

    #[test]
    fn test_take_session_decrements_and_records() {
        let mut w = sample_workshop();
        w.take_session(0, 20, 5);
        assert_eq!(w.session_remaining(0), 5);
        assert_eq!(w.occupants[0], vec![5]);

        w.take_session(0, 5, 9);
        assert_eq!(w.session_remaining(0), 0);
        assert_eq!(w.occupants[0], vec![5, 9]);
        // Untouched sessions keep their state
        assert_eq!(w.session_remaining(2), 25);
        assert!(w.occupants[2].is_empty());
    }

    #[test]
    fn test_open_session_count() {
        let mut w = sample_workshop();
        assert_eq!(w.open_session_count(), 2);
        w.take_session(0, 25, 0);
        assert_eq!(w.open_session_count(), 1);
    }
}
