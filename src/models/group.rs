//! Student group model.
//!
//! A group is the unit of booking: a class roster that attends workshops
//! together. Each group holds a fixed schedule of [`NUM_SESSIONS`] global
//! session slots, ranked preference lists for both disciplines, and any
//! priority workshop IDs that must be attempted before preference booking.

use serde::{Deserialize, Serialize};

use super::{Discipline, NUM_SESSIONS};

/// One occupied schedule slot.
///
/// Stores the workshop's registry index rather than its ID string; index
/// equality is ID equality because the registry rejects duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookedSession {
    /// Registry index of the booked workshop.
    pub workshop: usize,
    /// Discipline of the booked workshop (denormalized for need queries).
    pub discipline: Discipline,
}

/// A student group to be scheduled.
///
/// Invariants maintained by the booking operation:
/// - no two occupied slots reference the same workshop
/// - slot indices are the global session periods shared by all workshops
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    /// Teacher name.
    pub teacher: String,
    /// Group name.
    pub name: String,
    /// Grade level ("K" is represented as 0).
    pub grade: i32,
    /// Student roster; its length drives capacity checks.
    pub students: Vec<String>,
    /// Ranked art workshop IDs, most-preferred first.
    pub art_preferences: Vec<String>,
    /// Ranked science workshop IDs, most-preferred first.
    pub science_preferences: Vec<String>,
    /// Workshop IDs that must be attempted before any preference booking.
    pub priority_ids: Vec<String>,
    /// One entry per global session slot.
    pub schedule: [Option<BookedSession>; NUM_SESSIONS],
}

impl Group {
    /// Creates a new group with an empty roster and schedule.
    pub fn new(teacher: impl Into<String>, name: impl Into<String>, grade: i32) -> Self {
        Self {
            teacher: teacher.into(),
            name: name.into(),
            grade,
            students: Vec::new(),
            art_preferences: Vec::new(),
            science_preferences: Vec::new(),
            priority_ids: Vec::new(),
            schedule: [None; NUM_SESSIONS],
        }
    }

    /// Sets the student roster.
    pub fn with_students(mut self, students: Vec<String>) -> Self {
        self.students = students;
        self
    }

    /// Sets the ranked preference list for a discipline.
    pub fn with_preferences(mut self, discipline: Discipline, ids: Vec<String>) -> Self {
        match discipline {
            Discipline::Art => self.art_preferences = ids,
            Discipline::Science => self.science_preferences = ids,
        }
        self
    }

    /// Sets the priority workshop IDs.
    pub fn with_priority_ids(mut self, ids: Vec<String>) -> Self {
        self.priority_ids = ids;
        self
    }

    /// Number of students; the seat count a booking consumes.
    pub fn roster_size(&self) -> usize {
        self.students.len()
    }

    /// Ranked preference list for a discipline.
    pub fn preferences(&self, discipline: Discipline) -> &[String] {
        match discipline {
            Discipline::Art => &self.art_preferences,
            Discipline::Science => &self.science_preferences,
        }
    }

    /// Whether any occupied slot references the given workshop.
    ///
    /// Guards against booking the same workshop into two sessions.
    pub fn is_enrolled(&self, workshop_idx: usize) -> bool {
        self.schedule
            .iter()
            .flatten()
            .any(|booked| booked.workshop == workshop_idx)
    }

    /// Number of occupied slots belonging to a discipline.
    pub fn sessions_booked(&self, discipline: Discipline) -> usize {
        self.schedule
            .iter()
            .flatten()
            .filter(|booked| booked.discipline == discipline)
            .count()
    }

    /// Whether the given session slot is unoccupied.
    pub fn slot_is_free(&self, session: usize) -> bool {
        self.schedule[session].is_none()
    }

    /// Stable identifier derived from teacher, grade, and name.
    pub fn display_id(&self) -> String {
        format!(
            "{}-{}-{}",
            self.teacher.replace(' ', "_"),
            self.grade,
            self.name.replace(' ', "_")
        )
    }
}
