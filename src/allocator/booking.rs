//! The booking operation.
//!
//! [`attempt_book`] is the single mutating entry point of the allocator:
//! every pass funnels through it, so the legality invariants (grade range,
//! no duplicate workshop per group, non-negative capacity) hold after any
//! sequence of calls.

use std::fmt;

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::models::{BookedSession, Group, Workshop};

use super::eligibility::available_sessions;

/// Why a booking attempt was rejected. No state changes on any failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingFailure {
    /// The group's grade is outside the workshop's range.
    GradeMismatch,
    /// The group already holds this workshop in another slot.
    AlreadyEnrolled,
    /// No session has both free seats for the roster and a free group slot.
    NoSessionAvailable,
}

impl fmt::Display for BookingFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            BookingFailure::GradeMismatch => "grade outside workshop range",
            BookingFailure::AlreadyEnrolled => "group already enrolled in workshop",
            BookingFailure::NoSessionAvailable => "no session with room for this group",
        };
        f.write_str(msg)
    }
}

/// Attempts to book `group` into `workshop`.
///
/// Checks run in order: grade range, duplicate enrollment, session
/// availability. On success one session is chosen uniformly at random from
/// the qualifying set, the session's remaining capacity drops by the roster
/// size, the group is recorded in the session's occupant list, and the
/// group's schedule slot is filled. Returns the chosen session index.
pub fn attempt_book<R: Rng + ?Sized>(
    workshop: &mut Workshop,
    workshop_idx: usize,
    group: &mut Group,
    group_idx: usize,
    rng: &mut R,
) -> Result<usize, BookingFailure> {
    if !workshop.admits_grade(group.grade) {
        return Err(BookingFailure::GradeMismatch);
    }
    if group.is_enrolled(workshop_idx) {
        return Err(BookingFailure::AlreadyEnrolled);
    }

    let sessions = available_sessions(workshop, group);
    let Some(&session) = sessions.choose(rng) else {
        return Err(BookingFailure::NoSessionAvailable);
    };

    workshop.take_session(session, group.roster_size() as u32, group_idx);
    group.schedule[session] = Some(BookedSession {
        workshop: workshop_idx,
        discipline: workshop.discipline,
    });
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Discipline;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    fn group_of(size: usize, grade: i32) -> Group {
        Group::new("T", "G", grade).with_students(vec!["s".into(); size])
    }

    #[test]
    fn test_books_only_open_session() {
        // Grade 3, roster 20 vs grade range 2-4, one session with 25 seats
        let mut w = Workshop::new("A1", "Mosaics", Discipline::Art)
            .with_grade_range(2, 4)
            .with_capacity(25, [false, true, false, false]);
        let mut g = group_of(20, 3);

        let session = attempt_book(&mut w, 0, &mut g, 0, &mut rng()).unwrap();
        assert_eq!(session, 1);
        assert_eq!(w.session_remaining(1), 5);
        assert_eq!(w.occupants[1], vec![0]);
        assert_eq!(
            g.schedule[1],
            Some(BookedSession {
                workshop: 0,
                discipline: Discipline::Art,
            })
        );
    }

    #[test]
    fn test_grade_mismatch_no_mutation() {
        let mut w = Workshop::new("A1", "Mosaics", Discipline::Art)
            .with_grade_range(5, 6)
            .with_capacity(25, [true, true, true, true]);
        let mut g = group_of(20, 3);

        let err = attempt_book(&mut w, 0, &mut g, 0, &mut rng()).unwrap_err();
        assert_eq!(err, BookingFailure::GradeMismatch);
        assert_eq!(w.remaining, [25, 25, 25, 25]);
        assert!(g.schedule.iter().all(Option::is_none));
    }

    #[test]
    fn test_duplicate_enrollment_rejected() {
        let mut w = Workshop::new("A1", "Mosaics", Discipline::Art)
            .with_grade_range(0, 6)
            .with_capacity(30, [true, true, true, true]);
        let mut g = group_of(10, 3);

        attempt_book(&mut w, 0, &mut g, 0, &mut rng()).unwrap();
        let before = w.remaining;

        // Second attempt for the same workshop fails regardless of capacity
        let err = attempt_book(&mut w, 0, &mut g, 0, &mut rng()).unwrap_err();
        assert_eq!(err, BookingFailure::AlreadyEnrolled);
        assert_eq!(w.remaining, before);
        assert_eq!(g.schedule.iter().flatten().count(), 1);
    }

    #[test]
    fn test_full_workshop_rejected() {
        let mut w = Workshop::new("A1", "Mosaics", Discipline::Art)
            .with_grade_range(0, 6)
            .with_capacity(15, [true, false, false, false]);
        let mut g = group_of(20, 3); // Roster larger than every session

        let err = attempt_book(&mut w, 0, &mut g, 0, &mut rng()).unwrap_err();
        assert_eq!(err, BookingFailure::NoSessionAvailable);
        assert_eq!(w.remaining, [15, 0, 0, 0]);
        assert!(g.schedule.iter().all(Option::is_none));
    }

    #[test]
    fn test_random_pick_stays_within_qualifying_set() {
        let mut rng = rng();
        for _ in 0..50 {
            let mut w = Workshop::new("A1", "Mosaics", Discipline::Art)
                .with_grade_range(0, 6)
                .with_capacity(25, [true, false, true, true]);
            let mut g = group_of(20, 3);
            let session = attempt_book(&mut w, 0, &mut g, 0, &mut rng).unwrap();
            assert!([0, 2, 3].contains(&session));
        }
    }

    #[test]
    fn test_seeded_rng_reproduces_choice() {
        let book = || {
            let mut w = Workshop::new("A1", "Mosaics", Discipline::Art)
                .with_grade_range(0, 6)
                .with_capacity(25, [true, true, true, true]);
            let mut g = group_of(20, 3);
            attempt_book(&mut w, 0, &mut g, 0, &mut SmallRng::seed_from_u64(7)).unwrap()
        };
        assert_eq!(book(), book());
    }

    #[test]
    fn test_capacity_drops_by_exact_roster_size() {
        let mut w = Workshop::new("S1", "Circuits", Discipline::Science)
            .with_grade_range(0, 6)
            .with_capacity(30, [true, false, false, false]);
        let mut g = group_of(13, 2);

        attempt_book(&mut w, 0, &mut g, 0, &mut rng()).unwrap();
        assert_eq!(w.session_remaining(0), 17);
    }
}
