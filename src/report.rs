//! Human-readable report rendering.
//!
//! Renders the schedule snapshot as a plain-text report: one section per
//! group with its four-slot schedule table, followed by per-workshop
//! utilization. Pure string building; callers decide where it goes.

use std::fmt::Write;

use crate::models::{ScheduleSnapshot, NUM_SESSIONS};

/// Renders the full report.
pub fn render(snapshot: &ScheduleSnapshot) -> String {
    let mut out = String::new();
    render_groups(snapshot, &mut out);
    render_workshops(snapshot, &mut out);
    out
}

fn render_groups(snapshot: &ScheduleSnapshot, out: &mut String) {
    for group in &snapshot.groups {
        let _ = writeln!(out, "Teacher = {}", group.teacher);
        let _ = writeln!(out, "Grade = {}", group.grade);
        let _ = writeln!(out, "ID = {}", group.display_id);
        let _ = writeln!(out, "Students = {}", group.students.join(", "));
        let _ = writeln!(out, "Schedule");
        let _ = writeln!(out, "| Session | ID | Class | Room |");
        let _ = writeln!(out, "| ------- | -- | ----- | ---- |");
        for (session, slot) in group.slots.iter().enumerate() {
            match slot {
                Some(booked) => {
                    let _ = writeln!(
                        out,
                        "| {} | {} | {} | {} |",
                        session + 1,
                        booked.workshop_id,
                        booked.workshop_name,
                        booked.room
                    );
                }
                None => {
                    let _ = writeln!(out, "| {} | - | - | - |", session + 1);
                }
            }
        }
        let _ = writeln!(out, "\n---\n");
    }
}

fn render_workshops(snapshot: &ScheduleSnapshot, out: &mut String) {
    let _ = writeln!(out, "Workshop utilization");
    let _ = writeln!(out, "====================");
    for workshop in &snapshot.workshops {
        let _ = writeln!(
            out,
            "{} - {} ({}, {})",
            workshop.id, workshop.name, workshop.discipline, workshop.room
        );
        for session in 0..NUM_SESSIONS {
            let usage = &workshop.sessions[session];
            let occupants = if usage.occupants.is_empty() {
                "-".to_string()
            } else {
                usage.occupants.join(", ")
            };
            let _ = writeln!(
                out,
                "  session {}: {}/{} seats free  [{}]",
                session + 1,
                usage.remaining,
                workshop.nominal_capacity,
                occupants
            );
        }
        let _ = writeln!(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        BookedSession, Discipline, Group, ScheduleSnapshot, Workshop, WorkshopRegistry,
    };

    fn sample_snapshot() -> ScheduleSnapshot {
        let mut registry = WorkshopRegistry::new();
        let widx = registry
            .insert(
                Workshop::new("A1", "Pottery", Discipline::Art)
                    .with_grade_range(0, 6)
                    .with_capacity(25, [true, false, false, false])
                    .with_room("Studio B"),
            )
            .unwrap();
        let mut group = Group::new("Ms Lee", "2A", 2)
            .with_students(vec!["Ada".into(), "Grace".into()]);
        group.schedule[0] = Some(BookedSession {
            workshop: widx,
            discipline: Discipline::Art,
        });
        let groups = vec![group];
        registry.get_mut(widx).take_session(0, 2, 0);
        ScheduleSnapshot::capture(&groups, &registry)
    }

    #[test]
    fn test_group_section() {
        let report = render(&sample_snapshot());
        assert!(report.contains("Teacher = Ms Lee"));
        assert!(report.contains("ID = Ms_Lee-2-2A"));
        assert!(report.contains("| 1 | A1 | Pottery | Studio B |"));
        // Unfilled slots render as empty markers
        assert!(report.contains("| 2 | - | - | - |"));
    }

    #[test]
    fn test_workshop_section() {
        let report = render(&sample_snapshot());
        assert!(report.contains("A1 - Pottery (art, Studio B)"));
        assert!(report.contains("session 1: 23/25 seats free  [Ms_Lee-2-2A]"));
        assert!(report.contains("session 2: 0/25 seats free  [-]"));
    }
}
