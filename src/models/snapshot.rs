//! Schedule snapshot.
//!
//! A read-only projection of the final allocation state, resolved from
//! arena indices back to workshop IDs and group names. This is the only
//! surface the reporting collaborator consumes.

use serde::{Deserialize, Serialize};

use super::{Discipline, Group, WorkshopRegistry, NUM_SESSIONS};

/// Complete post-allocation state for reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSnapshot {
    /// Per-group schedules, in input order.
    pub groups: Vec<GroupScheduleView>,
    /// Per-workshop usage, in registry order.
    pub workshops: Vec<WorkshopUsageView>,
}

/// One group's final schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupScheduleView {
    /// Teacher name.
    pub teacher: String,
    /// Group name.
    pub group: String,
    /// Stable derived identifier.
    pub display_id: String,
    /// Grade level.
    pub grade: i32,
    /// Student roster.
    pub students: Vec<String>,
    /// One entry per session slot; `None` marks unsatisfied demand.
    pub slots: [Option<BookedSlotView>; NUM_SESSIONS],
}

/// The workshop occupying one schedule slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookedSlotView {
    /// Workshop ID.
    pub workshop_id: String,
    /// Workshop display name.
    pub workshop_name: String,
    /// Room label.
    pub room: String,
}

/// One workshop's end-of-run utilization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkshopUsageView {
    /// Workshop ID.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Track.
    pub discipline: Discipline,
    /// Room label.
    pub room: String,
    /// Seats per offered session at the start of the run.
    pub nominal_capacity: u32,
    /// Per-session remaining seats and occupant rosters.
    pub sessions: [SessionUsageView; NUM_SESSIONS],
}

/// Usage of a single workshop session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionUsageView {
    /// Seats still free.
    pub remaining: u32,
    /// Display IDs of the groups booked into this session.
    pub occupants: Vec<String>,
}

impl ScheduleSnapshot {
    /// Builds a snapshot from the post-allocation state.
    pub fn capture(groups: &[Group], registry: &WorkshopRegistry) -> Self {
        let group_views = groups
            .iter()
            .map(|g| GroupScheduleView {
                teacher: g.teacher.clone(),
                group: g.name.clone(),
                display_id: g.display_id(),
                grade: g.grade,
                students: g.students.clone(),
                slots: std::array::from_fn(|session| {
                    g.schedule[session].map(|booked| {
                        let w = registry.get(booked.workshop);
                        BookedSlotView {
                            workshop_id: w.id.clone(),
                            workshop_name: w.name.clone(),
                            room: w.room.clone(),
                        }
                    })
                }),
            })
            .collect();

        let workshop_views = registry
            .workshops()
            .iter()
            .map(|w| WorkshopUsageView {
                id: w.id.clone(),
                name: w.name.clone(),
                discipline: w.discipline,
                room: w.room.clone(),
                nominal_capacity: w.nominal_capacity,
                sessions: std::array::from_fn(|session| SessionUsageView {
                    remaining: w.remaining[session],
                    occupants: w.occupants[session]
                        .iter()
                        .map(|&gidx| groups[gidx].display_id())
                        .collect(),
                }),
            })
            .collect();

        Self {
            groups: group_views,
            workshops: workshop_views,
        }
    }

    /// Total number of empty schedule slots across all groups.
    pub fn empty_slot_count(&self) -> usize {
        self.groups
            .iter()
            .flat_map(|g| g.slots.iter())
            .filter(|slot| slot.is_none())
            .count()
    }
}
