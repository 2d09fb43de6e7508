//! End-to-end flow: CSV files → load → validate → allocate → snapshot.

use std::fs;
use std::path::PathBuf;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tempfile::TempDir;

use workshop_allocator::allocator::{AllocationProblem, Allocator};
use workshop_allocator::models::{Discipline, WorkshopRegistry, NUM_SESSIONS};
use workshop_allocator::{loader, report, validation};

const GROUPS_CSV: &str = "\
teacher,email,grade,name,students,art1,art2,art3,art4,sci1,sci2,sci3,sci4,priority
Ms Frizzle,x,3,3A,\"Arnold, Dorothy, Carlos, Keesha\",A1,A2,,,S1,S2,,,0
Mr Holland,x,K,K1,\"Opus, Rowena, Gertrude\",A2,A1,,,S2,S1,,,A1
";

const ART_CSV: &str = "\
name,grades,s1,s2,s3,s4,capacity,room
A1 - Watercolor,K-6,y,y,y,y,30,Room 101
A2 - Mosaics,K-6,y,y,y,y,30,Art Lab
";

const SCIENCE_CSV: &str = "\
name,grades,s1,s2,s3,s4,capacity,room
S1 - Rocketry,K-6,y,y,y,y,30,Lab A
S2 - Magnets,K-6,y,y,y,y,30,Lab B
";

fn write_inputs(dir: &TempDir) -> (PathBuf, PathBuf, PathBuf) {
    let groups = dir.path().join("groups.csv");
    let art = dir.path().join("artworkshops.csv");
    let science = dir.path().join("scienceworkshops.csv");
    fs::write(&groups, GROUPS_CSV).unwrap();
    fs::write(&art, ART_CSV).unwrap();
    fs::write(&science, SCIENCE_CSV).unwrap();
    (groups, art, science)
}

fn load_problem(dir: &TempDir) -> AllocationProblem {
    let (groups_path, art_path, science_path) = write_inputs(dir);

    let groups = loader::load_groups(&groups_path).unwrap();
    let mut registry = WorkshopRegistry::new();
    for w in loader::load_workshops(&art_path, Discipline::Art).unwrap() {
        registry.insert(w).unwrap();
    }
    for w in loader::load_workshops(&science_path, Discipline::Science).unwrap() {
        registry.insert(w).unwrap();
    }

    validation::validate_input(&groups, &registry).unwrap();
    AllocationProblem::new(groups, registry)
}

#[test]
fn full_run_produces_complete_schedules() {
    let dir = TempDir::new().unwrap();
    let mut problem = load_problem(&dir);
    let mut rng = SmallRng::seed_from_u64(42);

    let outcome = Allocator::new().run(&mut problem, &mut rng);

    // Mr Holland's priority booking for A1 happened before preferences
    assert_eq!(outcome.priority_booked, 1);
    assert!(outcome.is_fully_satisfied());
    assert_eq!(outcome.total_booked(), 8);

    // Capacity is generous: both groups end up fully scheduled
    for group in &problem.groups {
        assert_eq!(group.sessions_booked(Discipline::Art), 2);
        assert_eq!(group.sessions_booked(Discipline::Science), 2);
        assert!(group.schedule.iter().all(Option::is_some));
    }

    // Capacity ledger consistency: seats consumed match rosters
    for workshop in problem.workshops.workshops() {
        for session in 0..NUM_SESSIONS {
            let consumed: u32 = workshop.occupants[session]
                .iter()
                .map(|&gidx| problem.groups[gidx].roster_size() as u32)
                .sum();
            assert_eq!(
                workshop.remaining[session] + consumed,
                workshop.nominal_capacity
            );
        }
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let dir = TempDir::new().unwrap();

    let run = || {
        let mut problem = load_problem(&dir);
        let mut rng = SmallRng::seed_from_u64(7);
        Allocator::new().run(&mut problem, &mut rng);
        problem
            .groups
            .iter()
            .map(|g| g.schedule.map(|slot| slot.map(|b| b.workshop)))
            .collect::<Vec<_>>()
    };

    assert_eq!(run(), run());
}

#[test]
fn snapshot_and_report_cover_every_group() {
    let dir = TempDir::new().unwrap();
    let mut problem = load_problem(&dir);
    let mut rng = SmallRng::seed_from_u64(42);
    Allocator::new().run(&mut problem, &mut rng);

    let snapshot = problem.snapshot();
    assert_eq!(snapshot.groups.len(), 2);
    assert_eq!(snapshot.workshops.len(), 4);
    assert_eq!(snapshot.empty_slot_count(), 0);

    let rendered = report::render(&snapshot);
    assert!(rendered.contains("Teacher = Ms Frizzle"));
    assert!(rendered.contains("Teacher = Mr Holland"));
    assert!(rendered.contains("Workshop utilization"));

    // The snapshot serializes cleanly for the --json output mode
    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("Watercolor"));
}
