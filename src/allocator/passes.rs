//! Allocation passes.
//!
//! The pass driver converges on a full schedule in a fixed order:
//!
//! 1. **Priority** — pre-assigned workshop IDs, attempted first.
//! 2. **Scarce** — workshops with few open sessions are offered to groups
//!    before less-constrained workshops can absorb their seats (optional).
//! 3. **Preference** — ranked lists, one pass per discipline, walked until
//!    the discipline's session target is met.
//! 4. **Fallback** — groups still short scan the whole collection for any
//!    eligible workshop, optionally crossing into the other discipline.
//!
//! Every pass re-validates eligibility through [`attempt_book`], so passes
//! are idempotent with respect to already-filled slots. All failures below
//! the load boundary are non-fatal; unmet demand is recorded, never thrown.

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::models::{Discipline, Group, ScheduleSnapshot, WorkshopRegistry};

use super::booking::attempt_book;

/// Tuning knobs for a planning run.
#[derive(Debug, Clone)]
pub struct AllocatorConfig {
    /// Sessions each group should end up with per discipline.
    pub art_target: usize,
    /// Science counterpart of `art_target`.
    pub science_target: usize,
    /// Workshops with at most this many open sessions are booked in the
    /// scarce pass. `None` disables the pass.
    pub scarce_session_max: Option<usize>,
    /// Whether fallback may book into the other discipline as a last resort.
    pub cross_discipline_fallback: bool,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            art_target: 2,
            science_target: 2,
            scarce_session_max: Some(2),
            cross_discipline_fallback: true,
        }
    }
}

impl AllocatorConfig {
    /// Sets the per-group session target for a discipline.
    pub fn with_session_target(mut self, discipline: Discipline, target: usize) -> Self {
        match discipline {
            Discipline::Art => self.art_target = target,
            Discipline::Science => self.science_target = target,
        }
        self
    }

    /// Sets the scarce-pass threshold (`None` disables the pass).
    pub fn with_scarce_session_max(mut self, max: Option<usize>) -> Self {
        self.scarce_session_max = max;
        self
    }

    /// Enables or disables cross-discipline fallback.
    pub fn with_cross_discipline_fallback(mut self, enabled: bool) -> Self {
        self.cross_discipline_fallback = enabled;
        self
    }

    /// Session target for a discipline.
    pub fn session_target(&self, discipline: Discipline) -> usize {
        match discipline {
            Discipline::Art => self.art_target,
            Discipline::Science => self.science_target,
        }
    }
}

/// The mutable state of a planning run: groups plus the workshop arena.
#[derive(Debug, Clone, Default)]
pub struct AllocationProblem {
    /// Groups in input order; indices are stable across the run.
    pub groups: Vec<Group>,
    /// Workshop arena and ID index.
    pub workshops: WorkshopRegistry,
}

impl AllocationProblem {
    /// Creates a problem from loaded collections.
    pub fn new(groups: Vec<Group>, workshops: WorkshopRegistry) -> Self {
        Self { groups, workshops }
    }

    /// Captures the read-only snapshot for reporting.
    pub fn snapshot(&self) -> ScheduleSnapshot {
        ScheduleSnapshot::capture(&self.groups, &self.workshops)
    }
}

/// A session a group still needed when the run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnmetNeed {
    /// Index of the group in the problem's collection.
    pub group: usize,
    /// The discipline that was requested (even if cross-discipline fallback
    /// was attempted).
    pub discipline: Discipline,
}

/// Booking counts per pass plus any unsatisfied demand.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AllocationOutcome {
    /// Successful bookings in the priority pass.
    pub priority_booked: usize,
    /// Priority attempts that failed (missing ID or rejected booking).
    pub priority_failed: usize,
    /// Successful bookings in the scarce pass.
    pub scarce_booked: usize,
    /// Successful bookings from ranked preference lists.
    pub preference_booked: usize,
    /// Successful fallback bookings (either discipline).
    pub fallback_booked: usize,
    /// Needed sessions no pass could satisfy.
    pub unmet: Vec<UnmetNeed>,
}

impl AllocationOutcome {
    /// Total bookings across all passes.
    pub fn total_booked(&self) -> usize {
        self.priority_booked + self.scarce_booked + self.preference_booked + self.fallback_booked
    }

    /// Whether every needed session was booked.
    pub fn is_fully_satisfied(&self) -> bool {
        self.unmet.is_empty()
    }
}

/// Multi-pass greedy allocator.
///
/// # Example
///
/// ```
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use workshop_allocator::allocator::{AllocationProblem, Allocator};
/// use workshop_allocator::models::{Discipline, Group, Workshop, WorkshopRegistry};
///
/// let mut registry = WorkshopRegistry::new();
/// registry
///     .insert(
///         Workshop::new("A1", "Collage", Discipline::Art)
///             .with_grade_range(0, 6)
///             .with_capacity(30, [true, true, true, true]),
///     )
///     .unwrap();
/// let groups = vec![Group::new("Ms Lee", "2A", 2)
///     .with_students(vec!["a".into(), "b".into()])
///     .with_preferences(Discipline::Art, vec!["A1".into()])];
///
/// let mut problem = AllocationProblem::new(groups, registry);
/// let allocator = Allocator::new();
/// let outcome = allocator.run(&mut problem, &mut SmallRng::seed_from_u64(1));
/// assert_eq!(outcome.preference_booked, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Allocator {
    config: AllocatorConfig,
}

impl Allocator {
    /// Creates an allocator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an allocator with an explicit configuration.
    pub fn with_config(config: AllocatorConfig) -> Self {
        Self { config }
    }

    /// Runs all passes in order and returns the outcome.
    ///
    /// The run always terminates and always completes: every failure past
    /// loading is recorded or logged, never propagated.
    pub fn run<R: Rng + ?Sized>(
        &self,
        problem: &mut AllocationProblem,
        rng: &mut R,
    ) -> AllocationOutcome {
        let mut outcome = AllocationOutcome::default();

        info!("booking priority workshops");
        self.priority_pass(problem, rng, &mut outcome);

        if let Some(max) = self.config.scarce_session_max {
            info!(max_open_sessions = max, "booking scarce workshops");
            self.scarce_pass(problem, max, rng, &mut outcome);
        }

        let mut queues = Vec::new();
        for discipline in Discipline::ALL {
            info!(%discipline, "booking ranked preferences");
            let queue = self.preference_pass(problem, discipline, rng, &mut outcome);
            queues.push((discipline, queue));
        }

        for (discipline, queue) in queues {
            info!(%discipline, pending = queue.len(), "fallback booking");
            self.fallback_pass(problem, discipline, &queue, rng, &mut outcome);
        }

        info!(
            booked = outcome.total_booked(),
            unmet = outcome.unmet.len(),
            "allocation finished"
        );
        outcome
    }

    /// Books a workshop/group pair through the single mutating entry point.
    fn book<R: Rng + ?Sized>(
        problem: &mut AllocationProblem,
        workshop_idx: usize,
        group_idx: usize,
        rng: &mut R,
    ) -> Result<usize, super::BookingFailure> {
        let AllocationProblem { groups, workshops } = problem;
        attempt_book(
            workshops.get_mut(workshop_idx),
            workshop_idx,
            &mut groups[group_idx],
            group_idx,
            rng,
        )
    }

    fn priority_pass<R: Rng + ?Sized>(
        &self,
        problem: &mut AllocationProblem,
        rng: &mut R,
        outcome: &mut AllocationOutcome,
    ) {
        for group_idx in 0..problem.groups.len() {
            let ids = problem.groups[group_idx].priority_ids.clone();
            for id in ids {
                let group_id = problem.groups[group_idx].display_id();
                let Some(workshop_idx) = problem.workshops.lookup(&id) else {
                    warn!(workshop = %id, group = %group_id, "priority workshop ID not found");
                    outcome.priority_failed += 1;
                    continue;
                };
                match Self::book(problem, workshop_idx, group_idx, rng) {
                    Ok(session) => {
                        debug!(workshop = %id, group = %group_id, session, "priority booking");
                        outcome.priority_booked += 1;
                    }
                    Err(failure) => {
                        warn!(
                            workshop = %id,
                            group = %group_id,
                            %failure,
                            "unable to book priority workshop"
                        );
                        outcome.priority_failed += 1;
                    }
                }
            }
        }
    }

    /// Offers workshops with few open sessions to needy groups first.
    ///
    /// Most-constrained workshop first (fewest open sessions, ties broken
    /// by registry order); groups in collection order.
    fn scarce_pass<R: Rng + ?Sized>(
        &self,
        problem: &mut AllocationProblem,
        max_open: usize,
        rng: &mut R,
        outcome: &mut AllocationOutcome,
    ) {
        let mut scarce: Vec<(usize, usize)> = problem
            .workshops
            .workshops()
            .iter()
            .enumerate()
            .filter_map(|(idx, w)| {
                let open = w.open_session_count();
                (open > 0 && open <= max_open).then_some((open, idx))
            })
            .collect();
        scarce.sort_unstable();

        for (_, workshop_idx) in scarce {
            let discipline = problem.workshops.get(workshop_idx).discipline;
            let target = self.config.session_target(discipline);
            for group_idx in 0..problem.groups.len() {
                if problem.groups[group_idx].sessions_booked(discipline) >= target {
                    continue;
                }
                match Self::book(problem, workshop_idx, group_idx, rng) {
                    Ok(session) => {
                        debug!(
                            workshop = %problem.workshops.get(workshop_idx).id,
                            group = %problem.groups[group_idx].display_id(),
                            session,
                            "scarce booking"
                        );
                        outcome.scarce_booked += 1;
                    }
                    Err(failure) => {
                        debug!(
                            workshop = %problem.workshops.get(workshop_idx).id,
                            group = %problem.groups[group_idx].display_id(),
                            %failure,
                            "scarce booking skipped"
                        );
                    }
                }
            }
        }
    }

    /// Walks ranked preference lists until the discipline target is met.
    ///
    /// Returns the fallback queue: one entry per session a group still
    /// needs after its list is exhausted.
    fn preference_pass<R: Rng + ?Sized>(
        &self,
        problem: &mut AllocationProblem,
        discipline: Discipline,
        rng: &mut R,
        outcome: &mut AllocationOutcome,
    ) -> Vec<usize> {
        let target = self.config.session_target(discipline);
        let mut queue = Vec::new();

        for group_idx in 0..problem.groups.len() {
            let booked = problem.groups[group_idx].sessions_booked(discipline);
            let mut need = target.saturating_sub(booked);
            if need == 0 {
                continue;
            }

            let prefs = problem.groups[group_idx].preferences(discipline).to_vec();
            for id in prefs {
                if need == 0 {
                    break;
                }
                let group_id = problem.groups[group_idx].display_id();
                let Some(workshop_idx) = problem.workshops.lookup(&id) else {
                    warn!(workshop = %id, group = %group_id, "preferred workshop ID not found");
                    continue;
                };
                match Self::book(problem, workshop_idx, group_idx, rng) {
                    Ok(session) => {
                        debug!(workshop = %id, group = %group_id, session, "preference booking");
                        outcome.preference_booked += 1;
                        need -= 1;
                    }
                    Err(failure) => {
                        debug!(workshop = %id, group = %group_id, %failure, "preference skipped");
                    }
                }
            }

            queue.extend(std::iter::repeat(group_idx).take(need));
        }

        queue
    }

    /// Best-effort booking for groups whose preference lists fell short.
    fn fallback_pass<R: Rng + ?Sized>(
        &self,
        problem: &mut AllocationProblem,
        discipline: Discipline,
        queue: &[usize],
        rng: &mut R,
        outcome: &mut AllocationOutcome,
    ) {
        for &group_idx in queue {
            debug!(
                group = %problem.groups[group_idx].display_id(),
                %discipline,
                "needs fallback booking"
            );
            let mut booked = Self::scan_discipline(problem, discipline, group_idx, rng);
            if !booked && self.config.cross_discipline_fallback {
                booked = Self::scan_discipline(problem, discipline.other(), group_idx, rng);
            }
            if booked {
                outcome.fallback_booked += 1;
            } else {
                warn!(
                    group = %problem.groups[group_idx].display_id(),
                    %discipline,
                    "no workshop could satisfy fallback booking"
                );
                outcome.unmet.push(UnmetNeed {
                    group: group_idx,
                    discipline,
                });
            }
        }
    }

    /// Books the first eligible workshop of a discipline, in registry order.
    fn scan_discipline<R: Rng + ?Sized>(
        problem: &mut AllocationProblem,
        discipline: Discipline,
        group_idx: usize,
        rng: &mut R,
    ) -> bool {
        for workshop_idx in problem.workshops.indices_for(discipline) {
            match Self::book(problem, workshop_idx, group_idx, rng) {
                Ok(session) => {
                    debug!(
                        workshop = %problem.workshops.get(workshop_idx).id,
                        group = %problem.groups[group_idx].display_id(),
                        session,
                        "fallback booking"
                    );
                    return true;
                }
                Err(failure) => {
                    debug!(
                        workshop = %problem.workshops.get(workshop_idx).id,
                        %failure,
                        "fallback candidate skipped"
                    );
                }
            }
        }
        false
    }
}
