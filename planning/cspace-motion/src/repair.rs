//! Start and goal state repair.
//!
//! Planner inputs are often slightly out of bounds or in shallow collision
//! (sensor noise, hand-typed goals). Repair projects a state into bounds and,
//! if that is not enough, searches its neighborhood for a valid state.
//! Failures are reported through `tracing` and leave the state projected
//! into bounds so the caller can inspect it.

use cspace_types::{State, StatePath, ValidityChecker};
use rand::Rng;
use tracing::{debug, info, warn};

use crate::sample::StateSampler;

/// What happened to one endpoint during repair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairOutcome {
    /// The state was already within bounds and valid.
    Untouched,

    /// Projection into bounds, possibly followed by nearby sampling,
    /// produced a valid state that was written back.
    Repaired,

    /// No valid state was found within the attempt budget. The state was
    /// left projected into bounds but invalid.
    Failed,
}

impl RepairOutcome {
    /// Returns `true` unless the repair failed.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        !matches!(self, Self::Failed)
    }
}

/// Per-endpoint outcomes of [`fix_invalid_input_states`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepairReport {
    /// Outcome for the path's first state.
    pub start: RepairOutcome,
    /// Outcome for the path's last state (untouched on paths with fewer
    /// than two vertices).
    pub goal: RepairOutcome,
}

impl RepairReport {
    /// Returns `true` if both endpoints ended up valid.
    #[must_use]
    pub const fn all_valid(&self) -> bool {
        self.start.is_valid() && self.goal.is_valid()
    }
}

/// Searches for a valid state near `near`, writing the result into `out`.
///
/// `near` is first copied into `out` and projected into bounds. If the
/// projection is valid it is kept; otherwise up to `attempts` draws are
/// taken from the per-axis window `radii` around the projected state. On
/// failure `out` is left holding the projected (invalid) state and `false`
/// is returned.
///
/// `radii` must have one entry per dimension.
///
/// # Example
///
/// ```
/// use cspace_motion::{search_valid_nearby, StateSampler};
/// use cspace_types::{State, StateComponent, StateSpace};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let space = StateSpace::new(vec![
///     StateComponent::linear(0.0, 10.0, 1.0),
///     StateComponent::linear(0.0, 10.0, 1.0),
/// ]).unwrap();
///
/// let checker = |_: &State| true;
/// let mut sampler = StateSampler::new(&space, StdRng::seed_from_u64(7));
///
/// // Out of bounds on the first axis: projection alone fixes it.
/// let near = State::from_slice(&[-1.0, 5.0]);
/// let mut out = space.allocate_state();
/// assert!(search_valid_nearby(&checker, &mut sampler, &mut out, &near, &[0.5, 0.5], 20));
/// assert_eq!(out.values(), &[0.0, 5.0]);
/// ```
pub fn search_valid_nearby<V, R>(
    checker: &V,
    sampler: &mut StateSampler<'_, R>,
    out: &mut State,
    near: &State,
    radii: &[f64],
    attempts: usize,
) -> bool
where
    V: ValidityChecker,
    R: Rng,
{
    let space = sampler.space();
    debug_assert_eq!(space.dimension(), radii.len());
    debug_assert_eq!(space.dimension(), near.dimension());

    out.copy_from(near);
    space.clamp_to_bounds(out);
    if checker.is_valid(out) {
        return true;
    }

    let anchor = out.clone();
    for attempt in 0..attempts {
        sampler.sample_near_radii(out, &anchor, radii);
        if checker.is_valid(out) {
            debug!(attempt, "found valid state near invalid input");
            return true;
        }
    }

    out.copy_from(&anchor);
    false
}

/// Repairs the first and last states of `path` in place.
///
/// The first state is repaired within `start_radii`, the last within
/// `goal_radii` (skipped on paths with fewer than two vertices). Empty paths
/// are a no-op. Failures leave the affected state projected into bounds and
/// emit a warning.
///
/// # Example
///
/// ```
/// use cspace_motion::{fix_invalid_input_states, StateSampler};
/// use cspace_types::{State, StateComponent, StatePath, StateSpace};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let space = StateSpace::new(vec![
///     StateComponent::linear(0.0, 10.0, 1.0),
///     StateComponent::linear(0.0, 10.0, 1.0),
/// ]).unwrap();
///
/// let checker = |_: &State| true;
/// let mut sampler = StateSampler::new(&space, StdRng::seed_from_u64(7));
///
/// let mut path = StatePath::from_states(vec![
///     State::from_slice(&[-1.0, 5.0]),
///     State::from_slice(&[10.0, 5.0]),
/// ]);
///
/// let report = fix_invalid_input_states(
///     &checker, &mut sampler, &mut path, &[0.5, 0.5], &[0.5, 0.5], 20,
/// );
/// assert!(report.all_valid());
/// assert_eq!(path.first().unwrap().values(), &[0.0, 5.0]);
/// ```
pub fn fix_invalid_input_states<V, R>(
    checker: &V,
    sampler: &mut StateSampler<'_, R>,
    path: &mut StatePath,
    start_radii: &[f64],
    goal_radii: &[f64],
    attempts: usize,
) -> RepairReport
where
    V: ValidityChecker,
    R: Rng,
{
    let mut report = RepairReport {
        start: RepairOutcome::Untouched,
        goal: RepairOutcome::Untouched,
    };
    if path.is_empty() {
        return report;
    }

    report.start = repair_state_at(checker, sampler, path, 0, start_radii, attempts, "start");
    if path.len() >= 2 {
        let last = path.len() - 1;
        report.goal = repair_state_at(checker, sampler, path, last, goal_radii, attempts, "goal");
    }
    report
}

fn repair_state_at<V, R>(
    checker: &V,
    sampler: &mut StateSampler<'_, R>,
    path: &mut StatePath,
    index: usize,
    radii: &[f64],
    attempts: usize,
    role: &'static str,
) -> RepairOutcome
where
    V: ValidityChecker,
    R: Rng,
{
    let space = sampler.space();
    let state = &path.states()[index];

    let bounded = space.satisfies_bounds(state);
    if bounded && checker.is_valid(state) {
        return RepairOutcome::Untouched;
    }

    if bounded {
        info!(role, state = %state, "input state is not valid, attempting repair");
    } else {
        info!(role, state = %state, "input state is out of bounds, attempting repair");
    }

    let near = state.clone();
    let mut repaired = space.allocate_state();
    let found = search_valid_nearby(checker, sampler, &mut repaired, &near, radii, attempts);

    if let Some(slot) = path.get_mut(index) {
        slot.copy_from(&repaired);
    }

    if found {
        RepairOutcome::Repaired
    } else {
        warn!(role, attempts, "unable to repair input state");
        RepairOutcome::Failed
    }
}
