//! Path densification and edge materialization.

use cspace_types::{State, StatePath, StateSpace};

use crate::discretize::EdgeSubdivision;

/// Densifies `path` in place to the given resolution factor.
///
/// Between every consecutive vertex pair the strictly interior grid states
/// of the edge's subdivision are inserted; the original vertices stay where
/// they were. Paths with fewer than two vertices are left unchanged.
///
/// `factor` must lie in (0, 1].
///
/// # Example
///
/// ```
/// use cspace_motion::interpolate_path;
/// use cspace_types::{State, StateComponent, StatePath, StateSpace};
///
/// let space = StateSpace::new(vec![
///     StateComponent::linear(0.0, 10.0, 1.0),
///     StateComponent::linear(0.0, 10.0, 1.0),
/// ]).unwrap();
///
/// let mut path = StatePath::from_states(vec![
///     State::from_slice(&[0.0, 0.0]),
///     State::from_slice(&[10.0, 0.0]),
/// ]);
///
/// interpolate_path(&space, &mut path, 1.0);
/// assert_eq!(path.len(), 11);
/// assert_eq!(path.states()[3].values(), &[3.0, 0.0]);
/// ```
pub fn interpolate_path(space: &StateSpace, path: &mut StatePath, factor: f64) {
    if path.len() < 2 {
        return;
    }

    let states = path.states();
    let mut dense: Vec<State> = Vec::with_capacity(states.len());

    for i in 0..states.len() - 1 {
        let s1 = &states[i];
        let s2 = &states[i + 1];
        dense.push(s1.clone());

        let sub = EdgeSubdivision::compute(space, s1, s2, factor);
        for j in 1..sub.count() {
            dense.push(sub.state_at(s1, j));
        }
    }
    dense.push(states[states.len() - 1].clone());

    path.replace_states(dense);
}

/// Materializes one edge at the native resolution: `s1`, the strictly
/// interior grid states, and `s2`.
#[must_use]
pub fn edge_states(space: &StateSpace, s1: &State, s2: &State) -> Vec<State> {
    let sub = EdgeSubdivision::compute(space, s1, s2, 1.0);
    let mut states = Vec::with_capacity(sub.count() + 1);
    states.push(s1.clone());
    for j in 1..sub.count() {
        states.push(sub.state_at(s1, j));
    }
    states.push(s2.clone());
    states
}

/// Fills `out` with the grid states of the edge `(s1, s2)` at the native
/// resolution, returning how many were written.
///
/// With `alloc` the vector is rebuilt to hold all `count + 1` grid states.
/// Without it, at most the vector's current length is populated: `s1`
/// first, then interior states, then `s2` if room remains.
///
/// # Example
///
/// ```
/// use cspace_motion::motion_states;
/// use cspace_types::{State, StateComponent, StateSpace};
///
/// let space = StateSpace::new(vec![
///     StateComponent::linear(0.0, 10.0, 1.0),
///     StateComponent::linear(0.0, 10.0, 1.0),
/// ]).unwrap();
///
/// let s1 = State::from_slice(&[0.0, 0.0]);
/// let s2 = State::from_slice(&[10.0, 0.0]);
///
/// let mut states = Vec::new();
/// let added = motion_states(&space, &s1, &s2, &mut states, true);
/// assert_eq!(added, 11);
/// assert_eq!(states.first().unwrap().values(), &[0.0, 0.0]);
/// assert_eq!(states.last().unwrap().values(), &[10.0, 0.0]);
/// ```
pub fn motion_states(
    space: &StateSpace,
    s1: &State,
    s2: &State,
    out: &mut Vec<State>,
    alloc: bool,
) -> usize {
    let sub = EdgeSubdivision::compute(space, s1, s2, 1.0);

    if alloc {
        out.clear();
        out.reserve(sub.count() + 1);
        out.push(s1.clone());
        for j in 1..sub.count() {
            out.push(sub.state_at(s1, j));
        }
        out.push(s2.clone());
        return out.len();
    }

    let capacity = out.len();
    let mut added = 0;
    if capacity > 0 {
        out[0] = s1.clone();
        added = 1;
    }
    for j in 1..sub.count() {
        if added >= capacity {
            break;
        }
        out[added] = sub.state_at(s1, j);
        added += 1;
    }
    if added < capacity {
        out[added] = s2.clone();
        added += 1;
    }
    added
}
