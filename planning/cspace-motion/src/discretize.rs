//! Edge subdivision.
//!
//! Reduces a continuous straight-line motion between two states to a finite
//! grid of intermediate states, spaced at or below each axis's resolution.
//! Everything downstream (validation, interpolation, shortcutting) walks the
//! grid this module produces.

use cspace_types::{State, StateSpace};
use nalgebra::DVector;

/// The discretization of one edge: a subdivision count and a per-axis step.
///
/// For an edge from `s1` to `s2` the grid state at index `k ∈ [0, count]` is
/// `s1 + k · step`. Index 0 is `s1` and index `count` reproduces `s2` within
/// floating-point tolerance (modulo 2π on wrapping axes, where the step
/// follows the shortest angular difference rather than the raw one).
///
/// # Example
///
/// ```
/// use cspace_motion::EdgeSubdivision;
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
/// let sub = EdgeSubdivision::compute(&space, &s1, &s2, 1.0);
/// assert_eq!(sub.count(), 10);
/// assert_eq!(sub.state_at(&s1, 4).values(), &[4.0, 0.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSubdivision {
    count: usize,
    step: DVector<f64>,
}

impl EdgeSubdivision {
    /// Subdivides the edge `(s1, s2)` at resolution factor `factor`.
    ///
    /// The per-axis delta is the space's shortest delta (so wrapping axes
    /// cross the wrap point when that is shorter), the count is the smallest
    /// number of equal steps keeping every axis at or below
    /// `factor · resolution`, and the step is `delta / count`.
    ///
    /// `factor` must lie in (0, 1]; 1 is the space's native resolution and
    /// smaller values densify. Checked with a debug assertion, as is
    /// dimension agreement between the space and both states.
    // TODO: step quaternion blocks by slerp instead of per-component
    // differences.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    // Truncation/sign loss: the ceiling of a non-negative finite ratio
    pub fn compute(space: &StateSpace, s1: &State, s2: &State, factor: f64) -> Self {
        debug_assert!(factor > 0.0 && factor <= 1.0);
        debug_assert_eq!(space.dimension(), s1.dimension());
        debug_assert_eq!(space.dimension(), s2.dimension());

        let dim = space.dimension();
        let mut diff = DVector::zeros(dim);
        for i in 0..dim {
            diff[i] = space.shortest_delta(i, s1[i], s2[i]);
        }

        let mut count = 1usize;
        for i in 0..dim {
            let per_axis =
                (diff[i].abs() / (factor * space.component(i).resolution())).ceil() as usize;
            count = count.max(per_axis);
        }

        let step = diff / count as f64;
        Self { count, step }
    }

    /// Returns the subdivision count. Always at least 1.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns the per-axis step vector.
    #[must_use]
    pub fn step(&self) -> &[f64] {
        self.step.as_slice()
    }

    /// Returns the grid state `from + k · step`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn state_at(&self, from: &State, k: usize) -> State {
        State::from_vector(from.vector() + &self.step * k as f64)
    }

    /// Writes the grid state `from + k · step` into `out`, reusing its
    /// storage. Used by the validators to avoid per-grid-point allocation.
    #[allow(clippy::cast_precision_loss)]
    pub fn write_state_at(&self, from: &State, k: usize, out: &mut State) {
        debug_assert_eq!(from.dimension(), out.dimension());
        let k = k as f64;
        for (i, value) in out.values_mut().iter_mut().enumerate() {
            *value = from[i] + k * self.step[i];
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cspace_types::StateComponent;
    use std::f64::consts::PI;

    fn planar_space() -> StateSpace {
        StateSpace::new(vec![
            StateComponent::linear(0.0, 10.0, 1.0),
            StateComponent::linear(0.0, 10.0, 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_corridor_count() {
        let space = planar_space();
        let s1 = State::from_slice(&[0.0, 0.0]);
        let s2 = State::from_slice(&[10.0, 0.0]);
        let sub = EdgeSubdivision::compute(&space, &s1, &s2, 1.0);
        assert_eq!(sub.count(), 10);
        assert_eq!(sub.step(), &[1.0, 0.0]);
    }

    #[test]
    fn test_factor_densifies() {
        let space = planar_space();
        let s1 = State::from_slice(&[0.0, 0.0]);
        let s2 = State::from_slice(&[10.0, 0.0]);
        let sub = EdgeSubdivision::compute(&space, &s1, &s2, 0.5);
        assert_eq!(sub.count(), 20);
        assert_relative_eq!(sub.step()[0], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_wrapping_axis_uses_short_way() {
        let space = StateSpace::new(vec![StateComponent::wrapping_angle(0.1)]).unwrap();
        let s1 = State::from_slice(&[3.0]);
        let s2 = State::from_slice(&[-3.0]);

        // The short way round is 2π − 6 ≈ 0.283, three steps at 0.1, not the
        // naive 6 rad sweep.
        let sub = EdgeSubdivision::compute(&space, &s1, &s2, 1.0);
        assert_eq!(sub.count(), 3);
        assert!(sub.step()[0] > 0.0);
        assert_relative_eq!(sub.step()[0], (2.0 * PI - 6.0) / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_identical_endpoints() {
        let space = planar_space();
        let s = State::from_slice(&[4.0, 4.0]);
        let sub = EdgeSubdivision::compute(&space, &s, &s, 1.0);
        assert_eq!(sub.count(), 1);
        assert_eq!(sub.step(), &[0.0, 0.0]);
        assert_eq!(sub.state_at(&s, 1), s);
    }

    #[test]
    fn test_step_within_resolution() {
        let space = StateSpace::new(vec![
            StateComponent::linear(0.0, 10.0, 0.7),
            StateComponent::linear(0.0, 10.0, 0.3),
        ])
        .unwrap();
        let s1 = State::from_slice(&[0.1, 9.2]);
        let s2 = State::from_slice(&[9.9, 0.4]);

        for &factor in &[1.0, 0.5, 0.25] {
            let sub = EdgeSubdivision::compute(&space, &s1, &s2, factor);
            for i in 0..2 {
                assert!(
                    sub.step()[i].abs() <= factor * space.component(i).resolution() + 1e-12,
                    "axis {i} step exceeds resolution at factor {factor}"
                );
            }
        }
    }

    #[test]
    fn test_finest_axis_dominates() {
        let space = StateSpace::new(vec![
            StateComponent::linear(0.0, 10.0, 1.0),
            StateComponent::linear(0.0, 10.0, 0.1),
        ])
        .unwrap();
        let s1 = State::from_slice(&[0.0, 0.0]);
        let s2 = State::from_slice(&[1.0, 1.0]);
        let sub = EdgeSubdivision::compute(&space, &s1, &s2, 1.0);
        assert_eq!(sub.count(), 10);
    }

    #[test]
    fn test_endpoint_closure_linear() {
        let space = planar_space();
        let s1 = State::from_slice(&[0.3, 7.1]);
        let s2 = State::from_slice(&[8.6, 2.2]);
        let sub = EdgeSubdivision::compute(&space, &s1, &s2, 1.0);
        let end = sub.state_at(&s1, sub.count());
        assert_relative_eq!(end[0], s2[0], epsilon = 1e-9);
        assert_relative_eq!(end[1], s2[1], epsilon = 1e-9);
    }

    #[test]
    fn test_endpoint_closure_wrapping_mod_two_pi() {
        let space = StateSpace::new(vec![StateComponent::wrapping_angle(0.1)]).unwrap();
        let s1 = State::from_slice(&[3.0]);
        let s2 = State::from_slice(&[-3.0]);
        let sub = EdgeSubdivision::compute(&space, &s1, &s2, 1.0);

        // Unwrapped addition runs past π; the endpoint matches s2 modulo 2π.
        let end = sub.state_at(&s1, sub.count());
        let wrapped = (end[0] - s2[0]).rem_euclid(2.0 * PI);
        assert!(wrapped < 1e-9 || (2.0 * PI - wrapped) < 1e-9);
    }

    #[test]
    fn test_write_state_at_matches_state_at() {
        let space = planar_space();
        let s1 = State::from_slice(&[1.0, 2.0]);
        let s2 = State::from_slice(&[7.0, 9.0]);
        let sub = EdgeSubdivision::compute(&space, &s1, &s2, 1.0);

        let mut scratch = space.allocate_state();
        for k in 0..=sub.count() {
            sub.write_state_at(&s1, k, &mut scratch);
            assert_eq!(scratch, sub.state_at(&s1, k));
        }
    }

    #[test]
    fn test_quaternion_slots_step_componentwise() {
        let mut components = Vec::new();
        components.extend(StateComponent::quaternion(0.5));
        let space = StateSpace::new(components).unwrap();

        let s1 = State::from_slice(&[0.0, 0.0, 0.0, 1.0]);
        let s2 = State::from_slice(&[1.0, 0.0, 0.0, 0.0]);
        let sub = EdgeSubdivision::compute(&space, &s1, &s2, 1.0);

        // Plain per-component differences at resolution 0.5.
        assert_eq!(sub.count(), 2);
        assert_relative_eq!(sub.step()[0], 0.5, epsilon = 1e-12);
        assert_relative_eq!(sub.step()[3], -0.5, epsilon = 1e-12);
    }
}
