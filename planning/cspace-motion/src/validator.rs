//! Motion validation over edge subdivisions.
//!
//! Two disciplines cover the same grid. Bisection tests midpoints first,
//! which tends to hit a violation sooner when obstacles sit in the interior
//! of an edge, at the cost of losing the first-invalid witness. The
//! incremental discipline walks left to right and reports the last valid
//! grid state, which tree-based planners use to re-attach.
//!
//! Both assume the left endpoint is already valid; the right endpoint is
//! always checked first, before any interior work.

use std::collections::VecDeque;

use cspace_types::{State, StatePath, StateSpace, ValidityChecker};

use crate::discretize::EdgeSubdivision;

/// Outcome of the incremental (witness-reporting) discipline.
#[derive(Debug, Clone, PartialEq)]
pub enum IncrementalCheck {
    /// Every grid state on the edge is valid.
    Valid,

    /// The right endpoint itself is invalid; no interior state was tested,
    /// so there is no witness.
    EndpointInvalid,

    /// An interior grid state is invalid.
    Blocked {
        /// The last valid grid state before the violation.
        last_valid: State,
        /// Its position along the edge as a fraction in [0, 1).
        last_valid_time: f64,
    },
}

impl IncrementalCheck {
    /// Returns `true` if the whole motion is valid.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns the witness state and time, when one exists.
    #[must_use]
    pub const fn witness(&self) -> Option<(&State, f64)> {
        match self {
            Self::Blocked {
                last_valid,
                last_valid_time,
            } => Some((last_valid, *last_valid_time)),
            Self::Valid | Self::EndpointInvalid => None,
        }
    }
}

/// Decides whether straight-line motions are collision-free at the space's
/// resolution.
///
/// # Example
///
/// ```
/// use cspace_motion::MotionValidator;
/// use cspace_types::{State, StateComponent, StateSpace};
///
/// let space = StateSpace::new(vec![
///     StateComponent::linear(0.0, 10.0, 1.0),
///     StateComponent::linear(0.0, 10.0, 1.0),
/// ]).unwrap();
///
/// // A disk obstacle of radius 0.5 centered at (5, 0).
/// let checker = |s: &State| {
///     let dx = s[0] - 5.0;
///     let dy = s[1] - 0.0;
///     dx * dx + dy * dy > 0.25
/// };
/// let validator = MotionValidator::new(&space, &checker);
///
/// let s1 = State::from_slice(&[0.0, 0.0]);
/// let s2 = State::from_slice(&[10.0, 0.0]);
/// assert!(!validator.check_motion(&s1, &s2));
///
/// let s3 = State::from_slice(&[10.0, 5.0]);
/// assert!(validator.check_motion(&s1, &s3));
/// ```
pub struct MotionValidator<'a, V> {
    space: &'a StateSpace,
    checker: &'a V,
}

impl<'a, V: ValidityChecker> MotionValidator<'a, V> {
    /// Creates a validator over `space` with the injected validity predicate.
    #[must_use]
    pub const fn new(space: &'a StateSpace, checker: &'a V) -> Self {
        Self { space, checker }
    }

    /// Returns the space this validator subdivides in.
    #[must_use]
    pub const fn space(&self) -> &'a StateSpace {
        self.space
    }

    /// Checks the motion from `s1` to `s2` with the bisection discipline.
    ///
    /// `s1` is assumed valid. `s2` is tested first; the interior grid is
    /// then visited midpoint-first via a FIFO of index ranges, so a
    /// violation near the middle of the edge is found after few validity
    /// calls.
    #[must_use]
    pub fn check_motion(&self, s1: &State, s2: &State) -> bool {
        if !self.checker.is_valid(s2) {
            return false;
        }

        let sub = EdgeSubdivision::compute(self.space, s1, s2, 1.0);
        if sub.count() < 2 {
            return true;
        }

        let mut ranges: VecDeque<(usize, usize)> = VecDeque::new();
        ranges.push_back((1, sub.count() - 1));
        let mut scratch = self.space.allocate_state();

        while let Some((lo, hi)) = ranges.pop_front() {
            let mid = (lo + hi) / 2;
            sub.write_state_at(s1, mid, &mut scratch);
            if !self.checker.is_valid(&scratch) {
                return false;
            }
            if lo < mid {
                ranges.push_back((lo, mid - 1));
            }
            if mid < hi {
                ranges.push_back((mid + 1, hi));
            }
        }

        true
    }

    /// Checks the motion from `s1` to `s2` left to right, reporting the last
    /// valid grid state on failure.
    ///
    /// # Example
    ///
    /// ```
    /// use cspace_motion::{IncrementalCheck, MotionValidator};
    /// use cspace_types::{State, StateComponent, StateSpace};
    ///
    /// let space = StateSpace::new(vec![
    ///     StateComponent::linear(0.0, 10.0, 1.0),
    ///     StateComponent::linear(0.0, 10.0, 1.0),
    /// ]).unwrap();
    ///
    /// let checker = |s: &State| {
    ///     let dx = s[0] - 5.0;
    ///     s[1] != 0.0 || dx.abs() > 0.5
    /// };
    /// let validator = MotionValidator::new(&space, &checker);
    ///
    /// let s1 = State::from_slice(&[0.0, 0.0]);
    /// let s2 = State::from_slice(&[10.0, 0.0]);
    ///
    /// match validator.check_motion_incremental(&s1, &s2) {
    ///     IncrementalCheck::Blocked { last_valid, last_valid_time } => {
    ///         assert_eq!(last_valid.values(), &[4.0, 0.0]);
    ///         assert!((last_valid_time - 0.4).abs() < 1e-12);
    ///     }
    ///     other => panic!("expected a blocked motion, got {other:?}"),
    /// }
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn check_motion_incremental(&self, s1: &State, s2: &State) -> IncrementalCheck {
        if !self.checker.is_valid(s2) {
            return IncrementalCheck::EndpointInvalid;
        }

        let sub = EdgeSubdivision::compute(self.space, s1, s2, 1.0);
        let mut scratch = self.space.allocate_state();

        for j in 1..sub.count() {
            sub.write_state_at(s1, j, &mut scratch);
            if !self.checker.is_valid(&scratch) {
                return IncrementalCheck::Blocked {
                    last_valid: sub.state_at(s1, j - 1),
                    last_valid_time: (j - 1) as f64 / sub.count() as f64,
                };
            }
        }

        IncrementalCheck::Valid
    }

    /// Checks a whole path: its first state must be valid and every
    /// consecutive edge must pass [`check_motion`](Self::check_motion).
    ///
    /// Empty paths fail, deliberately surfacing misuse rather than being
    /// vacuously true.
    #[must_use]
    pub fn check_path(&self, path: &StatePath) -> bool {
        let Some(first) = path.first() else {
            return false;
        };
        if !self.checker.is_valid(first) {
            return false;
        }
        path.segments().all(|(a, b)| self.check_motion(a, b))
    }
}
