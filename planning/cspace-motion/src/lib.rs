//! Motion validation over configuration spaces.
//!
//! This crate turns the data model of `cspace-types` into the kinematic core
//! of a sampling-based planner: it subdivides edges at the space's
//! resolution, validates motions against an injected collision predicate,
//! samples states uniformly or near a reference, densifies paths, and
//! repairs start/goal states that arrive out of bounds or in collision.
//!
//! # Overview
//!
//! - **Subdivision** ([`EdgeSubdivision`]): reduces an edge to a grid of
//!   intermediate states, with wrapping axes stepped the short way round
//! - **Validation** ([`MotionValidator`]): bisection (midpoint-first) and
//!   incremental (witness-reporting) disciplines plus whole-path checks
//! - **Sampling** ([`StateSampler`]): uniform and neighborhood sampling with
//!   an injected random source
//! - **Interpolation** ([`interpolate_path`], [`edge_states`],
//!   [`motion_states`]): in-place densification and edge materialization
//! - **Repair** ([`fix_invalid_input_states`], [`search_valid_nearby`]):
//!   bounds projection plus nearby search for planner inputs
//!
//! # Quick Start
//!
//! ```
//! use cspace_motion::{interpolate_path, MotionValidator};
//! use cspace_types::{State, StateComponent, StatePath, StateSpace};
//!
//! let space = StateSpace::new(vec![
//!     StateComponent::linear(0.0, 10.0, 1.0),
//!     StateComponent::linear(0.0, 10.0, 1.0),
//! ]).unwrap();
//!
//! // A disk obstacle of radius 0.5 at (5, 0).
//! let checker = |s: &State| {
//!     let dx = s[0] - 5.0;
//!     let dy = s[1];
//!     dx * dx + dy * dy > 0.25
//! };
//! let validator = MotionValidator::new(&space, &checker);
//!
//! // The straight shot is blocked; going over the top is not.
//! let s1 = State::from_slice(&[0.0, 0.0]);
//! let s2 = State::from_slice(&[10.0, 0.0]);
//! assert!(!validator.check_motion(&s1, &s2));
//!
//! let mut path = StatePath::from_states(vec![
//!     State::from_slice(&[0.0, 0.0]),
//!     State::from_slice(&[5.0, 2.0]),
//!     State::from_slice(&[10.0, 0.0]),
//! ]);
//! assert!(validator.check_path(&path));
//!
//! // Densify for downstream consumers.
//! interpolate_path(&space, &mut path, 1.0);
//! assert!(path.len() > 3);
//! ```

#![doc(html_root_url = "https://docs.rs/cspace-motion/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod discretize;
pub mod interpolate;
pub mod repair;
pub mod sample;
pub mod validator;

// Re-export main types at crate root for convenience
pub use discretize::EdgeSubdivision;
pub use interpolate::{edge_states, interpolate_path, motion_states};
pub use repair::{fix_invalid_input_states, search_valid_nearby, RepairOutcome, RepairReport};
pub use sample::StateSampler;
pub use validator::{IncrementalCheck, MotionValidator};

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod integration_tests {
    use super::*;
    use cspace_types::{State, StateComponent, StatePath, StateSpace};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Repair a bad start state, then validate and densify the whole path.
    #[test]
    fn test_repair_then_validate_workflow() {
        let space = StateSpace::new(vec![
            StateComponent::linear(0.0, 10.0, 1.0),
            StateComponent::linear(0.0, 10.0, 1.0),
        ])
        .unwrap();

        let checker = |s: &State| {
            let dx = s[0] - 5.0;
            let dy = s[1];
            dx * dx + dy * dy > 0.25
        };
        let mut sampler = StateSampler::new(&space, StdRng::seed_from_u64(11));
        let validator = MotionValidator::new(&space, &checker);

        let mut path = StatePath::from_states(vec![
            State::from_slice(&[-0.5, 2.0]),
            State::from_slice(&[5.0, 2.0]),
            State::from_slice(&[10.0, 2.0]),
        ]);

        let report = fix_invalid_input_states(
            &checker,
            &mut sampler,
            &mut path,
            &[0.5, 0.5],
            &[0.5, 0.5],
            20,
        );
        assert!(report.all_valid());
        assert!(validator.check_path(&path));

        let before = path.len();
        interpolate_path(&space, &mut path, 1.0);
        assert!(path.len() >= before);
        assert!(validator.check_path(&path));
    }

    /// The two disciplines agree on validity across a spread of edges.
    #[test]
    fn test_disciplines_agree() {
        let space = StateSpace::new(vec![
            StateComponent::linear(0.0, 10.0, 0.5),
            StateComponent::linear(0.0, 10.0, 0.5),
        ])
        .unwrap();

        let checker = |s: &State| {
            let dx = s[0] - 4.0;
            let dy = s[1] - 6.0;
            dx * dx + dy * dy > 2.25
        };
        let validator = MotionValidator::new(&space, &checker);

        let edges = [
            ([0.0, 0.0], [10.0, 10.0]),
            ([0.0, 6.0], [10.0, 6.0]),
            ([0.0, 0.0], [10.0, 0.0]),
            ([2.0, 9.0], [9.0, 2.0]),
        ];

        for (a, b) in edges {
            let s1 = State::from_slice(&a);
            let s2 = State::from_slice(&b);
            if checker(&s1) {
                assert_eq!(
                    validator.check_motion(&s1, &s2),
                    validator.check_motion_incremental(&s1, &s2).is_valid(),
                    "disciplines disagree on edge {a:?} -> {b:?}"
                );
            }
        }
    }
}
