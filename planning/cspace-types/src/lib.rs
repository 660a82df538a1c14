//! Core types for configuration-space motion validation.
//!
//! This crate provides the data model shared by the motion-validation and
//! path-shortening crates: space descriptors, dense states, paths, and the
//! validity seam through which a collision backend is injected.
//!
//! # Overview
//!
//! - **Spaces**: per-dimension descriptors with bounds and discretization
//!   resolution ([`StateSpace`], [`StateComponent`], [`ComponentKind`])
//! - **States**: dense real vectors with value semantics ([`State`])
//! - **Paths**: owned vertex sequences with splice primitives ([`StatePath`])
//! - **Validity**: the injected collision predicate ([`ValidityChecker`])
//! - **Configuration**: shortcutting budgets ([`SimplifyConfig`])
//! - **Errors**: descriptor validation failures ([`SpaceError`])
//!
//! # Example
//!
//! ```
//! use cspace_types::{State, StateComponent, StatePath, StateSpace};
//!
//! // A planar space with a wrapping heading axis.
//! let space = StateSpace::new(vec![
//!     StateComponent::linear(0.0, 10.0, 1.0),
//!     StateComponent::linear(0.0, 10.0, 1.0),
//!     StateComponent::wrapping_angle(0.1),
//! ]).unwrap();
//!
//! let path = StatePath::from_states(vec![
//!     State::from_slice(&[0.0, 0.0, 3.0]),
//!     State::from_slice(&[1.0, 0.0, -3.0]),
//! ]);
//!
//! // The heading edge crosses the wrap point, so the path is short.
//! assert!(path.length(&space) < 2.0);
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enables serialization/deserialization for all types

#![doc(html_root_url = "https://docs.rs/cspace-types/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod config;
pub mod error;
pub mod path;
pub mod space;
pub mod state;
pub mod validity;

// Re-export main types at crate root for convenience
pub use config::SimplifyConfig;
pub use error::SpaceError;
pub use path::StatePath;
pub use space::{shortest_angular_distance, ComponentKind, StateComponent, StateSpace};
pub use state::State;
pub use validity::ValidityChecker;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod integration_tests {
    use super::*;

    /// The whole data model cooperates: build a space, populate a path,
    /// measure it, and mutate it the way the simplifier does.
    #[test]
    fn test_full_workflow_types() {
        let mut components = vec![
            StateComponent::linear(0.0, 10.0, 1.0),
            StateComponent::wrapping_angle(0.1),
        ];
        components.extend(StateComponent::quaternion(0.25));
        let space = StateSpace::new(components).unwrap();
        assert_eq!(space.dimension(), 6);

        let mut path = StatePath::empty();
        for x in 0..4 {
            let mut state = space.allocate_state();
            state[0] = f64::from(x);
            state[2] = 1.0; // identity-ish quaternion slot
            path.push(state);
        }
        assert_eq!(path.len(), 4);

        let before = path.length(&space);
        path.splice_remove(1..3);
        let after = path.length(&space);
        assert_eq!(path.len(), 2);
        assert!(after <= before + 1e-12);

        let checker = |state: &State| state[0] >= 0.0;
        assert!(path.iter().all(|s| checker.is_valid(s)));
    }

    #[test]
    fn test_config_and_errors_cooperate() {
        let config = SimplifyConfig::default().with_max_steps(50);
        assert_eq!(config.max_steps(), 50);

        let err = StateSpace::new(vec![]).unwrap_err();
        assert!(err.is_empty_space());
    }
}
