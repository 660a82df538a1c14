//! Path shortening for configuration-space paths.
//!
//! This crate post-processes paths produced by a sampling-based planner:
//! it attempts shortcuts between path vertices, validates each candidate
//! chord with the bisection motion validator, and splices out bypassed
//! vertices. Shortening is local and length-monotone; no global optimality
//! is claimed.
//!
//! # Overview
//!
//! - **Random shortcutting** ([`PathSimplifier::reduce_vertices`]): chords
//!   between vertices up to a fraction of the path apart
//! - **Close-vertex collapsing**
//!   ([`PathSimplifier::collapse_close_vertices`]): chords spanning a few
//!   edges only
//! - **Maximal simplification** ([`PathSimplifier::simplify_max`]):
//!   shortcut, densify, shortcut again
//! - **Metrics** ([`vertex_reduction_ratio`], [`length_reduction`])
//!
//! # Quick Start
//!
//! ```
//! use cspace_simplify::PathSimplifier;
//! use cspace_types::{SimplifyConfig, State, StateComponent, StatePath, StateSpace};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let space = StateSpace::new(vec![
//!     StateComponent::linear(0.0, 10.0, 1.0),
//!     StateComponent::linear(0.0, 10.0, 1.0),
//! ]).unwrap();
//!
//! // Free space: a dog-legged path straightens to its endpoints.
//! let checker = |_: &State| true;
//! let mut simplifier = PathSimplifier::new(&space, &checker, StdRng::seed_from_u64(3))
//!     .with_config(
//!         SimplifyConfig::default()
//!             .with_max_steps(500)
//!             .with_max_empty_steps(50),
//!     );
//!
//! let mut path = StatePath::from_states(vec![
//!     State::from_slice(&[0.0, 0.0]),
//!     State::from_slice(&[2.0, 4.0]),
//!     State::from_slice(&[7.0, 4.0]),
//!     State::from_slice(&[10.0, 0.0]),
//! ]);
//!
//! simplifier.simplify_max(&mut path);
//! assert_eq!(path.len(), 2);
//! ```

#![doc(html_root_url = "https://docs.rs/cspace-simplify/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod shortcut;

// Re-export main types at crate root for convenience
pub use shortcut::{length_reduction, vertex_reduction_ratio, PathSimplifier};
