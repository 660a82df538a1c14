//! Configuration-space descriptors.
//!
//! A [`StateSpace`] is an ordered sequence of [`StateComponent`] records, one
//! per state dimension. Each component describes how its axis behaves: a
//! plain bounded interval, an angle that wraps at ±π, or one slot of a unit
//! quaternion block. The descriptor carries everything the motion layer needs
//! to subdivide edges (per-axis resolution), repair states (bounds), and
//! measure distances (per-axis metric).
//!
//! # Example
//!
//! ```
//! use cspace_types::{StateComponent, StateSpace};
//!
//! // A planar space: two linear axes on [0, 10] at resolution 1.
//! let space = StateSpace::new(vec![
//!     StateComponent::linear(0.0, 10.0, 1.0),
//!     StateComponent::linear(0.0, 10.0, 1.0),
//! ]).unwrap();
//!
//! assert_eq!(space.dimension(), 2);
//! ```

use std::f64::consts::PI;

use crate::error::SpaceError;
use crate::state::State;

/// Normalizes the signed difference `to - from` into (−π, π].
///
/// This is the shortest rotation taking the angle `from` onto the angle `to`,
/// used as the per-axis delta on wrapping axes.
///
/// # Example
///
/// ```
/// use cspace_types::shortest_angular_distance;
///
/// // Going from 3 rad to -3 rad is a short hop across the wrap point,
/// // not a 6 rad sweep.
/// let d = shortest_angular_distance(3.0, -3.0);
/// assert!((d - (2.0 * std::f64::consts::PI - 6.0)).abs() < 1e-12);
/// ```
#[must_use]
pub fn shortest_angular_distance(from: f64, to: f64) -> f64 {
    let raw = to - from;
    PI - (PI - raw).rem_euclid(2.0 * PI)
}

/// How a single state dimension behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComponentKind {
    /// A bounded real interval with the ordinary Euclidean metric.
    Linear,

    /// An angle in radians with native range [−π, π).
    ///
    /// Distances along this axis use the shortest signed angular difference,
    /// so an edge from 3 rad to −3 rad crosses the wrap point instead of
    /// sweeping almost a full turn.
    WrappingAngle,

    /// One slot of a four-slot unit-quaternion block.
    ///
    /// The first slot of each block is the head; the remaining three are not
    /// described independently. Samplers and steppers treat the quartet as
    /// one unit, and bounds are meaningless on these slots.
    Quaternion,
}

impl ComponentKind {
    /// Returns `true` for quaternion slots.
    #[must_use]
    pub const fn is_quaternion(self) -> bool {
        matches!(self, Self::Quaternion)
    }
}

/// Per-dimension metadata: kind, bounds, and discretization resolution.
///
/// The resolution is the largest distance, in the axis's own metric, allowed
/// between adjacent discrete samples along an edge.
///
/// # Example
///
/// ```
/// use cspace_types::{ComponentKind, StateComponent};
///
/// let c = StateComponent::linear(-1.0, 1.0, 0.05);
/// assert_eq!(c.kind(), ComponentKind::Linear);
/// assert!((c.resolution() - 0.05).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateComponent {
    /// Axis behavior.
    kind: ComponentKind,
    /// Inclusive lower bound (meaningless on quaternion slots).
    min: f64,
    /// Inclusive upper bound (meaningless on quaternion slots).
    max: f64,
    /// Maximum per-step distance along this axis.
    resolution: f64,
}

impl StateComponent {
    /// Creates a linear component on `[min, max]`.
    #[must_use]
    pub const fn linear(min: f64, max: f64, resolution: f64) -> Self {
        Self {
            kind: ComponentKind::Linear,
            min,
            max,
            resolution,
        }
    }

    /// Creates a wrapping angular component with native range [−π, π).
    #[must_use]
    pub const fn wrapping_angle(resolution: f64) -> Self {
        Self {
            kind: ComponentKind::WrappingAngle,
            min: -PI,
            max: PI,
            resolution,
        }
    }

    /// Creates the four slots of a unit-quaternion block.
    ///
    /// Returning the whole quartet keeps blocks from being built truncated;
    /// splice the array into the component list.
    ///
    /// # Example
    ///
    /// ```
    /// use cspace_types::{StateComponent, StateSpace};
    ///
    /// let mut components = vec![StateComponent::linear(0.0, 1.0, 0.1)];
    /// components.extend(StateComponent::quaternion(0.2));
    ///
    /// let space = StateSpace::new(components).unwrap();
    /// assert_eq!(space.dimension(), 5);
    /// ```
    #[must_use]
    pub const fn quaternion(resolution: f64) -> [Self; 4] {
        let slot = Self {
            kind: ComponentKind::Quaternion,
            min: -1.0,
            max: 1.0,
            resolution,
        };
        [slot; 4]
    }

    /// Returns the axis kind.
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        self.kind
    }

    /// Returns the inclusive lower bound.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Returns the inclusive upper bound.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Returns the per-step resolution.
    #[must_use]
    pub const fn resolution(&self) -> f64 {
        self.resolution
    }
}

/// A validated configuration-space descriptor.
///
/// Construction checks the descriptor once; afterwards the motion layer can
/// rely on well-formed bounds, strictly positive resolutions, and complete
/// quaternion blocks.
///
/// # Example
///
/// ```
/// use cspace_types::{StateComponent, StateSpace};
///
/// let space = StateSpace::new(vec![
///     StateComponent::linear(0.0, 10.0, 1.0),
///     StateComponent::wrapping_angle(0.1),
/// ]).unwrap();
///
/// let a = space.allocate_state();
/// assert_eq!(a.dimension(), 2);
/// assert!(space.satisfies_bounds(&a));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateSpace {
    components: Vec<StateComponent>,
}

impl StateSpace {
    /// Builds a space from per-dimension components.
    ///
    /// # Errors
    ///
    /// - [`SpaceError::EmptySpace`] if no components are given.
    /// - [`SpaceError::InvalidBounds`] if a linear or wrapping component has
    ///   `min > max` or non-finite bounds.
    /// - [`SpaceError::InvalidResolution`] if any resolution is not a
    ///   strictly positive finite number.
    /// - [`SpaceError::TruncatedQuaternion`] if a run of quaternion slots is
    ///   not a multiple of four long.
    pub fn new(components: Vec<StateComponent>) -> Result<Self, SpaceError> {
        if components.is_empty() {
            return Err(SpaceError::EmptySpace);
        }

        for (index, component) in components.iter().enumerate() {
            if !(component.resolution.is_finite() && component.resolution > 0.0) {
                return Err(SpaceError::InvalidResolution {
                    index,
                    resolution: component.resolution,
                });
            }
            if !component.kind.is_quaternion()
                && !(component.min.is_finite()
                    && component.max.is_finite()
                    && component.min <= component.max)
            {
                return Err(SpaceError::InvalidBounds {
                    index,
                    min: component.min,
                    max: component.max,
                });
            }
        }

        // Quaternion slots must come in complete quartets.
        let mut i = 0;
        while i < components.len() {
            if components[i].kind.is_quaternion() {
                let run_start = i;
                while i < components.len() && components[i].kind.is_quaternion() {
                    i += 1;
                }
                if (i - run_start) % 4 != 0 {
                    return Err(SpaceError::TruncatedQuaternion { index: run_start });
                }
            } else {
                i += 1;
            }
        }

        Ok(Self { components })
    }

    /// Returns the state dimension `D`.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.components.len()
    }

    /// Returns the component describing axis `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= dimension()`.
    #[must_use]
    pub fn component(&self, index: usize) -> &StateComponent {
        &self.components[index]
    }

    /// Returns all components in axis order.
    #[must_use]
    pub fn components(&self) -> &[StateComponent] {
        &self.components
    }

    /// Returns a zero-filled state of this space's dimension.
    #[must_use]
    pub fn allocate_state(&self) -> State {
        State::zeros(self.dimension())
    }

    /// Returns the signed per-axis delta from `a` to `b` on axis `index`.
    ///
    /// Linear axes return `b - a`. Wrapping axes return the shortest signed
    /// angular difference in (−π, π]. Quaternion slots return the plain
    /// difference; blocks are stepped componentwise, so this value is only
    /// meaningful to the stepper, not as a rotation metric.
    ///
    /// # Example
    ///
    /// ```
    /// use cspace_types::{StateComponent, StateSpace};
    ///
    /// let space = StateSpace::new(vec![StateComponent::wrapping_angle(0.1)]).unwrap();
    /// let d = space.shortest_delta(0, 3.0, -3.0);
    /// assert!(d > 0.0 && d < 0.3);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `index >= dimension()`.
    #[must_use]
    pub fn shortest_delta(&self, index: usize, a: f64, b: f64) -> f64 {
        match self.components[index].kind {
            ComponentKind::WrappingAngle => shortest_angular_distance(a, b),
            ComponentKind::Linear | ComponentKind::Quaternion => b - a,
        }
    }

    /// Returns `true` if every bounded axis of `state` lies inside its
    /// inclusive bounds. Quaternion slots are exempt.
    #[must_use]
    pub fn satisfies_bounds(&self, state: &State) -> bool {
        debug_assert_eq!(self.dimension(), state.dimension());
        self.components
            .iter()
            .zip(state.values())
            .all(|(component, &value)| {
                component.kind.is_quaternion()
                    || (value >= component.min && value <= component.max)
            })
    }

    /// Clips every bounded axis of `state` into its bounds in place.
    /// Quaternion slots are left untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use cspace_types::{State, StateComponent, StateSpace};
    ///
    /// let space = StateSpace::new(vec![
    ///     StateComponent::linear(0.0, 10.0, 1.0),
    ///     StateComponent::linear(0.0, 10.0, 1.0),
    /// ]).unwrap();
    ///
    /// let mut state = State::from_slice(&[-1.0, 5.0]);
    /// space.clamp_to_bounds(&mut state);
    /// assert_eq!(state.values(), &[0.0, 5.0]);
    /// ```
    pub fn clamp_to_bounds(&self, state: &mut State) {
        debug_assert_eq!(self.dimension(), state.dimension());
        for (component, value) in self.components.iter().zip(state.values_mut()) {
            if !component.kind.is_quaternion() {
                *value = value.clamp(component.min, component.max);
            }
        }
    }

    /// Returns the wrapped-Euclidean distance between two states: the L2 norm
    /// of the per-axis deltas from [`shortest_delta`](Self::shortest_delta).
    ///
    /// # Example
    ///
    /// ```
    /// use cspace_types::{State, StateComponent, StateSpace};
    ///
    /// let space = StateSpace::new(vec![
    ///     StateComponent::linear(0.0, 10.0, 1.0),
    ///     StateComponent::linear(0.0, 10.0, 1.0),
    /// ]).unwrap();
    ///
    /// let a = State::from_slice(&[0.0, 0.0]);
    /// let b = State::from_slice(&[3.0, 4.0]);
    /// assert!((space.distance(&a, &b) - 5.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn distance(&self, a: &State, b: &State) -> f64 {
        debug_assert_eq!(self.dimension(), a.dimension());
        debug_assert_eq!(self.dimension(), b.dimension());
        (0..self.dimension())
            .map(|i| {
                let d = self.shortest_delta(i, a[i], b[i]);
                d * d
            })
            .sum::<f64>()
            .sqrt()
    }
}
