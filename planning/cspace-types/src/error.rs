//! Error types for configuration-space setup.
//!
//! Runtime motion checks report plain booleans or outcome enums; errors are
//! reserved for descriptor validation, which happens once when a
//! [`StateSpace`](crate::StateSpace) is built.

/// Errors raised while validating a space descriptor.
///
/// # Example
///
/// ```
/// use cspace_types::{SpaceError, StateComponent, StateSpace};
///
/// let err = StateSpace::new(vec![StateComponent::linear(1.0, 0.0, 0.1)]).unwrap_err();
/// assert!(err.is_invalid_bounds());
/// assert!(err.to_string().contains("bounds"));
/// ```
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SpaceError {
    /// The descriptor has no components.
    #[error("a state space needs at least one component")]
    EmptySpace,

    /// A bounded component has inverted or non-finite bounds.
    #[error("component {index} has invalid bounds [{min}, {max}]")]
    InvalidBounds {
        /// The offending axis.
        index: usize,
        /// The declared lower bound.
        min: f64,
        /// The declared upper bound.
        max: f64,
    },

    /// A component's resolution is zero, negative, or non-finite.
    #[error("component {index} has invalid resolution {resolution}")]
    InvalidResolution {
        /// The offending axis.
        index: usize,
        /// The declared resolution.
        resolution: f64,
    },

    /// A run of quaternion slots is not a multiple of four long.
    #[error("quaternion block starting at component {index} is truncated")]
    TruncatedQuaternion {
        /// The first slot of the incomplete block.
        index: usize,
    },

    /// A state or radius vector does not match the space dimension.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// The space dimension.
        expected: usize,
        /// The offered dimension.
        actual: usize,
    },
}

impl SpaceError {
    /// Returns `true` for [`SpaceError::EmptySpace`].
    #[must_use]
    pub const fn is_empty_space(&self) -> bool {
        matches!(self, Self::EmptySpace)
    }

    /// Returns `true` for [`SpaceError::InvalidBounds`].
    #[must_use]
    pub const fn is_invalid_bounds(&self) -> bool {
        matches!(self, Self::InvalidBounds { .. })
    }

    /// Returns `true` for [`SpaceError::InvalidResolution`].
    #[must_use]
    pub const fn is_invalid_resolution(&self) -> bool {
        matches!(self, Self::InvalidResolution { .. })
    }

    /// Returns `true` for [`SpaceError::TruncatedQuaternion`].
    #[must_use]
    pub const fn is_truncated_quaternion(&self) -> bool {
        matches!(self, Self::TruncatedQuaternion { .. })
    }

    /// Returns `true` for [`SpaceError::DimensionMismatch`].
    #[must_use]
    pub const fn is_dimension_mismatch(&self) -> bool {
        matches!(self, Self::DimensionMismatch { .. })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_space_display() {
        let error = SpaceError::EmptySpace;
        assert!(error.to_string().contains("at least one component"));
        assert!(error.is_empty_space());
    }

    #[test]
    fn test_invalid_bounds_display() {
        let error = SpaceError::InvalidBounds {
            index: 2,
            min: 1.0,
            max: -1.0,
        };
        let msg = error.to_string();
        assert!(msg.contains("component 2"));
        assert!(msg.contains("bounds"));
        assert!(error.is_invalid_bounds());
        assert!(!error.is_invalid_resolution());
    }

    #[test]
    fn test_invalid_resolution_display() {
        let error = SpaceError::InvalidResolution {
            index: 0,
            resolution: 0.0,
        };
        assert!(error.to_string().contains("resolution"));
        assert!(error.is_invalid_resolution());
    }

    #[test]
    fn test_truncated_quaternion_display() {
        let error = SpaceError::TruncatedQuaternion { index: 3 };
        let msg = error.to_string();
        assert!(msg.contains("quaternion"));
        assert!(msg.contains("3"));
        assert!(error.is_truncated_quaternion());
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let error = SpaceError::DimensionMismatch {
            expected: 4,
            actual: 3,
        };
        let msg = error.to_string();
        assert!(msg.contains("expected 4"));
        assert!(msg.contains("got 3"));
        assert!(error.is_dimension_mismatch());
    }

    #[test]
    fn test_error_debug() {
        let error = SpaceError::EmptySpace;
        assert!(format!("{error:?}").contains("EmptySpace"));
    }
}
