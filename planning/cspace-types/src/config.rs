//! Configuration for path simplification.

/// Budget and range settings for the shortcutting loops.
///
/// # Example
///
/// ```
/// use cspace_types::SimplifyConfig;
///
/// let config = SimplifyConfig::default()
///     .with_max_steps(100)
///     .with_max_empty_steps(10)
///     .with_range_ratio(0.5);
///
/// assert_eq!(config.max_steps(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimplifyConfig {
    /// Total shortcut attempts per call. `0` means one attempt per current
    /// path vertex.
    max_steps: usize,
    /// Consecutive no-progress attempts before giving up. `0` means one per
    /// current path vertex.
    max_empty_steps: usize,
    /// Fraction of the vertex count within which random shortcut pairs are
    /// drawn, in (0, 1].
    range_ratio: f64,
}

impl SimplifyConfig {
    /// Creates the default configuration.
    ///
    /// Defaults:
    /// - `max_steps`: 0 (one attempt per path vertex)
    /// - `max_empty_steps`: 5
    /// - `range_ratio`: 0.2
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_steps: 0,
            max_empty_steps: 5,
            range_ratio: 0.2,
        }
    }

    /// Sets the total attempt budget. `0` means the current vertex count.
    #[must_use]
    pub const fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Sets the consecutive empty-step bound. `0` means the current vertex
    /// count.
    #[must_use]
    pub const fn with_max_empty_steps(mut self, max_empty_steps: usize) -> Self {
        self.max_empty_steps = max_empty_steps;
        self
    }

    /// Sets the shortcut range ratio, in (0, 1].
    #[must_use]
    pub const fn with_range_ratio(mut self, range_ratio: f64) -> Self {
        self.range_ratio = range_ratio;
        self
    }

    /// Returns the total attempt budget.
    #[must_use]
    pub const fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Returns the consecutive empty-step bound.
    #[must_use]
    pub const fn max_empty_steps(&self) -> usize {
        self.max_empty_steps
    }

    /// Returns the shortcut range ratio.
    #[must_use]
    pub const fn range_ratio(&self) -> f64 {
        self.range_ratio
    }
}

impl Default for SimplifyConfig {
    fn default() -> Self {
        Self::new()
    }
}
