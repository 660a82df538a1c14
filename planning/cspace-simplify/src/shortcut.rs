//! Shortcutting passes over configuration-space paths.
//!
//! Both passes draw candidate vertex pairs, test the connecting chord with
//! the bisection validator, and splice out the bypassed interior when the
//! chord is free. Iterations that fail to shorten the path are empty steps;
//! a run of them terminates the pass early, so budgets bound work without
//! timers.

use cspace_motion::{interpolate_path, MotionValidator};
use cspace_types::{SimplifyConfig, StatePath, StateSpace, ValidityChecker};
use rand::Rng;
use tracing::debug;

/// Widest candidate pair, in edges, for close-vertex collapsing.
const CLOSE_WINDOW: usize = 4;

/// Shortens paths in place while keeping them valid.
///
/// The simplifier owns its random source, so concurrent callers hold
/// independent instances and tests can seed the draw sequence. Every
/// mutation preserves validity under the bisection discipline, and each
/// successful shortcut leaves the path no longer than before.
///
/// # Example
///
/// ```
/// use cspace_simplify::PathSimplifier;
/// use cspace_types::{SimplifyConfig, State, StatePath, StateComponent, StateSpace};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let space = StateSpace::new(vec![
///     StateComponent::linear(0.0, 10.0, 1.0),
///     StateComponent::linear(0.0, 10.0, 1.0),
/// ]).unwrap();
///
/// let checker = |_: &cspace_types::State| true;
/// let mut simplifier = PathSimplifier::new(&space, &checker, StdRng::seed_from_u64(7))
///     .with_config(
///         SimplifyConfig::default()
///             .with_max_steps(100)
///             .with_max_empty_steps(50),
///     );
///
/// let mut path = StatePath::from_states(vec![
///     State::from_slice(&[0.0, 0.0]),
///     State::from_slice(&[5.0, 0.0]),
///     State::from_slice(&[10.0, 0.0]),
/// ]);
///
/// assert!(simplifier.reduce_vertices(&mut path));
/// assert_eq!(path.len(), 2);
/// ```
pub struct PathSimplifier<'a, V, R> {
    validator: MotionValidator<'a, V>,
    config: SimplifyConfig,
    rng: R,
}

impl<'a, V: ValidityChecker, R: Rng> PathSimplifier<'a, V, R> {
    /// Creates a simplifier over `space` with the injected validity
    /// predicate and random source, using the default [`SimplifyConfig`].
    pub fn new(space: &'a StateSpace, checker: &'a V, rng: R) -> Self {
        Self {
            validator: MotionValidator::new(space, checker),
            config: SimplifyConfig::default(),
            rng,
        }
    }

    /// Replaces the budget configuration.
    #[must_use]
    pub fn with_config(mut self, config: SimplifyConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &SimplifyConfig {
        &self.config
    }

    /// Attempts random shortcuts between vertices up to a fraction of the
    /// path apart, splicing out the interior when the chord is free.
    ///
    /// Returns `true` if the path changed. Terminates on the step budget,
    /// on a streak of empty steps, or once only two vertices remain.
    pub fn reduce_vertices(&mut self, path: &mut StatePath) -> bool {
        if path.len() < 3 {
            return false;
        }

        let max_steps = resolve_budget(self.config.max_steps(), path.len());
        let max_empty_steps = resolve_budget(self.config.max_empty_steps(), path.len());
        let range_ratio = self.config.range_ratio();
        debug_assert!(range_ratio > 0.0 && range_ratio <= 1.0);

        let mut changed = false;
        let mut removed = 0;
        let mut steps = 0;
        let mut empty_steps = 0;

        while steps < max_steps && empty_steps < max_empty_steps && path.len() > 2 {
            steps += 1;
            empty_steps += 1;

            let count = path.len();
            let max_index = count - 1;
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            // Truncation/sign loss: a small positive index window
            let range = 1 + (0.5 + count as f64 * range_ratio).floor() as usize;

            let p1 = self.rng.gen_range(0..=max_index);
            let lo = p1.saturating_sub(range);
            let hi = (p1 + range).min(max_index);
            let mut p2 = self.rng.gen_range(lo..=hi);

            if p1.abs_diff(p2) < 2 {
                if p1 + 2 <= max_index {
                    p2 = p1 + 2;
                } else if p1 >= 2 {
                    p2 = p1 - 2;
                } else {
                    continue;
                }
            }
            let (i, j) = if p1 < p2 { (p1, p2) } else { (p2, p1) };

            if self
                .validator
                .check_motion(&path.states()[i], &path.states()[j])
            {
                path.splice_remove(i + 1..j);
                removed += j - i - 1;
                empty_steps = 0;
                changed = true;
            }
        }

        if changed {
            debug!(removed, steps, "random shortcutting removed vertices");
        }
        changed
    }

    /// Attempts shortcuts between vertices close along the path: `p2 = p1 +
    /// d` with `d` drawn from `[2, 4]`, clamped to the path.
    ///
    /// Returns `true` if the path changed. Same termination rules as
    /// [`reduce_vertices`](Self::reduce_vertices).
    pub fn collapse_close_vertices(&mut self, path: &mut StatePath) -> bool {
        if path.len() < 3 {
            return false;
        }

        let max_steps = resolve_budget(self.config.max_steps(), path.len());
        let max_empty_steps = resolve_budget(self.config.max_empty_steps(), path.len());

        let mut changed = false;
        let mut removed = 0;
        let mut steps = 0;
        let mut empty_steps = 0;

        while steps < max_steps && empty_steps < max_empty_steps && path.len() > 2 {
            steps += 1;
            empty_steps += 1;

            let max_index = path.len() - 1;
            let p1 = self.rng.gen_range(0..=max_index);
            if p1 + 2 > max_index {
                continue;
            }
            let window = CLOSE_WINDOW.min(max_index - p1);
            let p2 = p1 + self.rng.gen_range(2..=window);

            if self
                .validator
                .check_motion(&path.states()[p1], &path.states()[p2])
            {
                path.splice_remove(p1 + 1..p2);
                removed += p2 - p1 - 1;
                empty_steps = 0;
                changed = true;
            }
        }

        if changed {
            debug!(removed, steps, "close-vertex collapsing removed vertices");
        }
        changed
    }

    /// Runs the maximal pipeline: random shortcutting, densification at the
    /// native resolution, then random shortcutting again.
    ///
    /// Densifying first exposes shortcut endpoints between the original
    /// vertices, which the second pass can connect. The return value
    /// reflects shortcut success; the densification between the passes
    /// always runs.
    pub fn simplify_max(&mut self, path: &mut StatePath) -> bool {
        if path.len() < 3 {
            return false;
        }

        let mut changed = self.reduce_vertices(path);
        interpolate_path(self.validator.space(), path, 1.0);
        changed |= self.reduce_vertices(path);
        changed
    }
}

fn resolve_budget(configured: usize, vertex_count: usize) -> usize {
    if configured == 0 {
        vertex_count
    } else {
        configured
    }
}

/// Fraction of vertices removed between two snapshots of a path, in
/// [0, 1).
///
/// # Example
///
/// ```
/// use cspace_simplify::vertex_reduction_ratio;
/// use cspace_types::{State, StatePath};
///
/// let original = StatePath::from_states(vec![
///     State::from_slice(&[0.0]),
///     State::from_slice(&[1.0]),
///     State::from_slice(&[2.0]),
///     State::from_slice(&[3.0]),
/// ]);
/// let simplified = StatePath::from_states(vec![
///     State::from_slice(&[0.0]),
///     State::from_slice(&[3.0]),
/// ]);
///
/// assert!((vertex_reduction_ratio(&original, &simplified) - 0.5).abs() < 1e-12);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn vertex_reduction_ratio(original: &StatePath, simplified: &StatePath) -> f64 {
    if original.is_empty() || original.len() <= simplified.len() {
        return 0.0;
    }
    (original.len() - simplified.len()) as f64 / original.len() as f64
}

/// Length saved between two snapshots of a path under the space's metric.
/// Never negative.
#[must_use]
pub fn length_reduction(space: &StateSpace, original: &StatePath, simplified: &StatePath) -> f64 {
    let before = original.length(space);
    let after = simplified.length(space);
    if before <= after {
        0.0
    } else {
        before - after
    }
}
