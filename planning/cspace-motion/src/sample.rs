//! Uniform and neighborhood state sampling.

use std::f64::consts::PI;

use cspace_types::{State, StateSpace};
use rand::Rng;

/// Samples configurations from a space, writing into caller-provided states.
///
/// The sampler owns an injected random source, so tests can seed it and
/// concurrent callers hold independent instances. Quaternion blocks are
/// drawn as uniformly distributed unit quaternions (the subgroup-algorithm
/// construction from three uniform variates).
///
/// # Example
///
/// ```
/// use cspace_motion::StateSampler;
/// use cspace_types::{StateComponent, StateSpace};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let space = StateSpace::new(vec![
///     StateComponent::linear(0.0, 10.0, 1.0),
///     StateComponent::wrapping_angle(0.1),
/// ]).unwrap();
///
/// let mut sampler = StateSampler::new(&space, StdRng::seed_from_u64(7));
/// let mut state = space.allocate_state();
/// sampler.sample(&mut state);
///
/// assert!(space.satisfies_bounds(&state));
/// ```
pub struct StateSampler<'a, R> {
    space: &'a StateSpace,
    rng: R,
}

impl<'a, R: Rng> StateSampler<'a, R> {
    /// Creates a sampler over `space` drawing from `rng`.
    pub fn new(space: &'a StateSpace, rng: R) -> Self {
        Self { space, rng }
    }

    /// Returns the space this sampler draws from.
    #[must_use]
    pub const fn space(&self) -> &'a StateSpace {
        self.space
    }

    /// Fills `out` with a uniform sample.
    ///
    /// Linear and wrapping axes draw uniformly from their bounds; each
    /// quaternion block becomes a fresh uniform unit quaternion.
    pub fn sample(&mut self, out: &mut State) {
        debug_assert_eq!(self.space.dimension(), out.dimension());
        let mut i = 0;
        while i < self.space.dimension() {
            let component = self.space.component(i);
            if component.kind().is_quaternion() {
                self.write_quaternion(out, i);
                i += 4;
            } else {
                out[i] = uniform(&mut self.rng, component.min(), component.max());
                i += 1;
            }
        }
    }

    /// Fills `out` with a sample inside the box of half-width `rho` around
    /// `near`, intersected with the bounds.
    ///
    /// There is no notion of a neighborhood for orientations here:
    /// quaternion blocks are replaced by a fresh uniform quaternion
    /// regardless of `near`.
    ///
    /// # Example
    ///
    /// ```
    /// use cspace_motion::StateSampler;
    /// use cspace_types::{State, StateComponent, StateSpace};
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let space = StateSpace::new(vec![
    ///     StateComponent::linear(0.0, 10.0, 1.0),
    /// ]).unwrap();
    ///
    /// let mut sampler = StateSampler::new(&space, StdRng::seed_from_u64(7));
    /// let near = State::from_slice(&[5.0]);
    /// let mut out = space.allocate_state();
    ///
    /// sampler.sample_near(&mut out, &near, 0.5);
    /// assert!(out[0] >= 4.5 && out[0] <= 5.5);
    /// ```
    pub fn sample_near(&mut self, out: &mut State, near: &State, rho: f64) {
        debug_assert_eq!(self.space.dimension(), out.dimension());
        debug_assert_eq!(self.space.dimension(), near.dimension());
        let mut i = 0;
        while i < self.space.dimension() {
            let component = self.space.component(i);
            if component.kind().is_quaternion() {
                self.write_quaternion(out, i);
                i += 4;
            } else {
                out[i] = uniform_window(
                    &mut self.rng,
                    component.min(),
                    component.max(),
                    near[i],
                    rho,
                );
                i += 1;
            }
        }
    }

    /// Per-axis-radius variant of [`sample_near`](Self::sample_near).
    ///
    /// `radii` must have one entry per dimension (entries on quaternion
    /// slots are ignored).
    pub fn sample_near_radii(&mut self, out: &mut State, near: &State, radii: &[f64]) {
        debug_assert_eq!(self.space.dimension(), out.dimension());
        debug_assert_eq!(self.space.dimension(), near.dimension());
        debug_assert_eq!(self.space.dimension(), radii.len());
        let mut i = 0;
        while i < self.space.dimension() {
            let component = self.space.component(i);
            if component.kind().is_quaternion() {
                self.write_quaternion(out, i);
                i += 4;
            } else {
                out[i] = uniform_window(
                    &mut self.rng,
                    component.min(),
                    component.max(),
                    near[i],
                    radii[i],
                );
                i += 1;
            }
        }
    }

    /// Writes a uniform unit quaternion into the four slots starting at
    /// `head`.
    fn write_quaternion(&mut self, out: &mut State, head: usize) {
        let u1: f64 = self.rng.gen();
        let u2: f64 = self.rng.gen();
        let u3: f64 = self.rng.gen();
        let a = (1.0 - u1).sqrt();
        let b = u1.sqrt();
        let theta2 = 2.0 * PI * u2;
        let theta3 = 2.0 * PI * u3;
        out[head] = a * theta2.sin();
        out[head + 1] = a * theta2.cos();
        out[head + 2] = b * theta3.sin();
        out[head + 3] = b * theta3.cos();
    }
}

/// Uniform draw on `[lo, hi)`, degenerating to `lo` when the interval is a
/// point.
fn uniform<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// Uniform draw on the window `[near − rho, near + rho]` clipped to
/// `[min, max]`. When `near` lies outside the bounds far enough that the
/// window is empty, the nearest bound is returned.
fn uniform_window<R: Rng>(rng: &mut R, min: f64, max: f64, near: f64, rho: f64) -> f64 {
    let lo = min.max(near - rho);
    let hi = max.min(near + rho);
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo.min(hi).clamp(min, max)
    }
}
