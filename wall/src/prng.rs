//! Randomness sources for placement.
//!
//! Two sources with deliberately different lifetimes:
//!
//! - [`SeededRng`] is a linear-congruential stream. A layout pass builds one
//!   from the configured seed and drains it in item order, so the same seed
//!   and the same item list always reproduce the same layout.
//! - [`ambient_rotation`] draws from the thread-local OS-seeded generator and
//!   is used only when an item is first created (or explicitly re-tilted).
//!   It never touches a `SeededRng`, so creation order cannot leak into
//!   layout reproducibility.

#[cfg(test)]
#[path = "prng_test.rs"]
mod prng_test;

use rand::Rng;

use crate::consts::MAX_ROTATION_DEG;

const LCG_A: u64 = 9301;
const LCG_C: u64 = 49297;
const LCG_M: u64 = 233_280;

/// Seeded pseudo-random stream: `state = (state * A + C) mod M`.
///
/// Each instance owns its state; there is no shared or global counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Start a stream from `seed`. Seeds congruent modulo `M` produce the
    /// same stream.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { state: seed % LCG_M }
    }

    /// Independent stream for one item, a pure function of `(seed, id)`.
    #[must_use]
    pub fn for_item(seed: u64, id: u64) -> Self {
        Self::new(mix(seed ^ id.rotate_left(32)))
    }

    /// Next value in `[0, 1)`.
    #[allow(clippy::cast_precision_loss, clippy::should_implement_trait)]
    pub fn next(&mut self) -> f64 {
        self.state = (self.state * LCG_A + LCG_C) % LCG_M;
        self.state as f64 / LCG_M as f64
    }

    /// Next value in `[min, max)`.
    pub fn between(&mut self, min: f64, max: f64) -> f64 {
        min + self.next() * (max - min)
    }

    /// Next integer in `[min, max_inclusive]`.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn int_between(&mut self, min: i64, max_inclusive: i64) -> i64 {
        let v = self.between(min as f64, (max_inclusive + 1) as f64).floor() as i64;
        v.min(max_inclusive)
    }

    /// Tilt in degrees within `[-MAX_ROTATION_DEG, MAX_ROTATION_DEG)`.
    pub fn rotation(&mut self) -> f64 {
        self.between(-MAX_ROTATION_DEG, MAX_ROTATION_DEG)
    }
}

/// Creation-time tilt from ambient (non-seeded) randomness.
#[must_use]
pub fn ambient_rotation() -> f64 {
    rand::rng().random_range(-MAX_ROTATION_DEG..MAX_ROTATION_DEG)
}

// splitmix64 finalizer; spreads adjacent ids across the LCG state space.
fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
