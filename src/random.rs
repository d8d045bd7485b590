//! Seeded pseudo-random number generation.
//!
//! A text seed is hashed with xmur3 into four 32-bit words which seed an
//! sfc32 generator. All arithmetic is wrapping `u32`, so a given seed yields
//! the same stream on every platform.

use serde::{Deserialize, Serialize};

const HASH_INIT: u32 = 1779033703;
const HASH_MULTIPLIER: u32 = 3432918353;
const FINALIZE_MULTIPLIER_A: u32 = 2246822507;
const FINALIZE_MULTIPLIER_B: u32 = 3266489909;

/// 2^32, the divisor turning a raw sfc32 word into a unit value
const UNIT_SCALE: f64 = 4294967296.0;

/// Streaming xmur3 hash, yielding one seed word per call.
struct SeedHasher {
    h: u32,
}

impl SeedHasher {
    fn new(seed: &str) -> Self {
        let units: Vec<u16> = seed.encode_utf16().collect();
        let mut h = HASH_INIT ^ units.len() as u32;
        for unit in units {
            h = (h ^ u32::from(unit)).wrapping_mul(HASH_MULTIPLIER);
            h = h.rotate_left(13);
        }
        Self { h }
    }

    fn next_word(&mut self) -> u32 {
        let mut h = self.h;
        h = (h ^ (h >> 16)).wrapping_mul(FINALIZE_MULTIPLIER_A);
        h = (h ^ (h >> 13)).wrapping_mul(FINALIZE_MULTIPLIER_B);
        h ^= h >> 16;
        self.h = h;
        h
    }
}

/// A reproducible stream of unit values in `[0, 1)`.
///
/// Each generation run owns its own stream. Two streams built from the same
/// seed are independent but produce identical draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomStream {
    a: u32,
    b: u32,
    c: u32,
    d: u32,
}

impl RandomStream {
    /// Hash `seed` into a fresh stream. The empty string is a valid seed.
    pub fn new(seed: &str) -> Self {
        let mut hasher = SeedHasher::new(seed);
        let a = hasher.next_word();
        let b = hasher.next_word();
        let c = hasher.next_word();
        let d = hasher.next_word();
        Self::from_words(a, b, c, d)
    }

    fn from_words(a: u32, b: u32, c: u32, d: u32) -> Self {
        Self { a, b, c, d }
    }

    /// Advance the sfc32 state and return the raw 32-bit output.
    fn step(&mut self) -> u32 {
        let mut t = self.a.wrapping_add(self.b);
        self.a = self.b ^ (self.b >> 9);
        self.b = self.c.wrapping_add(self.c << 3);
        self.c = self.c.rotate_left(21);
        self.d = self.d.wrapping_add(1);
        t = t.wrapping_add(self.d);
        self.c = self.c.wrapping_add(t);
        t
    }

    /// Draw the next unit value in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        f64::from(self.step()) / UNIT_SCALE
    }

    /// Draw a Gaussian offset along a side of length `dimension`.
    ///
    /// The distribution is centred on `dist.mu * dimension`, clamped into
    /// `[0, dimension]` and floored. Consumes exactly two draws.
    pub fn gaussian_offset(&mut self, dist: GaussianOptions, dimension: i32) -> i32 {
        let u0 = self.next_unit();
        let u1 = self.next_unit();
        let scaled = GaussianOptions {
            mu: dist.mu * f64::from(dimension),
            sigma: dist.sigma,
        };
        let sample = unit_pair_to_gaussian(scaled, u0, u1);
        clamp(0.0, f64::from(dimension), sample).floor() as i32
    }

    /// Draw an index in `0..len`. Always consumes one draw, even when `len` is 0.
    pub fn pick_index(&mut self, len: usize) -> usize {
        (self.next_unit() * len as f64).floor() as usize
    }
}

/// Parameters of a normal distribution, in units of the dimension it is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaussianOptions {
    pub mu: f64,
    pub sigma: f64,
}

impl GaussianOptions {
    pub fn new(mu: f64, sigma: f64) -> Self {
        Self { mu, sigma }
    }
}

/// Map a unit value onto `[min, max]`.
pub fn unit_to_float_range(min: f64, max: f64, value: f64) -> f64 {
    value * (max - min) + min
}

/// Map a unit value onto `[min, max]` and floor it.
pub fn unit_to_int_range(min: f64, max: f64, value: f64) -> i32 {
    unit_to_float_range(min, max, value).floor() as i32
}

pub fn unit_to_boolean(value: f64) -> bool {
    value > 0.5
}

/// Box-Muller transform of two unit values into a normal sample.
pub fn unit_pair_to_gaussian(dist: GaussianOptions, u0: f64, u1: f64) -> f64 {
    let z0 = (-2.0 * u0.ln()).sqrt() * (std::f64::consts::PI * 2.0 * u1).cos();
    z0 * dist.sigma + dist.mu
}

/// Clamp `value` into `[min, max]`. NaN clamps to `min`.
pub fn clamp(min: f64, max: f64, value: f64) -> f64 {
    if value.is_nan() || value < min {
        return min;
    }
    if value > max {
        return max;
    }
    value
}
