//! Seeded pseudo-random numbers and the deck shuffles built on them.
//!
//! The generator is a pure function over fractions in `[0, 1)`: `random(x)`
//! yields the next value of the sequence and feeding that value back in
//! continues it. A whole game is reproducible from its integer seed.

use serde::{Deserialize, Serialize};

pub const RANDOM_MODULUS: u64 = 2_147_483_647;
const RANDOM_MULTIPLIER: u64 = 48_271;
const RANDOM_INCREMENT: u64 = 12_345;

const SEED_MIX: u64 = 7_919;
const INDEX_MIX: u64 = 3_333;
const INDEX_OFFSET: u64 = 2_727;

/// Computes `((A * seed * M + B) mod M) / M`.
///
/// `seed` is snapped to the nearest multiple of `1 / M` first, so the
/// arithmetic runs on integers below `2^53` and repeated application never
/// loses precision.
pub fn random(seed: f64) -> f64 {
    to_fraction(step(to_lattice(seed)))
}

/// In-place shuffle: walks `i` from the back, mixing `i` into the running
/// generator state to get each sub-seed and swapping with
/// `j = floor(random(sub) * (i + 1))`.
///
/// The state is carried from one index to the next, so every position sees
/// a different multiple of the seed.
pub fn shuffle<T>(items: &mut [T], seed: u32) {
    let mut state = seed_state(seed);
    for i in (1..items.len()).rev() {
        state = step(index_seed(state, i));
        let j = scale(to_fraction(state), i + 1);
        items.swap(i, j);
    }
}

/// Copying shuffle: repeatedly draws a random element out of a working copy
/// and appends it to the result.
pub fn shuffle_copy<T: Clone>(items: &[T], seed: u32) -> Vec<T> {
    let mut rng = RngState::from_seed(seed);
    let mut remaining = items.to_vec();
    let mut out = Vec::with_capacity(remaining.len());
    while !remaining.is_empty() {
        let idx = rng.next_index(remaining.len());
        out.push(remaining.remove(idx));
    }
    out
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RngState {
    seed: u32,
    value: f64,
}

impl RngState {
    pub fn from_seed(seed: u32) -> Self {
        Self {
            seed,
            value: to_fraction(seed_state(seed)),
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn next_fraction(&mut self) -> f64 {
        self.value = random(self.value);
        self.value
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn next_index(&mut self, len: usize) -> usize {
        let fraction = self.next_fraction();
        scale(fraction, len)
    }

    pub fn shuffle<T>(&self, items: &mut [T]) {
        shuffle(items, self.seed);
    }
}

fn seed_state(seed: u32) -> u64 {
    (SEED_MIX * u64::from(seed) + INDEX_OFFSET) % RANDOM_MODULUS
}

fn index_seed(state: u64, index: usize) -> u64 {
    (state + INDEX_MIX * index as u64) % RANDOM_MODULUS
}

fn to_lattice(seed: f64) -> u64 {
    let scaled = (seed * RANDOM_MODULUS as f64).round() as i64;
    scaled.rem_euclid(RANDOM_MODULUS as i64) as u64
}

fn to_fraction(state: u64) -> f64 {
    state as f64 / RANDOM_MODULUS as f64
}

fn step(state: u64) -> u64 {
    (RANDOM_MULTIPLIER * state + RANDOM_INCREMENT) % RANDOM_MODULUS
}

fn scale(fraction: f64, len: usize) -> usize {
    ((fraction * len as f64).floor() as usize).min(len.saturating_sub(1))
}
