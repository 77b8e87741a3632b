//! Seedable pseudo-random number generator (xorshift64).
//! Only used to pick initial headings; the simulation itself is deterministic.

use std::f32::consts::TAU;

#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform float in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        // Top 24 bits fill the f32 mantissa exactly.
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Uniform angle in [0, 2π).
    pub fn next_angle(&mut self) -> f32 {
        let angle = self.next_f32() * TAU;
        // Rounding can land exactly on 2π, which is the same heading as 0.
        if angle >= TAU { 0.0 } else { angle }
    }
}
