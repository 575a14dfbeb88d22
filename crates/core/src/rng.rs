//! RNG module - seeded tile shuffling
//!
//! Bank order for each level is a Fisher-Yates permutation of the tile indices,
//! drawn from a small LCG so a given seed always produces the same bank orders
//! (useful for tests and for replaying a session).

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Use the high bits; the low bits of an LCG have short periods.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice in place using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Return a shuffled copy of `indices`, leaving the input untouched.
    pub fn shuffled(&mut self, indices: &[usize]) -> Vec<usize> {
        let mut out = indices.to_vec();
        self.shuffle(&mut out);
        out
    }

    /// Shuffled bank order for a level with `n` tiles.
    pub fn shuffled_range(&mut self, n: usize) -> Vec<usize> {
        let mut out: Vec<usize> = (0..n).collect();
        self.shuffle(&mut out);
        out
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
