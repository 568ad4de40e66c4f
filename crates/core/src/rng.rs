//! RNG module - seeded deals
//!
//! A small LCG drives the Fisher-Yates shuffle of the deck so a fixed seed
//! always reproduces the same board.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero state would repeat c forever from the first step on
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // (a * state + c) mod 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform-ish value in `[0, max)`, `max > 0`.
    pub fn next_below(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_below((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_next_below_stays_in_range() {
        let mut rng = SimpleRng::new(3);
        for max in 1..200 {
            assert!(rng.next_below(max) < max);
        }
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = SimpleRng::new(42);
        let mut values: Vec<u32> = (0..144).collect();
        rng.shuffle(&mut values);
        assert_ne!(values, (0..144).collect::<Vec<_>>());
        values.sort_unstable();
        assert_eq!(values, (0..144).collect::<Vec<_>>());
    }
}
