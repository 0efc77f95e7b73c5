//! RNG module - deterministic randomness for dealing decks
//!
//! Provides a small seeded LCG plus an unbiased bounded draw and a
//! Fisher-Yates shuffle on top of it. Same seed, same sequence of decks.

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

    /// Generate a uniformly distributed value in `[0, bound)`.
    ///
    /// Multiplies into the high bits (the low bits of an LCG cycle with a short
    /// period) and rejects the sliver of outputs that would bias small values.
    pub fn next_below(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0, "bound must be positive");
        let bound = bound.max(1);
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let wide = (self.next_u32() as u64) * (bound as u64);
            if (wide as u32) >= threshold {
                return (wide >> 32) as u32;
            }
        }
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_below((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
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
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_below_stays_in_range() {
        let mut rng = SimpleRng::new(7);
        for bound in 1..=20u32 {
            for _ in 0..200 {
                assert!(rng.next_below(bound) < bound);
            }
        }
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = SimpleRng::new(99);
        let mut items: Vec<u8> = (0..14).collect();
        rng.shuffle(&mut items);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..14).collect::<Vec<u8>>());
    }

    #[test]
    fn test_shuffle_positions_are_uniform() {
        const N: usize = 14;
        const TRIALS: usize = 28_000;

        let mut rng = SimpleRng::new(2024);
        let mut counts = [[0u32; N]; N];
        for _ in 0..TRIALS {
            let mut items: [usize; N] = std::array::from_fn(|i| i);
            rng.shuffle(&mut items);
            for (pos, &item) in items.iter().enumerate() {
                counts[item][pos] += 1;
            }
        }

        // Expected 2000 per (item, position); standard deviation is about 43.
        let expected = (TRIALS / N) as u32;
        let tolerance = expected / 5;
        for (item, row) in counts.iter().enumerate() {
            for (pos, &count) in row.iter().enumerate() {
                assert!(
                    count.abs_diff(expected) <= tolerance,
                    "item {} landed at position {} {} times (expected ~{})",
                    item,
                    pos,
                    count,
                    expected
                );
            }
        }
    }
}
