//! Random number generation for map generation
//!
//! Uses a seeded ChaCha RNG so that a seed always reproduces the same map.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Map random number generator
///
/// Every generation entry point draws from one of these, passed in by the
/// caller. Note: RNG state is not serialized, only the seed it was built from.
#[derive(Debug, Clone)]
pub struct MapRng {
    rng: ChaCha8Rng,
    seed: u64,
}

// Custom serialization - only serialize seed, recreate RNG on deserialize
impl Serialize for MapRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MapRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(MapRng::new(seed))
    }
}

impl MapRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns 0..n-1
    ///
    /// Returns 0 if n is 0.
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Returns 1..n
    ///
    /// Returns 0 if n is 0.
    pub fn rnd(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(1..=n)
    }

    /// Returns lo..=hi, or `lo` when the range is empty
    pub fn range(&mut self, lo: usize, hi: usize) -> usize {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    /// Unbiased coin flip
    pub fn coin(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    /// Choose a random element from a slice
    ///
    /// Only the first `u32::MAX` items can be picked.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        let len = u32::try_from(items.len()).unwrap_or(u32::MAX);
        if len == 0 {
            return None;
        }
        items.get(self.rn2(len) as usize)
    }
}

impl Default for MapRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rn2_bounds() {
        let mut rng = MapRng::new(42);
        for _ in 0..1000 {
            let n = rng.rn2(10);
            assert!(n < 10);
        }
    }

    #[test]
    fn test_rnd_bounds() {
        let mut rng = MapRng::new(42);
        for _ in 0..1000 {
            let n = rng.rnd(100);
            assert!((1..=100).contains(&n));
        }
    }

    #[test]
    fn test_range_inclusive() {
        let mut rng = MapRng::new(7);
        let mut seen_hi = false;
        let mut seen_lo = false;
        for _ in 0..1000 {
            let n = rng.range(2, 4);
            assert!((2..=4).contains(&n));
            seen_lo |= n == 2;
            seen_hi |= n == 4;
        }
        assert!(seen_lo && seen_hi);
        assert_eq!(rng.range(5, 3), 5);
    }

    #[test]
    fn test_choose_reaches_every_item() {
        let mut rng = MapRng::new(11);
        let items = ['a', 'b', 'c'];
        let mut seen = [false; 3];
        for _ in 0..300 {
            let picked = rng.choose(&items).unwrap();
            let idx = items.iter().position(|c| c == picked).unwrap();
            seen[idx] = true;
        }
        assert_eq!(seen, [true; 3]);
        assert_eq!(rng.choose(&[9]), Some(&9));
    }

    #[test]
    fn test_reproducibility() {
        let mut rng1 = MapRng::new(42);
        let mut rng2 = MapRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.rn2(100), rng2.rn2(100));
            assert_eq!(rng1.coin(), rng2.coin());
        }
    }

    #[test]
    fn test_zero_inputs() {
        let mut rng = MapRng::new(42);
        assert_eq!(rng.rn2(0), 0);
        assert_eq!(rng.rnd(0), 0);
        assert!(rng.choose::<u8>(&[]).is_none());
    }

    #[test]
    fn test_serde_keeps_seed() {
        let rng = MapRng::new(1234);
        let json = serde_json::to_string(&rng).unwrap();
        assert_eq!(json, "1234");
        let restored: MapRng = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.seed(), 1234);
    }
}
