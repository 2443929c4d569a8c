//! Deterministic seed mixing and the single random stream threaded through level generation.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

/// Seeded stream shared by algorithm selection, carving, and entrance/goal sampling.
///
/// Every draw consumes exactly one `u64`, so the order of calls fully determines the output.
#[derive(Clone, Debug)]
pub struct LevelRng {
    inner: ChaCha8Rng,
}

impl LevelRng {
    pub fn from_seed(seed: u128) -> Self {
        Self { inner: ChaCha8Rng::from_seed(seed_key(seed)) }
    }

    /// Uniform index in `0..len`.
    pub fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "cannot sample from an empty range");
        (self.inner.next_u64() % len.max(1) as u64) as usize
    }

    pub fn coin(&mut self) -> bool {
        self.index(2) == 0
    }

    pub fn one_in(&mut self, denominator: u64) -> bool {
        self.inner.next_u64() % denominator.max(1) == 0
    }
}

pub fn derive_level_seed(run_seed: u128, depth: u32) -> u128 {
    let low = run_seed as u64;
    let high = (run_seed >> 64) as u64;
    let depth = u64::from(depth);
    let mixed_low = mix_seed(low ^ depth.wrapping_mul(0xBF58_476D_1CE4_E5B9));
    let mixed_high = mix_seed(high ^ mixed_low ^ depth.wrapping_mul(0x94D0_49BB_1331_11EB));
    (u128::from(mixed_high) << 64) | u128::from(mixed_low)
}

fn seed_key(seed: u128) -> [u8; 32] {
    let low = seed as u64;
    let high = (seed >> 64) as u64;
    let first_mix = mix_seed(low ^ 0x9E37_79B9_7F4A_7C15);
    let second_mix = mix_seed(high ^ first_mix);

    let mut key = [0_u8; 32];
    for (chunk, word) in key.chunks_exact_mut(8).zip([low, high, first_mix, second_mix]) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    key
}

pub(crate) fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_stays_inside_requested_bounds() {
        let mut rng = LevelRng::from_seed(12_345);
        for len in 1..50 {
            assert!(rng.index(len) < len);
        }
    }

    #[test]
    fn same_seed_produces_same_stream() {
        let mut left = LevelRng::from_seed(84_620_216_499_580_564_730_520_055_512_755_805_833);
        let mut right = LevelRng::from_seed(84_620_216_499_580_564_730_520_055_512_755_805_833);
        for _ in 0..256 {
            assert_eq!(left.index(1_000), right.index(1_000));
        }
    }

    #[test]
    fn high_seed_bits_change_the_stream() {
        let mut low_only = LevelRng::from_seed(1);
        let mut with_high = LevelRng::from_seed(1 | (1_u128 << 100));
        let left: Vec<usize> = (0..8).map(|_| low_only.index(usize::MAX)).collect();
        let right: Vec<usize> = (0..8).map(|_| with_high.index(usize::MAX)).collect();
        assert_ne!(left, right, "bits above 64 must feed the key");
    }

    #[test]
    fn seed_one_coin_flips_are_pinned() {
        let mut rng = LevelRng::from_seed(1);
        let draws: Vec<usize> = (0..4).map(|_| rng.index(2)).collect();
        assert_eq!(draws, vec![1, 1, 0, 1], "update only when the stream definition changes");
    }

    #[test]
    fn level_seed_changes_when_inputs_change() {
        let baseline = derive_level_seed(99, 2);
        assert_ne!(baseline, derive_level_seed(98, 2));
        assert_ne!(baseline, derive_level_seed(99, 3));
        assert_ne!(baseline, derive_level_seed(99 | (1 << 90), 2));
        assert_eq!(baseline, derive_level_seed(99, 2));
    }
}
