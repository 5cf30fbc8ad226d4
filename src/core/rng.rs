//! Deterministic seeding and shuffling for board layouts.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed key produces the same board on every platform
//! - **Integer-defined**: The generator is pure wrapping `u32` arithmetic; the
//!   only floating-point step is the final `u32 / 2^32` conversion, which is
//!   exact in `f64`
//! - **Replayable re-shuffles**: Each manual shuffle derives its own sub-seed
//!   from the session seed and the shuffle ordinal
//!
//! Not suitable for anything security related.
//!
//! ## Usage
//!
//! ```
//! use rain_connections::core::rng::{hash_to_seed, shuffle_stable, Mulberry32};
//!
//! let seed = hash_to_seed("2026-02-17");
//! let board = shuffle_stable(&[1, 2, 3, 4, 5], &mut Mulberry32::new(seed));
//!
//! // Same seed, same permutation
//! let again = shuffle_stable(&[1, 2, 3, 4, 5], &mut Mulberry32::new(seed));
//! assert_eq!(board, again);
//! ```

use rand::{RngCore, SeedableRng};

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Hash a seed key to a 32-bit seed (FNV-1a over UTF-16 code units).
///
/// Equal keys always give equal seeds. Collisions are acceptable.
#[must_use]
pub fn hash_to_seed(key: &str) -> u32 {
    key.encode_utf16().fold(FNV_OFFSET_BASIS, |hash, unit| {
        (hash ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}

/// Sub-seed for the `ordinal`-th manual re-shuffle of a session.
#[must_use]
pub fn reshuffle_seed(session_seed: u32, ordinal: u32) -> u32 {
    hash_to_seed(&format!("{session_seed}:{ordinal}"))
}

/// Mulberry32: a tiny 32-bit state generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    const INCREMENT: u32 = 0x6d2b_79f5;

    /// Create a generator from a 32-bit seed.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(Self::INCREMENT);
        let t = self.state;
        let mut x = (t ^ (t >> 15)).wrapping_mul(t | 1);
        x ^= x.wrapping_add((x ^ (x >> 7)).wrapping_mul(x | 61));
        x ^ (x >> 14)
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        Mulberry32::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(Mulberry32::next_u32(self));
        let hi = u64::from(Mulberry32::next_u32(self));
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = Mulberry32::next_u32(self).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

/// Fisher–Yates shuffle driven by successive `next_f64` draws.
///
/// Returns a new vector; the input order is left untouched. For a given input
/// order and generator state the permutation is fully determined.
#[must_use]
pub fn shuffle_stable<T: Clone>(items: &[T], rng: &mut Mulberry32) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        // i + 1 <= 2^21 keeps the product exact in f64
        let j = (rng.next_f64() * (i + 1) as f64).floor() as usize;
        out.swap(i, j);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_hash_known_values() {
        assert_eq!(hash_to_seed(""), 2_166_136_261);
        assert_eq!(hash_to_seed("a"), 3_826_002_220);
        assert_eq!(hash_to_seed("seed-1"), 3_597_787_782);
        assert_eq!(hash_to_seed("2026-02-17"), 3_295_802_811);
    }

    #[test]
    fn test_hash_uses_utf16_units() {
        // U+00E9 is a single UTF-16 unit but two UTF-8 bytes
        assert_eq!(hash_to_seed("é"), 1_812_687_940);
    }

    #[test]
    fn test_reshuffle_seed() {
        assert_eq!(reshuffle_seed(3_597_787_782, 1), 4_264_852_291);
        assert_eq!(reshuffle_seed(3_597_787_782, 1), hash_to_seed("3597787782:1"));
    }

    #[test]
    fn test_mulberry_known_sequence() {
        let mut rng = Mulberry32::new(0);
        assert_eq!(rng.next_u32(), 1_144_304_738);
        assert_eq!(rng.next_u32(), 1_416_247);
        assert_eq!(rng.next_u32(), 958_946_056);

        let mut rng = Mulberry32::new(42);
        assert_eq!(rng.next_u32(), 2_581_720_956);
        assert_eq!(rng.next_u32(), 1_925_393_290);
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = Mulberry32::new(hash_to_seed("same"));
        let mut rng2 = Mulberry32::new(hash_to_seed("same"));

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = Mulberry32::new(1);
        let mut rng2 = Mulberry32::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.next_u32()).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.next_u32()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_f64_in_unit_interval() {
        let mut rng = Mulberry32::new(7);
        for _ in 0..1000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_float_draw_matches_integer_form() {
        let mut a = Mulberry32::new(99);
        let mut b = Mulberry32::new(99);
        for n in 1..=16u64 {
            let float_j = (a.next_f64() * n as f64).floor() as u64;
            let int_j = (u64::from(b.next_u32()) * n) >> 32;
            assert_eq!(float_j, int_j);
        }
    }

    #[test]
    fn test_shuffle_known_permutation() {
        let ids: Vec<char> = "abcdefghijklmnop".chars().collect();
        let mut rng = Mulberry32::new(hash_to_seed("seed-1"));
        let out: String = shuffle_stable(&ids, &mut rng).into_iter().collect();
        assert_eq!(out, "lcpgjadkiebfmohn");
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let data: Vec<u32> = (1..=10).collect();
        let mut rng = Mulberry32::new(42);

        let mut shuffled = shuffle_stable(&data, &mut rng);
        assert_eq!(data, (1..=10).collect::<Vec<_>>());
        assert_ne!(shuffled, data);

        shuffled.sort_unstable();
        assert_eq!(shuffled, data);
    }

    #[test]
    fn test_shuffle_trivial_inputs() {
        let mut rng = Mulberry32::new(1);
        assert!(shuffle_stable::<u8>(&[], &mut rng).is_empty());
        assert_eq!(shuffle_stable(&[5], &mut rng), vec![5]);
    }

    #[test]
    fn test_rng_core_interop() {
        let mut direct = Mulberry32::new(5);
        let mut via_trait = Mulberry32::from_seed(5u32.to_le_bytes());

        let expected = direct.next_u32();
        assert_eq!(RngCore::next_u32(&mut via_trait), expected);

        let roll: u8 = via_trait.gen_range(1..=6);
        assert!((1..=6).contains(&roll));
    }

    #[test]
    fn test_fill_bytes_partial_chunk() {
        let mut rng = Mulberry32::new(3);
        let mut expected_rng = Mulberry32::new(3);
        let mut buf = [0u8; 6];
        rng.fill_bytes(&mut buf);

        let first = expected_rng.next_u32().to_le_bytes();
        let second = expected_rng.next_u32().to_le_bytes();
        assert_eq!(&buf[..4], &first);
        assert_eq!(&buf[4..], &second[..2]);
    }
}
