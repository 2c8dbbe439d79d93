//! 32-bit Mersenne Twister (MT19937).
//!
//! The generator is seeded with the classic `init_genrand` routine, so a given
//! `u32` seed yields the same word sequence as other MT19937 implementations
//! that use single-integer seeding (for instance the legacy NumPy
//! `RandomState`). Together with [`Unit53`](super::sample_stream::Unit53) this
//! lets seeded runs reproduce published reference numbers exactly.
//!
//! The generator is **not** cryptographically secure; use a
//! [`ChaCha20Rng`](rand_chacha::ChaCha20Rng)-backed stream when that matters.

use rand_core::{impls, Error, RngCore, SeedableRng};

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

/// MT19937 state: 624 words plus the read position.
#[derive(Clone)]
pub struct Mt19937 {
    state: [u32; N],
    index: usize,
}

impl Mt19937 {
    /// Create a generator seeded with `init_genrand(seed)`.
    pub fn new(seed: u32) -> Self {
        let mut state = [0u32; N];
        state[0] = seed;
        for i in 1..N {
            let prev = state[i - 1];
            state[i] = 1_812_433_253u32
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        Self { state, index: N }
    }

    /// Regenerate all 624 words in place.
    fn twist(&mut self) {
        for i in 0..N {
            let y = (self.state[i] & UPPER_MASK) | (self.state[(i + 1) % N] & LOWER_MASK);
            let mut next = self.state[(i + M) % N] ^ (y >> 1);
            if y & 1 != 0 {
                next ^= MATRIX_A;
            }
            self.state[i] = next;
        }
        self.index = 0;
    }
}

impl std::fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mt19937")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl RngCore for Mt19937 {
    fn next_u32(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }
        let mut y = self.state[self.index];
        self.index += 1;

        // Tempering
        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^= y >> 18;
        y
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mt19937 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    /// Seeds with `init_genrand` on the low 32 bits of `state`, so
    /// `seed_from_u64(s)` and `new(s as u32)` produce the same stream.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_outputs() {
        // First outputs of the reference implementation for init_genrand(5489).
        let mut rng = Mt19937::new(5489);
        let expected = [3_499_211_612u32, 581_869_302, 3_890_346_734, 3_586_334_585];
        for &value in &expected {
            assert_eq!(rng.next_u32(), value);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Mt19937::new(42);
        let mut b = Mt19937::from_seed(42u32.to_le_bytes());
        for _ in 0..2000 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_seed_from_u64_matches_new() {
        let mut a = Mt19937::new(0);
        let mut b = Mt19937::seed_from_u64(0);
        for _ in 0..700 {
            assert_eq!(a.next_u32(), b.next_u32());
        }

        let mut c = Mt19937::new(9);
        let mut d = Mt19937::seed_from_u64((1u64 << 32) | 9);
        assert_eq!(c.next_u32(), d.next_u32());
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = Mt19937::new(0);
        let mut b = Mt19937::new(1);
        let same = (0..100).filter(|_| a.next_u32() == b.next_u32()).count();
        assert!(same < 5);
    }

    #[test]
    fn test_next_u64_combines_two_words() {
        let mut words = Mt19937::new(7);
        let lo = words.next_u32() as u64;
        let hi = words.next_u32() as u64;

        let mut wide = Mt19937::new(7);
        assert_eq!(wide.next_u64(), (hi << 32) | lo);
    }
}
