//! Seedable source of uniform, exponential and fair-coin samples.
//!
//! A [`SampleStream`] owns one generator and is handed by `&mut` to every
//! estimator. Estimators only consume the next values; nothing rewinds or
//! reseeds a stream once it is running, so a series of estimates made from one
//! seed is reproducible end to end.

use bitvec::prelude::*;
use log::trace;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rand_distr::{Distribution, Standard};

use super::mt19937::Mt19937;
use crate::error::{Error, Result};

/// Uniform draw on `[0, 1)` with 53 bits of resolution, built from two
/// 32-bit words: `((a >> 5) * 2^26 + (b >> 6)) / 2^53`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unit53;

impl Distribution<f64> for Unit53 {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let a = (rng.next_u32() >> 5) as f64;
        let b = (rng.next_u32() >> 6) as f64;
        (a * 67_108_864.0 + b) / 9_007_199_254_740_992.0
    }
}

/// Exponential distribution sampled by inverse transform, `-ln(1 - u) / rate`.
#[derive(Debug, Clone, Copy)]
pub struct ExponentialSampler {
    rate: f64,
}

impl ExponentialSampler {
    /// Create a sampler; `rate` must be finite and positive.
    pub fn new(rate: f64) -> Result<Self> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(Error::invalid(format!(
                "exponential rate must be finite and positive, got {rate}"
            )));
        }
        Ok(Self { rate })
    }

    /// Rate parameter `λ`.
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Distribution<f64> for ExponentialSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u: f64 = Unit53.sample(rng);
        -(1.0 - u).ln() / self.rate
    }
}

/// Number of samples for exponent `k`, i.e. `10^k`.
///
/// `k` must be at least 1 and `10^k` must fit in `usize`.
pub fn sample_count(k: u32) -> Result<usize> {
    if k < 1 {
        return Err(Error::invalid(format!("k must be at least 1, got {k}")));
    }
    10usize
        .checked_pow(k)
        .ok_or_else(|| Error::invalid(format!("10^{k} samples overflows usize")))
}

/// A pseudo-random sample stream. Same generator state, same samples.
#[derive(Debug, Clone)]
pub struct SampleStream<R: RngCore = Mt19937> {
    rng: R,
}

/// Start a deterministic MT19937-backed stream.
pub fn set_seed(seed: u32) -> SampleStream {
    SampleStream::seeded(seed)
}

impl SampleStream<Mt19937> {
    /// MT19937 stream seeded with `init_genrand(seed)`.
    pub fn seeded(seed: u32) -> Self {
        trace!("seeding MT19937 sample stream with {seed}");
        Self::from_rng(Mt19937::new(seed))
    }
}

impl SampleStream<ChaCha20Rng> {
    /// ChaCha20-backed stream, portable across platforms and rand versions.
    pub fn chacha(seed: u64) -> Self {
        trace!("seeding ChaCha20 sample stream with {seed}");
        Self::from_rng(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> SampleStream<R> {
    /// Wrap an existing generator.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Draw `n` uniform samples on `[0, 1)`.
    pub fn uniform(&mut self, n: usize) -> Vec<f64> {
        trace!("drawing {n} uniform samples");
        (&mut self.rng).sample_iter(Unit53).take(n).collect()
    }

    /// Draw `n` exponential samples with the given rate.
    pub fn exponential(&mut self, rate: f64, n: usize) -> Result<Vec<f64>> {
        let dist = ExponentialSampler::new(rate)?;
        trace!("drawing {n} exponential samples (rate {rate})");
        Ok((&mut self.rng).sample_iter(dist).take(n).collect())
    }

    /// Draw `n` fair-coin bits.
    pub fn coin_flips(&mut self, n: usize) -> BitVec {
        trace!("drawing {n} coin flips");
        (&mut self.rng)
            .sample_iter::<bool, _>(Standard)
            .take(n)
            .collect()
    }

    /// Give back the underlying generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}
