//! π from fair coin flips.
//!
//! A run of `m` coin flips `b_1..b_m` read as the binary fraction
//! `0.b_1 b_2 ... b_m` is a uniform draw on `[0, 1)` with resolution `2^-m`.
//! One long bit stream is cut into consecutive `m`-bit chunks, each chunk is
//! converted to a fraction, and the fractions are split evenly into x and y
//! coordinates. The share of points strictly inside the unit circle
//! approaches `π / 4`.

use bitvec::prelude::*;
use log::debug;
use rand::RngCore;

use super::sample_stream::{sample_count, SampleStream};
use super::Estimator;
use crate::error::{Error, Result};

/// Bits per binary fraction.
pub const BITS_PER_FRACTION: usize = 30;

/// Value of `bits` as a binary fraction, `Σ b_i · 2^-i` with `i` starting at 1.
///
/// Exact for up to 53 bits.
pub fn bits_to_fraction(bits: &BitSlice) -> f64 {
    let mut weight = 1.0;
    let mut value = 0.0;
    for bit in bits.iter().by_vals() {
        weight *= 0.5;
        if bit {
            value += weight;
        }
    }
    value
}

/// Convert each consecutive `chunk_len`-bit chunk of `bits` into a fraction,
/// keeping chunk order.
pub fn fractions_from_bits(bits: &BitSlice, chunk_len: usize) -> Result<Vec<f64>> {
    if chunk_len == 0 {
        return Err(Error::invalid("chunk length must be positive"));
    }
    if bits.len() % chunk_len != 0 {
        return Err(Error::invalid(format!(
            "bit stream of length {} does not split into {chunk_len}-bit chunks",
            bits.len()
        )));
    }
    Ok(bits.chunks_exact(chunk_len).map(bits_to_fraction).collect())
}

/// `4 · hits / points`, where a hit is a point with `x² + y² < 1`.
///
/// Points on the circle itself are not hits.
pub fn estimate_pi_from_points(xs: &[f64], ys: &[f64]) -> Result<f64> {
    if xs.len() != ys.len() {
        return Err(Error::invalid(format!(
            "coordinate count mismatch: {} x values, {} y values",
            xs.len(),
            ys.len()
        )));
    }
    if xs.is_empty() {
        return Err(Error::invalid("at least one point is required"));
    }

    let hits = xs
        .iter()
        .zip(ys)
        .filter(|&(x, y)| x * x + y * y < 1.0)
        .count();
    Ok(4.0 * hits as f64 / xs.len() as f64)
}

/// Coin-flip π estimator with a configurable fraction width.
#[derive(Debug, Clone, Copy)]
pub struct CoinFlipPi {
    /// Coin flips per fraction
    pub bits_per_fraction: usize,
}

impl Default for CoinFlipPi {
    fn default() -> Self {
        Self {
            bits_per_fraction: BITS_PER_FRACTION,
        }
    }
}

impl CoinFlipPi {
    /// Estimate π from `n_points` fractions: the first half are x-coordinates,
    /// the second half y-coordinates. `n_points` must be positive and even.
    pub fn estimate_points<R: RngCore>(
        &self,
        stream: &mut SampleStream<R>,
        n_points: usize,
    ) -> Result<f64> {
        if n_points == 0 || n_points % 2 != 0 {
            return Err(Error::invalid(format!(
                "n_points must be a positive even integer, got {n_points}"
            )));
        }
        let total_bits = n_points.checked_mul(self.bits_per_fraction).ok_or_else(|| {
            Error::invalid(format!(
                "{n_points} points of {} bits overflows usize",
                self.bits_per_fraction
            ))
        })?;

        let bits = stream.coin_flips(total_bits);
        let fractions = fractions_from_bits(&bits, self.bits_per_fraction)?;
        let (xs, ys) = fractions.split_at(n_points / 2);
        let estimate = estimate_pi_from_points(xs, ys)?;
        debug!("coin-flip pi estimate: n_points={n_points} value={estimate}");
        Ok(estimate)
    }
}

impl Estimator for CoinFlipPi {
    fn name(&self) -> &'static str {
        "coin-flip-pi"
    }

    /// Uses `10^k` points, i.e. `2 · 10^k` fractions.
    fn estimate<R: RngCore>(&self, stream: &mut SampleStream<R>, k: u32) -> Result<f64> {
        let points = sample_count(k)?;
        let n_points = points
            .checked_mul(2)
            .ok_or_else(|| Error::invalid(format!("2 * 10^{k} overflows usize")))?;
        self.estimate_points(stream, n_points)
    }
}

/// Estimate π from `n_points` 30-bit coin-flip fractions.
pub fn estimate_pi_coinflip<R: RngCore>(
    stream: &mut SampleStream<R>,
    n_points: usize,
) -> Result<f64> {
    CoinFlipPi::default().estimate_points(stream, n_points)
}
