//! π as the mean height of the quarter circle, `E[4·sqrt(1 - U²)]` with `U ~ U[0, 1)`.

use log::debug;
use rand::RngCore;

use super::monte_carlo_integration::monte_carlo_integration;
use super::sample_stream::{sample_count, SampleStream};
use super::Estimator;
use crate::error::Result;

/// Height of the unit quarter circle scaled by 4. Non-negative on `[0, 1]`.
#[inline]
pub fn quarter_circle_height(u: f64) -> f64 {
    4.0 * (1.0 - u * u).sqrt()
}

/// Estimate π from `10^k` uniform samples.
pub fn estimate_pi_uniform<R: RngCore>(stream: &mut SampleStream<R>, k: u32) -> Result<f64> {
    let n = sample_count(k)?;
    let estimate = monte_carlo_integration(stream, quarter_circle_height, 0.0, 1.0, n)?;
    debug!("uniform pi estimate: k={k} n={n} value={estimate}");
    Ok(estimate)
}

/// [`Estimator`] form of [`estimate_pi_uniform`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformPi;

impl Estimator for UniformPi {
    fn name(&self) -> &'static str {
        "uniform-pi"
    }

    fn estimate<R: RngCore>(&self, stream: &mut SampleStream<R>, k: u32) -> Result<f64> {
        estimate_pi_uniform(stream, k)
    }
}
