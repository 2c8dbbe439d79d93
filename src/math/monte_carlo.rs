//! Monte Carlo estimators.
//!
//! This module provides:
//! - [`SampleStream`] - a seedable source of uniform, exponential and coin-flip samples
//! - π from the mean height of the quarter circle ([`estimate_pi_uniform`])
//! - π from coin-flip binary fractions and the unit-circle hit ratio ([`estimate_pi_coinflip`])
//! - an integral estimated with exponential importance sampling ([`estimate_integral_exponential`])
//! - estimate and error series over sample counts `10^k` ([`EstimateSeries`], [`ErrorSeries`])
//!
//! # Examples
//!
//! ```rust
//! use montecarlo::math::monte_carlo::{estimate_pi_uniform, set_seed};
//!
//! let mut stream = set_seed(0);
//! let pi = estimate_pi_uniform(&mut stream, 4).unwrap();
//! assert!((pi - std::f64::consts::PI).abs() < 0.1);
//! ```

use rand::RngCore;

use crate::error::Result;

pub mod coin_flip_pi;
pub mod exponential_integral;
pub mod monte_carlo_integration;
pub mod mt19937;
pub mod sample_stream;
pub mod series;
pub mod summation;
pub mod uniform_pi;

pub use coin_flip_pi::{
    bits_to_fraction, estimate_pi_coinflip, estimate_pi_from_points, fractions_from_bits,
    CoinFlipPi, BITS_PER_FRACTION,
};
pub use exponential_integral::{
    estimate_integral_exponential, mean_of_integrand, transformed_integrand, ExponentialIntegral,
};
pub use monte_carlo_integration::monte_carlo_integration;
pub use mt19937::Mt19937;
pub use sample_stream::{sample_count, set_seed, ExponentialSampler, SampleStream, Unit53};
pub use series::{ErrorSeries, EstimateSeries, SeriesConfig};
pub use summation::{mean, pairwise_sum};
pub use uniform_pi::{estimate_pi_uniform, quarter_circle_height, UniformPi};

/// An estimator driven by a sample-count exponent `k`.
pub trait Estimator {
    /// Short name used in log output
    fn name(&self) -> &'static str;

    /// Produce one estimate from `stream` at exponent `k`.
    fn estimate<R: RngCore>(&self, stream: &mut SampleStream<R>, k: u32) -> Result<f64>;
}
