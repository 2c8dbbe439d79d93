//! Importance-sampled integral with `Exp(1)` draws.
//!
//! For `X ~ Exp(1)` and the transformed integrand
//! `f(x) = exp(sin(ln x) - x² + x)`, the sample mean of `f(X)` estimates
//! `E[f(X)] = ∫₀^∞ f(x)·e^{-x} dx`.

use log::{debug, warn};
use rand::RngCore;

use super::sample_stream::{sample_count, SampleStream};
use super::summation;
use super::Estimator;
use crate::error::{Error, Result};

/// Rate of the sampling distribution.
pub const SAMPLING_RATE: f64 = 1.0;

/// `exp(sin(ln x) - x² + x)`; `x` must be positive.
pub fn transformed_integrand(x: f64) -> Result<f64> {
    if x.is_nan() || x <= 0.0 {
        warn!("rejecting sample {x}: logarithm needs a positive argument");
        return Err(Error::DomainError {
            transform: "ln",
            value: x,
        });
    }
    Ok((x.ln().sin() - x * x + x).exp())
}

/// Mean of the transformed integrand over `samples`.
///
/// Fails on the first sample outside the integrand's domain.
pub fn mean_of_integrand(samples: &[f64]) -> Result<f64> {
    let values = samples
        .iter()
        .map(|&x| transformed_integrand(x))
        .collect::<Result<Vec<f64>>>()?;
    summation::mean(&values)
}

/// Estimate the integral from `10^k` exponential samples.
pub fn estimate_integral_exponential<R: RngCore>(
    stream: &mut SampleStream<R>,
    k: u32,
) -> Result<f64> {
    let n = sample_count(k)?;
    let samples = stream.exponential(SAMPLING_RATE, n)?;
    let estimate = mean_of_integrand(&samples)?;
    debug!("exponential integral estimate: k={k} n={n} value={estimate}");
    Ok(estimate)
}

/// [`Estimator`] form of [`estimate_integral_exponential`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ExponentialIntegral;

impl Estimator for ExponentialIntegral {
    fn name(&self) -> &'static str {
        "exponential-integral"
    }

    fn estimate<R: RngCore>(&self, stream: &mut SampleStream<R>, k: u32) -> Result<f64> {
        estimate_integral_exponential(stream, k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::monte_carlo::set_seed;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_reference_run() {
        let mut stream = set_seed(0);
        let estimate = estimate_integral_exponential(&mut stream, 1).unwrap();
        assert_relative_eq!(estimate, 0.705_150_908_906_894_5, max_relative = 1e-14);
    }

    #[test]
    fn test_integrand_at_one() {
        // sin(ln 1) = 0, so f(1) = exp(0) = 1.
        assert_eq!(transformed_integrand(1.0).unwrap(), 1.0);
    }

    #[test]
    fn test_integrand_domain() {
        for x in [0.0, -0.0, -1.5, f64::NAN] {
            assert!(
                matches!(transformed_integrand(x), Err(Error::DomainError { .. })),
                "x = {x}"
            );
        }
    }

    #[test]
    fn test_zero_sample_surfaces_domain_error() {
        let result = mean_of_integrand(&[0.5, 1.0, 0.0, 2.0]);
        assert_eq!(
            result,
            Err(Error::DomainError {
                transform: "ln",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_series_stays_near_reference_values() {
        let mut stream = set_seed(0);
        let estimates: Vec<f64> = (1..=5)
            .map(|k| estimate_integral_exponential(&mut stream, k).unwrap())
            .collect();
        assert_relative_eq!(estimates[0], 0.705_150_908_906_894_5, max_relative = 1e-14);
        assert_abs_diff_eq!(estimates[4], 0.6528, epsilon = 1e-3);
    }

    #[test]
    fn test_rejects_zero_exponent() {
        let mut stream = set_seed(0);
        assert!(estimate_integral_exponential(&mut stream, 0).is_err());
    }
}
