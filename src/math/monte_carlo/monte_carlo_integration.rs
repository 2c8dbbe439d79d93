use rand::RngCore;

use super::sample_stream::SampleStream;
use super::summation;
use crate::error::{Error, Result};

/// Performs Monte Carlo integration of the function `f` over the interval [a, b] using the specified number of samples.
///
/// Samples are drawn from `stream` as `a + (b - a) * u` with `u` uniform on `[0, 1)`,
/// and the result is `(b - a)` times the pairwise mean of `f` at those points.
pub fn monte_carlo_integration<R, F>(
    stream: &mut SampleStream<R>,
    f: F,
    a: f64,
    b: f64,
    samples: usize,
) -> Result<f64>
where
    R: RngCore,
    F: Fn(f64) -> f64,
{
    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(Error::invalid(format!(
            "integration bounds must be finite with a < b, got [{a}, {b}]"
        )));
    }
    if samples == 0 {
        return Err(Error::invalid("at least one sample is required"));
    }

    let width = b - a;
    if !width.is_finite() {
        return Err(Error::invalid(format!(
            "integration width b - a overflows for [{a}, {b}]"
        )));
    }

    let values: Vec<f64> = stream
        .uniform(samples)
        .into_iter()
        .map(|u| f(a + width * u))
        .collect();
    let avg = summation::mean(&values)?;
    Ok(width * avg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_monte_carlo_integration() {
        // Integrate f(x) = x over [0,1]. The exact value is 0.5.
        let mut stream = SampleStream::chacha(1);
        let result = monte_carlo_integration(&mut stream, |x| x, 0.0, 1.0, 100_000).unwrap();
        assert_abs_diff_eq!(result, 0.5, epsilon = 0.01);
    }

    #[test]
    fn test_shifted_interval() {
        // Integral of x^2 over [1, 3] is 26/3.
        let mut stream = SampleStream::chacha(2);
        let result = monte_carlo_integration(&mut stream, |x| x * x, 1.0, 3.0, 200_000).unwrap();
        assert_abs_diff_eq!(result, 26.0 / 3.0, epsilon = 0.05);
    }

    #[test]
    fn test_invalid_arguments() {
        let mut stream = SampleStream::chacha(3);
        assert!(monte_carlo_integration(&mut stream, |x| x, 1.0, 1.0, 10).is_err());
        assert!(monte_carlo_integration(&mut stream, |x| x, 2.0, 1.0, 10).is_err());
        assert!(monte_carlo_integration(&mut stream, |x| x, 0.0, f64::INFINITY, 10).is_err());
        // Both bounds finite, but b - a overflows to infinity.
        assert!(matches!(
            monte_carlo_integration(&mut stream, |_| 1.0, -f64::MAX, f64::MAX, 10),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            monte_carlo_integration(&mut stream, |x| x, 0.0, 1.0, 0),
            Err(Error::InvalidArgument(_))
        ));
    }
}
