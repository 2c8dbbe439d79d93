//! Estimate and error series over growing sample counts `10^k`.

use std::ops::RangeInclusive;

use log::{debug, info};
use rand::RngCore;

use super::sample_stream::{set_seed, SampleStream};
use super::Estimator;
use crate::error::{Error, Result};

/// Parameters for a seeded series run.
#[derive(Debug, Clone)]
pub struct SeriesConfig {
    /// Seed for the MT19937 stream shared by all exponents
    pub seed: u32,
    /// Smallest exponent `k` (sample count `10^k`)
    pub min_exponent: u32,
    /// Largest exponent `k`, inclusive
    pub max_exponent: u32,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            min_exponent: 1,
            max_exponent: 8,
        }
    }
}

impl SeriesConfig {
    /// Exponents `min_exponent..=max_exponent`.
    pub fn exponents(&self) -> RangeInclusive<u32> {
        self.min_exponent..=self.max_exponent
    }

    /// Seed a fresh stream and run `estimator` over every exponent.
    pub fn run<E: Estimator>(&self, estimator: &E) -> Result<EstimateSeries> {
        let mut stream = set_seed(self.seed);
        EstimateSeries::run(estimator, &mut stream, self.exponents())
    }
}

/// Estimates for consecutive exponents, all drawn from one stream.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateSeries {
    first_exponent: u32,
    estimates: Vec<f64>,
}

impl EstimateSeries {
    /// Run `estimator` once per exponent in `exponents`, in increasing order.
    pub fn run<E, R>(
        estimator: &E,
        stream: &mut SampleStream<R>,
        exponents: RangeInclusive<u32>,
    ) -> Result<Self>
    where
        E: Estimator,
        R: RngCore,
    {
        let first_exponent = *exponents.start();
        if first_exponent < 1 || exponents.is_empty() {
            return Err(Error::invalid(format!(
                "exponent range must be non-empty and start at 1 or above, got {}..={}",
                exponents.start(),
                exponents.end()
            )));
        }

        info!(
            "running {} for k = {}..={}",
            estimator.name(),
            exponents.start(),
            exponents.end()
        );
        let mut estimates = Vec::with_capacity(exponents.clone().count());
        for k in exponents {
            let estimate = estimator.estimate(stream, k)?;
            debug!("{}: k={k} estimate={estimate}", estimator.name());
            estimates.push(estimate);
        }

        Ok(Self {
            first_exponent,
            estimates,
        })
    }

    /// Exponent of the first estimate.
    pub fn first_exponent(&self) -> u32 {
        self.first_exponent
    }

    /// Estimates in increasing exponent order.
    pub fn values(&self) -> &[f64] {
        &self.estimates
    }

    /// Number of estimates.
    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    /// True when the series holds no estimates.
    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }

    /// `(k, estimate)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        (self.first_exponent..).zip(self.estimates.iter().copied())
    }

    /// Absolute errors against `reference`.
    pub fn errors(&self, reference: f64) -> ErrorSeries {
        ErrorSeries::against(self, reference)
    }
}

/// `|estimate - reference|` for each entry of an [`EstimateSeries`].
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorSeries {
    reference: f64,
    first_exponent: u32,
    errors: Vec<f64>,
}

impl ErrorSeries {
    /// Absolute error of each estimate in `series` against `reference`.
    pub fn against(series: &EstimateSeries, reference: f64) -> Self {
        Self {
            reference,
            first_exponent: series.first_exponent,
            errors: series
                .estimates
                .iter()
                .map(|estimate| (estimate - reference).abs())
                .collect(),
        }
    }

    /// Reference value the errors are measured against.
    pub fn reference(&self) -> f64 {
        self.reference
    }

    /// Errors in increasing exponent order.
    pub fn values(&self) -> &[f64] {
        &self.errors
    }

    /// `(k, error)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        (self.first_exponent..).zip(self.errors.iter().copied())
    }

    /// Exponent with the smallest error; the first one on ties.
    pub fn best(&self) -> Option<(u32, f64)> {
        self.iter()
            .fold(None, |best: Option<(u32, f64)>, (k, e)| match best {
                Some((_, b)) if b <= e => best,
                _ => Some((k, e)),
            })
    }
}
