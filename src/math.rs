pub mod monte_carlo;

pub use monte_carlo::{
    estimate_integral_exponential, estimate_pi_coinflip, estimate_pi_uniform,
    monte_carlo_integration, set_seed, ErrorSeries, EstimateSeries, Estimator, SampleStream,
    SeriesConfig,
};
