//! Pairwise floating-point summation.
//!
//! Blocks of up to 128 values are reduced with eight interleaved partial
//! sums; longer slices are split in half (the split point rounded down to a
//! multiple of 8) and summed recursively. The rounding error grows as
//! `O(log n)` instead of `O(n)`, and the reduction order matches the one used
//! by NumPy's `add.reduce`, so seeded means agree with it bit for bit.

use crate::error::{Error, Result};

const BLOCK_SIZE: usize = 128;
const LANES: usize = 8;

/// Sum `values` with pairwise reduction.
pub fn pairwise_sum(values: &[f64]) -> f64 {
    let n = values.len();
    if n < LANES {
        let mut sum = -0.0;
        for &v in values {
            sum += v;
        }
        sum
    } else if n <= BLOCK_SIZE {
        let mut lanes = [0.0; LANES];
        lanes.copy_from_slice(&values[..LANES]);

        let unrolled = n - n % LANES;
        let mut i = LANES;
        while i < unrolled {
            for (lane, &v) in lanes.iter_mut().zip(&values[i..i + LANES]) {
                *lane += v;
            }
            i += LANES;
        }

        let mut sum = ((lanes[0] + lanes[1]) + (lanes[2] + lanes[3]))
            + ((lanes[4] + lanes[5]) + (lanes[6] + lanes[7]));
        for &v in &values[unrolled..] {
            sum += v;
        }
        sum
    } else {
        let mut half = n / 2;
        half -= half % LANES;
        pairwise_sum(&values[..half]) + pairwise_sum(&values[half..])
    }
}

/// Arithmetic mean of `values`, summed pairwise.
///
/// Returns `InvalidArgument` for an empty slice.
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::invalid("cannot average an empty sample set"));
    }
    Ok(pairwise_sum(values) / values.len() as f64)
}
