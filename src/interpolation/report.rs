//! Defines the struct returned by [`crate::interpolation::pchip::interpolate`].
//!
//! The report summarizes key metadata about the run: the slope policy used,
//! number of data points and samples, the estimated slopes, and the samples.

use serde::Serialize;

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::point::Point;

/// Summary of an interpolation run.
///
/// [`InterpolationReport`]
/// - `algorithm_name`  : name of the slope policy (e.g. `"monotone"`)
/// - `n_provided`      : number of input data points `(x, y)`
/// - `n_sampled`       : total number of emitted samples
/// - `segment_counts`  : samples emitted by each of the `n_provided - 1` segments
/// - `slopes`          : tangent assigned to each input point
/// - `samples`         : the dense curve, increasing in x
#[derive(Debug, Clone, Serialize)]
pub struct InterpolationReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub n_sampled: usize,
    pub segment_counts: Vec<usize>,
    pub slopes: Vec<f64>,
    pub samples: Vec<Point>,
}

impl InterpolationReport {
    pub fn new(algorithm: Algorithm, n_provided: usize) -> Self {
        Self {
            algorithm_name: algorithm.algorithm_name(),
            n_provided,
            n_sampled: 0,
            segment_counts: Vec::with_capacity(n_provided.saturating_sub(1)),
            slopes: Vec::new(),
            samples: Vec::new(),
        }
    }
}
