//! Glue between the slope estimators and the segment sampler.
//!
//! [`fit`] estimates slopes once over the whole input, then samples every
//! interval in order and concatenates the results. [`Pchip`] keeps the
//! slopes around for pointwise evaluation, and [`interpolate`] runs the
//! config-driven path that returns an [`InterpolationReport`].


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{check_frequency, check_points, impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::pchip::harmonic::estimate_shape_preserving;
use crate::interpolation::pchip::helpers::find_interval;
use crate::interpolation::pchip::monotonic::estimate_monotone;
use crate::interpolation::pchip::segment::{checked_sample_count, reserve_samples, HermiteSegment};
use crate::interpolation::point::{points_from_xy, Point};
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::traits::Interpolator;


/// One tangent per point under the chosen policy.
pub fn estimate_slopes(points: &[Point], algorithm: Algorithm) -> Result<Vec<f64>, InterpolationError> {
    match algorithm {
        Algorithm::Monotone        => estimate_monotone(points),
        Algorithm::ShapePreserving => estimate_shape_preserving(points),
    }
}


/// A fitted PCHIP curve: knots plus one tangent per knot.
#[derive(Debug, Clone, PartialEq)]
pub struct Pchip {
    algorithm: Algorithm,
    points: Vec<Point>,
    slopes: Vec<f64>,
}

impl Pchip {
    /// # Errors
    /// - [`InterpolationError::InsufficientPoints`] for fewer than 2 points
    /// - [`InterpolationError::NonFinitePoint`] for NaN or infinite coordinates
    /// - [`InterpolationError::NonMonotonicInput`] for equal or decreasing x
    pub fn new(points: &[Point], algorithm: Algorithm) -> Result<Self, InterpolationError> {
        check_points(points)?;
        let slopes = estimate_slopes(points, algorithm)?;

        Ok(Self { algorithm, points: points.to_vec(), slopes })
    }

    pub fn algorithm(&self) -> Algorithm { self.algorithm }
    pub fn points(&self) -> &[Point] { &self.points }
    pub fn slopes(&self) -> &[f64] { &self.slopes }

    /// The cubic on `[x[i], x[i+1]]`, `None` past the last interval.
    pub fn segment(&self, i: usize) -> Option<HermiteSegment> {
        (i < self.points.len() - 1).then(|| self.segment_at(i))
    }

    // `i` comes from `find_interval` or `0..n-1`
    fn segment_at(&self, i: usize) -> HermiteSegment {
        HermiteSegment::new(
            self.points[i],
            self.points[i + 1],
            self.slopes[i],
            self.slopes[i + 1],
        )
    }

    pub fn segments(&self) -> impl Iterator<Item = HermiteSegment> + '_ {
        (0..self.points.len() - 1).map(move |i| self.segment_at(i))
    }

    /// First derivative of the curve at `x`.
    pub fn derivative(&self, x: f64) -> Result<f64, InterpolationError> {
        self.check_domain(x)?;
        Ok(self.segment_at(find_interval(&self.points, x)).derivative(x))
    }

    /// Samples every segment in order into `out`; returns per-segment counts.
    ///
    /// The total is bounded in f64 before anything is allocated.
    fn sample_into(&self, frequency: f64, out: &mut Vec<Point>) -> Result<Vec<usize>, InterpolationError> {
        check_frequency(frequency)?;

        let total: f64 = self.segments().map(|seg| seg.raw_sample_count(frequency)).sum();
        reserve_samples(out, checked_sample_count(total)?)?;

        self.segments()
            .map(|seg| seg.sample_into(frequency, out))
            .collect()
    }

    /// Dense curve at `frequency` samples per unit of x over `[x_first, x_last)`.
    ///
    /// # Errors
    /// - [`InterpolationError::InvalidFrequency`] if `frequency` is negative or non-finite
    /// - [`InterpolationError::SampleOverflow`] if the curve would not fit in memory
    pub fn sample(&self, frequency: f64) -> Result<Vec<Point>, InterpolationError> {
        let mut out = Vec::new();
        self.sample_into(frequency, &mut out)?;
        Ok(out)
    }
}

impl Interpolator for Pchip {
    fn domain(&self) -> (f64, f64) {
        (self.points[0].x, self.points[self.points.len() - 1].x)
    }

    fn value_unchecked(&self, x: f64) -> f64 {
        self.segment_at(find_interval(&self.points, x)).value(x)
    }
}


/// Fits `points` with the given slope policy and samples the curve.
///
/// # Errors
/// - [`InterpolationError::InvalidFrequency`] if `frequency` is negative or non-finite
/// - any error of [`Pchip::new`]
pub fn fit(
    points: &[Point],
    frequency: f64,
    algorithm: Algorithm,
) -> Result<Vec<Point>, InterpolationError> {
    check_frequency(frequency)?;
    Pchip::new(points, algorithm)?.sample(frequency)
}


/// [`fit`] with the policy given by name (`"monotone"` or `"shape_preserving"`).
///
/// # Errors
/// - [`InterpolationError::InvalidPolicy`] for any other name
pub fn fit_by_name(
    points: &[Point],
    frequency: f64,
    name: &str,
) -> Result<Vec<Point>, InterpolationError> {
    fit(points, frequency, name.parse()?)
}


pub fn monotone(points: &[Point], frequency: f64) -> Result<Vec<Point>, InterpolationError> {
    fit(points, frequency, Algorithm::Monotone)
}


pub fn shape_preserving(points: &[Point], frequency: f64) -> Result<Vec<Point>, InterpolationError> {
    fit(points, frequency, Algorithm::ShapePreserving)
}


/// PCHIP configuration
///
/// # Fields
/// - `common`    : [`CommonCfg`]
/// - `algorithm` : slope policy
///
/// # Construction
/// - Use [`PchipCfg::new`] then setters.
///
/// # Defaults
/// - `frequency` : [`crate::interpolation::config::DEFAULT_FREQUENCY`]
/// - `x_tol`     : [`crate::interpolation::config::DEFAULT_X_TOL`]
#[derive(Debug, Copy, Clone)]
pub struct PchipCfg<'a> {
    common: CommonCfg<'a>,
    algorithm: Algorithm,
}
impl<'a> PchipCfg<'a> {
    pub fn new(algorithm: Algorithm) -> Self {
        Self { common: CommonCfg::new(), algorithm }
    }

    pub fn algorithm(&self) -> Algorithm { self.algorithm }
    pub fn common(&self) -> &CommonCfg<'a> { &self.common }

    pub fn with_algorithm(mut self, v: Algorithm) -> Self { self.algorithm = v; self }

    pub fn set_algorithm_name(mut self, v: &str) -> Result<Self, InterpolationError> {
        self.algorithm = v.parse()?;
        Ok(self)
    }
}
impl Default for PchipCfg<'_> {
    fn default() -> Self {
        Self::new(Algorithm::default())
    }
}
impl_common_cfg!(PchipCfg<'a>);


/// Runs PCHIP over the data in [`CommonCfg`].
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"monotone"` or `"shape_preserving"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_sampled`      : number of emitted samples
/// - `segment_counts` : samples per interval, `floor(Δx * frequency)` each
/// - `slopes`         : tangent at each data point
/// - `samples`        : the sampled curve
///
/// # Errors
/// - anything [`CommonCfg::validate`] rejects; setters can run in any order,
///   so spacing against `x_tol` is checked again here.
pub fn interpolate(cfg: PchipCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;

    let points    = points_from_xy(cfg.common.x(), cfg.common.y())?;
    let frequency = cfg.common.frequency();
    let curve     = Pchip::new(&points, cfg.algorithm)?;

    let mut report = InterpolationReport::new(cfg.algorithm, points.len());
    report.segment_counts = curve.sample_into(frequency, &mut report.samples)?;
    report.n_sampled      = report.samples.len();
    report.slopes         = curve.slopes;

    Ok(report)
}
