//! One interval of the curve.
//!
//! The cubic is kept in Newton form around the two knots:
//!
//! ```text
//! c    = (Δy/Δx - m1) / Δx
//! d    = (m1 + m2 - 2 Δy/Δx) / Δx²
//! y(x) = y1 + (x - x1) * [ m1 + (x - x1) * [ c + d (x - x2) ] ]
//! ```

use crate::interpolation::config::check_frequency;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::point::Point;


/// Cubic Hermite polynomial between two consecutive knots.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HermiteSegment {
    left: Point,
    right: Point,
    m1: f64,
    m2: f64,
    c: f64,
    d: f64,
}

impl HermiteSegment {
    pub fn new(left: Point, right: Point, m1: f64, m2: f64) -> Self {
        let dx     = right.x - left.x;
        let secant = (right.y - left.y) / dx;

        Self {
            left,
            right,
            m1,
            m2,
            c: (secant - m1) / dx,
            d: (m1 + m2 - 2.0 * secant) / (dx * dx),
        }
    }

    pub fn left(&self)  -> Point { self.left }
    pub fn right(&self) -> Point { self.right }
    pub fn tangents(&self) -> (f64, f64) { (self.m1, self.m2) }
    pub fn width(&self) -> f64 { self.right.x - self.left.x }

    #[inline]
    pub fn value(&self, x: f64) -> f64 {
        let u = x - self.left.x;
        self.left.y + u * (self.m1 + u * (self.c + self.d * (x - self.right.x)))
    }

    #[inline]
    pub fn derivative(&self, x: f64) -> f64 {
        let u = x - self.left.x;
        let v = x - self.right.x;
        self.m1 + 2.0 * u * self.c + self.d * u * (u + 2.0 * v)
    }

    /// `floor(Δx * frequency)` before any bound is applied.
    #[inline]
    pub(crate) fn raw_sample_count(&self, frequency: f64) -> f64 {
        // f64::max drops NaN, so NaN and negative products give 0
        (self.width() * frequency).floor().max(0.0)
    }

    /// `floor(Δx * frequency)`, zero when the product is below one.
    ///
    /// # Errors
    /// - [`InterpolationError::InvalidFrequency`] if `frequency` is negative or non-finite
    /// - [`InterpolationError::SampleOverflow`] above [`MAX_SAMPLES`]
    pub fn sample_count(&self, frequency: f64) -> Result<usize, InterpolationError> {
        check_frequency(frequency)?;
        checked_sample_count(self.raw_sample_count(frequency))
    }

    /// Appends the samples at `x1 + i / frequency` to `out`, returning how
    /// many were written. The right knot is never emitted.
    pub fn sample_into(&self, frequency: f64, out: &mut Vec<Point>) -> Result<usize, InterpolationError> {
        let count = self.sample_count(frequency)?;
        reserve_samples(out, count)?;

        for i in 0..count {
            let x = self.left.x + i as f64 / frequency;
            out.push(Point::new(x, self.value(x)));
        }

        Ok(count)
    }

    pub fn sample(&self, frequency: f64) -> Result<Vec<Point>, InterpolationError> {
        let mut out = Vec::new();
        self.sample_into(frequency, &mut out)?;
        Ok(out)
    }
}


/// Most samples one output buffer can address.
pub const MAX_SAMPLES: usize = isize::MAX as usize / std::mem::size_of::<Point>();


pub(crate) fn checked_sample_count(requested: f64) -> Result<usize, InterpolationError> {
    if requested > MAX_SAMPLES as f64 {
        return Err(InterpolationError::SampleOverflow { requested, max: MAX_SAMPLES });
    }
    Ok(requested as usize)
}


/// Grows `out` for `count` more samples without aborting on failure.
pub(crate) fn reserve_samples(out: &mut Vec<Point>, count: usize) -> Result<(), InterpolationError> {
    out.try_reserve(count)
        .map_err(|_| InterpolationError::SampleOverflow { requested: count as f64, max: MAX_SAMPLES })
}


/// Samples one interval; returns the points and their count.
///
/// # Errors
/// - see [`HermiteSegment::sample_count`]
pub fn sample_segment(
    p1: Point,
    p2: Point,
    tangent1: f64,
    tangent2: f64,
    frequency: f64,
) -> Result<(Vec<Point>, usize), InterpolationError> {
    let samples = HermiteSegment::new(p1, p2, tangent1, tangent2).sample(frequency)?;
    let count = samples.len();
    Ok((samples, count))
}
