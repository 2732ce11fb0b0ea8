//! The `(x, y)` pair every interpolation routine consumes and produces.

use serde::{Deserialize, Serialize};

use crate::interpolation::config::non_finite_idx;
use crate::interpolation::errors::InterpolationError;


#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Secant slope `(q.y - p.y) / (q.x - p.x)`. Unguarded.
    #[inline]
    pub fn grad(p: &Point, q: &Point) -> f64 {
        (q.y - p.y) / (q.x - p.x)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}


/// Zips parallel `x` / `y` slices into a point sequence.
///
/// # Errors
/// - [`InterpolationError::EmptyInput`] if either slice is empty
/// - [`InterpolationError::UnequalLength`] on a length mismatch
/// - [`InterpolationError::NonFiniteVec`] for NaN or infinite entries
pub fn points_from_xy(x: &[f64], y: &[f64]) -> Result<Vec<Point>, InterpolationError> {
    if x.is_empty() || y.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }
    if x.len() != y.len() {
        return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
    }
    if let Some(idx) = non_finite_idx(x).or_else(|| non_finite_idx(y)) {
        return Err(InterpolationError::NonFiniteVec { idx });
    }

    Ok(x.iter().zip(y).map(|(&x, &y)| Point { x, y }).collect())
}
