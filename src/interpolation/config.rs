//! Shared configuration for interpolation runs.
//!
//! Provides [`CommonCfg`] with default minimum allowed spacing between adjacent
//! `x` data; [`DEFAULT_X_TOL`].
//!
//! [`CommonCfg`] — universal fields
//! - `x`         : x values provided
//! - `y`         : y values provided
//! - `frequency` : output samples per unit of x
//! - `x_tol`     : minimum spacing between consecutive x values
//!
//! [`CommonCfg::new`] initializes configuration with empty slices and
//! [`DEFAULT_FREQUENCY`].


use crate::interpolation::errors::InterpolationError;
use crate::interpolation::point::Point;

pub const DEFAULT_X_TOL: f64 = 1e-12;
pub const DEFAULT_FREQUENCY: f64 = 10.0;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg<'a> {
    pub(crate) x         : &'a [f64],
    pub(crate) y         : &'a [f64],
    pub(crate) frequency : f64,
    pub(crate) x_min_spacing: f64,
}

impl<'a> CommonCfg<'a> {
    pub fn new() -> Self {
        Self {
            x         : &[],
            y         : &[],
            frequency : DEFAULT_FREQUENCY,
            x_min_spacing: DEFAULT_X_TOL,
        }
    }

    /// Re-checks the whole configuration; setters may have run in any order.
    pub fn validate(&self) -> Result<(), InterpolationError> {
        let x = self.x;
        let y = self.y;

        if x.is_empty() || y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if x.len() != y.len() {
            return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        if x.len() < 2 {
            return Err(InterpolationError::InsufficientPoints { got: x.len() });
        }
        check_increasing(x.iter().copied(), self.x_min_spacing)?;
        check_frequency(self.frequency)
    }

    // getters
    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }
    pub fn frequency(&self) -> f64 { self.frequency }
    pub fn x_min_spacing(&self)  -> f64 { self.x_min_spacing }

    // setters
    pub(crate) fn with_x(&mut self, v: &'a [f64]) { self.x = v; }
    pub(crate) fn with_y(&mut self, v: &'a [f64]) { self.y = v; }
    pub(crate) fn with_frequency(&mut self, v: f64) { self.frequency = v; }
    pub(crate) fn with_x_min_spacing(&mut self, v: f64) { self.x_min_spacing = v; }
}

impl Default for CommonCfg<'_> {
    fn default() -> Self {
        Self::new()
    }
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}


/// Strictly increasing with at least `min_spacing` between neighbours.
/// A `min_spacing` of zero only rejects equal or decreasing pairs.
pub(crate) fn check_increasing<I>(xs: I, min_spacing: f64) -> Result<(), InterpolationError>
where
    I: IntoIterator<Item = f64>,
{
    let mut xs = xs.into_iter();
    let Some(mut x_prev) = xs.next() else { return Ok(()) };

    for (i, x_curr) in xs.enumerate() {
        let dx = x_curr - x_prev;
        if dx <= 0.0 || dx < min_spacing {
            return Err(InterpolationError::NonMonotonicInput { idx: i + 1, x_prev, x_curr });
        }
        x_prev = x_curr;
    }
    Ok(())
}


pub(crate) fn check_frequency(frequency: f64) -> Result<(), InterpolationError> {
    if !frequency.is_finite() || frequency < 0.0 {
        return Err(InterpolationError::InvalidFrequency { got: frequency });
    }
    Ok(())
}


/// Validates a point sequence before slopes are estimated.
///
/// # Errors
/// - [`InterpolationError::InsufficientPoints`] for fewer than 2 points
/// - [`InterpolationError::NonFinitePoint`] for NaN or infinite coordinates
/// - [`InterpolationError::NonMonotonicInput`] if x is not strictly increasing
pub(crate) fn check_points(points: &[Point]) -> Result<(), InterpolationError> {
    if points.len() < 2 {
        return Err(InterpolationError::InsufficientPoints { got: points.len() });
    }
    if let Some(idx) = points.iter().position(|p| !p.is_finite()) {
        return Err(InterpolationError::NonFinitePoint { idx });
    }
    check_increasing(points.iter().map(|p| p.x), 0.0)
}


macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl<'a> $cfg {
            pub fn set_x(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if v.is_empty() {
                    return Err(InterpolationError::EmptyInput);
                }
                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }
                if v.len() < 2 {
                    return Err(InterpolationError::InsufficientPoints { got: v.len() });
                }
                $crate::interpolation::config::check_increasing(v.iter().copied(), self.common.x_min_spacing)?;

                // length agreement check
                // symmetric with set_y
                let y_len = self.common.y.len();
                if y_len != 0 && y_len != v.len() {
                    return Err(InterpolationError::UnequalLength { x_len: v.len(), y_len });
                }

                self.common.with_x(v);
                Ok(self)
            }

            pub fn set_y(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if v.is_empty() {
                    return Err(InterpolationError::EmptyInput);
                }
                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }

                let x_len = self.common.x.len();
                let y_len = v.len();
                if x_len != 0 && y_len != x_len {
                    return Err(InterpolationError::UnequalLength { x_len, y_len });
                }

                self.common.with_y(v);
                Ok(self)
            }

            pub fn set_frequency(
                mut self,
                v: f64,
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                $crate::interpolation::config::check_frequency(v)?;
                self.common.with_frequency(v);
                Ok(self)
            }

            pub fn set_x_tol(
                mut self,
                v: f64,
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if !v.is_finite() || v <= 0.0 {
                    return Err(InterpolationError::InvalidXTol { got: v });
                }

                self.common.with_x_min_spacing(v);
                Ok(self)
            }
        }
    };
}
pub(crate) use impl_common_cfg;
