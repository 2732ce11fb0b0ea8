use crate::interpolation::errors::InterpolationError;

/// A curve that can be evaluated anywhere inside its data range.
pub trait Interpolator {
    /// `(x_min, x_max)` of the data the curve was built from
    fn domain(&self) -> (f64, f64);

    /// curve value at `x`; `x` has already passed [`Interpolator::check_domain`]
    fn value_unchecked(&self, x: f64) -> f64;

    /// no extrapolation: `x` must lie inside [`Interpolator::domain`]
    #[inline]
    fn check_domain(&self, x: f64) -> Result<(), InterpolationError> {
        let (x_min, x_max) = self.domain();
        if !(x_min..=x_max).contains(&x) {
            return Err(InterpolationError::OutOfBounds { got: x, x_min, x_max });
        }
        Ok(())
    }

    /// evaluates single point
    #[inline]
    fn eval(&self, x: f64) -> Result<f64, InterpolationError> {
        self.check_domain(x)?;
        Ok(self.value_unchecked(x))
    }

    /// evaluates many points, stopping at the first out-of-range one
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, InterpolationError> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }
}
