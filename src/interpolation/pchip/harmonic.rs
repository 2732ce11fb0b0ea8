//! Shape-preserving slopes; Brodlie weighted harmonic mean.

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::point::Point;


/// Tangent at `p1` from its two neighbours.
///
/// Zero at any local extremum or flat neighbour, otherwise the harmonic mean
/// of the two secants weighted toward the shorter interval.
#[inline]
fn interior_slope(p0: &Point, p1: &Point, p2: &Point) -> f64 {
    let slope0 = Point::grad(p0, p1);
    let slope1 = Point::grad(p1, p2);

    if slope0 == 0.0 || slope1 == 0.0 || slope0.signum() != slope1.signum() {
        return 0.0;
    }

    let h0 = p1.x - p0.x;
    let h1 = p2.x - p1.x;
    let w1 = 2.0 * h1 + h0;
    let w2 = h1 + 2.0 * h0;
    (w1 + w2) / (w1 / slope0 + w2 / slope1)
}


/// Estimates one tangent per point with zero slope at every data extremum.
///
/// End tangents copy their inner neighbour. With only two points there is
/// no interior, and both tangents are the single secant.
///
/// # Errors
/// - [`InterpolationError::InsufficientPoints`] for fewer than 2 points
pub fn estimate_shape_preserving(points: &[Point]) -> Result<Vec<f64>, InterpolationError> {
    let n = points.len();
    if n < 2 {
        return Err(InterpolationError::InsufficientPoints { got: n });
    }
    if n == 2 {
        let s = Point::grad(&points[0], &points[1]);
        return Ok(vec![s, s]);
    }

    let mut m = vec![0.0; n];
    for (i, w) in points.windows(3).enumerate() {
        m[i + 1] = interior_slope(&w[0], &w[1], &w[2]);
    }
    m[0]     = m[1];
    m[n - 1] = m[n - 2];

    Ok(m)
}
