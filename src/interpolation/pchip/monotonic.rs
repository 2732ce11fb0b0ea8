//! Monotone slopes; Fritsch–Carlson.
//!
//! Starts from the average of the two neighbouring secants, flattens both
//! ends of every flat secant, then scales tangent pairs back onto the circle
//! of radius 3 so no interval overshoots its data.

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::pchip::helpers::secants;
use crate::interpolation::point::Point;

/// Added to every x spacing before dividing.
///
/// Coincident x values give huge but finite secants instead of a division by
/// zero. Accuracy for such input is not guaranteed; [`crate::fit`] rejects
/// it before this estimator runs.
pub const SECANT_GUARD: f64 = 1e-30;

/// `a² + b²` above this puts an interval outside the monotone region.
pub const CIRCLE_RADIUS_SQ: f64 = 9.0;


#[inline]
fn averaged_tangents(s: &[f64]) -> Vec<f64> {
    let n = s.len() + 1;
    let mut m = Vec::with_capacity(n);

    m.push(s[0]);
    m.extend(s.windows(2).map(|w| (w[0] + w[1]) / 2.0));
    m.push(s[n - 2]);
    m
}


/// A flat secant pins both of its tangents to zero.
#[inline]
fn flatten_zero_secants(s: &[f64], m: &mut [f64]) {
    for (i, &si) in s.iter().enumerate() {
        if si == 0.0 {
            m[i]     = 0.0;
            m[i + 1] = 0.0;
        }
    }
}


/// Intervals are visited left to right and each reads the tangents as left
/// by the previous one. A rescale only shrinks both tangents, so an interval
/// already inside the circle stays there when its right neighbour shrinks
/// the tangent they share.
#[inline]
fn limit_to_circle(s: &[f64], m: &mut [f64]) {
    for (i, &si) in s.iter().enumerate() {
        if si == 0.0 {
            // both tangents already pinned to zero
            continue;
        }

        let a = m[i] / si;
        let b = m[i + 1] / si;
        let dist = a * a + b * b;
        if dist > CIRCLE_RADIUS_SQ {
            let t = 3.0 / dist.sqrt();
            m[i]     = t * a * si;
            m[i + 1] = t * b * si;
        }
    }
}


/// Estimates one tangent per point that keeps monotone runs monotone.
///
/// # Errors
/// - [`InterpolationError::InsufficientPoints`] for fewer than 2 points
pub fn estimate_monotone(points: &[Point]) -> Result<Vec<f64>, InterpolationError> {
    let n = points.len();
    if n < 2 {
        return Err(InterpolationError::InsufficientPoints { got: n });
    }

    let s = secants(points, SECANT_GUARD);
    let mut m = averaged_tangents(&s);
    flatten_zero_secants(&s, &mut m);
    limit_to_circle(&s, &mut m);

    Ok(m)
}
