use crate::interpolation::point::Point;

/// Stores spacings between adjacent x values
pub(crate) fn spacings(points: &[Point]) -> Vec<f64> {
    points.windows(2).map(|w| w[1].x - w[0].x).collect()
}


/// Secant slopes with `guard` added to every spacing.
///
/// A zero guard gives the plain finite differences.
pub(crate) fn secants(points: &[Point], guard: f64) -> Vec<f64> {
    let h = spacings(points);
    let mut d = Vec::with_capacity(h.len());
    for (i, hi) in h.iter().enumerate() {
        d.push((points[i + 1].y - points[i].y) / (hi + guard));
    }
    d
}


/// Index `lo` of the segment `[x[lo], x[lo+1]]` holding `xq`.
/// The last knot belongs to the last segment.
pub(crate) fn find_interval(points: &[Point], xq: f64) -> usize {
    let n = points.len();
    let mut lo = 0;
    let mut hi = n - 1;

    while lo + 1 < hi {
        let mid = (lo + hi) / 2;
        if points[mid].x <= xq {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    lo
}
