use pchip::interpolation::errors::InterpolationError;
use pchip::interpolation::Interpolator;
use pchip::interpolation::pchip::MAX_SAMPLES;
use pchip::{fit, fit_by_name, monotone, shape_preserving, Algorithm, Pchip, Point};

type PchipResult = Result<(), InterpolationError>;

const ATOL: f64 = 1e-12;
const RTOL: f64 = 1e-12;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL + RTOL * b.abs()
}

fn pts(xy: &[(f64, f64)]) -> Vec<Point> {
    xy.iter().copied().map(Point::from).collect()
}

fn wiggly() -> Vec<Point> {
    pts(&[(0.0, 1.0), (1.0, 3.0), (2.5, 2.0), (3.0, 2.5), (5.0, 6.0), (5.5, 6.0), (7.0, -1.0)])
}

#[test]
fn monotone_example_never_decreases() -> PchipResult {
    let points = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 2.0)]);
    let samples = fit(&points, 2.0, Algorithm::Monotone)?;

    let xs: Vec<f64> = samples.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![0.0, 0.5, 1.0, 1.5, 2.0, 2.5]);
    for w in samples.windows(2) {
        assert!(w[1].y >= w[0].y - ATOL, "decrease: {:?} -> {:?}", w[0], w[1]);
    }
    assert_eq!(samples[4].y, 2.0);
    assert_eq!(samples[5].y, 2.0);
    Ok(())
}

#[test]
fn unknown_policy_name_fails() {
    let points = pts(&[(0.0, 0.0), (1.0, 1.0)]);
    let err = fit_by_name(&points, 4.0, "bogus").unwrap_err();
    assert_eq!(err, InterpolationError::InvalidPolicy { name: "bogus".to_owned() });
}

#[test]
fn policy_names_dispatch() -> PchipResult {
    let points = wiggly();
    assert_eq!(fit_by_name(&points, 4.0, "monotone")?, monotone(&points, 4.0)?);
    assert_eq!(fit_by_name(&points, 4.0, "shape_preserving")?, shape_preserving(&points, 4.0)?);
    assert_eq!(monotone(&points, 4.0)?, fit(&points, 4.0, Algorithm::Monotone)?);
    Ok(())
}

#[test]
fn too_few_points() {
    let err = fit(&pts(&[(1.0, 1.0)]), 4.0, Algorithm::Monotone).unwrap_err();
    assert_eq!(err, InterpolationError::InsufficientPoints { got: 1 });

    let err = fit(&[], 4.0, Algorithm::ShapePreserving).unwrap_err();
    assert_eq!(err, InterpolationError::InsufficientPoints { got: 0 });
}

#[test]
fn duplicate_x_rejected() {
    let points = pts(&[(0.0, 0.0), (1.0, 1.0), (1.0, 2.0), (2.0, 3.0)]);
    for algorithm in Algorithm::ALL {
        let err = fit(&points, 4.0, algorithm).unwrap_err();
        assert_eq!(err, InterpolationError::NonMonotonicInput { idx: 2, x_prev: 1.0, x_curr: 1.0 });
    }
}

#[test]
fn first_pair_out_of_order_rejected() {
    let points = pts(&[(1.0, 0.0), (0.5, 1.0), (2.0, 2.0)]);
    let err = fit(&points, 4.0, Algorithm::ShapePreserving).unwrap_err();
    assert_eq!(err, InterpolationError::NonMonotonicInput { idx: 1, x_prev: 1.0, x_curr: 0.5 });
}

#[test]
fn segment_lookup_past_the_end_is_none() -> PchipResult {
    let points = wiggly();
    let curve = Pchip::new(&points, Algorithm::Monotone)?;
    let last = points.len() - 2;

    let seg = curve.segment(last).expect("last interval exists");
    assert_eq!(seg.left(), points[last]);
    assert_eq!(seg.right(), points[last + 1]);
    assert!(curve.segment(last + 1).is_none());
    assert!(curve.segment(usize::MAX).is_none());
    assert_eq!(curve.segment(0), curve.segments().next());
    Ok(())
}

#[test]
fn decreasing_x_rejected() {
    let points = pts(&[(0.0, 0.0), (2.0, 1.0), (1.0, 2.0)]);
    let err = fit(&points, 4.0, Algorithm::Monotone).unwrap_err();
    assert_eq!(err, InterpolationError::NonMonotonicInput { idx: 2, x_prev: 2.0, x_curr: 1.0 });
}

#[test]
fn non_finite_point_rejected() {
    let points = pts(&[(0.0, 0.0), (1.0, f64::NAN), (2.0, 2.0)]);
    let err = fit(&points, 4.0, Algorithm::Monotone).unwrap_err();
    assert_eq!(err, InterpolationError::NonFinitePoint { idx: 1 });
}

#[test]
fn bad_frequency_rejected() {
    let points = pts(&[(0.0, 0.0), (1.0, 1.0)]);

    let err = fit(&points, -1.0, Algorithm::Monotone).unwrap_err();
    assert_eq!(err, InterpolationError::InvalidFrequency { got: -1.0 });

    let err = fit(&points, f64::INFINITY, Algorithm::Monotone).unwrap_err();
    assert_eq!(err, InterpolationError::InvalidFrequency { got: f64::INFINITY });

    assert!(matches!(
        fit(&points, f64::NAN, Algorithm::Monotone),
        Err(InterpolationError::InvalidFrequency { got }) if got.is_nan()
    ));
}

#[test]
fn oversized_curve_is_an_error() {
    let points = pts(&[(0.0, 0.0), (1.0, 1.0)]);

    let err = monotone(&points, 1e300).unwrap_err();
    assert!(matches!(err, InterpolationError::SampleOverflow { requested, .. } if requested == 1e300));

    // each segment fits alone, the sum does not
    let wide = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
    let frequency = (MAX_SAMPLES / 2) as f64;
    let err = fit(&wide, frequency, Algorithm::ShapePreserving).unwrap_err();
    assert!(matches!(err, InterpolationError::SampleOverflow { .. }));
}

#[test]
fn zero_frequency_gives_empty_curve() -> PchipResult {
    let samples = fit(&wiggly(), 0.0, Algorithm::ShapePreserving)?;
    assert!(samples.is_empty());
    Ok(())
}

#[test]
fn sample_count_law() -> PchipResult {
    // widths 0.5, 0.25, 1.75 at 4 per unit => 2 + 1 + 7
    let points = pts(&[(0.0, 0.0), (0.5, 1.0), (0.75, 0.5), (2.5, 3.0)]);
    for algorithm in Algorithm::ALL {
        assert_eq!(fit(&points, 4.0, algorithm)?.len(), 10);
    }

    let points = wiggly();
    let frequency = 3.3;
    let expected: usize = points
        .windows(2)
        .map(|w| ((w[1].x - w[0].x) * frequency) as usize)
        .sum();
    assert_eq!(fit(&points, frequency, Algorithm::Monotone)?.len(), expected);
    Ok(())
}

#[test]
fn narrow_interval_contributes_nothing() -> PchipResult {
    // 0.1 * 2 < 1 => first interval is skipped entirely
    let points = pts(&[(0.0, 0.0), (0.1, 1.0), (1.0, 2.0)]);
    let samples = fit(&points, 2.0, Algorithm::Monotone)?;

    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0], Point::new(0.1, 1.0));
    Ok(())
}

#[test]
fn output_is_ordered_without_gaps_or_repeats() -> PchipResult {
    let points = wiggly();
    let frequency = 8.0;
    let samples = fit(&points, frequency, Algorithm::ShapePreserving)?;

    for w in samples.windows(2) {
        assert!(w[1].x > w[0].x);
        assert!(w[1].x - w[0].x <= 1.0 / frequency + ATOL);
    }
    // all knots lie on the 1/8 grid, so each but the last is emitted as-is
    for p in &points[..points.len() - 1] {
        let hit = samples.iter().filter(|s| s.x == p.x).count();
        assert_eq!(hit, 1, "knot at x={} emitted {} times", p.x, hit);
    }
    assert!(samples.iter().all(|s| s.x < points[points.len() - 1].x));
    Ok(())
}

#[test]
fn curve_interpolates_knots() -> PchipResult {
    let points = wiggly();
    for algorithm in Algorithm::ALL {
        let curve = Pchip::new(&points, algorithm)?;
        for p in &points {
            assert!(approx_eq(curve.eval(p.x)?, p.y), "{} misses knot {:?}", algorithm, p);
        }
    }
    Ok(())
}

#[test]
fn curve_is_c1_at_knots() -> PchipResult {
    let points = wiggly();
    for algorithm in Algorithm::ALL {
        let curve = Pchip::new(&points, algorithm)?;
        let segments: Vec<_> = curve.segments().collect();
        assert_eq!(segments.len(), points.len() - 1);

        for (i, w) in segments.windows(2).enumerate() {
            let xk = points[i + 1].x;
            assert!(approx_eq(w[0].value(xk), w[1].value(xk)), "value jump at x={}", xk);
            assert!(
                approx_eq(w[0].derivative(xk), w[1].derivative(xk)),
                "slope jump at x={}: {} vs {}", xk, w[0].derivative(xk), w[1].derivative(xk)
            );
            assert!(approx_eq(w[1].derivative(xk), curve.slopes()[i + 1]));
        }
    }
    Ok(())
}

#[test]
fn extrema_are_flat_under_shape_preserving() -> PchipResult {
    let points = wiggly();
    let curve = Pchip::new(&points, Algorithm::ShapePreserving)?;

    for i in 1..points.len() - 1 {
        let s0 = Point::grad(&points[i - 1], &points[i]);
        let s1 = Point::grad(&points[i], &points[i + 1]);
        if s0 == 0.0 || s1 == 0.0 || s0.signum() != s1.signum() {
            assert_eq!(curve.slopes()[i], 0.0, "knot {} is an extremum", i);
            assert!(approx_eq(curve.derivative(points[i].x)?, 0.0));
        }
    }
    Ok(())
}

#[test]
fn repeated_calls_are_identical() -> PchipResult {
    let points = wiggly();
    for algorithm in Algorithm::ALL {
        let a = fit(&points, 10.0, algorithm)?;
        let b = fit(&points, 10.0, algorithm)?;
        assert_eq!(a.len(), b.len());
        for (p, q) in a.iter().zip(&b) {
            assert_eq!(p.x.to_bits(), q.x.to_bits());
            assert_eq!(p.y.to_bits(), q.y.to_bits());
        }
    }
    Ok(())
}

#[test]
fn eval_outside_domain_fails() -> PchipResult {
    let curve = Pchip::new(&pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]), Algorithm::Monotone)?;

    let err = curve.eval(-0.1).unwrap_err();
    assert_eq!(err, InterpolationError::OutOfBounds { got: -0.1, x_min: 0.0, x_max: 2.0 });

    let err = curve.eval_many(&[0.5, 2.0000001]).unwrap_err();
    assert!(matches!(err, InterpolationError::OutOfBounds { got, .. } if got == 2.0000001));

    assert!(curve.derivative(3.0).is_err());
    Ok(())
}

#[test]
fn sampled_curve_matches_pointwise_eval() -> PchipResult {
    let points = wiggly();
    let curve = Pchip::new(&points, Algorithm::Monotone)?;
    let samples = curve.sample(5.0)?;

    let xs: Vec<f64> = samples.iter().map(|s| s.x).collect();
    let ys = curve.eval_many(&xs)?;
    for (s, y) in samples.iter().zip(ys) {
        assert!(approx_eq(s.y, y), "x={}: {} vs {}", s.x, s.y, y);
    }
    Ok(())
}
