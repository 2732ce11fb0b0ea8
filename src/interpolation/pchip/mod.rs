//! Piecewise cubic Hermite interpolation.
//!
//! Slopes come from [`monotonic`] (Fritsch–Carlson) or [`harmonic`]
//! (Brodlie); each interval is then a [`HermiteSegment`] sampled at a fixed
//! frequency by [`fit`].

pub(crate) mod helpers;
pub mod monotonic;
pub mod harmonic;
pub mod segment;
pub mod driver;

pub use driver::{
    estimate_slopes,
    fit,
    fit_by_name,
    interpolate,
    monotone,
    shape_preserving,
    Pchip,
    PchipCfg,
};
pub use harmonic::estimate_shape_preserving;
pub use monotonic::{estimate_monotone, CIRCLE_RADIUS_SQ, SECANT_GUARD};
pub use segment::{sample_segment, HermiteSegment, MAX_SAMPLES};
