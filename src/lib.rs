//! Piecewise cubic Hermite interpolation (PCHIP).
//!
//! Turns a sparse, ordered set of `(x, y)` samples into a dense curve sampled
//! at a fixed frequency. Slopes are chosen by one of two policies, see
//! [`interpolation::algorithms::Algorithm`].

pub mod interpolation;

pub use interpolation::algorithms::Algorithm;
pub use interpolation::errors::InterpolationError;
pub use interpolation::pchip::{fit, fit_by_name, monotone, shape_preserving, Pchip};
pub use interpolation::point::Point;
