use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum InterpolationError {
    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("non-finite coordinate in point at index {idx}")]
    NonFinitePoint { idx: usize },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("insufficient points: got {got}, need at least 2")]
    InsufficientPoints { got: usize },

    #[error("x-values must be strictly increasing: got {x_prev} then {x_curr} at index {idx}")]
    NonMonotonicInput { idx: usize, x_prev: f64, x_curr: f64 },

    #[error("slope method '{name}' is not defined, expected 'monotone' or 'shape_preserving'")]
    InvalidPolicy { name: String },

    #[error("invalid sampling frequency {got}: must be finite and >= 0")]
    InvalidFrequency { got: f64 },

    #[error("{requested} samples requested, a sample buffer holds at most {max}")]
    SampleOverflow { requested: f64, max: usize },

    #[error("evaluation point {got} out of bounds in ({x_min}, {x_max})")]
    OutOfBounds { got: f64, x_min: f64, x_max: f64 },

    #[error("invalid x_tol {got} must be finite and > 0")]
    InvalidXTol { got: f64 },
}
