//! Defines the slope-selection policies for PCHIP.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods.
//! Names parse through [`std::str::FromStr`]; an unknown name is an
//! [`InterpolationError::InvalidPolicy`], never a silent default.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::interpolation::errors::InterpolationError;


/// PCHIP slope-selection variants.
/// - [`Algorithm::Monotone`]        Fritsch–Carlson limited averages
/// - [`Algorithm::ShapePreserving`] Brodlie weighted harmonic mean
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    #[default]
    Monotone,
    ShapePreserving,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Monotone, Algorithm::ShapePreserving];

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Monotone        => "monotone",
            Algorithm::ShapePreserving => "shape_preserving",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}

impl FromStr for Algorithm {
    type Err = InterpolationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.algorithm_name() == s)
            .ok_or_else(|| InterpolationError::InvalidPolicy { name: s.to_owned() })
    }
}
