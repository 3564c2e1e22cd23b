//! Criterion weight value object (0-100 percentage scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A criterion weight between 0 and 100 inclusive, interpreted as a percentage.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100.0);

    /// Creates a new Weight, clamping to the valid range.
    ///
    /// Non-finite input clamps to zero.
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 100.0))
        } else {
            Self(0.0)
        }
    }

    /// Creates a Weight, returning an error if out of range or non-finite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::invalid_format(
                "weight",
                "must be a finite number",
            ));
        }
        if !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::out_of_range("weight", 0.0, 100.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the percentage value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        self.0 / 100.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
