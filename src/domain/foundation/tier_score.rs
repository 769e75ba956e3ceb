//! TierScore value object (1-10 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Customer-tier weight on the working 1-10 scale.
///
/// Added to the questionnaire sum when computing the base score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierScore(u8);

impl TierScore {
    /// The minimum tier weight, used as the fallback for unknown plans.
    pub const MIN: Self = Self(1);

    /// The maximum tier weight.
    pub const MAX: Self = Self(10);

    /// Creates a new TierScore, clamping to the valid range.
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 10))
    }

    /// Creates a TierScore, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(1..=10).contains(&value) {
            return Err(ValidationError::out_of_range(
                "tier_score",
                1,
                10,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for TierScore {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for TierScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
