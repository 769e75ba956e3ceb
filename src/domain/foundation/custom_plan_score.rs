//! CustomPlanScore value object (1-5 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{TierScore, ValidationError};

/// User-supplied weight for a custom plan, on a 1-5 scale.
///
/// Mapped onto the working tier scale by doubling and capping at 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomPlanScore(u8);

impl CustomPlanScore {
    /// Creates a new CustomPlanScore, clamping to the valid range.
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 5))
    }

    /// Creates a CustomPlanScore, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(1..=5).contains(&value) {
            return Err(ValidationError::out_of_range(
                "custom_plan_score",
                1,
                5,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Maps this score onto the working tier scale (doubled, capped at 10).
    pub fn as_tier_score(&self) -> TierScore {
        TierScore::new((self.0 * 2).min(10))
    }
}

impl Default for CustomPlanScore {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for CustomPlanScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_plan_score_new_clamps_to_range() {
        assert_eq!(CustomPlanScore::new(0).value(), 1);
        assert_eq!(CustomPlanScore::new(3).value(), 3);
        assert_eq!(CustomPlanScore::new(9).value(), 5);
    }

    #[test]
    fn custom_plan_score_try_new_rejects_out_of_range() {
        assert!(CustomPlanScore::try_new(0).is_err());
        assert!(CustomPlanScore::try_new(6).is_err());
        assert!(CustomPlanScore::try_new(1).is_ok());
        assert!(CustomPlanScore::try_new(5).is_ok());
    }

    #[test]
    fn custom_plan_score_maps_to_tier_scale_by_doubling() {
        assert_eq!(CustomPlanScore::new(1).as_tier_score().value(), 2);
        assert_eq!(CustomPlanScore::new(3).as_tier_score().value(), 6);
        assert_eq!(CustomPlanScore::new(5).as_tier_score().value(), 10);
    }

    #[test]
    fn custom_plan_score_default_is_one() {
        assert_eq!(CustomPlanScore::default().value(), 1);
    }
}
