//! Customer details collected on the customer-information step.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::CustomPlanScore;

/// Named subscription plans offered to external customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanTier {
    EnterprisePlus,
    Growth,
    Starter,
    OpenSource,
}

impl PlanTier {
    /// Returns the display name used in rendered tickets.
    pub fn display_name(&self) -> &'static str {
        match self {
            PlanTier::EnterprisePlus => "Enterprise+",
            PlanTier::Growth => "Growth",
            PlanTier::Starter => "Starter",
            PlanTier::OpenSource => "Open Source",
        }
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The customer's plan: a named tier, or a custom plan with its own weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanChoice {
    Tier(PlanTier),
    Custom {
        label: String,
        score: CustomPlanScore,
    },
}

impl PlanChoice {
    /// Returns the label shown in the rendered customer-info block.
    pub fn label(&self) -> &str {
        match self {
            PlanChoice::Tier(tier) => tier.display_name(),
            PlanChoice::Custom { label, .. } => label,
        }
    }
}

/// Customer fields for the report. Which of them are required depends on
/// the report source; scoring and rendering fall back to safe defaults
/// for anything unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerDetails {
    /// Customer or prospect name.
    #[serde(default)]
    pub name: String,

    /// Monthly recurring revenue as extracted from the form, unparsed.
    #[serde(default)]
    pub monthly_arr: String,

    /// Selected plan, if any.
    #[serde(default)]
    pub plan: Option<PlanChoice>,
}

impl CustomerDetails {
    /// Parses the monthly ARR. `None` when the field is empty or not a number.
    pub fn monthly_arr_value(&self) -> Option<f64> {
        let trimmed = self.monthly_arr.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse::<f64>().ok()
    }

    /// Annual recurring revenue: monthly times twelve, malformed input as 0.
    pub fn annual_arr(&self) -> f64 {
        self.monthly_arr_value().unwrap_or(0.0) * 12.0
    }

    /// Returns true when no customer field carries data.
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty() && self.monthly_arr.trim().is_empty() && self.plan.is_none()
    }
}
