//! Plan score table - customer tier weights.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ReportSource, TierScore};
use crate::domain::report::{PlanChoice, PlanTier};

/// Tier weights keyed by plan, plus the fixed prospect/internal constants.
///
/// The table is configuration: hosts may override individual weights, and
/// an unknown or unset plan always resolves to the minimum tier weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanScoreTable {
    pub enterprise_plus: TierScore,
    pub growth: TierScore,
    pub starter: TierScore,
    pub open_source: TierScore,
    pub prospect: TierScore,
    pub internal: TierScore,
}

impl Default for PlanScoreTable {
    fn default() -> Self {
        Self {
            enterprise_plus: TierScore::new(10),
            growth: TierScore::new(7),
            starter: TierScore::new(5),
            open_source: TierScore::new(3),
            prospect: TierScore::new(5),
            internal: TierScore::new(1),
        }
    }
}

impl PlanScoreTable {
    /// Looks up the weight for a named tier.
    pub fn tier_weight(&self, tier: PlanTier) -> TierScore {
        match tier {
            PlanTier::EnterprisePlus => self.enterprise_plus,
            PlanTier::Growth => self.growth,
            PlanTier::Starter => self.starter,
            PlanTier::OpenSource => self.open_source,
        }
    }

    /// Resolves the tier weight for a report.
    ///
    /// Source constants take precedence over the plan selection; custom
    /// plans map their 1-5 score onto the working scale; anything unset
    /// falls back to the minimum weight.
    pub fn resolve(&self, source: ReportSource, plan: Option<&PlanChoice>) -> TierScore {
        match source {
            ReportSource::Internal => self.internal,
            ReportSource::Prospect => self.prospect,
            ReportSource::External => match plan {
                Some(PlanChoice::Tier(tier)) => self.tier_weight(*tier),
                Some(PlanChoice::Custom { score, .. }) => score.as_tier_score(),
                None => TierScore::MIN,
            },
        }
    }
}
