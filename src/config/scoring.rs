//! Scoring and priority configuration sections.

use serde::Deserialize;

use crate::domain::catalog::QuestionId;
use crate::domain::foundation::TierScore;
use crate::domain::scoring::{
    PlanScoreTable, PriorityPolicy, PriorityThreshold, Priority, ScoringPolicy,
};

use super::error::ConfigValidationError;

/// Scoring configuration: tier weights and variant switches.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    /// Tier weight overrides, on the 1-10 scale.
    #[serde(default)]
    pub plan_scores: PlanScoreSettings,

    /// Question applied as a multiplier instead of an addend
    /// (e.g. "urgency" in the wait-time variant).
    #[serde(default)]
    pub multiplier_question: Option<String>,

    /// Whether the impact/urgency escalation multiplier applies.
    #[serde(default = "default_true")]
    pub escalation_rule: bool,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            plan_scores: PlanScoreSettings::default(),
            multiplier_question: None,
            escalation_rule: true,
        }
    }
}

/// Raw tier weights, validated into `PlanScoreTable`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanScoreSettings {
    #[serde(default = "default_enterprise_plus")]
    pub enterprise_plus: u8,
    #[serde(default = "default_growth")]
    pub growth: u8,
    #[serde(default = "default_starter")]
    pub starter: u8,
    #[serde(default = "default_open_source")]
    pub open_source: u8,
    #[serde(default = "default_prospect")]
    pub prospect: u8,
    #[serde(default = "default_internal")]
    pub internal: u8,
}

fn default_enterprise_plus() -> u8 {
    10
}
fn default_growth() -> u8 {
    7
}
fn default_starter() -> u8 {
    5
}
fn default_open_source() -> u8 {
    3
}
fn default_prospect() -> u8 {
    5
}
fn default_internal() -> u8 {
    1
}
fn default_true() -> bool {
    true
}

impl Default for PlanScoreSettings {
    fn default() -> Self {
        Self {
            enterprise_plus: default_enterprise_plus(),
            growth: default_growth(),
            starter: default_starter(),
            open_source: default_open_source(),
            prospect: default_prospect(),
            internal: default_internal(),
        }
    }
}

impl PlanScoreSettings {
    fn tier(&self, value: u8) -> Result<TierScore, ConfigValidationError> {
        TierScore::try_new(value).map_err(|_| ConfigValidationError::PlanScoreOutOfRange(value))
    }

    /// Builds the domain table, rejecting out-of-range weights.
    pub fn into_table(self) -> Result<PlanScoreTable, ConfigValidationError> {
        Ok(PlanScoreTable {
            enterprise_plus: self.tier(self.enterprise_plus)?,
            growth: self.tier(self.growth)?,
            starter: self.tier(self.starter)?,
            open_source: self.tier(self.open_source)?,
            prospect: self.tier(self.prospect)?,
            internal: self.tier(self.internal)?,
        })
    }
}

impl ScoringSettings {
    /// Builds the domain scoring policy.
    pub fn into_policy(self) -> Result<ScoringPolicy, ConfigValidationError> {
        let multiplier_question = match self.multiplier_question.as_deref() {
            None => None,
            Some(raw) => Some(parse_question_id(raw)?),
        };
        Ok(ScoringPolicy {
            plan_table: self.plan_scores.into_table()?,
            multiplier_question,
            escalation_rule: self.escalation_rule,
        })
    }
}

fn parse_question_id(raw: &str) -> Result<QuestionId, ConfigValidationError> {
    QuestionId::all()
        .iter()
        .find(|id| id.key() == raw)
        .copied()
        .ok_or_else(|| ConfigValidationError::UnknownQuestionId(raw.to_string()))
}

/// Priority configuration: threshold ladder and flag rules.
#[derive(Debug, Clone, Deserialize)]
pub struct PrioritySettings {
    /// Base score at or above which a report is at least Medium.
    #[serde(default = "default_medium_threshold")]
    pub medium_threshold: u32,

    /// Base score at or above which a report is at least Low.
    #[serde(default = "default_low_threshold")]
    pub low_threshold: u32,

    /// Whether the multiplier can force Severe/High labels.
    #[serde(default = "default_true")]
    pub flag_rules: bool,

    /// Multiplier at or above which Severe is forced.
    #[serde(default = "default_severe_cutoff")]
    pub severe_multiplier_cutoff: f64,

    /// Display multipliers, most severe first.
    #[serde(default = "default_display_multipliers")]
    pub display_multipliers: [f64; 5],
}

fn default_medium_threshold() -> u32 {
    50
}
fn default_low_threshold() -> u32 {
    20
}
fn default_severe_cutoff() -> f64 {
    2.0
}
fn default_display_multipliers() -> [f64; 5] {
    [1.0, 1.0, 1.3, 1.2, 1.1]
}

impl Default for PrioritySettings {
    fn default() -> Self {
        Self {
            medium_threshold: default_medium_threshold(),
            low_threshold: default_low_threshold(),
            flag_rules: true,
            severe_multiplier_cutoff: default_severe_cutoff(),
            display_multipliers: default_display_multipliers(),
        }
    }
}

impl PrioritySettings {
    /// Checks threshold ordering and multiplier sanity.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.medium_threshold <= self.low_threshold {
            return Err(ConfigValidationError::ThresholdsNotDescending);
        }
        if self.severe_multiplier_cutoff <= 1.0 {
            return Err(ConfigValidationError::InvalidSevereCutoff);
        }
        if self.display_multipliers.iter().any(|m| *m < 1.0) {
            return Err(ConfigValidationError::DisplayMultiplierTooSmall);
        }
        Ok(())
    }

    /// Builds the domain priority policy.
    pub fn into_policy(self) -> Result<PriorityPolicy, ConfigValidationError> {
        self.validate()?;
        Ok(PriorityPolicy {
            thresholds: vec![
                PriorityThreshold {
                    priority: Priority::Medium,
                    min_base_score: self.medium_threshold,
                },
                PriorityThreshold {
                    priority: Priority::Low,
                    min_base_score: self.low_threshold,
                },
            ],
            floor: Priority::Trivial,
            flag_rules: self.flag_rules,
            severe_multiplier_cutoff: self.severe_multiplier_cutoff,
            display_multipliers: self.display_multipliers,
        })
    }
}
