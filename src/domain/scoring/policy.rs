//! Scoring and priority policies.
//!
//! The catalog variants differ in how the urgency question contributes and
//! in how priorities are assigned. Both axes are configuration here, so one
//! engine serves every variant.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::QuestionId;

use super::{PlanScoreTable, Priority};

/// How questionnaire answers and the tier weight combine into a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    /// Tier weights per plan.
    #[serde(default)]
    pub plan_table: PlanScoreTable,

    /// A question excluded from the additive sum and applied as a
    /// multiplier after the tier weight is added. `None` in the
    /// canonical variant, where every question is additive.
    #[serde(default)]
    pub multiplier_question: Option<QuestionId>,

    /// Whether the impact/urgency escalation multiplier applies
    /// (both worst-case 2.5x, either 2.0x, both second-worst 1.5x).
    #[serde(default = "default_true")]
    pub escalation_rule: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            plan_table: PlanScoreTable::default(),
            multiplier_question: None,
            escalation_rule: true,
        }
    }
}

/// One rung of the threshold ladder: scores at or above `min_base_score`
/// earn at least `priority`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityThreshold {
    pub priority: Priority,
    pub min_base_score: u32,
}

/// How a score pair maps to a priority label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityPolicy {
    /// Threshold ladder, consulted highest rung first.
    pub thresholds: Vec<PriorityThreshold>,

    /// The label for scores below every rung.
    pub floor: Priority,

    /// When true, the multiplier can force the two most severe labels
    /// regardless of the numeric score.
    #[serde(default = "default_true")]
    pub flag_rules: bool,

    /// Multiplier at or above which the most severe label is forced.
    #[serde(default = "default_severe_cutoff")]
    pub severe_multiplier_cutoff: f64,

    /// Display-weight multipliers per label, most severe first
    /// (Severe, High, Medium, Low, Trivial).
    #[serde(default = "default_display_multipliers")]
    pub display_multipliers: [f64; 5],
}

fn default_severe_cutoff() -> f64 {
    2.0
}

fn default_display_multipliers() -> [f64; 5] {
    [1.0, 1.0, 1.3, 1.2, 1.1]
}

impl Default for PriorityPolicy {
    fn default() -> Self {
        Self {
            thresholds: vec![
                PriorityThreshold {
                    priority: Priority::Medium,
                    min_base_score: 50,
                },
                PriorityThreshold {
                    priority: Priority::Low,
                    min_base_score: 20,
                },
            ],
            floor: Priority::Trivial,
            flag_rules: true,
            severe_multiplier_cutoff: 2.0,
            display_multipliers: default_display_multipliers(),
        }
    }
}

impl PriorityPolicy {
    /// A pure-threshold variant of this policy, with flag rules disabled.
    pub fn without_flag_rules(mut self) -> Self {
        self.flag_rules = false;
        self
    }

    /// Returns the display multiplier for a label.
    pub fn display_multiplier(&self, priority: Priority) -> f64 {
        match priority {
            Priority::Severe => self.display_multipliers[0],
            Priority::High => self.display_multipliers[1],
            Priority::Medium => self.display_multipliers[2],
            Priority::Low => self.display_multipliers[3],
            Priority::Trivial => self.display_multipliers[4],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scoring_policy_is_additive_with_escalation() {
        let policy = ScoringPolicy::default();
        assert!(policy.multiplier_question.is_none());
        assert!(policy.escalation_rule);
        assert_eq!(policy.plan_table, PlanScoreTable::default());
    }

    #[test]
    fn default_priority_policy_carries_two_threshold_rungs() {
        let policy = PriorityPolicy::default();
        assert_eq!(policy.thresholds.len(), 2);
        assert_eq!(policy.thresholds[0].priority, Priority::Medium);
        assert_eq!(policy.thresholds[0].min_base_score, 50);
        assert_eq!(policy.floor, Priority::Trivial);
        assert!(policy.flag_rules);
    }

    #[test]
    fn display_multiplier_matches_label() {
        let policy = PriorityPolicy::default();
        assert_eq!(policy.display_multiplier(Priority::Severe), 1.0);
        assert_eq!(policy.display_multiplier(Priority::Medium), 1.3);
        assert_eq!(policy.display_multiplier(Priority::Low), 1.2);
        assert_eq!(policy.display_multiplier(Priority::Trivial), 1.1);
    }

    #[test]
    fn without_flag_rules_disables_overrides_only() {
        let policy = PriorityPolicy::default().without_flag_rules();
        assert!(!policy.flag_rules);
        assert_eq!(policy.thresholds.len(), 2);
    }

    #[test]
    fn scoring_policy_deserializes_multiplier_variant() {
        let policy: ScoringPolicy = serde_yaml::from_str(
            r#"
multiplier_question: urgency
escalation_rule: false
"#,
        )
        .unwrap();
        assert_eq!(policy.multiplier_question, Some(QuestionId::Urgency));
        assert!(!policy.escalation_rule);
    }
}
