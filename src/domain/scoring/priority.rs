//! Priority classification of a scored report.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::PriorityPolicy;

/// Discrete severity labels, ordered least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Trivial,
    Low,
    Medium,
    High,
    Severe,
}

impl Priority {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Trivial => "Trivial",
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Severe => "Severe",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A priority label plus its cosmetic display weight.
///
/// The display multiplier inflates only the score a user sees; the stored
/// final score is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub priority: Priority,
    pub display_multiplier: f64,
}

impl Classification {
    /// The score shown to the user: final score scaled by the display weight.
    pub fn displayed_score(&self, final_score: u32) -> u32 {
        (final_score as f64 * self.display_multiplier).round() as u32
    }
}

/// Maps a (base score, multiplier) pair onto a priority label.
pub struct PriorityClassifier;

impl PriorityClassifier {
    /// Classifies a scored report under the given policy.
    ///
    /// Flag rules run first when enabled: a multiplier at or above the
    /// severe cutoff forces the most severe label, and the exact
    /// both-second-worst multiplier (1.5) forces High. Otherwise the
    /// threshold ladder decides, highest rung first, with the policy floor
    /// as the fallback. Total over any base score and multiplier >= 1.
    pub fn classify(base_score: u32, multiplier: f64, policy: &PriorityPolicy) -> Classification {
        let priority = Self::label_for(base_score, multiplier, policy);
        Classification {
            priority,
            display_multiplier: policy.display_multiplier(priority),
        }
    }

    fn label_for(base_score: u32, multiplier: f64, policy: &PriorityPolicy) -> Priority {
        if policy.flag_rules {
            if multiplier >= policy.severe_multiplier_cutoff {
                return Priority::Severe;
            }
            if (multiplier - 1.5).abs() < f64::EPSILON {
                return Priority::High;
            }
        }

        policy
            .thresholds
            .iter()
            .find(|t| base_score >= t.min_base_score)
            .map(|t| t.priority)
            .unwrap_or(policy.floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::PriorityThreshold;

    #[test]
    fn priority_ordering_is_ascending_severity() {
        assert!(Priority::Trivial < Priority::Low);
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::Medium < Priority::High);
        assert!(Priority::High < Priority::Severe);
    }

    #[test]
    fn severe_multiplier_forces_most_severe_label() {
        let policy = PriorityPolicy::default();
        let c = PriorityClassifier::classify(5, 2.5, &policy);
        assert_eq!(c.priority, Priority::Severe);
        assert_eq!(c.display_multiplier, 1.0);

        let c = PriorityClassifier::classify(5, 2.0, &policy);
        assert_eq!(c.priority, Priority::Severe);
    }

    #[test]
    fn both_second_worst_multiplier_forces_high() {
        let policy = PriorityPolicy::default();
        let c = PriorityClassifier::classify(5, 1.5, &policy);
        assert_eq!(c.priority, Priority::High);
    }

    #[test]
    fn threshold_ladder_decides_without_flags() {
        let policy = PriorityPolicy::default();
        assert_eq!(
            PriorityClassifier::classify(50, 1.0, &policy).priority,
            Priority::Medium
        );
        assert_eq!(
            PriorityClassifier::classify(49, 1.0, &policy).priority,
            Priority::Low
        );
        assert_eq!(
            PriorityClassifier::classify(20, 1.0, &policy).priority,
            Priority::Low
        );
        assert_eq!(
            PriorityClassifier::classify(19, 1.0, &policy).priority,
            Priority::Trivial
        );
    }

    #[test]
    fn pure_threshold_policy_ignores_multiplier() {
        let policy = PriorityPolicy {
            thresholds: vec![
                PriorityThreshold {
                    priority: Priority::Severe,
                    min_base_score: 90,
                },
                PriorityThreshold {
                    priority: Priority::High,
                    min_base_score: 70,
                },
                PriorityThreshold {
                    priority: Priority::Medium,
                    min_base_score: 50,
                },
                PriorityThreshold {
                    priority: Priority::Low,
                    min_base_score: 20,
                },
            ],
            ..PriorityPolicy::default()
        }
        .without_flag_rules();

        assert_eq!(
            PriorityClassifier::classify(95, 2.5, &policy).priority,
            Priority::Severe
        );
        assert_eq!(
            PriorityClassifier::classify(75, 2.5, &policy).priority,
            Priority::High
        );
        assert_eq!(
            PriorityClassifier::classify(10, 2.5, &policy).priority,
            Priority::Trivial
        );
    }

    #[test]
    fn display_multipliers_follow_the_label() {
        let policy = PriorityPolicy::default();
        assert_eq!(
            PriorityClassifier::classify(60, 1.0, &policy).display_multiplier,
            1.3
        );
        assert_eq!(
            PriorityClassifier::classify(30, 1.0, &policy).display_multiplier,
            1.2
        );
        assert_eq!(
            PriorityClassifier::classify(0, 1.0, &policy).display_multiplier,
            1.1
        );
    }

    #[test]
    fn displayed_score_rounds_after_scaling() {
        let c = Classification {
            priority: Priority::Medium,
            display_multiplier: 1.3,
        };
        assert_eq!(c.displayed_score(100), 130);
        assert_eq!(c.displayed_score(55), 72); // 71.5 rounds up
    }

    #[test]
    fn classify_is_total_over_zero_score() {
        let policy = PriorityPolicy::default();
        let c = PriorityClassifier::classify(0, 1.0, &policy);
        assert_eq!(c.priority, Priority::Trivial);
    }
}
