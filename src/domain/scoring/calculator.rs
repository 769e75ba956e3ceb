//! ScoreCalculator - combines answers and tier weight into a score.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{OptionCode, QuestionCatalog, QuestionId};
use crate::domain::report::ReportRecord;

use super::ScoringPolicy;

/// The computed score components for one report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Sum of answered option scores plus the tier weight.
    pub base_score: u32,
    /// Escalation or variant multiplier applied to the base.
    pub multiplier: f64,
    /// `round(base_score * multiplier)`.
    pub final_score: u32,
}

/// Pure scoring over a report, a catalog, and a policy.
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Computes the score breakdown for a record.
    ///
    /// Total over any well-formed record: unanswered questions contribute
    /// nothing, an unknown plan resolves to the minimum tier weight, and an
    /// empty answer sheet yields `base_score == tier weight`.
    pub fn compute(
        record: &ReportRecord,
        catalog: &QuestionCatalog,
        policy: &ScoringPolicy,
    ) -> ScoreBreakdown {
        let mut base_score: u32 = 0;

        for question in catalog.questions() {
            if policy.multiplier_question == Some(question.id) {
                continue;
            }
            if let Some(code) = record.answers.answer(question.id) {
                base_score += question.score_for(code);
            }
        }

        let tier = policy
            .plan_table
            .resolve(record.report_source, record.customer.plan.as_ref());
        base_score += tier.value() as u32;

        let multiplier = Self::multiplier(record, catalog, policy);
        let final_score = (base_score as f64 * multiplier).round() as u32;

        ScoreBreakdown {
            base_score,
            multiplier,
            final_score,
        }
    }

    fn multiplier(
        record: &ReportRecord,
        catalog: &QuestionCatalog,
        policy: &ScoringPolicy,
    ) -> f64 {
        if let Some(id) = policy.multiplier_question {
            // Variant: the designated question scales the total instead of
            // adding to it. Unanswered leaves the total untouched.
            return catalog
                .question(id)
                .and_then(|q| record.answers.answer(id).and_then(|code| q.option(code)))
                .map(|option| option.score as f64)
                .unwrap_or(1.0);
        }

        if policy.escalation_rule {
            return Self::escalation_multiplier(
                record.answers.answer(QuestionId::Impact),
                record.answers.answer(QuestionId::Urgency),
            );
        }

        1.0
    }

    fn escalation_multiplier(impact: Option<OptionCode>, urgency: Option<OptionCode>) -> f64 {
        let impact_worst = impact == Some(OptionCode::A);
        let urgency_worst = urgency == Some(OptionCode::A);

        if impact_worst && urgency_worst {
            2.5
        } else if impact_worst || urgency_worst {
            2.0
        } else if impact == Some(OptionCode::B) && urgency == Some(OptionCode::B) {
            1.5
        } else {
            1.0
        }
    }
}
