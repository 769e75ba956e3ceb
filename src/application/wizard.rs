//! WizardService - the collaborator-facing surface of the core.
//!
//! The host owns a `WizardSession` (current step + record) and passes it
//! into every call; there is no module-level state. Reaching a display
//! step computes the score (bug reports) or renders directly (stories) as
//! part of the transition.

use tracing::debug;

use crate::domain::catalog::QuestionCatalog;
use crate::domain::flow::{FlowController, StepValidation, WizardStep};
use crate::domain::foundation::ReportType;
use crate::domain::report::ReportRecord;
use crate::domain::scoring::{
    Classification, PriorityClassifier, PriorityPolicy, ScoreBreakdown, ScoreCalculator,
    ScoringPolicy,
};
use crate::ports::{ScoreSummary, TicketRenderer};

/// Score components attached to a bug outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredOutcome {
    pub breakdown: ScoreBreakdown,
    pub classification: Classification,
    /// Final score scaled by the priority's display multiplier.
    pub displayed_score: u32,
}

/// The computed result shown on a display step.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOutcome {
    /// Present for bug reports; stories carry no score.
    pub score: Option<ScoredOutcome>,
    /// The rendered ticket body (or quick-calculator summary).
    pub body: String,
}

/// The wizard state owned by the host application.
#[derive(Debug, Clone)]
pub struct WizardSession {
    pub step: WizardStep,
    pub record: ReportRecord,
    /// Populated when a display step is reached, cleared on reset.
    pub outcome: Option<ReportOutcome>,
}

impl WizardSession {
    /// Starts a session at the first step with a fresh record.
    pub fn new() -> Self {
        Self {
            step: WizardStep::ReportType,
            record: ReportRecord::new(),
            outcome: None,
        }
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Orchestrates flow control, scoring, and rendering over a session.
pub struct WizardService<R: TicketRenderer> {
    catalog: QuestionCatalog,
    scoring_policy: ScoringPolicy,
    priority_policy: PriorityPolicy,
    renderer: R,
}

impl<R: TicketRenderer> WizardService<R> {
    /// Creates a service with the standard catalog and canonical policies.
    pub fn new(renderer: R) -> Self {
        Self {
            catalog: QuestionCatalog::standard().clone(),
            scoring_policy: ScoringPolicy::default(),
            priority_policy: PriorityPolicy::default(),
            renderer,
        }
    }

    /// Creates a service with explicit catalog and policies.
    pub fn with_policies(
        catalog: QuestionCatalog,
        scoring_policy: ScoringPolicy,
        priority_policy: PriorityPolicy,
        renderer: R,
    ) -> Self {
        Self {
            catalog,
            scoring_policy,
            priority_policy,
            renderer,
        }
    }

    /// Returns the catalog this service scores against.
    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Validates the session's current step without mutating anything.
    pub fn validate_step(&self, session: &WizardSession) -> StepValidation {
        FlowController::validate(session.step, &session.record, &self.catalog)
    }

    /// Advances to the next step if the current step validates.
    ///
    /// On failure the session is untouched and every accumulated message
    /// is returned. Reaching a display step computes the outcome.
    pub fn advance(&self, session: &mut WizardSession) -> Result<WizardStep, StepValidation> {
        let validation = self.validate_step(session);
        if !validation.is_ok() {
            debug!(
                step = %session.step,
                errors = validation.errors.len(),
                "step validation failed"
            );
            return Err(validation);
        }

        let next = FlowController::next_step(session.step, &session.record);
        if next == session.step {
            return Ok(next);
        }

        debug!(from = %session.step, to = %next, "advancing wizard");

        if next == WizardStep::FinalReport {
            session.outcome = Some(self.compute_and_render(&session.record));
        } else if next == WizardStep::QuickResults {
            session.outcome = Some(self.compute_quick_summary(&session.record));
        }

        session.step = next;
        Ok(next)
    }

    /// Moves back one step without re-validating or recomputing.
    ///
    /// Backing out of the quick assessment abandons the shortcut and
    /// resets the session to a fresh first step.
    pub fn go_back(&self, session: &mut WizardSession) -> Option<WizardStep> {
        let previous = FlowController::previous_step(session.step)?;
        if session.step == WizardStep::QuickAssessment {
            self.start_new_report(session);
            return Some(session.step);
        }
        session.step = previous;
        Some(previous)
    }

    /// Discards the draft and returns to the first step.
    pub fn start_new_report(&self, session: &mut WizardSession) {
        debug!(report = %session.record.id, "starting new report");
        session.record.reset();
        session.step = WizardStep::ReportType;
        session.outcome = None;
    }

    /// Computes the score (bug reports only) and renders the ticket body.
    ///
    /// Safe to call speculatively at any point, e.g. for a live preview:
    /// it reads the record and touches nothing.
    pub fn compute_and_render(&self, record: &ReportRecord) -> ReportOutcome {
        let score = (record.report_type == ReportType::Bug).then(|| self.score(record));
        let summary = score.as_ref().map(|s| ScoreSummary {
            displayed_score: s.displayed_score,
            priority: s.classification.priority,
        });
        let body = self
            .renderer
            .render(record, &self.catalog, summary.as_ref());
        ReportOutcome { score, body }
    }

    fn compute_quick_summary(&self, record: &ReportRecord) -> ReportOutcome {
        let scored = self.score(record);
        let summary = ScoreSummary {
            displayed_score: scored.displayed_score,
            priority: scored.classification.priority,
        };
        let body = self
            .renderer
            .render_quick_summary(record, &self.catalog, &summary);
        ReportOutcome {
            score: Some(scored),
            body,
        }
    }

    fn score(&self, record: &ReportRecord) -> ScoredOutcome {
        let breakdown = ScoreCalculator::compute(record, &self.catalog, &self.scoring_policy);
        let classification = PriorityClassifier::classify(
            breakdown.base_score,
            breakdown.multiplier,
            &self.priority_policy,
        );
        let displayed_score = classification.displayed_score(breakdown.final_score);
        debug!(
            base = breakdown.base_score,
            multiplier = breakdown.multiplier,
            displayed = displayed_score,
            priority = %classification.priority,
            "scored report"
        );
        ScoredOutcome {
            breakdown,
            classification,
            displayed_score,
        }
    }
}
