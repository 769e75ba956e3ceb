//! FlowController - step sequencing and per-step validation rules.

use crate::domain::catalog::QuestionCatalog;
use crate::domain::foundation::{ReportSource, ReportType, TicketType};
use crate::domain::report::{LinkCategory, PlanChoice, ReportRecord};

use super::{StepValidation, WizardStep};

/// Decides, given the record, which step comes next and what the current
/// step requires. Stateless: the host owns the current step and the record.
pub struct FlowController;

impl FlowController {
    /// Returns the step that follows `step` for this record.
    ///
    /// Update tickets skip due diligence; story updates jump from customer
    /// details straight to the final report; stories never visit bug
    /// documentation. Forward movement stops at the display steps.
    pub fn next_step(step: WizardStep, record: &ReportRecord) -> WizardStep {
        let story = record.report_type == ReportType::Story;
        let update = record.ticket_type == TicketType::Update;

        match step {
            WizardStep::ReportType if record.quick_calc => WizardStep::QuickAssessment,
            WizardStep::ReportType => WizardStep::TicketType,
            WizardStep::TicketType if update => WizardStep::CustomerDetails,
            WizardStep::TicketType => WizardStep::DueDiligence,
            WizardStep::DueDiligence => WizardStep::CustomerDetails,
            WizardStep::CustomerDetails if story && update => WizardStep::FinalReport,
            WizardStep::CustomerDetails => WizardStep::Assessment,
            WizardStep::Assessment if story => WizardStep::FinalReport,
            WizardStep::Assessment => WizardStep::BugDocumentation,
            WizardStep::BugDocumentation => WizardStep::FinalReport,
            WizardStep::FinalReport => WizardStep::FinalReport,
            WizardStep::QuickAssessment => WizardStep::QuickResults,
            WizardStep::QuickResults => WizardStep::QuickResults,
        }
    }

    /// Returns the step before `step`, or `None` at the first step.
    ///
    /// Backward movement is an unconditional decrement through the main
    /// sequence; it never re-validates and never recomputes. Leaving the
    /// quick assessment goes back to the start.
    pub fn previous_step(step: WizardStep) -> Option<WizardStep> {
        match step {
            WizardStep::ReportType => None,
            WizardStep::QuickAssessment => Some(WizardStep::ReportType),
            WizardStep::QuickResults => Some(WizardStep::QuickAssessment),
            other => WizardStep::from_number(other.number() - 1),
        }
    }

    /// Validates the current step against the record, accumulating every
    /// failure message. Never mutates the record.
    pub fn validate(
        step: WizardStep,
        record: &ReportRecord,
        catalog: &QuestionCatalog,
    ) -> StepValidation {
        let mut result = StepValidation::valid();
        match step {
            WizardStep::DueDiligence => Self::validate_due_diligence(record, &mut result),
            WizardStep::CustomerDetails => Self::validate_customer_details(record, &mut result),
            WizardStep::Assessment => Self::validate_assessment(record, catalog, &mut result),
            WizardStep::BugDocumentation => Self::validate_bug_documentation(record, &mut result),
            WizardStep::QuickAssessment => {
                Self::validate_quick_assessment(record, catalog, &mut result)
            }
            _ => {}
        }
        result
    }

    fn validate_due_diligence(record: &ReportRecord, result: &mut StepValidation) {
        // Update tickets skip due diligence entirely.
        if record.ticket_type != TicketType::New {
            return;
        }
        if !record.due_diligence.checked_existing_tickets {
            result.require("Please confirm you have checked for pre-existing tickets");
        }
        if !record.due_diligence.reviewed_documentation {
            result.require("Please confirm you have reviewed the documentation");
        }
        if !record.due_diligence.checked_slack_discussions {
            result.require("Please confirm you have checked Slack discussions");
        }
    }

    fn validate_customer_details(record: &ReportRecord, result: &mut StepValidation) {
        let comment_missing = record.customer_comment.trim().is_empty();
        let story_update = record.report_type == ReportType::Story
            && record.ticket_type == TicketType::Update;

        match record.report_source {
            ReportSource::Internal => {
                if record.ticket_type == TicketType::Update && comment_missing {
                    result.require("Comment is required for internal updates");
                }
            }
            ReportSource::Prospect => {
                if record.customer.name.trim().is_empty() {
                    result.require("Customer/Prospect name is required");
                }
                if story_update && comment_missing {
                    result.require("Customer comment is required for story updates");
                }
            }
            ReportSource::External => {
                if record.customer.name.trim().is_empty() {
                    result.require("Customer name is required");
                }
                if record.customer.monthly_arr.trim().is_empty() {
                    result.require("Monthly ARR is required");
                } else {
                    match record.customer.monthly_arr_value() {
                        Some(value) if value >= 0.0 => {}
                        _ => result.require("Monthly ARR must be a valid number (0 or greater)"),
                    }
                }
                match &record.customer.plan {
                    None => result.require("Plan type is required"),
                    Some(PlanChoice::Custom { label, .. }) => {
                        if label.trim().is_empty() {
                            result.require("Custom plan type description is required");
                        }
                    }
                    Some(PlanChoice::Tier(_)) => {}
                }
                if story_update && comment_missing {
                    result.require("Customer comment is required for story updates");
                }
            }
        }

        if record.report_source != ReportSource::Internal {
            if record.links.has_gap(LinkCategory::Intercom) {
                result.require("Please fill in all Intercom URL fields or remove empty ones");
            }
            if record.links.has_gap(LinkCategory::Slack) {
                result.require("Please fill in all Slack URL fields or remove empty ones");
            }
        }
    }

    fn validate_assessment(
        record: &ReportRecord,
        catalog: &QuestionCatalog,
        result: &mut StepValidation,
    ) {
        if record.report_type == ReportType::Story {
            // Story updates never visit this step; nothing to check.
            if record.ticket_type == TicketType::Update {
                return;
            }
            if record.story.description.trim().is_empty() {
                result.require("Description is required");
            }
            if record.story.current_vs_expected.trim().is_empty() {
                result.require("Current vs Expected functionality is required");
            }
            if record.story.timeline_context.trim().is_empty() {
                result.require("Timeline & context is required");
            }
        } else {
            for question in record.answers.unanswered(catalog) {
                result.require(format!("Please answer: {}", question.text));
            }
        }
    }

    fn validate_bug_documentation(record: &ReportRecord, result: &mut StepValidation) {
        if record.bug.summary.trim().is_empty() {
            result.require("Summary is required");
        }
        if record.ticket_type == TicketType::New {
            if record.bug.steps_to_reproduce.trim().is_empty() {
                result.require("Steps to reproduce is required");
            }
            if record.bug.expected_vs_actual.trim().is_empty() {
                result.require("Expected vs actual behavior is required");
            }
        }
    }

    fn validate_quick_assessment(
        record: &ReportRecord,
        catalog: &QuestionCatalog,
        result: &mut StepValidation,
    ) {
        if record.report_source == ReportSource::External {
            match &record.customer.plan {
                None => result.require("Please select a plan type"),
                Some(PlanChoice::Custom { label, .. }) => {
                    if label.trim().is_empty() {
                        result.require("Please enter custom plan type");
                    }
                }
                Some(PlanChoice::Tier(_)) => {}
            }
        }
        for question in record.answers.unanswered(catalog) {
            result.require(format!("Please answer: {}", question.text));
        }
    }
}
