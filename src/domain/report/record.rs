//! ReportRecord - the working state for one in-progress ticket draft.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ReportId, ReportSource, ReportType, TicketType, Timestamp};

use super::{AnswerSheet, BugNarrative, CustomerDetails, DueDiligence, ReferenceLinks, StoryNarrative};

/// All data collected across the wizard steps for one draft.
///
/// Created fresh at wizard start, mutated only between discrete user
/// actions, and discarded wholesale on "start new report". Scores,
/// classifications, and rendered text are derived on demand and never
/// stored here.
///
/// Older serialized records carried an `is_internal` boolean instead of
/// `report_source`; deserialization upcasts the legacy flag onto the enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ReportRecordRepr")]
pub struct ReportRecord {
    pub id: ReportId,
    pub created_at: Timestamp,

    pub report_type: ReportType,
    pub ticket_type: TicketType,

    /// Entered via the quick-calculator shortcut from the first step.
    pub quick_calc: bool,

    pub report_source: ReportSource,
    pub customer: CustomerDetails,
    pub links: ReferenceLinks,
    pub customer_comment: String,

    pub due_diligence: DueDiligence,
    pub answers: AnswerSheet,

    pub bug: BugNarrative,
    pub story: StoryNarrative,
}

impl ReportRecord {
    /// Creates a fresh draft with all-default values.
    pub fn new() -> Self {
        Self {
            id: ReportId::new(),
            created_at: Timestamp::now(),
            report_type: ReportType::default(),
            ticket_type: TicketType::default(),
            quick_calc: false,
            report_source: ReportSource::default(),
            customer: CustomerDetails::default(),
            links: ReferenceLinks::default(),
            customer_comment: String::new(),
            due_diligence: DueDiligence::default(),
            answers: AnswerSheet::default(),
            bug: BugNarrative::default(),
            story: StoryNarrative::default(),
        }
    }

    /// Discards all collected data, replacing this draft with a fresh one.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns true when no user data would be lost by a reset.
    pub fn is_pristine(&self) -> bool {
        self.customer.is_empty()
            && self.links.is_empty()
            && self.customer_comment.trim().is_empty()
            && !self.due_diligence.any_confirmed()
            && self.answers.is_empty()
            && self.bug.is_empty()
            && self.story.is_empty()
    }
}

impl Default for ReportRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// Deserialization shape accepting both current and legacy source fields.
#[derive(Deserialize)]
struct ReportRecordRepr {
    #[serde(default)]
    id: ReportId,
    #[serde(default = "Timestamp::now")]
    created_at: Timestamp,
    #[serde(default)]
    report_type: ReportType,
    #[serde(default)]
    ticket_type: TicketType,
    #[serde(default)]
    quick_calc: bool,
    #[serde(default)]
    report_source: Option<ReportSource>,
    /// Legacy two-valued source flag, honored only when the enum is absent.
    #[serde(default)]
    is_internal: Option<bool>,
    #[serde(default)]
    customer: CustomerDetails,
    #[serde(default)]
    links: ReferenceLinks,
    #[serde(default)]
    customer_comment: String,
    #[serde(default)]
    due_diligence: DueDiligence,
    #[serde(default)]
    answers: AnswerSheet,
    #[serde(default)]
    bug: BugNarrative,
    #[serde(default)]
    story: StoryNarrative,
}

impl From<ReportRecordRepr> for ReportRecord {
    fn from(repr: ReportRecordRepr) -> Self {
        let report_source = repr
            .report_source
            .unwrap_or_else(|| ReportSource::from_legacy_flag(repr.is_internal.unwrap_or(false)));
        Self {
            id: repr.id,
            created_at: repr.created_at,
            report_type: repr.report_type,
            ticket_type: repr.ticket_type,
            quick_calc: repr.quick_calc,
            report_source,
            customer: repr.customer,
            links: repr.links,
            customer_comment: repr.customer_comment,
            due_diligence: repr.due_diligence,
            answers: repr.answers,
            bug: repr.bug,
            story: repr.story,
        }
    }
}
