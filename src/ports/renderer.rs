//! Ticket Renderer Port - text generation interface.
//!
//! The application layer depends on this trait; the markdown adapter
//! provides the implementation. Rendering is total: missing or malformed
//! fields degrade to "N/A" or omitted lines, never an error.

use crate::domain::catalog::QuestionCatalog;
use crate::domain::report::ReportRecord;
use crate::domain::scoring::Priority;

/// The scored values a rendered ticket displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSummary {
    /// Final score scaled by the priority's display multiplier.
    pub displayed_score: u32,
    pub priority: Priority,
}

/// Port for rendering a ticket body from a completed record.
///
/// # Contract
///
/// Implementations must:
/// - Select the template shape from (report type, ticket type)
/// - Sanitize every free-text field before interpolation
/// - Keep the output valid Markdown, `[text](url)` links included
/// - Preserve `[Image: <name>]` placeholder tokens untouched
pub trait TicketRenderer: Send + Sync {
    /// Renders the full ticket body for the final report step.
    ///
    /// `score` is present for bug reports and absent for stories, which
    /// carry no score or priority lines.
    fn render(
        &self,
        record: &ReportRecord,
        catalog: &QuestionCatalog,
        score: Option<&ScoreSummary>,
    ) -> String;

    /// Renders the short questionnaire-plus-score summary for the
    /// quick-calculator results step.
    fn render_quick_summary(
        &self,
        record: &ReportRecord,
        catalog: &QuestionCatalog,
        score: &ScoreSummary,
    ) -> String;
}
