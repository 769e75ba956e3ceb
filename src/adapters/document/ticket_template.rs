//! Markdown ticket template renderer.
//!
//! Builds the JIRA-ready ticket body from a completed record. Template
//! shape follows (report type, ticket type); every free-text field passes
//! through `sanitize` exactly once before interpolation.

use crate::domain::catalog::QuestionCatalog;
use crate::domain::foundation::{ReportSource, ReportType, TicketType};
use crate::domain::report::{LinkCategory, PlanChoice, ReportRecord};
use crate::ports::{ScoreSummary, TicketRenderer};

use super::currency::{format_currency, CurrencyStyle};
use super::sanitize::sanitize;

/// Closing reminder appended to every rendered ticket.
const IMAGE_NOTE: &str =
    "\n\n---\n**Note:** Paste any relevant images or videos directly into the JIRA ticket.";

/// Markdown implementation of the ticket renderer port.
#[derive(Debug, Clone, Default)]
pub struct MarkdownTicketRenderer {
    currency_style: CurrencyStyle,
}

impl MarkdownTicketRenderer {
    /// Creates a renderer with the default grouped currency format.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer with an explicit currency format.
    pub fn with_currency_style(currency_style: CurrencyStyle) -> Self {
        Self { currency_style }
    }

    /// Builds the customer-info heading for the record's source.
    fn customer_header(&self, record: &ReportRecord) -> String {
        let name = match sanitize(record.customer.name.trim()) {
            n if n.is_empty() => "N/A".to_string(),
            n => n,
        };

        match record.report_source {
            ReportSource::Internal => "## Internal Report".to_string(),
            ReportSource::Prospect => format!("## {} (Prospect)", name),
            ReportSource::External => {
                let plan = match &record.customer.plan {
                    Some(PlanChoice::Tier(tier)) => tier.display_name().to_string(),
                    Some(PlanChoice::Custom { label, .. }) if !label.trim().is_empty() => {
                        sanitize(label.trim())
                    }
                    _ => "N/A".to_string(),
                };
                let annual = format_currency(record.customer.annual_arr(), self.currency_style);
                format!("## {}, Plan: {}, ARR: ${}", name, plan, annual)
            }
        }
    }

    /// Formats one category's URLs as numbered, pipe-separated links.
    fn links_line(&self, record: &ReportRecord, category: LinkCategory) -> String {
        let urls = record.links.filled(category);
        if urls.is_empty() {
            return "N/A".to_string();
        }

        urls.iter()
            .enumerate()
            .map(|(i, url)| {
                let text = if i == 0 {
                    format!("{} Link", category.display_name())
                } else {
                    format!("{} Link {}", category.display_name(), i + 1)
                };
                format!("[{}]({})", text, sanitize(url))
            })
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// The customer block: heading plus both link lines.
    fn customer_block(&self, record: &ReportRecord) -> String {
        format!(
            "{}\n**Intercom Links:** {}\n**Slack Links:** {}",
            self.customer_header(record),
            self.links_line(record, LinkCategory::Intercom),
            self.links_line(record, LinkCategory::Slack),
        )
    }

    /// The optional comment line, empty when no comment was left.
    fn comment_line(&self, record: &ReportRecord) -> String {
        let comment = record.customer_comment.trim();
        if comment.is_empty() {
            String::new()
        } else {
            format!("\n**Comment:** {}", sanitize(comment))
        }
    }

    /// One line per answered question, catalog order.
    fn qa_section(&self, record: &ReportRecord, catalog: &QuestionCatalog) -> String {
        let mut section = String::new();
        for question in catalog.questions() {
            if let Some(option) = record
                .answers
                .answer(question.id)
                .and_then(|code| question.option(code))
            {
                section.push_str(&format!("**{}** {}\n", question.text, option.label));
            }
        }
        section
    }

    /// Q&A lines followed by the score and priority lines.
    fn score_block(
        &self,
        record: &ReportRecord,
        catalog: &QuestionCatalog,
        score: Option<&ScoreSummary>,
    ) -> String {
        let qa = self.qa_section(record, catalog);
        match score {
            Some(summary) => format!(
                "{}**Final Score:** {}\n**Priority: {}**",
                qa,
                summary.displayed_score,
                summary.priority.label()
            ),
            None => qa,
        }
    }
}

impl TicketRenderer for MarkdownTicketRenderer {
    fn render(
        &self,
        record: &ReportRecord,
        catalog: &QuestionCatalog,
        score: Option<&ScoreSummary>,
    ) -> String {
        let customer = self.customer_block(record);
        let comment = self.comment_line(record);

        let mut body = match (record.report_type, record.ticket_type) {
            (ReportType::Story, TicketType::Update) => {
                format!("{}{}", customer, comment)
            }
            (ReportType::Story, TicketType::New) => format!(
                "## Description\n{}\n\n## Current vs Expected Functionality\n{}\n\n## Timeline & Context\n{}\n\n{}{}",
                sanitize(&record.story.description),
                sanitize(&record.story.current_vs_expected),
                sanitize(&record.story.timeline_context),
                customer,
                comment,
            ),
            (ReportType::Bug, TicketType::Update) => format!(
                "{}{}\n\n{}\n\n## Summary\n{}",
                customer,
                comment,
                self.score_block(record, catalog, score),
                sanitize(&record.bug.summary),
            ),
            (ReportType::Bug, TicketType::New) => format!(
                "## Summary\n{}\n\n## Steps to Reproduce\n{}\n\n## Expected vs Actual Behavior\n{}\n\n{}{}\n\n{}",
                sanitize(&record.bug.summary),
                sanitize(&record.bug.steps_to_reproduce),
                sanitize(&record.bug.expected_vs_actual),
                customer,
                comment,
                self.score_block(record, catalog, score),
            ),
        };

        body.push_str(IMAGE_NOTE);
        body
    }

    fn render_quick_summary(
        &self,
        record: &ReportRecord,
        catalog: &QuestionCatalog,
        score: &ScoreSummary,
    ) -> String {
        format!(
            "{}**Final Score:** {}\n**Priority: {}**",
            self.qa_section(record, catalog),
            score.displayed_score,
            score.priority.label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{OptionCode, QuestionId};
    use crate::domain::report::PlanTier;
    use crate::domain::scoring::Priority;

    fn renderer() -> MarkdownTicketRenderer {
        MarkdownTicketRenderer::new()
    }

    fn external_record() -> ReportRecord {
        let mut record = ReportRecord::new();
        record.customer.name = "Acme Corp".to_string();
        record.customer.monthly_arr = "1000".to_string();
        record.customer.plan = Some(PlanChoice::Tier(PlanTier::EnterprisePlus));
        record
    }

    #[test]
    fn external_header_includes_plan_and_annual_arr() {
        let record = external_record();
        assert_eq!(
            renderer().customer_header(&record),
            "## Acme Corp, Plan: Enterprise+, ARR: $12,000"
        );
    }

    #[test]
    fn internal_header_is_fixed_marker() {
        let mut record = ReportRecord::new();
        record.report_source = ReportSource::Internal;
        assert_eq!(renderer().customer_header(&record), "## Internal Report");
    }

    #[test]
    fn prospect_header_annotates_the_name() {
        let mut record = ReportRecord::new();
        record.report_source = ReportSource::Prospect;
        record.customer.name = "Globex".to_string();
        assert_eq!(renderer().customer_header(&record), "## Globex (Prospect)");
    }

    #[test]
    fn missing_name_and_plan_degrade_to_na() {
        let mut record = ReportRecord::new();
        record.customer.monthly_arr = "junk".to_string();
        assert_eq!(
            renderer().customer_header(&record),
            "## N/A, Plan: N/A, ARR: $0"
        );
    }

    #[test]
    fn custom_plan_header_uses_sanitized_label() {
        let mut record = external_record();
        record.customer.plan = Some(PlanChoice::Custom {
            label: "Legacy <Gold>".to_string(),
            score: crate::domain::foundation::CustomPlanScore::new(3),
        });
        let header = renderer().customer_header(&record);
        assert!(header.contains("Plan: Legacy &lt;Gold&gt;"));
    }

    #[test]
    fn empty_link_category_renders_na() {
        let record = ReportRecord::new();
        assert_eq!(renderer().links_line(&record, LinkCategory::Intercom), "N/A");
    }

    #[test]
    fn single_link_renders_unnumbered() {
        let mut record = ReportRecord::new();
        record.links.set_entries(
            LinkCategory::Intercom,
            vec!["https://intercom.example/a".to_string()],
        );
        assert_eq!(
            renderer().links_line(&record, LinkCategory::Intercom),
            "[Intercom Link](https:&#x2F;&#x2F;intercom.example&#x2F;a)"
        );
    }

    #[test]
    fn second_link_onward_is_numbered_and_pipe_separated() {
        let mut record = ReportRecord::new();
        record.links.set_entries(
            LinkCategory::Slack,
            vec!["url1".to_string(), "url2".to_string()],
        );
        assert_eq!(
            renderer().links_line(&record, LinkCategory::Slack),
            "[Slack Link](url1) | [Slack Link 2](url2)"
        );
    }

    #[test]
    fn new_bug_template_has_all_sections_in_order() {
        let mut record = external_record();
        record.bug.summary = "Export hangs".to_string();
        record.bug.steps_to_reproduce = "1. Export a large project".to_string();
        record.bug.expected_vs_actual = "Should finish; spins forever".to_string();
        record.answers.select(QuestionId::Impact, OptionCode::A);
        let score = ScoreSummary {
            displayed_score: 250,
            priority: Priority::Severe,
        };

        let body = renderer().render(&record, QuestionCatalog::standard(), Some(&score));

        assert!(body.starts_with("## Summary\nExport hangs\n\n## Steps to Reproduce\n"));
        assert!(body.contains("## Expected vs Actual Behavior\nShould finish; spins forever"));
        assert!(body.contains("## Acme Corp, Plan: Enterprise+, ARR: $12,000"));
        assert!(body.contains("**Intercom Links:** N/A"));
        assert!(body.contains(
            "**What is the customer impact?** Complete blocker - can't proceed with core workflow"
        ));
        assert!(body.contains("**Final Score:** 250\n**Priority: Severe**"));
        assert!(body.ends_with(
            "---\n**Note:** Paste any relevant images or videos directly into the JIRA ticket."
        ));
    }

    #[test]
    fn bug_update_template_ends_with_summary_section() {
        let mut record = external_record();
        record.ticket_type = TicketType::Update;
        record.bug.summary = "Still broken".to_string();
        let score = ScoreSummary {
            displayed_score: 40,
            priority: Priority::Low,
        };

        let body = renderer().render(&record, QuestionCatalog::standard(), Some(&score));

        assert!(body.starts_with("## Acme Corp"));
        let summary_pos = body.find("## Summary\nStill broken").unwrap();
        let score_pos = body.find("**Final Score:** 40").unwrap();
        assert!(score_pos < summary_pos);
    }

    #[test]
    fn story_update_template_is_customer_block_and_comment_only() {
        let mut record = ReportRecord::new();
        record.report_type = ReportType::Story;
        record.ticket_type = TicketType::Update;
        record.report_source = ReportSource::Prospect;
        record.customer.name = "Globex".to_string();
        record.customer_comment = "Asked again this week".to_string();

        let body = renderer().render(&record, QuestionCatalog::standard(), None);

        assert_eq!(
            body,
            "## Globex (Prospect)\n**Intercom Links:** N/A\n**Slack Links:** N/A\n\
             \n**Comment:** Asked again this week\
             \n\n---\n**Note:** Paste any relevant images or videos directly into the JIRA ticket."
        );
    }

    #[test]
    fn new_story_template_leads_with_description_sections() {
        let mut record = external_record();
        record.report_type = ReportType::Story;
        record.story.description = "Bulk edit for glossaries".to_string();
        record.story.current_vs_expected = "One at a time vs batches".to_string();
        record.story.timeline_context = "Quarterly content refresh".to_string();

        let body = renderer().render(&record, QuestionCatalog::standard(), None);

        assert!(body.starts_with("## Description\nBulk edit for glossaries\n\n"));
        assert!(body.contains("## Current vs Expected Functionality\nOne at a time vs batches"));
        assert!(body.contains("## Timeline & Context\nQuarterly content refresh"));
        assert!(!body.contains("Final Score"));
        assert!(!body.contains("Priority"));
    }

    #[test]
    fn empty_comment_adds_no_comment_line() {
        let record = external_record();
        let body = renderer().render(&record, QuestionCatalog::standard(), None);
        assert!(!body.contains("**Comment:**"));
    }

    #[test]
    fn free_text_is_escaped_in_the_output() {
        let mut record = external_record();
        record.bug.summary = "<script>alert('x')</script>".to_string();
        let body = renderer().render(&record, QuestionCatalog::standard(), None);
        assert!(!body.contains("<script>"));
        assert!(body.contains("&lt;script&gt;"));
    }

    #[test]
    fn render_never_emits_undefined_or_nan() {
        let record = ReportRecord::new();
        let body = renderer().render(&record, QuestionCatalog::standard(), None);
        assert!(!body.contains("undefined"));
        assert!(!body.contains("NaN"));
    }

    #[test]
    fn quick_summary_has_qa_score_and_priority_without_footer() {
        let mut record = ReportRecord::new();
        record.answers.select(QuestionId::Urgency, OptionCode::D);
        let score = ScoreSummary {
            displayed_score: 7,
            priority: Priority::Trivial,
        };

        let summary =
            renderer().render_quick_summary(&record, QuestionCatalog::standard(), &score);

        assert_eq!(
            summary,
            "**What is the customer urgency?** No specific timeline/whenever convenient\n\
             **Final Score:** 7\n**Priority: Trivial**"
        );
    }

    #[test]
    fn fixed2_style_renders_two_decimal_arr() {
        let record = external_record();
        let renderer = MarkdownTicketRenderer::with_currency_style(CurrencyStyle::Fixed2);
        assert!(renderer
            .customer_header(&record)
            .ends_with("ARR: $12000.00"));
    }
}
