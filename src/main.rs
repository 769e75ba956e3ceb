//! Demo host for the triage core.
//!
//! Reads a `ReportRecord` as JSON from stdin, computes the score and
//! priority under the configured policies, and prints the rendered ticket
//! body to stdout. The wizard flow itself is driven by a real view layer;
//! this binary exercises the terminal-step path end to end.

use std::error::Error;
use std::io::Read;

use tracing::info;
use tracing_subscriber::EnvFilter;

use ticket_triage::adapters::document::MarkdownTicketRenderer;
use ticket_triage::application::WizardService;
use ticket_triage::config::AppConfig;
use ticket_triage::domain::report::ReportRecord;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    let catalog = config.load_catalog()?;
    info!(catalog = %catalog.version, "loaded question catalog");

    let service = WizardService::with_policies(
        catalog,
        config.scoring.into_policy()?,
        config.priority.into_policy()?,
        MarkdownTicketRenderer::with_currency_style(config.output.currency_style),
    );

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let record: ReportRecord = serde_json::from_str(&input)?;

    let outcome = service.compute_and_render(&record);
    if let Some(score) = &outcome.score {
        info!(
            base = score.breakdown.base_score,
            multiplier = score.breakdown.multiplier,
            displayed = score.displayed_score,
            priority = %score.classification.priority,
            "scored report"
        );
    }

    println!("{}", outcome.body);
    Ok(())
}
