//! Application layer - the service surface consumed by the view.

mod wizard;

pub use wizard::{ReportOutcome, ScoredOutcome, WizardService, WizardSession};
