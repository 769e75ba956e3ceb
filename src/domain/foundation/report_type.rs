//! ReportType enum - bug report vs. feature story.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of issue being reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    /// A defect report, scored through the impact questionnaire.
    #[default]
    Bug,
    /// A feature/user story, documented but never scored.
    Story,
}

impl ReportType {
    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ReportType::Bug => "Bug",
            ReportType::Story => "Story",
        }
    }

    /// Returns true for bug reports.
    pub fn is_bug(&self) -> bool {
        matches!(self, ReportType::Bug)
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
