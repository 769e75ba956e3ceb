//! ReportSource enum - where the report originated.
//!
//! Collapses the legacy `is_internal` boolean and the newer three-valued
//! source field into a single tagged enum. Deserialization still accepts
//! records that carry only the legacy flag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Origin of a report: a paying customer, a prospect, or an internal team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportSource {
    /// An existing external customer; full customer fields are required.
    #[default]
    External,
    /// A sales prospect; only the name is collected.
    Prospect,
    /// An internal report; no customer fields apply.
    Internal,
}

impl ReportSource {
    /// Maps the legacy `is_internal` boolean onto the enum.
    pub fn from_legacy_flag(is_internal: bool) -> Self {
        if is_internal {
            ReportSource::Internal
        } else {
            ReportSource::External
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ReportSource::External => "External",
            ReportSource::Prospect => "Prospect",
            ReportSource::Internal => "Internal",
        }
    }

    /// Returns true for internal reports.
    pub fn is_internal(&self) -> bool {
        matches!(self, ReportSource::Internal)
    }
}

impl fmt::Display for ReportSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
