//! Free-text narrative fields, specific to bug and story reports.

use serde::{Deserialize, Serialize};

/// Narrative fields collected on the bug documentation step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugNarrative {
    #[serde(default)]
    pub summary: String,

    /// Required for new tickets only.
    #[serde(default)]
    pub steps_to_reproduce: String,

    /// Required for new tickets only.
    #[serde(default)]
    pub expected_vs_actual: String,
}

impl BugNarrative {
    /// Returns true when no field carries data.
    pub fn is_empty(&self) -> bool {
        self.summary.trim().is_empty()
            && self.steps_to_reproduce.trim().is_empty()
            && self.expected_vs_actual.trim().is_empty()
    }
}

/// Narrative fields collected on the story documentation step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryNarrative {
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub current_vs_expected: String,

    #[serde(default)]
    pub timeline_context: String,
}

impl StoryNarrative {
    /// Returns true when no field carries data.
    pub fn is_empty(&self) -> bool {
        self.description.trim().is_empty()
            && self.current_vs_expected.trim().is_empty()
            && self.timeline_context.trim().is_empty()
    }
}
