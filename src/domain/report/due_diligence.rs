//! Due-diligence confirmations required before filing a new ticket.

use serde::{Deserialize, Serialize};

/// The three research confirmations collected for new tickets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueDiligence {
    /// Searched the tracker for pre-existing tickets.
    #[serde(default)]
    pub checked_existing_tickets: bool,

    /// Reviewed public and internal documentation.
    #[serde(default)]
    pub reviewed_documentation: bool,

    /// Searched team chat for prior discussions.
    #[serde(default)]
    pub checked_slack_discussions: bool,
}

impl DueDiligence {
    /// Returns true when every confirmation has been affirmed.
    pub fn is_complete(&self) -> bool {
        self.checked_existing_tickets && self.reviewed_documentation && self.checked_slack_discussions
    }

    /// Returns true when at least one confirmation has been affirmed.
    pub fn any_confirmed(&self) -> bool {
        self.checked_existing_tickets || self.reviewed_documentation || self.checked_slack_discussions
    }
}
