//! TicketType enum - new ticket vs. update to an existing one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the report opens a new tracker ticket or updates an existing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketType {
    /// A brand-new ticket; requires due diligence and full documentation.
    #[default]
    New,
    /// An update to an existing ticket; due diligence is skipped.
    Update,
}

impl TicketType {
    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            TicketType::New => "New Ticket",
            TicketType::Update => "Ticket Update",
        }
    }

    /// Returns true for new tickets.
    pub fn is_new(&self) -> bool {
        matches!(self, TicketType::New)
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_type_default_is_new() {
        assert_eq!(TicketType::default(), TicketType::New);
    }

    #[test]
    fn ticket_type_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&TicketType::Update).unwrap(), "\"update\"");
    }
}
