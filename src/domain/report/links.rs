//! Reference link lists, grouped by conversation source.
//!
//! The view collects URL fields verbatim, empty entries included; order is
//! preserved because rendered links are numbered. Gap detection flags an
//! empty field sitting above a filled one, matching the form's rule that
//! users either fill or remove intermediate fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The conversation sources a report can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkCategory {
    Intercom,
    Slack,
}

impl LinkCategory {
    /// Returns both categories in rendering order.
    pub fn all() -> &'static [LinkCategory] {
        &[LinkCategory::Intercom, LinkCategory::Slack]
    }

    /// Returns the display name used in link text.
    pub fn display_name(&self) -> &'static str {
        match self {
            LinkCategory::Intercom => "Intercom",
            LinkCategory::Slack => "Slack",
        }
    }
}

impl fmt::Display for LinkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Raw URL entries per category, exactly as extracted from the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceLinks {
    #[serde(default = "single_empty_entry")]
    pub intercom: Vec<String>,
    #[serde(default = "single_empty_entry")]
    pub slack: Vec<String>,
}

fn single_empty_entry() -> Vec<String> {
    vec![String::new()]
}

impl Default for ReferenceLinks {
    fn default() -> Self {
        Self {
            intercom: single_empty_entry(),
            slack: single_empty_entry(),
        }
    }
}

impl ReferenceLinks {
    /// Returns the raw entries for a category.
    pub fn entries(&self, category: LinkCategory) -> &[String] {
        match category {
            LinkCategory::Intercom => &self.intercom,
            LinkCategory::Slack => &self.slack,
        }
    }

    /// Replaces the entries for a category.
    pub fn set_entries(&mut self, category: LinkCategory, entries: Vec<String>) {
        match category {
            LinkCategory::Intercom => self.intercom = entries,
            LinkCategory::Slack => self.slack = entries,
        }
    }

    /// Returns the trimmed, non-empty URLs for a category, order preserved.
    pub fn filled(&self, category: LinkCategory) -> Vec<&str> {
        self.entries(category)
            .iter()
            .map(|u| u.trim())
            .filter(|u| !u.is_empty())
            .collect()
    }

    /// Detects an empty field between or before filled ones.
    pub fn has_gap(&self, category: LinkCategory) -> bool {
        let mut found_content = false;
        for entry in self.entries(category).iter().rev() {
            if !entry.trim().is_empty() {
                found_content = true;
            } else if found_content {
                return true;
            }
        }
        false
    }

    /// Returns true when neither category carries a URL.
    pub fn is_empty(&self) -> bool {
        LinkCategory::all()
            .iter()
            .all(|c| self.filled(*c).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_links_hold_one_empty_entry_per_category() {
        let links = ReferenceLinks::default();
        assert_eq!(links.entries(LinkCategory::Intercom), &[String::new()]);
        assert!(links.is_empty());
        assert!(!links.has_gap(LinkCategory::Intercom));
    }

    #[test]
    fn filled_trims_and_drops_empty_entries() {
        let mut links = ReferenceLinks::default();
        links.set_entries(
            LinkCategory::Slack,
            vec![
                " https://slack.example/one ".to_string(),
                String::new(),
            ],
        );
        assert_eq!(links.filled(LinkCategory::Slack), vec!["https://slack.example/one"]);
    }

    #[test]
    fn has_gap_flags_empty_between_filled() {
        let mut links = ReferenceLinks::default();
        links.set_entries(
            LinkCategory::Intercom,
            vec![
                "https://intercom.example/a".to_string(),
                String::new(),
                "https://intercom.example/b".to_string(),
            ],
        );
        assert!(links.has_gap(LinkCategory::Intercom));
    }

    #[test]
    fn has_gap_flags_leading_empty_before_filled() {
        let mut links = ReferenceLinks::default();
        links.set_entries(
            LinkCategory::Intercom,
            vec![String::new(), "https://intercom.example/a".to_string()],
        );
        assert!(links.has_gap(LinkCategory::Intercom));
    }

    #[test]
    fn has_gap_ignores_trailing_empties() {
        let mut links = ReferenceLinks::default();
        links.set_entries(
            LinkCategory::Intercom,
            vec!["https://intercom.example/a".to_string(), String::new()],
        );
        assert!(!links.has_gap(LinkCategory::Intercom));
    }
}
