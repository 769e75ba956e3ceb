//! StepValidation - accumulated, user-facing validation messages.

use serde::{Deserialize, Serialize};

/// Result of validating one step against the current record.
///
/// All failures are collected before returning, so the user sees every
/// problem at once. A failed validation never carries side effects; the
/// caller decides whether to surface the messages or block advancement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepValidation {
    pub errors: Vec<String>,
}

impl StepValidation {
    /// A passing validation.
    pub fn valid() -> Self {
        Self::default()
    }

    /// Records a failure message.
    pub fn require(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Returns true when no failure was recorded.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_result_has_no_errors() {
        let v = StepValidation::valid();
        assert!(v.is_ok());
        assert!(v.errors.is_empty());
    }

    #[test]
    fn require_accumulates_messages_in_order() {
        let mut v = StepValidation::valid();
        v.require("Customer name is required");
        v.require("Monthly ARR is required");
        assert!(!v.is_ok());
        assert_eq!(
            v.errors,
            vec!["Customer name is required", "Monthly ARR is required"]
        );
    }
}
