//! Question and option types for the impact questionnaire.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// The questionnaire questions, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionId {
    Impact,
    Urgency,
    Scope,
    Workaround,
}

impl QuestionId {
    /// Returns all question ids in canonical order.
    pub fn all() -> &'static [QuestionId] {
        &[
            QuestionId::Impact,
            QuestionId::Urgency,
            QuestionId::Scope,
            QuestionId::Workaround,
        ]
    }

    /// Returns the identifier string used in serialized records.
    pub fn key(&self) -> &'static str {
        match self {
            QuestionId::Impact => "impact",
            QuestionId::Urgency => "urgency",
            QuestionId::Scope => "scope",
            QuestionId::Workaround => "workaround",
        }
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Single-letter answer code, unique within one question.
///
/// Options are ordered worst-case first, so `A` is always the most
/// severe choice a question offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OptionCode {
    A,
    B,
    C,
    D,
    E,
}

impl OptionCode {
    /// Returns the letter for this code.
    pub fn letter(&self) -> char {
        match self {
            OptionCode::A => 'A',
            OptionCode::B => 'B',
            OptionCode::C => 'C',
            OptionCode::D => 'D',
            OptionCode::E => 'E',
        }
    }
}

impl fmt::Display for OptionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One selectable answer with its weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub code: OptionCode,
    pub label: String,
    pub score: u32,
}

impl QuestionOption {
    /// Creates a new option.
    pub fn new(code: OptionCode, label: impl Into<String>, score: u32) -> Self {
        Self {
            code,
            label: label.into(),
            score,
        }
    }
}

/// A questionnaire question with its ordered, scored options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub options: Vec<QuestionOption>,
}

impl Question {
    /// Creates a new question, validating that option codes are unique.
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        options: Vec<QuestionOption>,
    ) -> Result<Self, ValidationError> {
        let question = Self {
            id,
            text: text.into(),
            options,
        };
        question.validate()?;
        Ok(question)
    }

    /// Checks the question invariants: at least one option, unique codes.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.options.is_empty() {
            return Err(ValidationError::empty_field(format!("{}.options", self.id)));
        }
        for (i, option) in self.options.iter().enumerate() {
            if self.options[..i].iter().any(|o| o.code == option.code) {
                return Err(ValidationError::invalid_format(
                    format!("{}.options", self.id),
                    format!("duplicate option code {}", option.code),
                ));
            }
        }
        Ok(())
    }

    /// Looks up an option by its code.
    pub fn option(&self, code: OptionCode) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.code == code)
    }

    /// Returns the score for a code, or 0 if the code is not offered.
    pub fn score_for(&self, code: OptionCode) -> u32 {
        self.option(code).map(|o| o.score).unwrap_or(0)
    }
}
