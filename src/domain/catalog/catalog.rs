//! QuestionCatalog - the versioned, immutable question table.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::foundation::ValidationError;

use super::{OptionCode, Question, QuestionId, QuestionOption};

/// Errors raised while loading a catalog from YAML.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Catalog is invalid: {0}")]
    Invalid(#[from] ValidationError),
}

/// Immutable table of questionnaire questions.
///
/// The standard catalog ships with the crate; variant catalogs can be
/// loaded from YAML. Once constructed, a catalog never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionCatalog {
    /// Catalog revision, for traceability in logs.
    pub version: String,
    questions: Vec<Question>,
}

static STANDARD: Lazy<QuestionCatalog> = Lazy::new(QuestionCatalog::build_standard);

impl QuestionCatalog {
    /// Returns the built-in standard catalog.
    pub fn standard() -> &'static QuestionCatalog {
        &STANDARD
    }

    /// Creates a catalog from questions, validating each one.
    pub fn new(version: impl Into<String>, questions: Vec<Question>) -> Result<Self, ValidationError> {
        for question in &questions {
            question.validate()?;
        }
        Ok(Self {
            version: version.into(),
            questions,
        })
    }

    /// Loads a variant catalog from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let catalog: QuestionCatalog = serde_yaml::from_str(yaml)?;
        for question in &catalog.questions {
            question.validate()?;
        }
        Ok(catalog)
    }

    /// Loads a variant catalog from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Returns the questions in catalog order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Looks up a question by id. Variant catalogs may omit questions.
    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    fn build_standard() -> QuestionCatalog {
        let questions = vec![
            Question::new(
                QuestionId::Impact,
                "What is the customer impact?",
                vec![
                    QuestionOption::new(
                        OptionCode::A,
                        "Complete blocker - can't proceed with core workflow",
                        50,
                    ),
                    QuestionOption::new(
                        OptionCode::B,
                        "Major disruption - significant manual workaround",
                        35,
                    ),
                    QuestionOption::new(
                        OptionCode::C,
                        "Moderate impact - workflow slowed but manageable",
                        20,
                    ),
                    QuestionOption::new(
                        OptionCode::D,
                        "Minor inconvenience - doesn't block main tasks",
                        10,
                    ),
                    QuestionOption::new(
                        OptionCode::E,
                        "Cosmetic/edge case - barely noticeable",
                        5,
                    ),
                ],
            ),
            Question::new(
                QuestionId::Urgency,
                "What is the customer urgency?",
                vec![
                    QuestionOption::new(
                        OptionCode::A,
                        "Immediate blocker for go-live/critical deadline",
                        40,
                    ),
                    QuestionOption::new(OptionCode::B, "Needed within 1-2 weeks", 25),
                    QuestionOption::new(OptionCode::C, "Would like fix within a month", 20),
                    QuestionOption::new(
                        OptionCode::D,
                        "No specific timeline/whenever convenient",
                        5,
                    ),
                ],
            ),
            Question::new(
                QuestionId::Scope,
                "What is the scope of impact?",
                vec![
                    QuestionOption::new(OptionCode::A, "Affects all users/core functionality", 30),
                    QuestionOption::new(OptionCode::B, "Affects most users/important features", 20),
                    QuestionOption::new(OptionCode::C, "Affects some users/specific workflows", 10),
                    QuestionOption::new(OptionCode::D, "Affects few users/edge cases", 5),
                ],
            ),
            Question::new(
                QuestionId::Workaround,
                "Is there a workaround available?",
                vec![
                    QuestionOption::new(OptionCode::A, "No workaround exists", 20),
                    QuestionOption::new(
                        OptionCode::B,
                        "Workaround exists but very time-consuming/complex",
                        15,
                    ),
                    QuestionOption::new(OptionCode::C, "Reasonable workaround but not ideal", 8),
                    QuestionOption::new(OptionCode::D, "Easy workaround available", 3),
                ],
            ),
        ];

        let questions = questions
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .expect("standard catalog must be valid");

        QuestionCatalog {
            version: "standard-v1".to_string(),
            questions,
        }
    }
}
