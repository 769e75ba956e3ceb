//! Catalog module - the versioned questionnaire table.
//!
//! Pure data: questions, their scored options, and the immutable catalog
//! that groups them. The catalog is supplied to the scoring and flow
//! logic by the host application and never mutated at runtime.

mod catalog;
mod question;

pub use catalog::{CatalogError, QuestionCatalog};
pub use question::{OptionCode, Question, QuestionId, QuestionOption};
