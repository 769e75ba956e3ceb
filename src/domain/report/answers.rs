//! AnswerSheet - selected questionnaire options, keyed by question.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::catalog::{OptionCode, Question, QuestionCatalog, QuestionId};

/// One selected option per question; unanswered questions are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet(BTreeMap<QuestionId, OptionCode>);

impl AnswerSheet {
    /// Creates an empty answer sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selected option for a question, if answered.
    pub fn answer(&self, id: QuestionId) -> Option<OptionCode> {
        self.0.get(&id).copied()
    }

    /// Records an answer, replacing any previous selection.
    pub fn select(&mut self, id: QuestionId, code: OptionCode) {
        self.0.insert(id, code);
    }

    /// Removes an answer.
    pub fn clear(&mut self, id: QuestionId) {
        self.0.remove(&id);
    }

    /// Returns true when no question has been answered.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true when every catalog question has an answer.
    pub fn is_complete(&self, catalog: &QuestionCatalog) -> bool {
        catalog.questions().iter().all(|q| self.0.contains_key(&q.id))
    }

    /// Returns the catalog questions still missing an answer.
    pub fn unanswered<'a>(&self, catalog: &'a QuestionCatalog) -> Vec<&'a Question> {
        catalog
            .questions()
            .iter()
            .filter(|q| !self.0.contains_key(&q.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_sheet_starts_empty() {
        let sheet = AnswerSheet::new();
        assert!(sheet.is_empty());
        assert_eq!(sheet.answer(QuestionId::Impact), None);
    }

    #[test]
    fn select_replaces_previous_answer() {
        let mut sheet = AnswerSheet::new();
        sheet.select(QuestionId::Impact, OptionCode::C);
        sheet.select(QuestionId::Impact, OptionCode::A);
        assert_eq!(sheet.answer(QuestionId::Impact), Some(OptionCode::A));
    }

    #[test]
    fn clear_removes_an_answer() {
        let mut sheet = AnswerSheet::new();
        sheet.select(QuestionId::Scope, OptionCode::B);
        sheet.clear(QuestionId::Scope);
        assert_eq!(sheet.answer(QuestionId::Scope), None);
    }

    #[test]
    fn is_complete_requires_every_catalog_question() {
        let catalog = QuestionCatalog::standard();
        let mut sheet = AnswerSheet::new();
        for id in [QuestionId::Impact, QuestionId::Urgency, QuestionId::Scope] {
            sheet.select(id, OptionCode::A);
        }
        assert!(!sheet.is_complete(catalog));
        sheet.select(QuestionId::Workaround, OptionCode::D);
        assert!(sheet.is_complete(catalog));
    }

    #[test]
    fn unanswered_lists_missing_questions() {
        let catalog = QuestionCatalog::standard();
        let mut sheet = AnswerSheet::new();
        sheet.select(QuestionId::Impact, OptionCode::B);
        let missing = sheet.unanswered(catalog);
        assert_eq!(missing.len(), 3);
        assert_eq!(missing[0].id, QuestionId::Urgency);
    }
}
