//! Verification-question storage contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide CRUD for per-book read-verification questions.
//!
//! # Invariants
//! - No cascades originate here; questions are removed individually or by
//!   the book cascade in `book_store`.

use crate::model::book::BookId;
use crate::model::question::{NewQuestion, QuestionId, QuestionPatch, VerificationQuestion};
use crate::store::memory::MemoryCatalog;

/// Storage interface for verification questions.
pub trait QuestionStore {
    /// Lists all questions attached to one book.
    fn list_questions_for_book(&self, book_id: BookId) -> Vec<VerificationQuestion>;
    /// Creates a question for a book.
    fn create_question(&mut self, new_question: NewQuestion) -> VerificationQuestion;
    /// Merges a partial update into an existing question.
    fn update_question(&mut self, id: QuestionId, patch: QuestionPatch)
        -> Option<VerificationQuestion>;
    /// Deletes one question; returns whether it existed.
    fn delete_question(&mut self, id: QuestionId) -> bool;
}

impl QuestionStore for MemoryCatalog {
    fn list_questions_for_book(&self, book_id: BookId) -> Vec<VerificationQuestion> {
        self.questions
            .values()
            .filter(|question| question.book_id == book_id)
            .cloned()
            .collect()
    }

    fn create_question(&mut self, new_question: NewQuestion) -> VerificationQuestion {
        let question = VerificationQuestion {
            id: self.question_ids.next_id(),
            book_id: new_question.book_id,
            question: new_question.question,
            answer: new_question.answer,
        };
        self.questions.insert(question.id, question.clone());
        question
    }

    fn update_question(
        &mut self,
        id: QuestionId,
        patch: QuestionPatch,
    ) -> Option<VerificationQuestion> {
        let question = self.questions.get_mut(&id)?;
        question.apply_patch(patch);
        Some(question.clone())
    }

    fn delete_question(&mut self, id: QuestionId) -> bool {
        self.questions.remove(&id).is_some()
    }
}
