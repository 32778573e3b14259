//! Read-verification question record.
//!
//! # Responsibility
//! - Define the question/answer pairs used to verify a reader actually read
//!   a book before their review counts.
//!
//! # Invariants
//! - `book_id` is fixed at creation; questions are removed by book cascade
//!   delete or individually, never re-parented.

use crate::model::book::BookId;
use serde::{Deserialize, Serialize};

/// Stable identifier for a verification question.
pub type QuestionId = u64;

/// Canonical verification question record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationQuestion {
    /// Stable storage-assigned id.
    pub id: QuestionId,
    /// Owning book. Logical foreign key, cleaned up by book cascade delete.
    pub book_id: BookId,
    pub question: String,
    /// Expected answer, compared by the calling layer.
    pub answer: String,
}

/// Create-request model for [`VerificationQuestion`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub book_id: BookId,
    pub question: String,
    pub answer: String,
}

/// Partial-update model for [`VerificationQuestion`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionPatch {
    pub question: Option<String>,
    pub answer: Option<String>,
}

impl VerificationQuestion {
    /// Applies a partial update, overwriting only fields present in `patch`.
    pub fn apply_patch(&mut self, patch: QuestionPatch) {
        if let Some(question) = patch.question {
            self.question = question;
        }
        if let Some(answer) = patch.answer {
            self.answer = answer;
        }
    }
}
