//! Book review record.
//!
//! # Responsibility
//! - Define the canonical review shape linking a user to a book.
//! - Provide create-request and partial-update models.
//!
//! # Invariants
//! - `book_id` and `user_id` are fixed at creation; a review never moves to
//!   another book or author.
//! - Every rating mutation must be followed by an aggregate recompute on the
//!   owning book (enforced by the storage layer, not here).

use crate::model::book::BookId;
use crate::model::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable identifier for a review.
pub type ReviewId = u64;

/// Canonical review record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Stable storage-assigned id.
    pub id: ReviewId,
    /// Reviewed book. Logical foreign key, cleaned up by book cascade delete.
    pub book_id: BookId,
    /// Review author. Logical foreign key; users are never deleted.
    pub user_id: UserId,
    /// Integer star rating.
    pub rating: u32,
    pub text: String,
    /// Set by storage at creation.
    pub created_at: DateTime<Utc>,
}

/// Create-request model for [`Review`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub book_id: BookId,
    pub user_id: UserId,
    pub rating: u32,
    pub text: String,
}

/// Partial-update model for [`Review`].
///
/// Foreign keys are absent by design; only content fields can change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewPatch {
    pub rating: Option<u32>,
    pub text: Option<String>,
}

impl Review {
    /// Applies a partial update, overwriting only fields present in `patch`.
    pub fn apply_patch(&mut self, patch: ReviewPatch) {
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(text) = patch.text {
            self.text = text;
        }
    }
}
