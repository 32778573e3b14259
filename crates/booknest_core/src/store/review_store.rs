//! Review storage contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide review CRUD plus the aggregate recompute rule keeping book
//!   `average_rating`/`total_reviews` in sync with review storage.
//!
//! # Invariants
//! - Every rating-affecting mutation (create, rating change, delete)
//!   recomputes the owning book's aggregates before returning.
//! - A review for a missing book is still stored; only the recompute is
//!   skipped, since there is no book row to update.
//! - `average_rating = round(sum / count)` half-up, or 0 with no reviews.

use crate::model::book::BookId;
use crate::model::review::{NewReview, Review, ReviewId, ReviewPatch};
use crate::model::user::UserId;
use crate::store::memory::MemoryCatalog;
use chrono::Utc;

/// Storage interface for book reviews.
pub trait ReviewStore {
    /// Gets one review by stable id.
    fn get_review(&self, id: ReviewId) -> Option<Review>;
    /// Lists reviews referencing one book.
    fn list_reviews_for_book(&self, book_id: BookId) -> Vec<Review>;
    /// Lists reviews written by one user.
    fn list_reviews_for_user(&self, user_id: UserId) -> Vec<Review>;
    /// Creates a review and recomputes the owning book's aggregates.
    fn create_review(&mut self, new_review: NewReview) -> Review;
    /// Merges a partial update; recomputes aggregates only when the rating
    /// actually changed value.
    fn update_review(&mut self, id: ReviewId, patch: ReviewPatch) -> Option<Review>;
    /// Deletes one review and recomputes aggregates on success.
    fn delete_review(&mut self, id: ReviewId) -> bool;
}

impl ReviewStore for MemoryCatalog {
    fn get_review(&self, id: ReviewId) -> Option<Review> {
        self.reviews.get(&id).cloned()
    }

    fn list_reviews_for_book(&self, book_id: BookId) -> Vec<Review> {
        self.reviews
            .values()
            .filter(|review| review.book_id == book_id)
            .cloned()
            .collect()
    }

    fn list_reviews_for_user(&self, user_id: UserId) -> Vec<Review> {
        self.reviews
            .values()
            .filter(|review| review.user_id == user_id)
            .cloned()
            .collect()
    }

    fn create_review(&mut self, new_review: NewReview) -> Review {
        let review = Review {
            id: self.review_ids.next_id(),
            book_id: new_review.book_id,
            user_id: new_review.user_id,
            rating: new_review.rating,
            text: new_review.text,
            created_at: Utc::now(),
        };
        self.reviews.insert(review.id, review.clone());
        self.recompute_book_aggregates(review.book_id);
        review
    }

    fn update_review(&mut self, id: ReviewId, patch: ReviewPatch) -> Option<Review> {
        let review = self.reviews.get_mut(&id)?;
        let rating_before = review.rating;
        review.apply_patch(patch);
        let updated = review.clone();

        if updated.rating != rating_before {
            self.recompute_book_aggregates(updated.book_id);
        }
        Some(updated)
    }

    fn delete_review(&mut self, id: ReviewId) -> bool {
        match self.reviews.remove(&id) {
            Some(removed) => {
                self.recompute_book_aggregates(removed.book_id);
                true
            }
            None => false,
        }
    }
}

impl MemoryCatalog {
    /// Re-derives `average_rating` and `total_reviews` for one book from
    /// current review storage. No-op when the book does not exist.
    pub(crate) fn recompute_book_aggregates(&mut self, book_id: BookId) {
        let Some(book) = self.books.get_mut(&book_id) else {
            return;
        };

        let ratings: Vec<u32> = self
            .reviews
            .values()
            .filter(|review| review.book_id == book_id)
            .map(|review| review.rating)
            .collect();

        book.total_reviews = ratings.len() as u32;
        book.average_rating = rounded_mean(&ratings);
    }
}

/// Rounds the mean of `ratings` to the nearest integer, half up.
///
/// `f64::round` rounds half away from zero, which equals half-up for the
/// non-negative ratings stored here. Returns 0 for an empty slice.
fn rounded_mean(ratings: &[u32]) -> u32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: u64 = ratings.iter().map(|&rating| u64::from(rating)).sum();
    (sum as f64 / ratings.len() as f64).round() as u32
}
