//! Book catalog record.
//!
//! # Responsibility
//! - Define the canonical book shape including derived review aggregates.
//! - Provide create-request and partial-update models.
//!
//! # Invariants
//! - `id` is stable and never reused for another book.
//! - `average_rating` and `total_reviews` are derived from review storage
//!   and are never writable through [`BookPatch`].
//! - `added_at` is set once at creation and never patched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable identifier for a catalog book.
pub type BookId = u64;

/// Canonical book record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Stable storage-assigned id.
    pub id: BookId,
    pub title: String,
    pub author: String,
    /// Free-form category label, matched case-insensitively on filter.
    pub category: String,
    /// Optional longer description; participates in search when present.
    pub description: Option<String>,
    /// Optional cover image location for the presentation layer.
    pub cover_url: Option<String>,
    pub published_year: Option<i32>,
    /// Set by storage at creation.
    pub added_at: DateTime<Utc>,
    /// Derived: `round(mean(rating))` over this book's reviews, 0 when none.
    pub average_rating: u32,
    /// Derived: live count of reviews referencing this book.
    pub total_reviews: u32,
}

/// Create-request model for [`Book`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub category: String,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub published_year: Option<i32>,
}

/// Partial-update model for [`Book`].
///
/// Derived aggregates are absent: only review mutations may move them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub published_year: Option<i32>,
}

impl Book {
    /// Applies a partial update, overwriting only fields present in `patch`.
    pub fn apply_patch(&mut self, patch: BookPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(cover_url) = patch.cover_url {
            self.cover_url = Some(cover_url);
        }
        if let Some(published_year) = patch.published_year {
            self.published_year = Some(published_year);
        }
    }

    /// Returns whether `query` matches title, author, or description,
    /// case-insensitively by substring.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.author.to_lowercase().contains(&needle)
            || self
                .description
                .as_deref()
                .is_some_and(|text| text.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::{Book, BookPatch};
    use chrono::Utc;

    fn sample_book() -> Book {
        Book {
            id: 3,
            title: "The Hobbit".to_string(),
            author: "J.R.R. Tolkien".to_string(),
            category: "Fantasy".to_string(),
            description: Some("There and back again.".to_string()),
            cover_url: None,
            published_year: Some(1937),
            added_at: Utc::now(),
            average_rating: 4,
            total_reviews: 12,
        }
    }

    #[test]
    fn apply_patch_cannot_touch_derived_aggregates() {
        let mut book = sample_book();
        book.apply_patch(BookPatch {
            title: Some("The Hobbit, Revised".to_string()),
            ..BookPatch::default()
        });

        assert_eq!(book.title, "The Hobbit, Revised");
        assert_eq!(book.average_rating, 4);
        assert_eq!(book.total_reviews, 12);
    }

    #[test]
    fn matches_query_searches_author_case_insensitively() {
        let book = sample_book();
        assert!(book.matches_query("tolkien"));
        assert!(book.matches_query("HOBBIT"));
        assert!(book.matches_query("back again"));
        assert!(!book.matches_query("dickens"));
    }

    #[test]
    fn matches_query_skips_absent_description() {
        let mut book = sample_book();
        book.description = None;
        assert!(!book.matches_query("back again"));
    }
}
