//! Book storage contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide book CRUD, category filtering, and substring search.
//! - Own the cascade-delete rule removing every dependent record when a
//!   book is deleted.
//!
//! # Invariants
//! - `create_book` always starts aggregates at zero; only review mutations
//!   may move them afterwards.
//! - After `delete_book(id)` returns true, no question, review, or shelf
//!   entry referencing `id` survives.

use crate::model::book::{Book, BookId, BookPatch, NewBook};
use crate::store::memory::MemoryCatalog;
use chrono::Utc;
use log::debug;

/// Storage interface for the book catalog.
pub trait BookStore {
    /// Gets one book by stable id.
    fn get_book(&self, id: BookId) -> Option<Book>;
    /// Creates a book with zeroed aggregates; `added_at` is set now.
    fn create_book(&mut self, new_book: NewBook) -> Book;
    /// Merges a partial update into an existing book.
    fn update_book(&mut self, id: BookId, patch: BookPatch) -> Option<Book>;
    /// Deletes a book and cascades to all dependent records.
    ///
    /// Returns whether the book existed. Dependents are only touched when
    /// it did.
    fn delete_book(&mut self, id: BookId) -> bool;
    /// Lists every book in table order.
    fn list_books(&self) -> Vec<Book>;
    /// Lists books whose category matches case-insensitively and exactly.
    fn list_books_by_category(&self, category: &str) -> Vec<Book>;
    /// Lists books matching `query` by case-insensitive substring against
    /// title, author, or description (when present).
    fn search_books(&self, query: &str) -> Vec<Book>;
}

impl BookStore for MemoryCatalog {
    fn get_book(&self, id: BookId) -> Option<Book> {
        self.books.get(&id).cloned()
    }

    fn create_book(&mut self, new_book: NewBook) -> Book {
        let book = Book {
            id: self.book_ids.next_id(),
            title: new_book.title,
            author: new_book.author,
            category: new_book.category,
            description: new_book.description,
            cover_url: new_book.cover_url,
            published_year: new_book.published_year,
            added_at: Utc::now(),
            average_rating: 0,
            total_reviews: 0,
        };
        self.books.insert(book.id, book.clone());
        book
    }

    fn update_book(&mut self, id: BookId, patch: BookPatch) -> Option<Book> {
        let book = self.books.get_mut(&id)?;
        book.apply_patch(patch);
        Some(book.clone())
    }

    fn delete_book(&mut self, id: BookId) -> bool {
        if self.books.remove(&id).is_none() {
            return false;
        }

        // Linear scans are fine at this scale; a larger deployment would
        // maintain a book_id -> dependents index instead.
        let questions_before = self.questions.len();
        self.questions.retain(|_, question| question.book_id != id);
        let reviews_before = self.reviews.len();
        self.reviews.retain(|_, review| review.book_id != id);
        let reading_before = self.reading_list.len();
        self.reading_list.retain(|_, entry| entry.book_id != id);
        let liked_before = self.liked_books.len();
        self.liked_books.retain(|_, entry| entry.book_id != id);

        debug!(
            "event=book_cascade_delete module=store status=ok book_id={} questions={} reviews={} reading_list={} liked_books={}",
            id,
            questions_before - self.questions.len(),
            reviews_before - self.reviews.len(),
            reading_before - self.reading_list.len(),
            liked_before - self.liked_books.len()
        );

        true
    }

    fn list_books(&self) -> Vec<Book> {
        self.books.values().cloned().collect()
    }

    fn list_books_by_category(&self, category: &str) -> Vec<Book> {
        self.books
            .values()
            .filter(|book| book.category.eq_ignore_ascii_case(category))
            .cloned()
            .collect()
    }

    fn search_books(&self, query: &str) -> Vec<Book> {
        self.books
            .values()
            .filter(|book| book.matches_query(query))
            .cloned()
            .collect()
    }
}
