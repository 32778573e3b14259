//! Shelf storage contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide reading-list and liked-books APIs with idempotent adds keyed
//!   on `(user_id, book_id)`.
//! - Join shelf entries with their book record on read.
//!
//! # Invariants
//! - `add_to_reading_list`/`like_book` never create a second entry for the
//!   same `(user_id, book_id)` pair; the existing entry is returned as-is.
//! - A joined read hitting a missing book is a violated cascade-delete
//!   invariant: it is logged at error level and returned as
//!   [`StoreError::OrphanedEntry`], never silently filtered out.

use crate::model::book::Book;
use crate::model::shelf::{EntryId, LikeAdd, LikedBookEntry, ReadingListEntry, ShelfAdd};
use crate::model::user::UserId;
use crate::store::memory::MemoryCatalog;
use crate::store::{StoreError, StoreResult};
use chrono::Utc;
use log::error;
use serde::{Deserialize, Serialize};

/// Reading-list read model: one entry joined with its book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingListItem {
    pub entry: ReadingListEntry,
    pub book: Book,
}

/// Liked-books read model: one entry joined with its book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikedBookItem {
    pub entry: LikedBookEntry,
    pub book: Book,
}

/// Storage interface for per-user shelves.
pub trait ShelfStore {
    /// Lists one user's reading list, each entry joined with its book.
    fn reading_list(&self, user_id: UserId) -> StoreResult<Vec<ReadingListItem>>;
    /// Adds a book to a user's reading list, idempotently.
    fn add_to_reading_list(&mut self, add: ShelfAdd) -> ReadingListEntry;
    /// Overwrites the progress field of one entry.
    fn update_reading_progress(&mut self, id: EntryId, progress: u32)
        -> Option<ReadingListEntry>;
    /// Removes one entry by id; returns whether it existed.
    fn remove_from_reading_list(&mut self, id: EntryId) -> bool;

    /// Lists one user's liked books, each entry joined with its book.
    fn liked_books(&self, user_id: UserId) -> StoreResult<Vec<LikedBookItem>>;
    /// Records a like, idempotently.
    fn like_book(&mut self, add: LikeAdd) -> LikedBookEntry;
    /// Removes one like by id; returns whether it existed.
    fn unlike_book(&mut self, id: EntryId) -> bool;
}

impl ShelfStore for MemoryCatalog {
    fn reading_list(&self, user_id: UserId) -> StoreResult<Vec<ReadingListItem>> {
        self.reading_list
            .values()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| {
                let book = self
                    .books
                    .get(&entry.book_id)
                    .cloned()
                    .ok_or_else(|| orphaned("reading_list", entry.id, entry.book_id))?;
                Ok(ReadingListItem {
                    entry: entry.clone(),
                    book,
                })
            })
            .collect()
    }

    fn add_to_reading_list(&mut self, add: ShelfAdd) -> ReadingListEntry {
        if let Some(existing) = self
            .reading_list
            .values()
            .find(|entry| entry.user_id == add.user_id && entry.book_id == add.book_id)
        {
            return existing.clone();
        }

        let entry = ReadingListEntry {
            id: self.reading_list_ids.next_id(),
            user_id: add.user_id,
            book_id: add.book_id,
            progress: add.progress.unwrap_or(0),
            added_at: Utc::now(),
        };
        self.reading_list.insert(entry.id, entry.clone());
        entry
    }

    fn update_reading_progress(
        &mut self,
        id: EntryId,
        progress: u32,
    ) -> Option<ReadingListEntry> {
        let entry = self.reading_list.get_mut(&id)?;
        entry.progress = progress;
        Some(entry.clone())
    }

    fn remove_from_reading_list(&mut self, id: EntryId) -> bool {
        self.reading_list.remove(&id).is_some()
    }

    fn liked_books(&self, user_id: UserId) -> StoreResult<Vec<LikedBookItem>> {
        self.liked_books
            .values()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| {
                let book = self
                    .books
                    .get(&entry.book_id)
                    .cloned()
                    .ok_or_else(|| orphaned("liked_books", entry.id, entry.book_id))?;
                Ok(LikedBookItem {
                    entry: entry.clone(),
                    book,
                })
            })
            .collect()
    }

    fn like_book(&mut self, add: LikeAdd) -> LikedBookEntry {
        if let Some(existing) = self
            .liked_books
            .values()
            .find(|entry| entry.user_id == add.user_id && entry.book_id == add.book_id)
        {
            return existing.clone();
        }

        let entry = LikedBookEntry {
            id: self.liked_book_ids.next_id(),
            user_id: add.user_id,
            book_id: add.book_id,
            liked_at: Utc::now(),
        };
        self.liked_books.insert(entry.id, entry.clone());
        entry
    }

    fn unlike_book(&mut self, id: EntryId) -> bool {
        self.liked_books.remove(&id).is_some()
    }
}

fn orphaned(shelf: &'static str, entry_id: EntryId, book_id: u64) -> StoreError {
    error!(
        "event=orphaned_shelf_entry module=store status=error shelf={shelf} entry_id={entry_id} book_id={book_id}"
    );
    StoreError::OrphanedEntry {
        shelf,
        entry_id,
        book_id,
    }
}
