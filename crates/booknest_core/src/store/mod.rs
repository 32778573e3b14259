//! Storage layer: per-entity access contracts and in-memory implementation.
//!
//! # Responsibility
//! - Define use-case oriented storage traits per entity group.
//! - Keep container details inside [`memory::MemoryCatalog`] so a future
//!   persistent backend can implement the same contracts.
//!
//! # Invariants
//! - Storage is the sole owner of entity state; callers receive clones.
//! - Missing records are reported through `Option`/`bool` sentinels, never
//!   through [`StoreError`].
//! - [`StoreError`] is reserved for internal consistency defects that the
//!   cascade-delete rules should make unreachable.

pub mod book_store;
pub mod memory;
pub mod question_store;
pub mod review_store;
pub mod shelf_store;
pub mod stats;
pub mod user_store;

use crate::model::book::BookId;
use crate::model::shelf::EntryId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Internal consistency failure raised by the storage layer.
///
/// Not-found lookups are sentinels, not errors; a `StoreError` always means
/// an invariant was violated and should be treated as a defect by callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A shelf entry references a book that no longer exists. Unreachable
    /// when book cascade delete works; surfaced loudly instead of skipped.
    OrphanedEntry {
        /// Which shelf the entry lives on (`reading_list` or `liked_books`).
        shelf: &'static str,
        entry_id: EntryId,
        book_id: BookId,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OrphanedEntry {
                shelf,
                entry_id,
                book_id,
            } => write!(
                f,
                "{shelf} entry {entry_id} references missing book {book_id}"
            ),
        }
    }
}

impl Error for StoreError {}
