//! Personal shelf records: reading list and liked books.
//!
//! # Responsibility
//! - Define the per-user link records tying users to books they are reading
//!   or have liked.
//!
//! # Invariants
//! - At most one reading-list entry and one liked-book entry exist per
//!   `(user_id, book_id)` pair; adds are idempotent on that key.
//! - Entries are removed by id or by book cascade delete; a surviving entry
//!   must always resolve to a live book.

use crate::model::book::BookId;
use crate::model::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable identifier shared by both shelf entry kinds.
pub type EntryId = u64;

/// One book on a user's reading list, with progress tracking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingListEntry {
    /// Stable storage-assigned id.
    pub id: EntryId,
    pub user_id: UserId,
    pub book_id: BookId,
    /// Reading progress as tracked by the caller (e.g. percent or pages).
    pub progress: u32,
    /// Set by storage at creation.
    pub added_at: DateTime<Utc>,
}

/// One book a user has liked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikedBookEntry {
    /// Stable storage-assigned id.
    pub id: EntryId,
    pub user_id: UserId,
    pub book_id: BookId,
    /// Set by storage at creation.
    pub liked_at: DateTime<Utc>,
}

/// Create-request model for [`ReadingListEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfAdd {
    pub user_id: UserId,
    pub book_id: BookId,
    /// Defaults to 0 when not supplied by the caller.
    pub progress: Option<u32>,
}

/// Create-request model for [`LikedBookEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeAdd {
    pub user_id: UserId,
    pub book_id: BookId,
}
