//! In-memory catalog backend.
//!
//! # Responsibility
//! - Own every entity table and per-type id sequence in process memory.
//! - Seed the default administrator account at construction.
//!
//! # Invariants
//! - Ids start at 1, increase strictly, and are never reused after deletion.
//! - All state is process-local and lost on restart; callers needing
//!   durability put a persistent backend behind the same storage traits.
//! - Methods take `&mut self` for writes, so each operation runs to
//!   completion with exclusive access and no interleaving hazard.

use crate::model::book::{Book, BookId};
use crate::model::question::{QuestionId, VerificationQuestion};
use crate::model::review::{Review, ReviewId};
use crate::model::shelf::{EntryId, LikedBookEntry, ReadingListEntry};
use crate::model::user::{NewUser, User, UserId};
use crate::store::user_store::UserStore;
use log::info;
use std::collections::BTreeMap;

pub(crate) const SEED_ADMIN_NAME: &str = "Admin User";
pub(crate) const SEED_ADMIN_EMAIL: &str = "admin@booknest.com";
const SEED_ADMIN_PASSWORD: &str = "changeme";

/// Monotonic id source for one entity type.
///
/// Deletion never winds the sequence back, so ids are unique forever.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct IdSequence {
    last: u64,
}

impl IdSequence {
    /// Returns the next id, starting at 1.
    pub(crate) fn next_id(&mut self) -> u64 {
        self.last += 1;
        self.last
    }
}

/// In-memory storage backend for the whole catalog.
///
/// Implements every storage trait in this module tree over `BTreeMap`
/// tables. Construct one instance per logical catalog; tests get isolated
/// state by constructing their own.
#[derive(Debug)]
pub struct MemoryCatalog {
    pub(crate) users: BTreeMap<UserId, User>,
    pub(crate) books: BTreeMap<BookId, Book>,
    pub(crate) questions: BTreeMap<QuestionId, VerificationQuestion>,
    pub(crate) reviews: BTreeMap<ReviewId, Review>,
    pub(crate) reading_list: BTreeMap<EntryId, ReadingListEntry>,
    pub(crate) liked_books: BTreeMap<EntryId, LikedBookEntry>,
    pub(crate) user_ids: IdSequence,
    pub(crate) book_ids: IdSequence,
    pub(crate) question_ids: IdSequence,
    pub(crate) review_ids: IdSequence,
    pub(crate) reading_list_ids: IdSequence,
    pub(crate) liked_book_ids: IdSequence,
}

impl MemoryCatalog {
    /// Creates an empty catalog seeded with the default administrator.
    pub fn new() -> Self {
        let mut catalog = Self {
            users: BTreeMap::new(),
            books: BTreeMap::new(),
            questions: BTreeMap::new(),
            reviews: BTreeMap::new(),
            reading_list: BTreeMap::new(),
            liked_books: BTreeMap::new(),
            user_ids: IdSequence::default(),
            book_ids: IdSequence::default(),
            question_ids: IdSequence::default(),
            review_ids: IdSequence::default(),
            reading_list_ids: IdSequence::default(),
            liked_book_ids: IdSequence::default(),
        };

        let admin = catalog.create_user(NewUser {
            name: SEED_ADMIN_NAME.to_string(),
            email: SEED_ADMIN_EMAIL.to_string(),
            password: SEED_ADMIN_PASSWORD.to_string(),
            is_admin: true,
            is_active: None,
        });
        info!(
            "event=catalog_seeded module=store status=ok admin_user_id={}",
            admin.id
        );

        catalog
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}
