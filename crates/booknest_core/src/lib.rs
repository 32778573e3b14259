//! Core storage layer for BookNest.
//! This crate is the single source of truth for catalog state and its
//! cross-entity consistency rules.

pub mod logging;
pub mod model;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::book::{Book, BookId, BookPatch, NewBook};
pub use model::question::{NewQuestion, QuestionId, QuestionPatch, VerificationQuestion};
pub use model::review::{NewReview, Review, ReviewId, ReviewPatch};
pub use model::shelf::{EntryId, LikeAdd, LikedBookEntry, ReadingListEntry, ShelfAdd};
pub use model::user::{NewUser, User, UserId, UserPatch};
pub use store::book_store::BookStore;
pub use store::memory::MemoryCatalog;
pub use store::question_store::QuestionStore;
pub use store::review_store::ReviewStore;
pub use store::shelf_store::{LikedBookItem, ReadingListItem, ShelfStore};
pub use store::stats::{CatalogStats, StatsStore};
pub use store::user_store::UserStore;
pub use store::{StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
