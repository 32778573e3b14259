//! Aggregate catalog statistics.
//!
//! # Responsibility
//! - Derive live headline counts from current table state.
//!
//! # Invariants
//! - Counts are computed per call and never cached.

use crate::store::memory::MemoryCatalog;
use serde::{Deserialize, Serialize};

/// Headline counters for dashboard-style callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total_users: u64,
    pub active_users: u64,
    pub total_books: u64,
    pub total_reviews: u64,
}

/// Storage interface for aggregate statistics.
pub trait StatsStore {
    /// Computes current counts from live table state.
    fn stats(&self) -> CatalogStats;
}

impl StatsStore for MemoryCatalog {
    fn stats(&self) -> CatalogStats {
        CatalogStats {
            total_users: self.users.len() as u64,
            active_users: self.users.values().filter(|user| user.is_active).count() as u64,
            total_books: self.books.len() as u64,
            total_reviews: self.reviews.len() as u64,
        }
    }
}
