//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `booknest_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use booknest_core::{MemoryCatalog, StatsStore};

fn main() {
    println!("booknest_core ping={}", booknest_core::ping());
    println!("booknest_core version={}", booknest_core::core_version());

    // A freshly seeded catalog always contains exactly the default admin.
    let catalog = MemoryCatalog::new();
    let stats = catalog.stats();
    println!(
        "booknest_core seeded users={} books={} reviews={}",
        stats.total_users, stats.total_books, stats.total_reviews
    );
}
