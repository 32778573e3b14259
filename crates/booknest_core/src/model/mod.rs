//! Domain model for the BookNest catalog.
//!
//! # Responsibility
//! - Define canonical entity records owned by the storage layer.
//! - Provide request models (`New*`) and patch models (`*Patch`) for create
//!   and partial-update use-cases.
//!
//! # Invariants
//! - Every entity carries a stable numeric id assigned by storage; ids are
//!   never reused, even after deletion.
//! - Patch models never expose id, foreign-key, derived, or creation
//!   timestamp fields.

pub mod book;
pub mod question;
pub mod review;
pub mod shelf;
pub mod user;
