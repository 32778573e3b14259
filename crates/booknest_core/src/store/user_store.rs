//! User storage contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide user lookup, creation, and partial-update APIs.
//!
//! # Invariants
//! - Users are never deleted; `is_active = false` is the retirement state.
//! - Email lookup is case-insensitive and returns the first match in table
//!   order; uniqueness is a caller convention, not enforced here.

use crate::model::user::{NewUser, User, UserId, UserPatch};
use crate::store::memory::MemoryCatalog;
use chrono::Utc;

/// Storage interface for user accounts.
pub trait UserStore {
    /// Gets one user by stable id.
    fn get_user(&self, id: UserId) -> Option<User>;
    /// Gets the first user whose email matches case-insensitively.
    fn get_user_by_email(&self, email: &str) -> Option<User>;
    /// Creates a user; `is_active` defaults to true, `joined_at` is set now.
    fn create_user(&mut self, new_user: NewUser) -> User;
    /// Merges a partial update into an existing user.
    fn update_user(&mut self, id: UserId, patch: UserPatch) -> Option<User>;
    /// Lists every user in table order.
    fn list_users(&self) -> Vec<User>;
    /// Lists users with `is_active = true`.
    fn list_active_users(&self) -> Vec<User>;
}

impl UserStore for MemoryCatalog {
    fn get_user(&self, id: UserId) -> Option<User> {
        self.users.get(&id).cloned()
    }

    fn get_user_by_email(&self, email: &str) -> Option<User> {
        self.users
            .values()
            .find(|user| user.email.eq_ignore_ascii_case(email))
            .cloned()
    }

    fn create_user(&mut self, new_user: NewUser) -> User {
        let user = User {
            id: self.user_ids.next_id(),
            name: new_user.name,
            email: new_user.email,
            password: new_user.password,
            is_admin: new_user.is_admin,
            is_active: new_user.is_active.unwrap_or(true),
            joined_at: Utc::now(),
        };
        self.users.insert(user.id, user.clone());
        user
    }

    fn update_user(&mut self, id: UserId, patch: UserPatch) -> Option<User> {
        let user = self.users.get_mut(&id)?;
        user.apply_patch(patch);
        Some(user.clone())
    }

    fn list_users(&self) -> Vec<User> {
        self.users.values().cloned().collect()
    }

    fn list_active_users(&self) -> Vec<User> {
        self.users
            .values()
            .filter(|user| user.is_active)
            .cloned()
            .collect()
    }
}
