//! User account record.
//!
//! # Responsibility
//! - Define the canonical user shape shared by auth and catalog use-cases.
//! - Provide create-request and partial-update models.
//!
//! # Invariants
//! - `id` is stable and never reused for another user.
//! - Users are never deleted; deactivation flips `is_active` instead.
//! - `joined_at` is set once at creation and never patched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable identifier for a user account.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type UserId = u64;

/// Canonical user account record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable storage-assigned id.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email. Matched case-insensitively on lookup; stored as given.
    pub email: String,
    /// Opaque credential value. Hashing belongs to the auth layer, not here.
    pub password: String,
    /// Grants access to administrative use-cases in the calling layer.
    pub is_admin: bool,
    /// Active accounts are the default; deactivation replaces deletion.
    pub is_active: bool,
    /// Set by storage at creation.
    pub joined_at: DateTime<Utc>,
}

/// Create-request model for [`User`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub is_admin: bool,
    /// Defaults to `true` when not supplied by the caller.
    pub is_active: Option<bool>,
}

/// Partial-update model for [`User`].
///
/// Only fields set to `Some` are applied; `id` and `joined_at` are
/// intentionally absent so identity can never be rewritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_admin: Option<bool>,
    pub is_active: Option<bool>,
}

impl User {
    /// Applies a partial update, overwriting only fields present in `patch`.
    pub fn apply_patch(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(password) = patch.password {
            self.password = password;
        }
        if let Some(is_admin) = patch.is_admin {
            self.is_admin = is_admin;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{User, UserPatch};
    use chrono::Utc;

    fn sample_user() -> User {
        User {
            id: 7,
            name: "Reader".to_string(),
            email: "reader@example.com".to_string(),
            password: "secret".to_string(),
            is_admin: false,
            is_active: true,
            joined_at: Utc::now(),
        }
    }

    #[test]
    fn apply_patch_overwrites_only_present_fields() {
        let mut user = sample_user();
        let joined_at = user.joined_at;

        user.apply_patch(UserPatch {
            name: Some("Renamed".to_string()),
            is_active: Some(false),
            ..UserPatch::default()
        });

        assert_eq!(user.id, 7);
        assert_eq!(user.name, "Renamed");
        assert_eq!(user.email, "reader@example.com");
        assert!(!user.is_active);
        assert_eq!(user.joined_at, joined_at);
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut user = sample_user();
        let before = user.clone();
        user.apply_patch(UserPatch::default());
        assert_eq!(user, before);
    }
}
