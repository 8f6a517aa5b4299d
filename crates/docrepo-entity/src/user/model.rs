//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use docrepo_core::traits::Entity;
use docrepo_core::types::UserId;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Email address, unique among non-deleted users.
    pub email: String,
    /// Stored credential. Never exposed through [`UserMapper`](super::UserMapper).
    pub password: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
    /// When the user was soft-deleted.
    pub deleted_at: Option<DateTime<Utc>>,
    /// Soft-delete flag.
    pub is_deleted: bool,
}

impl User {
    /// Create a new, live user with a fresh id.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            email: email.into(),
            password: password.into(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
            is_deleted: false,
        }
    }

    /// Bump `updated_at`.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Mark the user as deleted. Persist with `save`.
    pub fn soft_delete(&mut self) {
        let now = Utc::now();
        self.is_deleted = true;
        self.deleted_at = Some(now);
        self.updated_at = now;
    }
}

impl Entity for User {
    type Id = UserId;
    const COLLECTION: &'static str = "users";

    fn id(&self) -> &UserId {
        &self.id
    }

    fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}
