//! User domain entity and related types.

use chrono::{Local, NaiveDate, NaiveDateTime, SubsecRound};
use serde::Serialize;

use crate::error::{DomainError, DomainResult};

/// User domain entity.
///
/// A record starts unpersisted (`id` is `None`) and receives its identifier
/// from the store on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: Option<i64>,
    username: String,
    birth_date: Option<NaiveDate>,
    #[serde(skip_serializing)]
    password_hash: String,
    created_at: NaiveDateTime,
}

impl User {
    /// Create a new, unpersisted user stamped with the current local time.
    ///
    /// `password_hash` must already be a digest; nothing here hashes it.
    /// The timestamp is truncated to microseconds, the finest precision
    /// relational timestamp columns keep.
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: None,
            username: username.into(),
            birth_date: None,
            password_hash: password_hash.into(),
            created_at: Local::now().naive_local().trunc_subsecs(6),
        }
    }

    /// Builder-style birth date assignment
    pub fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    pub fn set_birth_date(&mut self, birth_date: Option<NaiveDate>) {
        self.birth_date = birth_date;
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn set_password_hash(&mut self, password_hash: impl Into<String>) {
        self.password_hash = password_hash.into();
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn set_created_at(&mut self, created_at: NaiveDateTime) {
        self.created_at = created_at;
    }

    /// Check if the store has assigned an identifier yet
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Identifier of a stored user, or a validation error for a fresh one
    pub fn persisted_id(&self) -> DomainResult<i64> {
        self.id
            .ok_or_else(|| DomainError::validation("User has not been persisted"))
    }

    /// Check the record can be written as a row: a stored user always carries a hash.
    pub fn ensure_storable(&self) -> DomainResult<()> {
        if self.password_hash.is_empty() {
            return Err(DomainError::validation("Password hash must not be empty"));
        }
        Ok(())
    }
}

/// Account changes applied to an existing user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUser {
    /// New username
    pub username: Option<String>,
    /// `Some(None)` clears the birth date, `None` leaves it alone
    pub birth_date: Option<Option<NaiveDate>>,
    /// Replacement password hash (already hashed)
    pub password_hash: Option<String>,
}

impl UpdateUser {
    /// Check whether the update carries any change at all
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.birth_date.is_none() && self.password_hash.is_none()
    }

    /// Copy every provided field onto `user`, leaving the rest untouched.
    pub fn apply_to(self, user: &mut User) {
        if let Some(username) = self.username {
            user.set_username(username);
        }
        if let Some(birth_date) = self.birth_date {
            user.set_birth_date(birth_date);
        }
        if let Some(password_hash) = self.password_hash {
            user.set_password_hash(password_hash);
        }
    }
}
