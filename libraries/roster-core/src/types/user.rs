//! User account types
//!
//! Wire shapes follow the backend JSON convention (snake_case fields,
//! RFC 3339 timestamps). `id`, `created_at`, and `updated_at` are assigned by
//! the server and never appear in client input types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User account as returned by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (server-assigned, immutable)
    pub id: i64,
    /// Login email address
    pub email: String,
    /// Display username
    pub username: String,
    /// Optional full name
    pub full_name: Option<String>,
    /// Whether the account may log in
    pub is_active: bool,
    /// Whether the account has administrative privileges
    pub is_superuser: bool,
    /// Account creation timestamp (server-assigned)
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp (server-assigned)
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new user
///
/// The server assigns `id`, timestamps, and the `is_active`/`is_superuser`
/// defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Login email address (required)
    pub email: String,
    /// Display username (required)
    pub username: String,
    /// Optional full name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl CreateUser {
    /// Create an input with the two required fields
    pub fn new(email: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            username: username.into(),
            full_name: None,
        }
    }

    /// Set the optional full name
    #[must_use]
    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }
}

/// Data for updating a user (all fields optional)
///
/// Partial-update semantics: absent fields are not serialized, so the server
/// leaves them unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New username
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// New full name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// New active flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl UpdateUser {
    /// True when no field is present
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.username.is_none()
            && self.full_name.is_none()
            && self.is_active.is_none()
    }
}

/// Aggregate user statistics from the admin stats endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    /// Total number of accounts
    pub total_users: i64,
    /// Accounts with `is_active` set
    pub active_users: i64,
    /// Accounts with `is_active` unset
    pub inactive_users: i64,
    /// Accounts with `is_superuser` set
    pub superusers: i64,
}
