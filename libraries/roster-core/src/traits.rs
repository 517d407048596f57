/// Repository port for user data access
use crate::error::Result;
use crate::types::{CreateUser, UpdateUser, User, UserStats};
use async_trait::async_trait;

/// Data-access contract for user accounts, decoupled from transport.
///
/// Implementers talk to whatever backing the deployment uses (the shipped
/// adapter speaks REST over HTTP); the application and store layers only see
/// this trait.
///
/// Every operation may fail with a `RosterError` carrying a human-readable
/// message. A missing record on `get_by_id` is `Ok(None)`, not a failure.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch users in server-defined order.
    ///
    /// `skip` and `limit` page through the collection; `None` means the
    /// server default.
    async fn get_all(&self, skip: Option<u32>, limit: Option<u32>) -> Result<Vec<User>>;

    /// Fetch a single user, `Ok(None)` when the id is unknown.
    async fn get_by_id(&self, id: i64) -> Result<Option<User>>;

    /// Create a user; the server assigns id, timestamps, and flag defaults.
    async fn create(&self, input: &CreateUser) -> Result<User>;

    /// Apply a partial update; only fields present in `input` change.
    ///
    /// Updating an unknown id is a failure.
    async fn update(&self, id: i64, input: &UpdateUser) -> Result<User>;

    /// Delete a user. Deleting an already-absent id succeeds (idempotent).
    async fn delete(&self, id: i64) -> Result<()>;

    /// Fetch aggregate account statistics.
    async fn get_stats(&self) -> Result<UserStats>;
}
