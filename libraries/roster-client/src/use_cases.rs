//! Application-layer use cases.
//!
//! Each use case validates input shape and delegates to the repository port.
//! No business rules live here; the layer exists so the store never talks to
//! a repository directly.

use roster_core::{CreateUser, Result, RosterError, UpdateUser, User, UserRepository, UserStats};
use std::sync::Arc;

fn validate_id(id: i64) -> Result<()> {
    if id <= 0 {
        return Err(RosterError::invalid_input(format!(
            "user id must be a positive integer, got {}",
            id
        )));
    }
    Ok(())
}

/// Fetch the full user list with server-default pagination.
pub struct GetAllUsersUseCase {
    repository: Arc<dyn UserRepository>,
}

impl GetAllUsersUseCase {
    /// Bind the use case to a repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Fetch all users in server-defined order.
    pub async fn execute(&self) -> Result<Vec<User>> {
        self.repository.get_all(None, None).await
    }
}

/// Fetch a single user by id.
pub struct GetUserByIdUseCase {
    repository: Arc<dyn UserRepository>,
}

impl GetUserByIdUseCase {
    /// Bind the use case to a repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Fetch the user, `Ok(None)` when the id is unknown.
    pub async fn execute(&self, id: i64) -> Result<Option<User>> {
        validate_id(id)?;
        self.repository.get_by_id(id).await
    }
}

/// Create a new user.
pub struct CreateUserUseCase {
    repository: Arc<dyn UserRepository>,
}

impl CreateUserUseCase {
    /// Bind the use case to a repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Create the user after checking the required fields.
    pub async fn execute(&self, input: &CreateUser) -> Result<User> {
        if input.email.trim().is_empty() {
            return Err(RosterError::invalid_input("email must not be empty"));
        }
        if input.username.trim().is_empty() {
            return Err(RosterError::invalid_input("username must not be empty"));
        }
        self.repository.create(input).await
    }
}

/// Apply a partial update to an existing user.
pub struct UpdateUserUseCase {
    repository: Arc<dyn UserRepository>,
}

impl UpdateUserUseCase {
    /// Bind the use case to a repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Update the user.
    ///
    /// An input with no fields present is forwarded as-is; the server treats
    /// it as a no-op update.
    pub async fn execute(&self, id: i64, input: &UpdateUser) -> Result<User> {
        validate_id(id)?;
        self.repository.update(id, input).await
    }
}

/// Delete a user by id.
pub struct DeleteUserUseCase {
    repository: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    /// Bind the use case to a repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Delete the user; succeeds when the id is already gone.
    pub async fn execute(&self, id: i64) -> Result<()> {
        validate_id(id)?;
        self.repository.delete(id).await
    }
}

/// Fetch aggregate account statistics.
pub struct GetUserStatsUseCase {
    repository: Arc<dyn UserRepository>,
}

impl GetUserStatsUseCase {
    /// Bind the use case to a repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Fetch the stats.
    pub async fn execute(&self) -> Result<UserStats> {
        self.repository.get_stats().await
    }
}
