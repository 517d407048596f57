//! Roster Client
//!
//! HTTP adapter and application use cases for the Roster user administration
//! API.
//!
//! The adapter implements the `UserRepository` port from `roster-core`
//! against a REST backend; the use cases wrap the port with input shape
//! validation.
//!
//! # Example
//!
//! ```ignore
//! use roster_client::{GetAllUsersUseCase, HttpUserRepository};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = Arc::new(HttpUserRepository::new("https://admin.example.com")?);
//!
//!     let users = GetAllUsersUseCase::new(repo).execute().await?;
//!     println!("{} users", users.len());
//!
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]

mod http;
mod use_cases;

pub use http::HttpUserRepository;
pub use use_cases::{
    CreateUserUseCase, DeleteUserUseCase, GetAllUsersUseCase, GetUserByIdUseCase,
    GetUserStatsUseCase, UpdateUserUseCase,
};

// Re-export the port and domain types for downstream convenience
pub use roster_core::{CreateUser, Result, RosterError, UpdateUser, User, UserRepository, UserStats};
