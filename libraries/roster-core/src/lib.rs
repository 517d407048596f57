//! Roster Core
//!
//! Transport-agnostic domain types, the user repository contract, and error
//! handling for the Roster administration client.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `CreateUser`, `UpdateUser`, `UserStats`
//! - **Repository Port**: the `UserRepository` trait that adapters implement
//! - **Error Handling**: unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::types::{CreateUser, UpdateUser};
//!
//! let input = CreateUser::new("alice@example.com", "alice");
//!
//! let changes = UpdateUser {
//!     full_name: Some("Alice Cooper".to_string()),
//!     ..UpdateUser::default()
//! };
//! assert!(!changes.is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{Result, RosterError};
pub use traits::UserRepository;
pub use types::{CreateUser, UpdateUser, User, UserStats};
