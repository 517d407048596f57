//! Roster Store
//!
//! Client-side state store for the Roster administration UI.
//!
//! Holds the fetched user list, the selected user, and loading/error flags,
//! and exposes the actions the presentation layer dispatches. State lives
//! behind an `RwLock`; actions update it with whole-field replaces, and a
//! monotonic action sequence guarantees the newest action wins when several
//! overlap.
//!
//! # Example
//!
//! ```ignore
//! use roster_store::UserStore;
//! use roster_core::CreateUser;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = UserStore::with_base_url("https://admin.example.com")?;
//!
//!     store.fetch_users().await;
//!     println!("{} users", store.state().await.users.len());
//!
//!     store.create_user(&CreateUser::new("alice@example.com", "alice")).await?;
//!
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]

mod state;
mod store;

pub use state::UserState;
pub use store::UserStore;
