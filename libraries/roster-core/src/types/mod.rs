//! Domain types for the Roster administration client

mod user;

pub use user::{CreateUser, UpdateUser, User, UserStats};
