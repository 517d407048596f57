//! Shared state shape rendered by the UI.

use roster_core::{User, UserStats};

/// Snapshot of the store's state.
///
/// Readers always receive a whole, consistent snapshot; the store never
/// exposes a half-written intermediate.
#[derive(Debug, Clone, Default)]
pub struct UserState {
    /// Users in server-defined order (never re-sorted client-side)
    pub users: Vec<User>,
    /// The user currently shown on a detail page, if any
    pub selected_user: Option<User>,
    /// Aggregate account statistics, once fetched
    pub stats: Option<UserStats>,
    /// True exactly while an operation is in flight
    pub loading: bool,
    /// Message of the most recent failure, until cleared or the next
    /// operation starts
    pub error: Option<String>,
}
