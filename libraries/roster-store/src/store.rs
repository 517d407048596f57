//! User state store.

use crate::state::UserState;
use roster_client::{
    CreateUserUseCase, DeleteUserUseCase, GetAllUsersUseCase, GetUserByIdUseCase,
    GetUserStatsUseCase, HttpUserRepository, UpdateUserUseCase,
};
use roster_core::{CreateUser, Result, RosterError, UpdateUser, UserRepository};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Holder of fetched user state and the actions that mutate it.
///
/// The store is built around an injected repository rather than a global, so
/// tests and application roots wire their own transport. Every action follows
/// the same protocol: mark loading, run the use case, apply the outcome.
/// Mutating actions (`create_user`, `update_user`, `delete_user`) refresh the
/// full user list from the server before they finish, so the list always
/// reflects server truth, and re-raise failures to the caller after recording
/// them.
///
/// Concurrent actions are sequenced with a monotonic ticket: an action that
/// finishes after a newer one has started discards its state write, so the
/// newest action always wins regardless of completion order.
///
/// # Example
///
/// ```ignore
/// use roster_store::UserStore;
///
/// let store = UserStore::with_base_url("https://admin.example.com")?;
/// store.fetch_users().await;
///
/// let state = store.state().await;
/// println!("{} users", state.users.len());
/// ```
pub struct UserStore {
    state: Arc<RwLock<UserState>>,
    seq: AtomicU64,
    list: GetAllUsersUseCase,
    get_by_id: GetUserByIdUseCase,
    create: CreateUserUseCase,
    update: UpdateUserUseCase,
    delete: DeleteUserUseCase,
    stats: GetUserStatsUseCase,
}

impl UserStore {
    /// Build a store over the given repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            state: Arc::new(RwLock::new(UserState::default())),
            seq: AtomicU64::new(0),
            list: GetAllUsersUseCase::new(Arc::clone(&repository)),
            get_by_id: GetUserByIdUseCase::new(Arc::clone(&repository)),
            create: CreateUserUseCase::new(Arc::clone(&repository)),
            update: UpdateUserUseCase::new(Arc::clone(&repository)),
            delete: DeleteUserUseCase::new(Arc::clone(&repository)),
            stats: GetUserStatsUseCase::new(repository),
        }
    }

    /// Build a store over the HTTP repository for the given server URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let repository = HttpUserRepository::new(base_url)?;
        Ok(Self::new(Arc::new(repository)))
    }

    /// Clone the current state for rendering.
    pub async fn state(&self) -> UserState {
        self.state.read().await.clone()
    }

    /// Start an action: take a sequence ticket and mark the store loading.
    async fn begin(&self) -> u64 {
        let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let mut state = self.state.write().await;
        state.loading = true;
        state.error = None;
        ticket
    }

    /// True while no action newer than `ticket` has started.
    fn is_current(&self, ticket: u64) -> bool {
        self.seq.load(Ordering::SeqCst) == ticket
    }

    /// Apply a successful outcome unless a newer action has superseded it.
    async fn finish_ok(&self, ticket: u64, apply: impl FnOnce(&mut UserState)) {
        if !self.is_current(ticket) {
            debug!(ticket, "Discarding stale action result");
            return;
        }
        let mut state = self.state.write().await;
        apply(&mut state);
        state.loading = false;
    }

    /// Record a failure unless a newer action has superseded it.
    async fn finish_err(&self, ticket: u64, error: &RosterError) {
        warn!(%error, "Store action failed");
        if !self.is_current(ticket) {
            debug!(ticket, "Discarding stale action failure");
            return;
        }
        let mut state = self.state.write().await;
        state.error = Some(error.to_string());
        state.loading = false;
    }

    /// Fetch the full user list into `users`.
    ///
    /// Failures are recorded in `error`, not returned.
    pub async fn fetch_users(&self) {
        let ticket = self.begin().await;
        match self.list.execute().await {
            Ok(users) => self.finish_ok(ticket, |s| s.users = users).await,
            Err(e) => self.finish_err(ticket, &e).await,
        }
    }

    /// Fetch a single user into `selected_user`.
    ///
    /// An unknown id clears the selection and records a not-found message.
    /// Other failures are recorded in `error`, not returned.
    pub async fn fetch_user(&self, id: i64) {
        let ticket = self.begin().await;
        match self.get_by_id.execute(id).await {
            Ok(Some(user)) => self.finish_ok(ticket, |s| s.selected_user = Some(user)).await,
            Ok(None) => {
                self.finish_ok(ticket, |s| {
                    s.selected_user = None;
                    s.error = Some(format!("User {} not found", id));
                })
                .await;
            }
            Err(e) => self.finish_err(ticket, &e).await,
        }
    }

    /// Fetch aggregate statistics into `stats`.
    ///
    /// Failures are recorded in `error`, not returned.
    pub async fn fetch_stats(&self) {
        let ticket = self.begin().await;
        match self.stats.execute().await {
            Ok(stats) => self.finish_ok(ticket, |s| s.stats = Some(stats)).await,
            Err(e) => self.finish_err(ticket, &e).await,
        }
    }

    /// Create a user, then reload the list from the server.
    ///
    /// Failures (of the create or of the reload) are recorded and re-raised
    /// so callers can react, e.g. stay on the form.
    pub async fn create_user(&self, input: &CreateUser) -> Result<()> {
        let ticket = self.begin().await;
        let result = async {
            self.create.execute(input).await?;
            self.list.execute().await
        }
        .await;

        match result {
            Ok(users) => {
                self.finish_ok(ticket, |s| s.users = users).await;
                Ok(())
            }
            Err(e) => {
                self.finish_err(ticket, &e).await;
                Err(e)
            }
        }
    }

    /// Apply a partial update, then reload the list from the server.
    ///
    /// Failures are recorded and re-raised.
    pub async fn update_user(&self, id: i64, input: &UpdateUser) -> Result<()> {
        let ticket = self.begin().await;
        let result = async {
            self.update.execute(id, input).await?;
            self.list.execute().await
        }
        .await;

        match result {
            Ok(users) => {
                self.finish_ok(ticket, |s| s.users = users).await;
                Ok(())
            }
            Err(e) => {
                self.finish_err(ticket, &e).await;
                Err(e)
            }
        }
    }

    /// Delete a user, then reload the list from the server.
    ///
    /// Failures are recorded and re-raised.
    pub async fn delete_user(&self, id: i64) -> Result<()> {
        let ticket = self.begin().await;
        let result = async {
            self.delete.execute(id).await?;
            self.list.execute().await
        }
        .await;

        match result {
            Ok(users) => {
                self.finish_ok(ticket, |s| s.users = users).await;
                Ok(())
            }
            Err(e) => {
                self.finish_err(ticket, &e).await;
                Err(e)
            }
        }
    }

    /// Reset `error` to absent. Touches nothing else.
    pub async fn clear_error(&self) {
        let mut state = self.state.write().await;
        state.error = None;
    }
}
