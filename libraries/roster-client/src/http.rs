//! HTTP implementation of the user repository port.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use roster_core::{CreateUser, Result, RosterError, UpdateUser, User, UserRepository, UserStats};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// User repository backed by the Roster REST API.
///
/// Translates every port operation into the conventional REST verb against
/// `{base}/api/v1/users` and every non-success status into the port's failure
/// contract.
///
/// # Example
///
/// ```ignore
/// use roster_client::HttpUserRepository;
/// use roster_core::UserRepository;
///
/// let repo = HttpUserRepository::new("https://admin.example.com")?;
/// let users = repo.get_all(None, None).await?;
/// println!("{} users", users.len());
/// ```
pub struct HttpUserRepository {
    http: Client,
    base_url: String,
}

impl HttpUserRepository {
    /// Create a repository for the given server base URL.
    ///
    /// The URL must be absolute with an http or https scheme; trailing
    /// slashes are trimmed.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        if base_url.is_empty() {
            return Err(RosterError::InvalidUrl("URL cannot be empty".into()));
        }

        let parsed = url::Url::parse(&base_url)
            .map_err(|e| RosterError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(RosterError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("roster-client/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RosterError::network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The normalized server base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn users_url(&self) -> String {
        format!("{}/api/v1/users", self.base_url)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response> {
        request.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                RosterError::network(format!("server unreachable: {}", e))
            } else {
                RosterError::network(e.to_string())
            }
        })
    }

    async fn parse_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| RosterError::parse(format!("Failed to parse {}: {}", what, e)))
    }

    async fn status_error(response: Response) -> RosterError {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        RosterError::server(status, message)
    }
}

#[async_trait]
impl UserRepository for HttpUserRepository {
    async fn get_all(&self, skip: Option<u32>, limit: Option<u32>) -> Result<Vec<User>> {
        let mut url = self.users_url();

        let mut params = Vec::new();
        if let Some(skip) = skip {
            params.push(format!("skip={}", skip));
        }
        if let Some(limit) = limit {
            params.push(format!("limit={}", limit));
        }
        if !params.is_empty() {
            url = format!("{}?{}", url, params.join("&"));
        }

        debug!(url = %url, "Fetching user list");

        let response = self.send(self.http.get(&url)).await?;
        if response.status().is_success() {
            let users: Vec<User> = Self::parse_json(response, "user list").await?;
            debug!(count = users.len(), "Fetched user list");
            Ok(users)
        } else {
            Err(Self::status_error(response).await)
        }
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<User>> {
        let url = format!("{}/{}", self.users_url(), id);
        debug!(url = %url, user_id = id, "Fetching user");

        let response = self.send(self.http.get(&url)).await?;
        let status = response.status();

        if status.is_success() {
            let user: User = Self::parse_json(response, "user").await?;
            Ok(Some(user))
        } else if status == StatusCode::NOT_FOUND {
            debug!(user_id = id, "User not found");
            Ok(None)
        } else {
            Err(Self::status_error(response).await)
        }
    }

    async fn create(&self, input: &CreateUser) -> Result<User> {
        let url = self.users_url();
        debug!(url = %url, email = %input.email, "Creating user");

        let response = self.send(self.http.post(&url).json(input)).await?;
        if response.status().is_success() {
            let user: User = Self::parse_json(response, "created user").await?;
            debug!(user_id = user.id, "User created");
            Ok(user)
        } else {
            Err(Self::status_error(response).await)
        }
    }

    async fn update(&self, id: i64, input: &UpdateUser) -> Result<User> {
        let url = format!("{}/{}", self.users_url(), id);
        debug!(url = %url, user_id = id, "Updating user");

        let response = self.send(self.http.patch(&url).json(input)).await?;
        if response.status().is_success() {
            let user: User = Self::parse_json(response, "updated user").await?;
            debug!(user_id = user.id, "User updated");
            Ok(user)
        } else {
            Err(Self::status_error(response).await)
        }
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let url = format!("{}/{}", self.users_url(), id);
        debug!(url = %url, user_id = id, "Deleting user");

        let response = self.send(self.http.delete(&url)).await?;
        let status = response.status();

        if status.is_success() {
            debug!(user_id = id, "User deleted");
            Ok(())
        } else if status == StatusCode::NOT_FOUND {
            // Already gone, removal is idempotent
            Ok(())
        } else {
            Err(Self::status_error(response).await)
        }
    }

    async fn get_stats(&self) -> Result<UserStats> {
        let url = format!("{}/stats", self.users_url());
        debug!(url = %url, "Fetching user stats");

        let response = self.send(self.http.get(&url)).await?;
        if response.status().is_success() {
            Self::parse_json(response, "user stats").await
        } else {
            Err(Self::status_error(response).await)
        }
    }
}
