//! GitHub API client.
//!
//! Thin reqwest wrapper around the one endpoint the relay needs: the issue
//! search API, scoped to open pull requests awaiting review from a user.

use crate::error::AppError;
use crate::models::SearchResponse;
use reqwest::{header, Client, Response, StatusCode};

/// Static User-Agent sent on every outbound request. GitHub rejects
/// requests without one.
const USER_AGENT: &str = "Code-Review-Lamp";

/// Versioned media type accepted from GitHub.
const ACCEPT_V3_JSON: &str = "application/vnd.github.v3+json";

/// GitHub API client configuration.
#[derive(Debug, Clone)]
pub struct GitHubClientConfig {
    /// Base URL of the API (e.g., `https://api.github.com`).
    pub base_url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GitHubClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.github.com".to_string(),
            timeout_secs: 5,
        }
    }
}

/// GitHub API client.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    config: GitHubClientConfig,
}

impl GitHubClient {
    /// Create a new GitHub client.
    pub fn new(config: GitHubClientConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Build the search URL for a user's pending review requests.
    ///
    /// The qualifier string is GitHub's own search syntax and must reach the
    /// API verbatim, so the query is formatted into the URL directly instead
    /// of going through percent-encoding query helpers.
    pub fn search_url(&self, username: &str) -> String {
        format!(
            "{}/search/issues?q=is:open+is:pr+review-requested:{}+archived:false",
            self.config.base_url.trim_end_matches('/'),
            username
        )
    }

    /// Fetch the open pull requests on which `username` is a requested
    /// reviewer, authenticated with `token`.
    pub async fn search_review_requests(
        &self,
        username: &str,
        token: &str,
    ) -> Result<SearchResponse, AppError> {
        let url = self.search_url(username);

        let mut auth_value = header::HeaderValue::from_str(&format!("token {}", token))
            .map_err(|_| {
                AppError::invalid_input_field("Token contains invalid characters", "oauth_token")
            })?;
        auth_value.set_sensitive(true);

        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, ACCEPT_V3_JSON)
            .header(header::AUTHORIZATION, auth_value)
            .header(header::CONNECTION, "close")
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Turn the raw HTTP response into a parsed search result or an error.
    async fn handle_response(response: Response) -> Result<SearchResponse, AppError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await.map_err(AppError::from)?;
            serde_json::from_str::<SearchResponse>(&body).map_err(AppError::from)
        } else {
            let status_code = status.as_u16();
            let body = response.text().await.unwrap_or_default();

            // GitHub error bodies carry {"message": "..."}; fall back to a
            // generic description per status class.
            let body_message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("message")?.as_str().map(String::from));

            let message = match (status, body_message) {
                (_, Some(msg)) => msg,
                (StatusCode::UNAUTHORIZED, _) => "Bad credentials".to_string(),
                (StatusCode::FORBIDDEN, _) => "Access denied or rate limited".to_string(),
                (StatusCode::UNPROCESSABLE_ENTITY, _) => "Search query rejected".to_string(),
                _ => format!("Request failed ({})", status_code),
            };

            Err(AppError::github_api_status(message, status_code))
        }
    }
}
