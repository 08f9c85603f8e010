//! The review relay: validate the lookup, query GitHub, map colors.
//!
//! Stateless apart from the injected immutable color map; every call is an
//! independent outbound query with no caching or deduplication, since the
//! lamp client polls.

use crate::config::ColorMap;
use crate::error::AppError;
use crate::services::github_client::GitHubClient;

/// Maps a user's pending review requests to an ordered list of lamp colors.
#[derive(Debug, Clone)]
pub struct ReviewRelay {
    client: GitHubClient,
    colors: ColorMap,
}

impl ReviewRelay {
    /// Create a relay over the given client and color map.
    pub fn new(client: GitHubClient, colors: ColorMap) -> Self {
        Self { client, colors }
    }

    /// Resolve the colors for `username`'s pending review requests.
    ///
    /// Returns one color per open PR awaiting their review, in the order
    /// GitHub returned the PRs. Either the whole list resolves or an error
    /// is returned; there is no partial result.
    pub async fn review_colors(
        &self,
        username: &str,
        token: &str,
    ) -> Result<Vec<String>, AppError> {
        if username.is_empty() {
            return Err(AppError::invalid_input_field(
                "Username must not be empty",
                "username",
            ));
        }
        if token.is_empty() {
            return Err(AppError::invalid_input_field(
                "Token must not be empty",
                "oauth_token",
            ));
        }

        let search = self.client.search_review_requests(username, token).await?;

        log::debug!(
            "{} pending review request(s) for {}",
            search.items.len(),
            username
        );

        Ok(search
            .items
            .iter()
            .map(|item| self.colors.color_for(&item.user.login).to_string())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::github_client::GitHubClientConfig;

    fn relay() -> ReviewRelay {
        let client = GitHubClient::new(GitHubClientConfig::default()).unwrap();
        ReviewRelay::new(client, ColorMap::default())
    }

    #[tokio::test]
    async fn test_empty_username_rejected_before_any_call() {
        let err = relay().review_colors("", "token").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput { .. }));
    }

    #[tokio::test]
    async fn test_empty_token_rejected_before_any_call() {
        let err = relay().review_colors("octocat", "").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput { .. }));
    }
}
