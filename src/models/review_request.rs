//! GitHub search response models.
//!
//! Shapes match `GET /search/issues` on api.github.com. Only the fields the
//! relay consumes are declared; serde ignores the rest of the payload.
//! A body missing `items` or a nested `user.login` fails deserialization,
//! which the client surfaces as a malformed-response error.

use serde::Deserialize;

/// Top-level GitHub issue search response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Matching issues/PRs, in the order GitHub returned them.
    pub items: Vec<ReviewRequest>,
}

/// One open pull request on which review was requested.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRequest {
    /// The account that opened the pull request.
    pub user: RequestingUser,
}

/// Author of a pull request, as nested in a search item.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestingUser {
    /// GitHub username.
    pub login: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_search_response() {
        let body = r#"{
            "total_count": 2,
            "incomplete_results": false,
            "items": [
                {"user": {"login": "colleague1", "id": 7}, "title": "Fix build"},
                {"user": {"login": "stranger"}, "title": "Add docs"}
            ]
        }"#;
        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.items.len(), 2);
        assert_eq!(parsed.items[0].user.login, "colleague1");
        assert_eq!(parsed.items[1].user.login, "stranger");
    }

    #[test]
    fn test_empty_items() {
        let parsed: SearchResponse = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert!(parsed.items.is_empty());
    }

    #[test]
    fn test_missing_items_is_an_error() {
        let result = serde_json::from_str::<SearchResponse>(r#"{"total_count": 0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_login_is_an_error() {
        let result =
            serde_json::from_str::<SearchResponse>(r#"{"items": [{"user": {"id": 1}}]}"#);
        assert!(result.is_err());
    }
}
