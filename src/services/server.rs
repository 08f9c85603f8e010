//! HTTP server for the lamp-facing endpoint.
//!
//! Exposes the legacy `GET /github_reviews/{username}/{oauth_token}` route.
//! The success body is the frozen lamp wire format: color labels each
//! followed by a comma (`red,blue,white,`), an empty list rendering as an
//! empty body. Errors map to explicit statuses instead of the legacy
//! behavior of failing inside an unlabeled 200.

use crate::error::AppError;
use crate::services::relay::ReviewRelay;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// Shared state for the relay routes.
#[derive(Clone)]
pub struct RelayState {
    pub relay: Arc<ReviewRelay>,
}

/// Wrapper to make AppError usable as an axum error response.
///
/// The lamp firmware only understands plain text, so errors are short
/// text lines rather than JSON. Bodies never contain the token.
struct ApiErr(AppError);

impl IntoResponse for ApiErr {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AppError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            AppError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            AppError::Network { .. }
            | AppError::GitHubApi { .. }
            | AppError::MalformedResponse { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let reason = match self.0.upstream_status() {
            Some(upstream) => format!("github responded {}: {}", upstream, self.0),
            None => self.0.to_string(),
        };

        (status, reason).into_response()
    }
}

impl From<AppError> for ApiErr {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// Serialize colors into the lamp wire format.
///
/// Each label is followed by a comma, including the last one. This trailing
/// separator is a wire-compatibility detail the lamp firmware relies on and
/// lives only here, at the boundary.
fn lamp_body(colors: &[String]) -> String {
    let mut body = String::with_capacity(colors.iter().map(|c| c.len() + 1).sum());
    for color in colors {
        body.push_str(color);
        body.push(',');
    }
    body
}

/// Build the relay router.
pub fn router(state: RelayState) -> Router {
    Router::new()
        .route(
            "/github_reviews/{username}/{oauth_token}",
            get(github_reviews_handler),
        )
        .with_state(state)
}

/// GET /github_reviews/:username/:oauth_token — colors for pending reviews.
async fn github_reviews_handler(
    State(state): State<RelayState>,
    Path((username, oauth_token)): Path<(String, String)>,
) -> Result<String, ApiErr> {
    log::info!("Review lookup for {}", username);

    let colors = state
        .relay
        .review_colors(&username, &oauth_token)
        .await
        .map_err(|err| {
            log::warn!("Review lookup for {} failed: {}", username, err);
            ApiErr::from(err)
        })?;

    Ok(lamp_body(&colors))
}

/// Serve the relay on `listener` until `cancel` fires.
pub async fn serve(
    listener: TcpListener,
    state: RelayState,
    cancel: CancellationToken,
) -> Result<(), AppError> {
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::internal(format!("Failed to read local address: {}", e)))?;

    log::info!("Review lamp relay listening on http://{}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    log::info!("Server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lamp_body_has_trailing_comma() {
        let colors = vec!["red".to_string(), "blue".to_string()];
        assert_eq!(lamp_body(&colors), "red,blue,");
    }

    #[test]
    fn test_lamp_body_single_color() {
        assert_eq!(lamp_body(&["white".to_string()]), "white,");
    }

    #[test]
    fn test_lamp_body_empty_list_is_empty_string() {
        assert_eq!(lamp_body(&[]), "");
    }
}
