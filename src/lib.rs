//! Review Lamp Relay.
//!
//! Relays a user's pending GitHub review requests into an ordered list of
//! color codes for a physical code review lamp. One endpoint, one outbound
//! GitHub search query per call, no state between calls.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::{ColorMap, RelayConfig, FALLBACK_COLOR};
pub use error::AppError;
pub use services::github_client::{GitHubClient, GitHubClientConfig};
pub use services::relay::ReviewRelay;
pub use services::server::{router, serve, RelayState};
