//! Data models for the relay.
//!
//! These are transient DTOs for the GitHub search response; nothing here
//! outlives a single request/response cycle.

pub mod review_request;

// Re-exports for convenient access
pub use review_request::{RequestingUser, ReviewRequest, SearchResponse};
