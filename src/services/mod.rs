//! Service layer: GitHub client, relay logic, and the HTTP server.

pub mod github_client;
pub mod relay;
pub mod server;
