//! Process configuration: the identity-to-color map and server settings.
//!
//! Everything here is read once at startup. The color map is immutable for
//! the lifetime of the process, so handlers can share it without locking.

use crate::error::AppError;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::Path;

/// Color rendered for any requester not present in the map.
pub const FALLBACK_COLOR: &str = "white";

/// Environment variable naming the listen address.
const ADDR_VAR: &str = "REVIEW_LAMP_ADDR";

/// Environment variable naming the color-map JSON file.
const COLORS_VAR: &str = "REVIEW_LAMP_COLORS";

/// Environment variable overriding the outbound timeout (seconds).
const TIMEOUT_VAR: &str = "REVIEW_LAMP_TIMEOUT_SECS";

/// Default listen address.
const DEFAULT_ADDR: &str = "0.0.0.0:8080";

/// Default outbound request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Immutable mapping from GitHub username to a lamp color.
///
/// Usernames not present in the map resolve to [`FALLBACK_COLOR`].
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    entries: HashMap<String, String>,
}

impl ColorMap {
    /// Build a map from explicit entries.
    pub fn from_entries(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Load the map from a JSON object file (`{"username": "color", ...}`).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::internal(format!(
                "Failed to read color map {}: {}",
                path.display(),
                e
            ))
        })?;
        let entries: HashMap<String, String> = serde_json::from_str(&raw).map_err(|e| {
            AppError::internal(format!(
                "Color map {} is not a JSON object of strings: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Self { entries })
    }

    /// Resolve the color for a requester username.
    pub fn color_for(&self, username: &str) -> &str {
        self.entries
            .get(username)
            .map(String::as_str)
            .unwrap_or(FALLBACK_COLOR)
    }

    /// Number of configured usernames.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no usernames are configured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Operational settings for the relay process.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Address the HTTP server binds to.
    pub listen_addr: SocketAddr,

    /// Identity-to-color mapping, loaded from `REVIEW_LAMP_COLORS` if set.
    pub colors: ColorMap,

    /// Timeout for the outbound GitHub call, in seconds.
    pub timeout_secs: u64,
}

impl RelayConfig {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let addr_raw = std::env::var(ADDR_VAR).unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        let listen_addr: SocketAddr = addr_raw.parse().map_err(|e| {
            AppError::internal(format!("{} is not a valid socket address: {}", ADDR_VAR, e))
        })?;

        let colors = match std::env::var(COLORS_VAR) {
            Ok(path) => ColorMap::from_file(&path)?,
            Err(_) => {
                log::warn!(
                    "{} not set; every review request will render as {}",
                    COLORS_VAR,
                    FALLBACK_COLOR
                );
                ColorMap::default()
            }
        };

        let timeout_secs = match std::env::var(TIMEOUT_VAR) {
            Ok(raw) => raw.parse::<u64>().map_err(|e| {
                AppError::internal(format!("{} is not a valid number: {}", TIMEOUT_VAR, e))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            listen_addr,
            colors,
            timeout_secs,
        })
    }
}
