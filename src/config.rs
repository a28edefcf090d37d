//! Client configuration loaded from environment with development fallbacks.

use std::path::PathBuf;

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "WARDSHIFT_API_BASE";
/// Environment variable overriding the persisted-storage directory.
pub const DATA_DIR_ENV: &str = "WARDSHIFT_DATA_DIR";

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_DATA_DIR: &str = ".wardshift";

/// Where the API lives and where client state is persisted.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub data_dir: PathBuf,
}

impl ClientConfig {
    /// Load from `WARDSHIFT_API_BASE` / `WARDSHIFT_DATA_DIR`, falling back
    /// to the local development defaults when unset.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        let data_dir = std::env::var(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));
        Self { base_url, data_dir }
    }

    /// Absolute URL for an API path. Trailing slashes on the base are
    /// trimmed so joins never double up.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
