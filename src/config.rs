//! Client configuration.
//!
//! Defaults match the backend a local development setup runs; environment
//! variables and CLI flags override them.

use std::path::PathBuf;
use std::time::Duration;

/// Default backend address.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Delay between a successful registration and the redirect to login.
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_millis(1000);

/// Environment variable overriding the backend address.
pub const API_URL_ENV: &str = "MURMUR_API_URL";

/// Environment variable overriding the session storage directory.
pub const HOME_ENV: &str = "MURMUR_HOME";

/// Configuration for the client.
///
/// # Example
///
/// ```ignore
/// use murmur::config::ClientConfig;
///
/// let config = ClientConfig::from_env()
///     .with_base_url("http://staging:3000")
///     .with_redirect_delay(Duration::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Backend base URL, without a trailing slash
    pub base_url: String,
    /// Session storage directory (`None` means `~/.murmur`)
    pub storage_dir: Option<PathBuf>,
    /// Delay before navigating to login after registering
    pub redirect_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            storage_dir: None,
            redirect_delay: DEFAULT_REDIRECT_DELAY,
        }
    }
}

impl ClientConfig {
    /// Create a new ClientConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend base URL. A trailing slash is dropped.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the session storage directory.
    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = Some(dir.into());
        self
    }

    /// Set the post-registration redirect delay.
    pub fn with_redirect_delay(mut self, delay: Duration) -> Self {
        self.redirect_delay = delay;
        self
    }

    /// Create config from `MURMUR_API_URL` and `MURMUR_HOME`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config = config.with_base_url(url);
        }
        if let Some(dir) = lookup(HOME_ENV).filter(|v| !v.trim().is_empty()) {
            config = config.with_storage_dir(dir);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.storage_dir, None);
        assert_eq!(config.redirect_delay, Duration::from_millis(1000));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let config = ClientConfig::new().with_base_url("http://api.example.com/");
        assert_eq!(config.base_url, "http://api.example.com");
    }

    #[test]
    fn test_from_lookup() {
        let env: HashMap<&str, &str> = [
            (API_URL_ENV, "http://staging:3000"),
            (HOME_ENV, "/tmp/murmur"),
        ]
        .into_iter()
        .collect();

        let config = ClientConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.base_url, "http://staging:3000");
        assert_eq!(config.storage_dir, Some(PathBuf::from("/tmp/murmur")));
    }

    #[test]
    fn test_from_lookup_ignores_blank_values() {
        let config = ClientConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config, ClientConfig::default());
    }
}
