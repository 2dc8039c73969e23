//! Client configuration for the Veridoc API.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::transport::Transport;

/// Hosted API endpoint used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.veridoc.ai";

/// Default timeout for API requests: 30 seconds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for Veridoc API calls.
///
/// Holds the caller's credentials, the service base URL and the HTTP
/// transport. Immutable once constructed; cloning is cheap and clones share
/// the same transport, so one `Config` can serve any number of concurrent
/// calls.
///
/// # Examples
///
/// ```ignore
/// use veridoc_core::Config;
///
/// let config = Config::new("username", "password", "api-key")
///     .with_base_url("https://api.veridoc.dev");
/// ```
#[derive(Clone)]
pub struct Config {
    username: String,
    password: String,
    api_key: String,
    base_url: String,
    timeout: Duration,
    transport: Arc<dyn Transport>,
}

impl Config {
    /// Creates a configuration with the given credentials and defaults for
    /// everything else.
    ///
    /// The default transport is a plain [`reqwest::Client`]; the base URL
    /// points at the hosted API.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            transport: Arc::new(reqwest::Client::new()),
        }
    }

    /// Overrides the service base URL.
    ///
    /// The value is kept verbatim; a URL that cannot be used to build a
    /// request surfaces as [`crate::ErrorKind::InvalidUrl`] at call time.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the default request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replaces the HTTP transport.
    ///
    /// Tests use this to substitute failing or canned transports.
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Arc::new(transport);
        self
    }

    /// Basic-auth username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Basic-auth password.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// API key sent with every call.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Configured service base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Default timeout applied to calls without an explicit override.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The transport calls are sent through.
    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    /// Joins an endpoint path onto the configured base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("username", &self.username)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config_defaults() {
        let config = Config::new("username", "password", "api-key");
        assert_eq!(config.username(), "username");
        assert_eq!(config.password(), "password");
        assert_eq!(config.api_key(), "api-key");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_fluent_overrides() {
        let config = Config::new("username", "password", "api-key")
            .with_base_url("http://localhost:8080/")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.base_url(), "http://localhost:8080/");
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_endpoint_join() {
        let config =
            Config::new("username", "password", "api-key").with_base_url("http://localhost:8080/");

        assert_eq!(
            config.endpoint("/ocr/v1/identity-card"),
            "http://localhost:8080/ocr/v1/identity-card"
        );
        assert_eq!(
            config.endpoint("ocr/v1/passport"),
            "http://localhost:8080/ocr/v1/passport"
        );
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let config = Config::new("username", "secret-password", "secret-key");
        let debug = format!("{config:?}");

        assert!(debug.contains("username"));
        assert!(!debug.contains("secret-password"));
        assert!(!debug.contains("secret-key"));
    }
}
