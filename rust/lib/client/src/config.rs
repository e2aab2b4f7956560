//! Client configuration: backend origin, timeout and redirect targets.

use std::time::Duration;

/// Production backend origin used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str =
    "https://mecanautbk-fffeemd3bqdwebce.centralus-01.azurewebsites.net/api/v1";

/// Fixed request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Sign-in screen the client redirects to after a 401.
pub const DEFAULT_SIGN_IN_PATH: &str = "/authentication/sign-in";

/// Where route guards send anonymous visitors.
pub const DEFAULT_GUEST_PATH: &str = "/login";

/// Where route guards send authenticated visitors away from the login screen.
pub const DEFAULT_HOME_PATH: &str = "/";

/// Configuration shared by every [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend origin including the `/api/v1` prefix, without trailing `/`.
    pub base_url: String,

    /// Timeout applied to every request.
    pub timeout: Duration,

    /// Redirect target on 401.
    pub sign_in_path: String,

    /// Redirect target for guarded routes when anonymous.
    pub guest_path: String,

    /// Redirect target for guest-only routes when authenticated.
    pub home_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            sign_in_path: DEFAULT_SIGN_IN_PATH.to_string(),
            guest_path: DEFAULT_GUEST_PATH.to_string(),
            home_path: DEFAULT_HOME_PATH.to_string(),
        }
    }
}

impl ApiConfig {
    /// Config for the given origin. An empty origin falls back to
    /// [`DEFAULT_BASE_URL`].
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let base_url = if base_url.trim().is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            base_url.trim().trim_end_matches('/').to_string()
        };
        Self {
            base_url,
            ..Default::default()
        }
    }

    /// Override the 401 redirect target.
    pub fn with_sign_in_path(mut self, path: impl Into<String>) -> Self {
        self.sign_in_path = path.into();
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a config from environment variables.
    ///
    /// Supported variables:
    /// - `MECANAUT_API_URL`
    /// - `MECANAUT_TIMEOUT_SECS`
    /// - `MECANAUT_SIGN_IN_PATH`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new(lookup("MECANAUT_API_URL").unwrap_or_default());
        if let Some(secs) = lookup("MECANAUT_TIMEOUT_SECS").and_then(|v| v.parse::<u64>().ok()) {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if let Some(path) = lookup("MECANAUT_SIGN_IN_PATH").filter(|p| !p.is_empty()) {
            config = config.with_sign_in_path(path);
        }
        config
    }

    /// Absolute URL for an endpoint. A missing leading `/` is added.
    pub fn url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_base_url_falls_back_to_default() {
        let config = ApiConfig::new("");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.sign_in_path, "/authentication/sign-in");
    }

    #[test]
    fn url_joins_with_and_without_slash() {
        let config = ApiConfig::new("http://localhost:5128/api/v1/");
        assert_eq!(config.url("/plants"), "http://localhost:5128/api/v1/plants");
        assert_eq!(config.url("machines/3"), "http://localhost:5128/api/v1/machines/3");
    }

    #[test]
    fn lookup_overrides() {
        let config = ApiConfig::from_lookup(|key| match key {
            "MECANAUT_API_URL" => Some("http://127.0.0.1:9000/api/v1".into()),
            "MECANAUT_TIMEOUT_SECS" => Some("5".into()),
            "MECANAUT_SIGN_IN_PATH" => Some("/login".into()),
            _ => None,
        });
        assert_eq!(config.base_url, "http://127.0.0.1:9000/api/v1");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.sign_in_path, "/login");
    }

    #[test]
    fn builders_override_defaults() {
        let config = ApiConfig::new("http://localhost:5128/api/v1")
            .with_timeout(Duration::from_millis(250))
            .with_sign_in_path("/login");
        assert_eq!(config.timeout, Duration::from_millis(250));
        assert_eq!(config.sign_in_path, "/login");
        assert_eq!(config.guest_path, DEFAULT_GUEST_PATH);
    }

    #[test]
    fn bad_timeout_is_ignored() {
        let config = ApiConfig::from_lookup(|key| match key {
            "MECANAUT_TIMEOUT_SECS" => Some("soon".into()),
            _ => None,
        });
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }
}
