//! Configuration management via environment variables
//!
//! Every setting has a `HEALTHGATE_` prefixed name. The unprefixed names used by
//! older deployments (`SERVER_BASE_PATH`, `DATABASE_URL`, ...) are still accepted
//! with a deprecation warning.

use crate::common::error::ConfigError;
use crate::health::CHECK_TIMEOUT_SECS;
use std::time::Duration;

/// Get an environment variable with fallback to a deprecated name
///
/// Empty values are treated as unset, so `DATABASE_URL=` disables the
/// dependency instead of producing a misconfigured handle.
///
/// # Example
/// ```
/// use healthgate::config::get_env_with_fallback;
///
/// let base_path = get_env_with_fallback("HEALTHGATE_BASE_PATH", "SERVER_BASE_PATH");
/// ```
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    let read = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

    if let Some(val) = read(new_name) {
        return Some(val);
    }
    if let Some(val) = read(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// Same as [`get_env_with_fallback`], returning `default` when neither is set
pub fn get_env_with_fallback_or(new_name: &str, old_name: &str, default: &str) -> String {
    get_env_with_fallback(new_name, old_name).unwrap_or_else(|| default.to_string())
}

/// Same as [`get_env_with_fallback`], parsed into `T`
///
/// Unparseable values fall back to `default` with a warning.
pub fn get_env_with_fallback_parse<T: std::str::FromStr>(
    new_name: &str,
    old_name: &str,
    default: T,
) -> T {
    match get_env_with_fallback(new_name, old_name) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(value = %raw, "Ignoring invalid value for '{}'", new_name);
            default
        }),
        None => default,
    }
}

/// Path prefix under which the probes are also exposed (ingress routing)
///
/// Normalised to a leading `/` without a trailing `/`. An empty prefix or `/`
/// means the probes are served at the root only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasePath(Option<String>);

impl BasePath {
    /// No prefix
    pub fn root() -> Self {
        Self(None)
    }

    /// Parse and normalise a base path
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Ok(Self(None));
        }

        let path = if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{}", trimmed)
        };

        let invalid_char = path
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '?' | '#' | ':' | '*' | '{' | '}'));
        if invalid_char || path.contains("//") {
            return Err(ConfigError::InvalidBasePath(raw.to_string()));
        }

        Ok(Self(Some(path)))
    }

    /// The normalised prefix, if any
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl std::str::FromStr for BasePath {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Optional ingress prefix
    pub base_path: BasePath,
}

impl ServerConfig {
    /// Load server settings from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = get_env_with_fallback_or("HEALTHGATE_HOST", "HOST", "0.0.0.0");
        let port = get_env_with_fallback_parse("HEALTHGATE_PORT", "PORT", 8080u16);
        let base_path = match get_env_with_fallback("HEALTHGATE_BASE_PATH", "SERVER_BASE_PATH") {
            Some(raw) => BasePath::parse(&raw)?,
            None => BasePath::root(),
        };

        Ok(Self {
            host,
            port,
            base_path,
        })
    }

    /// `host:port` for binding
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Downstream dependency settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyConfig {
    /// Datastore URL (`sqlite:` or `postgres://`); `None` when not configured
    pub database_url: Option<String>,
    /// Cache URL (`redis://`); `None` when not configured
    pub redis_url: Option<String>,
    /// Time budget for a single readiness check
    pub check_timeout: Duration,
}

impl Default for DependencyConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            redis_url: None,
            check_timeout: Duration::from_secs(CHECK_TIMEOUT_SECS),
        }
    }
}

impl DependencyConfig {
    /// Load dependency settings from environment variables.
    pub fn from_env() -> Self {
        let timeout_secs = get_env_with_fallback_parse(
            "HEALTHGATE_CHECK_TIMEOUT_SECS",
            "CHECK_TIMEOUT_SECS",
            CHECK_TIMEOUT_SECS,
        );

        Self {
            database_url: get_env_with_fallback("HEALTHGATE_DATABASE_URL", "DATABASE_URL"),
            redis_url: get_env_with_fallback("HEALTHGATE_REDIS_URL", "REDIS_URL"),
            check_timeout: Duration::from_secs(timeout_secs.max(1)),
        }
    }
}
