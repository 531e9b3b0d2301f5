//! API key configuration.
//!
//! Implements `FromEnv` from `core_config`, same as `ServerConfig`.

use core_config::{ConfigError, Environment, FromEnv, env_required};
use std::sync::Arc;
use subtle::ConstantTimeEq;

/// Key used when `API_KEY` is unset in development mode.
pub const DEVELOPMENT_API_KEY: &str = "dev-api-key";

/// Shared secret expected in the `x-api-key` header of mutating requests.
///
/// Loaded from environment variables:
/// - `API_KEY`: required in production; falls back to
///   [`DEVELOPMENT_API_KEY`] when `APP_ENV=development`
///
/// # Example
///
/// ```
/// use axum_helpers::ApiKeyConfig;
///
/// let config = ApiKeyConfig::new("s3cret");
/// assert!(config.matches(b"s3cret"));
/// assert!(!config.matches(b"guess"));
/// ```
#[derive(Clone)]
pub struct ApiKeyConfig {
    key: Arc<str>,
}

impl ApiKeyConfig {
    pub fn new(key: impl AsRef<str>) -> Self {
        Self {
            key: Arc::from(key.as_ref()),
        }
    }

    /// Constant-time comparison against the configured key.
    pub fn matches(&self, candidate: &[u8]) -> bool {
        candidate.ct_eq(self.key.as_bytes()).into()
    }
}

impl std::fmt::Debug for ApiKeyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyConfig")
            .field("key", &"<redacted>")
            .finish()
    }
}

impl FromEnv for ApiKeyConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let key = match env_required("API_KEY") {
            Ok(key) => key,
            Err(_) if Environment::from_env().is_development() => {
                tracing::warn!("API_KEY not set, using the development default key");
                DEVELOPMENT_API_KEY.to_string()
            }
            Err(e) => return Err(e),
        };

        if key.trim().is_empty() {
            return Err(ConfigError::ParseError {
                key: "API_KEY".to_string(),
                details: "must not be empty".to_string(),
            });
        }

        Ok(Self::new(key))
    }
}
