//! Configuration for Products API

use axum_helpers::ApiKeyConfig;
use core_config::{app_info, server::ServerConfig, AppInfo, FromEnv};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub api_key: ApiKeyConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let api_key = ApiKeyConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            api_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_requires_api_key() {
        temp_env::with_vars(
            [("APP_ENV", None::<&str>), ("API_KEY", None), ("PORT", None)],
            || {
                assert!(Config::from_env().is_err());
            },
        );
    }

    #[test]
    fn test_development_defaults() {
        temp_env::with_vars(
            [
                ("APP_ENV", Some("development")),
                ("API_KEY", None),
                ("PORT", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.environment, Environment::Development);
                assert_eq!(config.server.port, 3000);
                assert!(config.api_key.matches(b"dev-api-key"));
                assert_eq!(config.app.name, "products_api");
            },
        );
    }

    #[test]
    fn test_explicit_values() {
        temp_env::with_vars(
            [
                ("APP_ENV", Some("production")),
                ("API_KEY", Some("s3cret")),
                ("PORT", Some("8081")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.environment.is_production());
                assert_eq!(config.server.port, 8081);
                assert!(config.api_key.matches(b"s3cret"));
            },
        );
    }
}
