//! User service configuration.

use std::env;

use common::ServiceConfig;

/// Default service name used in logs
pub const DEFAULT_SERVICE_NAME: &str = "user-service";

/// User service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserServiceConfig {
    /// Shared service settings (name, log level)
    pub service: ServiceConfig,
    /// Initial users as a JSON array, loaded at bootstrap
    pub seed_users: Option<String>,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honoured if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            service: ServiceConfig {
                service_name: env::var("USER_SERVICE_NAME")
                    .unwrap_or_else(|_| DEFAULT_SERVICE_NAME.to_string()),
                log_level: env::var("USER_SERVICE_LOG_LEVEL")
                    .or_else(|_| env::var("LOG_LEVEL"))
                    .unwrap_or_else(|_| "info".to_string()),
            },
            seed_users: env::var("USER_SERVICE_SEED_USERS")
                .ok()
                .filter(|s| !s.trim().is_empty()),
        }
    }

    /// Configuration with the given seed data and default settings.
    pub fn with_seed(seed_users: impl Into<String>) -> Self {
        Self {
            seed_users: Some(seed_users.into()),
            ..Self::default()
        }
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::new(DEFAULT_SERVICE_NAME, "info"),
            seed_users: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UserServiceConfig::default();
        assert_eq!(config.service.service_name, "user-service");
        assert_eq!(config.service.log_level, "info");
        assert!(config.seed_users.is_none());
    }

    #[test]
    fn test_with_seed_keeps_defaults() {
        let config = UserServiceConfig::with_seed("[]");
        assert_eq!(config.seed_users.as_deref(), Some("[]"));
        assert_eq!(config.service, UserServiceConfig::default().service);
    }
}
