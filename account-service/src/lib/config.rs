use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Longest token lifetime accepted from configuration (ten years).
pub const MAX_TOKEN_EXPIRATION_HOURS: i64 = 24 * 365 * 10;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Memory,
    Postgres,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// Connection URL, required for the postgres backend
    #[serde(default)]
    pub url: Option<String>,
    pub max_connections: u32,
}

#[derive(Deserialize, Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub hash_cost: u32,
    /// Unset means issued tokens carry no `exp` claim
    #[serde(default)]
    pub token_expiration_hours: Option<i64>,
}

impl AuthConfig {
    /// Lifetime of issued tokens, `None` when they do not expire.
    pub fn token_lifetime(&self) -> Result<Option<chrono::Duration>, ConfigError> {
        let Some(hours) = self.token_expiration_hours else {
            return Ok(None);
        };

        if !(1..=MAX_TOKEN_EXPIRATION_HOURS).contains(&hours) {
            return Err(ConfigError::Message(format!(
                "auth.token_expiration_hours must be between 1 and {}",
                MAX_TOKEN_EXPIRATION_HOURS
            )));
        }

        chrono::Duration::try_hours(hours)
            .map(Some)
            .ok_or_else(|| {
                ConfigError::Message("auth.token_expiration_hours is out of range".to_string())
            })
    }
}

// The signing secret stays out of logs and panic messages.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &"<redacted>")
            .field("hash_cost", &self.hash_cost)
            .field("token_expiration_hours", &self.token_expiration_hours)
            .finish()
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (AUTH__SECRET, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: STORE__URL=postgres://... overrides store.url
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Reject settings that would only fail later, on the first request.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.secret.is_empty() {
            return Err(ConfigError::Message(
                "auth.secret must not be empty".to_string(),
            ));
        }

        if self.auth.hash_cost == 0 {
            return Err(ConfigError::Message(
                "auth.hash_cost must be at least 1".to_string(),
            ));
        }

        self.auth.token_lifetime()?;

        if self.store.backend == StoreBackend::Postgres && self.store.url.is_none() {
            return Err(ConfigError::Message(
                "store.url is required for the postgres backend".to_string(),
            ));
        }

        Ok(())
    }
}
