//! Configuration management

use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use serde::Deserialize;

use crate::constants::{
    DEFAULT_ACCESS_TOKEN_EXPIRY, DEFAULT_ACQUIRE_TIMEOUT_SECONDS, DEFAULT_ALLOWED_ORIGIN,
    DEFAULT_MAX_CONNECTIONS, DEFAULT_PORT,
};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub cors: CorsSettings,
    pub jwt: JwtSettings,
    pub auth: AuthSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub backend: StoreBackend,
    pub url: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout_seconds: u64,
    pub run_migrations: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsSettings {
    pub allowed_origin: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtSettings {
    pub secret: String,
    pub access_token_expiry: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthSettings {
    /// Require `Authorization: Bearer` on the product routes.
    pub require_token: bool,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub level: String,
    pub format: LogFormat,
    pub directory: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::with_defaults()?
            .set_override("app.env", env.clone())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            // Example: APP_DATABASE__URL=postgres://...
            .add_source(Environment::with_prefix("APP").separator("__").try_parsing(true))
            .build()?;

        let config: AppConfig = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Builder pre-loaded with every default, without touching files or the environment.
    pub fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", i64::from(DEFAULT_PORT))?
            .set_default("app.name", "invex-server")?
            .set_default("database.backend", "postgres")?
            .set_default("database.max_connections", i64::from(DEFAULT_MAX_CONNECTIONS))?
            .set_default("database.acquire_timeout_seconds", DEFAULT_ACQUIRE_TIMEOUT_SECONDS as i64)?
            .set_default("database.run_migrations", true)?
            .set_default("cors.allowed_origin", DEFAULT_ALLOWED_ORIGIN)?
            .set_default("jwt.access_token_expiry", DEFAULT_ACCESS_TOKEN_EXPIRY)?
            .set_default("auth.require_token", false)?
            .set_default("log.level", "info,invex=debug")?
            .set_default("log.format", "pretty")
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.backend == StoreBackend::Postgres
            && self.database.url.as_deref().map_or(true, |url| url.trim().is_empty())
        {
            return Err(ConfigError::Message(
                "database.url is required when database.backend = \"postgres\"".into(),
            ));
        }

        if self.jwt.secret.trim().is_empty() {
            return Err(ConfigError::Message("jwt.secret must not be empty".into()));
        }

        if self.jwt.access_token_expiry <= 0 {
            return Err(ConfigError::Message(
                "jwt.access_token_expiry must be a positive number of seconds".into(),
            ));
        }

        Ok(())
    }
}
