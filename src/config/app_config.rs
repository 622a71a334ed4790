//! Layered application configuration

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};
use serde::Deserialize;

use crate::domain::user::UserRole;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    /// Users allowed to call the dataset API
    pub users: Vec<UserConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// A user entry of the static user table
#[derive(Debug, Clone, Deserialize)]
pub struct UserConfig {
    pub username: String,
    #[serde(default)]
    pub role: UserRole,
    pub api_key: String,
}

impl UserConfig {
    pub fn new(username: impl Into<String>, role: UserRole, api_key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            role,
            api_key: api_key.into(),
        }
    }
}

pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_API_KEY: &str = "admin.apikey";

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            users: vec![UserConfig::new(
                DEFAULT_USERNAME,
                UserRole::Admin,
                DEFAULT_API_KEY,
            )],
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 6900,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Layered load: `config/default`, `config/local`, then `APP__*` variables
    ///
    /// Any unreadable or mistyped layer is an error; there is no fallback to
    /// the built-in user table.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(Self::layered_builder())
    }

    fn layered_builder() -> ConfigBuilder<DefaultState> {
        config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }
}
