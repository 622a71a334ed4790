//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, LogFormat, LoggingConfig, ServerConfig, UserConfig, DEFAULT_API_KEY,
    DEFAULT_USERNAME,
};
