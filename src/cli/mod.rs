//! CLI module for Annotation Hub
//!
//! Subcommands:
//! - `serve`: run the dataset API server
//! - `datasets`: manage datasets on a running server

pub mod datasets;
pub mod serve;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::AppConfig;

/// Annotation Hub - dataset management for annotation projects
#[derive(Parser)]
#[command(name = "annotation-hub")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,

    /// Manage datasets through the HTTP API
    Datasets(datasets::DatasetsArgs),
}

/// Load `.env` and the layered configuration
///
/// A broken configuration stops the command instead of starting with the
/// built-in defaults.
pub(crate) fn load_config() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();
    AppConfig::load().context("Failed to load configuration from config/ and APP__* variables")
}
