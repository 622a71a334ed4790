//! Datasets command - manages datasets on a running server

use std::time::Duration;

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::client::{Client, ClientConfig};
use crate::config::DEFAULT_API_KEY;
use crate::domain::dataset::{Settings, TaskType};
use crate::infrastructure::logging;

/// Arguments for the datasets command
#[derive(Args, Clone)]
pub struct DatasetsArgs {
    /// Base URL of the API server
    #[arg(long, env = "ANNOTATION_HUB_API_URL", default_value = "http://localhost:6900")]
    pub api_url: String,

    /// API key to authenticate with
    #[arg(long, env = "ANNOTATION_HUB_API_KEY", default_value = DEFAULT_API_KEY, hide_env_values = true)]
    pub api_key: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    #[command(subcommand)]
    pub action: DatasetsAction,
}

#[derive(Subcommand, Clone)]
pub enum DatasetsAction {
    /// Show the user behind the API key
    Whoami,

    /// List all datasets
    List,

    /// Show one dataset
    Get { name: String },

    /// Create an empty dataset for a task
    Create {
        name: String,
        /// text-classification or token-classification
        #[arg(long)]
        task: TaskType,
    },

    /// Create the dataset if needed and set its label schema
    Configure {
        name: String,
        #[arg(long)]
        task: TaskType,
        /// Labels, repeated or comma separated
        #[arg(long = "label", required = true, value_delimiter = ',')]
        labels: Vec<String>,
    },

    /// Print the stored settings of a dataset
    Settings { name: String },

    /// Delete a dataset
    Delete { name: String },
}

/// Run a datasets subcommand against the configured server
pub async fn run(args: DatasetsArgs) -> anyhow::Result<()> {
    let config = super::load_config()?;
    logging::init_logging(&(&config.logging).into())?;

    let client = Client::new(
        ClientConfig::new(&args.api_url, &args.api_key)
            .with_timeout(Duration::from_secs(args.timeout)),
    )?;

    match args.action {
        DatasetsAction::Whoami => print_json(&client.whoami().await?),
        DatasetsAction::List => print_json(&client.list_datasets().await?),
        DatasetsAction::Get { name } => match client.get_dataset(&name).await? {
            Some(dataset) => print_json(&dataset),
            None => anyhow::bail!("Dataset '{}' not found", name),
        },
        DatasetsAction::Create { name, task } => {
            print_json(&client.create_dataset(&name, task).await?)
        }
        DatasetsAction::Configure { name, task, labels } => {
            let settings = Settings::for_task(task, labels)?;
            print_json(&client.configure_dataset(&name, settings).await?)
        }
        DatasetsAction::Settings { name } => print_json(&client.load_settings(&name).await?),
        DatasetsAction::Delete { name } => {
            if client.delete(&name).await? {
                println!("Deleted dataset '{}'", name);
            } else {
                println!("Dataset '{}' did not exist", name);
            }
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};
    use clap::Parser;

    #[test]
    fn test_parse_configure() {
        let cli = Cli::try_parse_from([
            "annotation-hub",
            "datasets",
            "--api-key",
            "alice.apikey",
            "configure",
            "news",
            "--task",
            "text-classification",
            "--label",
            "sports,politics",
            "--label",
            "tech",
        ])
        .unwrap();

        let Command::Datasets(args) = cli.command else {
            panic!("expected datasets command");
        };
        assert_eq!(args.api_key, "alice.apikey");

        match args.action {
            DatasetsAction::Configure { name, task, labels } => {
                assert_eq!(name, "news");
                assert_eq!(task, TaskType::TextClassification);
                assert_eq!(labels, vec!["sports", "politics", "tech"]);
            }
            _ => panic!("expected configure"),
        }
    }

    #[test]
    fn test_configure_requires_labels() {
        let result = Cli::try_parse_from([
            "annotation-hub",
            "datasets",
            "configure",
            "news",
            "--task",
            "token-classification",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_task_rejected() {
        let result = Cli::try_parse_from([
            "annotation-hub",
            "datasets",
            "create",
            "news",
            "--task",
            "summarization",
        ]);

        assert!(result.is_err());
    }
}
