use clap::Parser;
use annotation_hub::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run().await,
        Command::Datasets(args) => cli::datasets::run(args).await,
    }
}
