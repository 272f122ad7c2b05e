//! Popcoin CLI - command-line access to the Popcoin credits API.
//!
//! Every command prints the API response as JSON on stdout. Logs go to stderr
//! and are controlled with `RUST_LOG`.

mod cli;
mod config;
mod error;

use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use popcoin_client::PopcoinClient;

use crate::cli::{Cli, Commands};
use crate::config::CliConfig;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,popcoin=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = CliConfig::from_env().with_overrides(cli.token, cli.base_url);
    tracing::debug!(base_url = %config.base_url, "Configuration loaded");

    let client = PopcoinClient::with_options(config.token()?, config.client_options())?;

    match cli.command {
        Commands::Ping => print_json(&client.ping().await?),
        Commands::Identify { user, email } => print_json(&client.identify(&user, &email).await?),
        Commands::User { user } => print_json(&client.get_user(&user).await?),
        Commands::Spend {
            user,
            amount,
            description,
        } => print_json(&client.spend(&user, amount, &description).await?),
        Commands::Spends { user, from, to } => {
            if from > to {
                return Err(CliError::Configuration(format!(
                    "--from {from} is after --to {to}"
                )));
            }
            print_json(&client.list_spends(&user, from, to).await?)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
