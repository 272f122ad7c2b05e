//! CLI error types.

use popcoin_client::ClientError;

/// Errors that can occur while running a CLI command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// No token in flags, secrets file or environment.
    #[error("no API token: pass --token, set POPCOIN_TOKEN or create .secrets/popcoin.json")]
    MissingToken,

    /// Configuration value could not be used.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The API call failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Response could not be printed.
    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}
