//! CLI configuration.

use serde::Deserialize;
use std::path::Path;

use popcoin_client::{ClientOptions, DEFAULT_BASE_URL};

use crate::error::CliError;

/// Paths searched for a secrets file, in order.
const SECRET_PATHS: [&str; 2] = [".secrets/popcoin.json", "../.secrets/popcoin.json"];

/// Resolved CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// API token.
    pub token: Option<String>,

    /// API root (default: production).
    pub base_url: String,

    /// Request timeout in seconds, if one was configured.
    pub timeout_seconds: Option<u64>,
}

/// Popcoin secrets file structure.
#[derive(Debug, Deserialize)]
struct PopcoinSecrets {
    token: String,
    #[serde(default)]
    base_url: Option<String>,
}

impl CliConfig {
    /// Load configuration from a secrets file, falling back to environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let paths: Vec<&Path> = SECRET_PATHS.iter().map(Path::new).collect();
        Self::load(&paths, |key| std::env::var(key).ok())
    }

    /// Load configuration from the given secrets paths and variable lookup.
    fn load(secret_paths: &[&Path], var: impl Fn(&str) -> Option<String>) -> Self {
        let (token, base_url) = load_popcoin_secrets(secret_paths, &var);

        Self {
            token,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            timeout_seconds: var("POPCOIN_TIMEOUT_SECONDS").and_then(|s| s.parse().ok()),
        }
    }

    /// Apply command-line overrides.
    #[must_use]
    pub fn with_overrides(mut self, token: Option<String>, base_url: Option<String>) -> Self {
        if token.is_some() {
            self.token = token;
        }
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        self
    }

    /// The token, or an error telling the user where to put one.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::MissingToken`] if no token was configured.
    pub fn token(&self) -> Result<&str, CliError> {
        match self.token.as_deref() {
            Some(token) if !token.trim().is_empty() => Ok(token),
            _ => Err(CliError::MissingToken),
        }
    }

    /// Client options matching this configuration.
    #[must_use]
    pub fn client_options(&self) -> ClientOptions {
        let options = ClientOptions::with_base_url(self.base_url.clone());
        match self.timeout_seconds {
            Some(seconds) => options.timeout_seconds(seconds),
            None => options,
        }
    }
}

/// Load token and base URL from a secrets file or the environment.
fn load_popcoin_secrets(
    secret_paths: &[&Path],
    var: &impl Fn(&str) -> Option<String>,
) -> (Option<String>, Option<String>) {
    for path in secret_paths {
        match load_secrets_file::<PopcoinSecrets>(path) {
            Ok(secrets) => {
                tracing::info!(path = %path.display(), "Loaded Popcoin secrets from file");
                let base_url = secrets.base_url.or_else(|| var("POPCOIN_BASE_URL"));
                return (Some(secrets.token), base_url);
            }
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable secrets file");
            }
            Err(_) => {}
        }
    }

    tracing::debug!("Popcoin secrets file not found, using environment variables");
    (var("POPCOIN_TOKEN"), var("POPCOIN_BASE_URL"))
}

/// Load secrets from a JSON file.
fn load_secrets_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, std::io::Error> {
    if !path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Secrets file not found",
        ));
    }
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}
