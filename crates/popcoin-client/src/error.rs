//! Client error types.

/// Errors that can occur when using the Popcoin client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed (network, DNS, TLS, timeout).
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body was not valid JSON or did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Server answered with a non-success status and a body that is not an envelope.
    #[error("unexpected HTTP status {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The API rejected the request with an error envelope.
    #[error("API error: {message}")]
    Api {
        /// Envelope status, always `"error"`.
        status: String,
        /// Message returned by the server, verbatim.
        message: String,
    },

    /// Spend amount cannot be rendered as a JSON number.
    #[error("invalid amount: {0}")]
    InvalidAmount(f64),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Whether the request failed before a usable envelope was received.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Decode(_) | Self::UnexpectedStatus { .. }
        )
    }

    /// Whether the server explicitly rejected the request.
    #[must_use]
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// The server's message for API errors.
    #[must_use]
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_server_message() {
        let err = ClientError::Api {
            status: "error".to_string(),
            message: "Invalid token".to_string(),
        };
        assert_eq!(err.to_string(), "API error: Invalid token");
        assert_eq!(err.api_message(), Some("Invalid token"));
        assert!(err.is_api());
        assert!(!err.is_transport());
    }

    #[test]
    fn decode_error_is_transport() {
        let err: ClientError = serde_json::from_str::<serde_json::Value>("nope")
            .unwrap_err()
            .into();
        assert!(err.is_transport());
        assert_eq!(err.api_message(), None);
    }
}
