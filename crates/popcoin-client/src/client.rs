//! Popcoin HTTP client implementation.

use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::amount::Amount;
use crate::error::ClientError;
use crate::types::{
    Envelope, IdentifyRequest, IdentifyResponse, ListSpendsResponse, PingResponse, SpendRequest,
    SpendResponse, UserResponse, STATUS_ERROR, STATUS_OK,
};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://popcoin.ws/api";

/// Date format used for spend range queries.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Popcoin API client.
///
/// The client is a thin wrapper over the token: headers are fixed at
/// construction and nothing is mutated afterwards, so one instance can be
/// cloned and shared across tasks for the lifetime of an app.
#[derive(Debug, Clone)]
pub struct PopcoinClient {
    client: Client,
    base_url: String,
}

impl PopcoinClient {
    /// Create a client for the production API.
    ///
    /// The token can be found in the Popcoin dashboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not a valid header value or the HTTP
    /// client cannot be built.
    pub fn new(token: &str) -> Result<Self, ClientError> {
        Self::with_options(token, ClientOptions::default())
    }

    /// Create a client with custom options.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not a valid header value or the HTTP
    /// client cannot be built.
    pub fn with_options(token: &str, options: ClientOptions) -> Result<Self, ClientError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| ClientError::Configuration("token is not a valid header value".into()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, auth);

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(options.user_agent);
        if let Some(seconds) = options.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: options.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Return basic details about the account owning the token.
    ///
    /// Useful to check that a token is valid.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    #[instrument(skip(self))]
    pub async fn ping(&self) -> Result<PingResponse, ClientError> {
        self.execute(self.client.get(self.url("/ping"))).await
    }

    /// Create or update a user with an email address.
    ///
    /// The user id is chosen by the caller. Repeating the call with the same
    /// id updates the existing user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    #[instrument(skip(self, email))]
    pub async fn identify(&self, user: &str, email: &str) -> Result<IdentifyResponse, ClientError> {
        let body = IdentifyRequest { user, email };
        self.execute(self.client.post(self.url("/identify")).json(&body))
            .await
    }

    /// Retrieve a user's email, balances and wallet link.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    #[instrument(skip(self))]
    pub async fn get_user(&self, user: &str) -> Result<UserResponse, ClientError> {
        let request = self
            .client
            .get(self.url("/identify"))
            .query(&[("user", user)]);
        self.execute(request).await
    }

    /// Consume credits from a user account and return the new balances.
    ///
    /// See [`Amount`] for how `amount` is encoded.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidAmount`] without sending anything if
    /// `amount` is not finite, otherwise an error if the request fails or the
    /// API rejects it.
    #[instrument(skip(self, description))]
    pub async fn spend(
        &self,
        user: &str,
        amount: f64,
        description: &str,
    ) -> Result<SpendResponse, ClientError> {
        let body = SpendRequest {
            user,
            amount: Amount::new(amount)?,
            description,
        };
        // Serialize up front so the raw amount literal is exactly what is sent.
        let body = serde_json::to_vec(&body)?;
        self.execute(self.client.post(self.url("/spend")).body(body))
            .await
    }

    /// List a user's spends between two dates, both inclusive.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    #[instrument(skip(self))]
    pub async fn list_spends(
        &self,
        user: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<ListSpendsResponse, ClientError> {
        let gte = from.format(DATE_FORMAT).to_string();
        let lte = to.format(DATE_FORMAT).to_string();
        let request = self.client.get(self.url("/spend")).query(&[
            ("user", user),
            ("gte", gte.as_str()),
            ("lte", lte.as_str()),
        ]);
        self.execute(request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send a request and decode its envelope.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        debug!(url = %response.url(), status = %status, "Popcoin response received");

        let body = response.text().await?;
        decode_envelope(status, &body)
    }
}

/// Decode a response body: tag first, payload only on success.
fn decode_envelope<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, ClientError> {
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) if !status.is_success() => {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                body: body.to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    let envelope = Envelope::deserialize(&value)?;

    if envelope.status == STATUS_ERROR {
        let message = envelope.message_text();
        warn!(http_status = %status, message = %message, "Popcoin API returned an error");
        return Err(ClientError::Api {
            status: envelope.status,
            message,
        });
    }

    if !status.is_success() && envelope.status != STATUS_OK {
        return Err(ClientError::UnexpectedStatus {
            status: status.as_u16(),
            body: body.to_string(),
        });
    }

    Ok(serde_json::from_value(value)?)
}

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// API root (default: [`DEFAULT_BASE_URL`]).
    pub base_url: String,
    /// Request timeout in seconds. `None` leaves timeouts to the transport.
    pub timeout_seconds: Option<u64>,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
            user_agent: concat!("popcoin-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientOptions {
    /// Options pointing at a different API root, e.g. a staging server.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }
}
