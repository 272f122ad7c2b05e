//! Popcoin Client SDK.
//!
//! This crate wraps the [Popcoin](https://popcoin.ws/) credits REST API: ping,
//! identify users, look them up, spend credits and list spends.
//!
//! # Example
//!
//! ```no_run
//! use popcoin_client::PopcoinClient;
//!
//! # async fn example() -> Result<(), popcoin_client::ClientError> {
//! let client = PopcoinClient::new("your-popcoin-token")?;
//!
//! client.identify("user-42", "user42@example.com").await?;
//!
//! let response = client.spend("user-42", 1.5, "premium article").await?;
//! println!("Available: {}", response.balances.available);
//! # Ok(())
//! # }
//! ```
//!
//! Every response is an envelope with a `status` field. An `"error"` status
//! is surfaced as [`ClientError::Api`] carrying the server's message, whatever
//! the HTTP status code was.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod amount;
mod client;
mod error;
mod types;

pub use amount::Amount;
pub use client::{ClientOptions, PopcoinClient, DEFAULT_BASE_URL};
pub use error::ClientError;
pub use types::{
    Balances, Developer, IdentifyResponse, ListSpendsResponse, PingResponse, Spend,
    SpendResponse, User, UserResponse, STATUS_ERROR, STATUS_OK,
};
