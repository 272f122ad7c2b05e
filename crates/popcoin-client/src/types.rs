//! Request and response types for the Popcoin client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::amount::Amount;

/// Envelope status returned on success.
pub const STATUS_OK: &str = "ok";

/// Envelope status returned when the API rejects a request.
pub const STATUS_ERROR: &str = "error";

/// Outer object shared by every response.
///
/// Only the tag fields are read here; the payload stays in the original JSON
/// value until the status is known.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct Envelope {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<serde_json::Value>,
}

impl Envelope {
    /// The message as text. Non-string messages are rendered as compact JSON.
    pub fn message_text(&self) -> String {
        match &self.message {
            None | Some(serde_json::Value::Null) => String::new(),
            Some(serde_json::Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// Identify request body.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct IdentifyRequest<'a> {
    pub user: &'a str,
    pub email: &'a str,
}

/// Spend request body. Field order is the wire order.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SpendRequest<'a> {
    pub user: &'a str,
    pub amount: Amount,
    pub description: &'a str,
}

/// Response to a ping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingResponse {
    /// Envelope status.
    pub status: String,
    /// Greeting from the API.
    #[serde(default)]
    pub message: String,
    /// Account owning the token.
    #[serde(default)]
    pub dev: Developer,
}

/// Developer account details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Developer {
    /// Referral code.
    #[serde(default)]
    pub referral: String,
    /// Account email.
    #[serde(default)]
    pub email: String,
    /// Account creation timestamp, as sent by the server.
    #[serde(default)]
    pub created_at: String,
}

/// Response to an identify call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifyResponse {
    /// Envelope status.
    pub status: String,
    /// Server message.
    #[serde(default)]
    pub message: String,
}

/// Response to a user lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    /// Envelope status.
    pub status: String,
    /// The user record.
    #[serde(default)]
    pub user: User,
}

/// A user known to the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Caller-defined user identifier.
    #[serde(default)]
    pub key: String,
    /// User email.
    #[serde(default)]
    pub email: String,
    /// Credit balances.
    #[serde(default)]
    pub balances: Balances,
    /// Link to the user's wallet page.
    #[serde(default)]
    pub link: String,
}

/// Credit balances as fixed-point decimal strings.
///
/// Kept as text so no precision is lost to floating point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balances {
    /// Credits available to spend.
    #[serde(default)]
    pub available: String,
    /// Current credits including pending ones.
    #[serde(default)]
    pub current: String,
}

/// Response to a spend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendResponse {
    /// Envelope status.
    pub status: String,
    /// Server message.
    #[serde(default)]
    pub message: String,
    /// Balances after the spend.
    #[serde(default)]
    pub balances: Balances,
}

/// Response to a spend listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListSpendsResponse {
    /// Envelope status.
    pub status: String,
    /// Spends in server order.
    #[serde(default)]
    pub spends: Vec<Spend>,
}

/// A single spend record.
///
/// Missing fields decode to empty values; a missing or null `spent_at` is `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Spend {
    /// Spend identifier.
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    /// Credits spent.
    #[serde(default)]
    pub amount: f64,
    /// Description given at spend time.
    #[serde(default)]
    pub description: String,
    /// When the spend happened.
    #[serde(default)]
    pub spent_at: Option<DateTime<Utc>>,
}
