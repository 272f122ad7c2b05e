//! Wire encoding of spend amounts.
//!
//! The API has always received amounts rendered with four fractional digits
//! and then cut by one character, so `12.3456` goes out as `12.345` and
//! `9.99996` as `10.000`. This truncates the already-rounded text; it is not
//! rounding to three places. Servers and existing callers depend on the exact
//! bytes, so the quirk is kept as-is. The rendered text is written into the
//! request body as a JSON number literal, not a string.

use serde::{Serialize, Serializer};
use serde_json::value::RawValue;

use crate::error::ClientError;

/// A finite spend amount with the API's fixed-point rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amount(f64);

impl Amount {
    /// Wrap a raw amount.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidAmount`] for NaN or infinite values, which
    /// have no JSON number representation.
    pub fn new(value: f64) -> Result<Self, ClientError> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(ClientError::InvalidAmount(value))
        }
    }

    /// The raw value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Render the amount exactly as it appears on the wire.
    #[must_use]
    pub fn render(self) -> String {
        let mut text = format!("{:.4}", self.0);
        text.pop();
        text
    }
}

impl TryFrom<f64> for Amount {
    type Error = ClientError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let raw = RawValue::from_string(self.render()).map_err(serde::ser::Error::custom)?;
        raw.serialize(serializer)
    }
}
