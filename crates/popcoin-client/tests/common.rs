//! Common test utilities for Popcoin client integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use popcoin_client::{ClientOptions, PopcoinClient};
use serde_json::{json, Value};
use wiremock::MockServer;

/// Token every test client authenticates with.
pub const TEST_TOKEN: &str = "test-token";

/// Stub API server plus a client pointed at it.
pub struct TestHarness {
    /// The stub server.
    pub server: MockServer,
    /// Client using `/api` under the stub as its base URL.
    pub client: PopcoinClient,
}

impl TestHarness {
    /// Start a fresh stub server.
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let options = ClientOptions::with_base_url(format!("{}/api", server.uri()));
        let client =
            PopcoinClient::with_options(TEST_TOKEN, options).expect("Failed to build client");

        Self { server, client }
    }

    /// Authorization header value the stub should see.
    pub fn auth_header() -> String {
        format!("Bearer {TEST_TOKEN}")
    }
}

/// A successful ping body.
pub fn ping_body() -> Value {
    json!({
        "status": "ok",
        "message": "pong",
        "dev": {
            "referral": "REF123",
            "email": "dev@example.com",
            "created_at": "2017-06-01T10:00:00.000Z"
        }
    })
}

/// A successful user lookup body.
pub fn user_body(key: &str) -> Value {
    json!({
        "status": "ok",
        "user": {
            "key": key,
            "email": format!("{key}@example.com"),
            "balances": { "available": "10.00", "current": "12.50" },
            "link": format!("https://popcoin.ws/u/{key}")
        }
    })
}

/// An error envelope.
pub fn error_body(message: &str) -> Value {
    json!({ "status": "error", "message": message })
}
