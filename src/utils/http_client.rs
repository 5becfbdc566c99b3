// ABOUTME: Shared HTTP client construction with connection pooling and timeout configuration
// ABOUTME: Separate profiles for OAuth token exchanges and resource API calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;

/// Global shared HTTP client with default configuration
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Get or create the shared HTTP client with default settings
///
/// The client uses connection pooling and reasonable timeouts. Prefer this
/// over creating new clients so connections are reused across calls.
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        ClientBuilder::new()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// Create a new HTTP client with custom timeout settings
///
/// Falls back to a default client if construction fails.
#[must_use]
pub fn create_client_with_timeout(timeout_secs: u64, connect_timeout_secs: u64) -> Client {
    ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Client profile for OAuth token and consent exchanges
///
/// Token endpoints answer quickly; short timeouts keep a stuck handshake
/// from blocking the caller.
#[must_use]
pub fn oauth_client() -> Client {
    create_client_with_timeout(15, 5)
}

/// Client profile for resource API calls
///
/// Statement generation in particular can take longer to answer.
#[must_use]
pub fn api_client() -> Client {
    create_client_with_timeout(60, 10)
}
