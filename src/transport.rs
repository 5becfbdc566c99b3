// ABOUTME: HTTP transport seam between the API facades and the network
// ABOUTME: Defines the ApiTransport trait plus the reqwest-backed production implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # HTTP Transport
//!
//! The facades never touch `reqwest` directly; they go through the
//! [`ApiTransport`] trait. The trait covers exactly the three request
//! shapes the remote API needs: bearer-authenticated GET, bearer-
//! authenticated JSON POST, and unauthenticated form-encoded POST.
//!
//! A transport returns the response status and the decoded JSON body even
//! for non-2xx answers - the OAuth2 flow inspects refusal bodies, so
//! mapping them to errors here would lose information. Only network-level
//! failures are `Err`.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::errors::Result;
use crate::utils::http_client;

/// Status and decoded body of an HTTP exchange
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Decoded JSON body, `Value::Null` if the body was empty or not JSON
    pub body: Value,
}

impl TransportResponse {
    /// Whether the status is in the 2xx range
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Request shapes the remote API requires of an HTTP transport
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// GET with a bearer `Authorization` header
    async fn get_bearer(&self, url: &str, token: &str) -> Result<TransportResponse>;

    /// POST a JSON body with a bearer `Authorization` header
    async fn post_json_bearer(
        &self,
        url: &str,
        token: &str,
        body: &Value,
    ) -> Result<TransportResponse>;

    /// POST a form-url-encoded body with no auth header
    async fn post_form(&self, url: &str, params: &[(&str, &str)]) -> Result<TransportResponse>;
}

/// Production transport backed by `reqwest`
///
/// Uses the OAuth client profile for form posts and the API profile for
/// bearer-authenticated calls (see [`crate::utils::http_client`]).
pub struct HttpTransport {
    api: Client,
    oauth: Client,
}

impl HttpTransport {
    /// Transport with the default client profiles
    #[must_use]
    pub fn new() -> Self {
        Self {
            api: http_client::api_client(),
            oauth: http_client::oauth_client(),
        }
    }

    /// Transport using one caller-supplied client for every request shape
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self {
            api: client.clone(),
            oauth: client,
        }
    }

    async fn decode(response: reqwest::Response) -> Result<TransportResponse> {
        let status = response.status().as_u16();
        let text = response.text().await?;
        // Mirrors json_decode: an unparseable body becomes null, not an error
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Ok(TransportResponse { status, body })
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn get_bearer(&self, url: &str, token: &str) -> Result<TransportResponse> {
        let response = self.api.get(url).bearer_auth(token).send().await?;
        Self::decode(response).await
    }

    async fn post_json_bearer(
        &self,
        url: &str,
        token: &str,
        body: &Value,
    ) -> Result<TransportResponse> {
        let response = self
            .api
            .post(url)
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn post_form(&self, url: &str, params: &[(&str, &str)]) -> Result<TransportResponse> {
        let response = self.oauth.post(url).form(params).send().await?;
        Self::decode(response).await
    }
}
