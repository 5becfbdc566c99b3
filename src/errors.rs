// ABOUTME: Error types for transport, HTTP status, and response decoding failures
// ABOUTME: Handshake refusals are NOT errors - they surface as absent values (see oauth2_client)
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Error Types
//!
//! Only transport-level problems are raised as errors. A token or consent
//! request that comes back decodable but without the expected field is a
//! handshake refusal: it is logged and surfaced through the normal return
//! channel as an absent value, never as an `Err`.

use serde_json::Value;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the Open Banking client and the OAuth2 flow
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network-level failure before an HTTP response was obtained
    #[error("transport failure")]
    Transport {
        /// Underlying HTTP client error
        #[from]
        source: reqwest::Error,
    },

    /// A resource endpoint answered with a non-2xx status
    #[error("'{endpoint}' returned HTTP {status}")]
    Status {
        /// Resource path or endpoint that was called
        endpoint: String,
        /// HTTP status code of the response
        status: u16,
        /// Decoded response body, `Value::Null` if the body was not JSON
        body: Value,
    },

    /// A 2xx response body did not match the documented shape
    #[error("malformed response from '{endpoint}'")]
    Decode {
        /// Resource path or endpoint that was called
        endpoint: String,
        /// Underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// A configured endpoint URL could not be parsed
    #[error("invalid endpoint URL '{url}'")]
    InvalidEndpoint {
        /// The offending URL string
        url: String,
        /// Underlying parse error
        #[source]
        source: url::ParseError,
    },
}

impl Error {
    pub(crate) fn status(endpoint: &str, status: u16, body: Value) -> Self {
        Self::Status {
            endpoint: endpoint.into(),
            status,
            body,
        }
    }

    pub(crate) fn decode(endpoint: &str, source: serde_json::Error) -> Self {
        Self::Decode {
            endpoint: endpoint.into(),
            source,
        }
    }
}
