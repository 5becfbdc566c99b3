// ABOUTME: Main library entry point for the Tochka Open Banking API client
// ABOUTME: Exposes the resource client and the OAuth2 consent flow orchestrator
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Tochka Open Banking Client
//!
//! A client library for the Tochka Bank Open Banking REST API: account
//! listing, balances, statement retrieval, and the OAuth2 consent-based
//! authorization flow.
//!
//! ## Components
//!
//! - [`client::OpenBankingClient`] - bearer-authenticated access to
//!   accounts, balances and statements
//! - [`oauth2_client::OAuth2Client`] - the three-legged OAuth2 + consent
//!   handshake and token refresh
//!
//! The two are independent: the resource client just needs a valid access
//! token, however it was obtained.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tochka_open_banking::config::Credentials;
//! use tochka_open_banking::{OAuth2Client, OpenBankingClient};
//!
//! # async fn run() -> tochka_open_banking::Result<()> {
//! let flow = OAuth2Client::new(Credentials::new(
//!     "my-client-id",
//!     "my-client-secret",
//!     "https://my.app/callback",
//! ));
//!
//! // Send the user to the confirmation URL, then exchange the code from
//! // the redirect for user tokens.
//! if let Some(url) = flow.start_authorization().await? {
//!     println!("confirm the consent at: {url}");
//! }
//! let grant = flow.exchange_code("code-from-redirect").await?;
//!
//! if let Some(token) = grant.access_token {
//!     let client = OpenBankingClient::new(token);
//!     for account in client.get_accounts().await? {
//!         println!("{}", account.account_id);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error model
//!
//! A handshake the bank refuses is logged and returned as an absent value
//! (`None` tokens), never raised. [`Error`] covers transport failures,
//! non-2xx resource responses, and malformed bodies.

/// Bearer-authenticated resource client for accounts, balances, statements
pub mod client;

/// Endpoint and credential configuration
pub mod config;

/// Remote API surface constants and environment overrides
pub mod constants;

/// Error types
pub mod errors;

/// Logging setup helpers
pub mod logging;

/// Typed wire models
pub mod models;

/// OAuth2 consent flow orchestration
pub mod oauth2_client;

/// HTTP transport seam
pub mod transport;

/// Shared utilities
pub mod utils;

pub use client::OpenBankingClient;
pub use errors::{Error, Result};
pub use oauth2_client::{OAuth2Client, TokenGrant};
