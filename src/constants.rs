// ABOUTME: Fixed remote API surface constants and environment overrides
// ABOUTME: Values mirror the Tochka Open Banking endpoints, scopes and consent permissions
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Remote API surface constants and environment overrides.
//!
//! The production endpoint URLs, OAuth2 scope, grant types, consent
//! permissions and `state` values are fixed here. [`env_config`] exposes
//! the environment-variable overrides used for sandbox targets.

/// Production endpoint URLs
pub mod endpoints {
    /// Base URL for bearer-authenticated resource calls, with trailing slash
    pub const API_BASE: &str = "https://enter.tochka.com/uapi/open-banking/v1.0/";
    /// Token endpoint for all OAuth2 grants
    pub const TOKEN_URL: &str = "https://enter.tochka.com/connect/token";
    /// Consent creation endpoint
    pub const CONSENT_URL: &str = "https://enter.tochka.com/uapi/v1.0/consents";
    /// Authorization endpoint for consent confirmation
    pub const AUTHORIZE_URL: &str = "https://enter.tochka.com/connect/authorize";
}

/// OAuth2 grant parameters
pub mod oauth {
    /// Space-separated scope requested for every user-facing grant
    pub const DEFAULT_SCOPES: &str = "accounts cards customers sbp payments";
    /// `state` value sent with the `client_credentials` grant
    pub const CLIENT_CREDENTIALS_STATE: &str = "qwe";
    /// `state` value sent on the consent confirmation URL
    pub const AUTHORIZE_STATE: &str = "APP";

    /// `grant_type` parameter values
    pub mod grant_types {
        /// Application-scoped token grant
        pub const CLIENT_CREDENTIALS: &str = "client_credentials";
        /// User-token exchange of an authorization code
        pub const AUTHORIZATION_CODE: &str = "authorization_code";
        /// User-token renewal via a refresh token
        pub const REFRESH_TOKEN: &str = "refresh_token";
    }
}

/// Consent request parameters
pub mod consent {
    /// The consent permissions requested from the bank
    pub const PERMISSIONS: &[&str] = &[
        "ReadAccountsBasic",
        "ReadAccountsDetail",
        "ReadBalances",
        "ReadStatements",
        "ReadTransactionsBasic",
        "ReadTransactionsCredits",
        "ReadTransactionsDebits",
        "ReadTransactionsDetail",
        "ReadCustomerData",
        "ReadSBPData",
        "EditSBPData",
        "ReadCardData",
        "EditCardData",
        "EditCardState",
        "ReadCardLimits",
        "EditCardLimits",
        "CreatePaymentForSign",
        "CreatePaymentOrder",
    ];
    /// Expiration timestamp sent with the consent request
    pub const EXPIRATION_DATE_TIME: &str = "2040-10-03T00:00:00+00:00";
}

/// Environment-variable overrides for the endpoint URLs and credentials.
///
/// Each endpoint accessor falls back to the production default when its
/// variable is unset; credential accessors return `None`.
pub mod env_config {
    use std::env;

    use super::endpoints;

    /// `TOCHKA_API_BASE` override, defaulting to production
    #[must_use]
    pub fn api_base() -> String {
        env::var("TOCHKA_API_BASE").unwrap_or_else(|_| endpoints::API_BASE.into())
    }

    /// `TOCHKA_TOKEN_URL` override, defaulting to production
    #[must_use]
    pub fn token_url() -> String {
        env::var("TOCHKA_TOKEN_URL").unwrap_or_else(|_| endpoints::TOKEN_URL.into())
    }

    /// `TOCHKA_CONSENT_URL` override, defaulting to production
    #[must_use]
    pub fn consent_url() -> String {
        env::var("TOCHKA_CONSENT_URL").unwrap_or_else(|_| endpoints::CONSENT_URL.into())
    }

    /// `TOCHKA_AUTH_URL` override, defaulting to production
    #[must_use]
    pub fn authorize_url() -> String {
        env::var("TOCHKA_AUTH_URL").unwrap_or_else(|_| endpoints::AUTHORIZE_URL.into())
    }

    /// `TOCHKA_CLIENT_ID`, if set
    #[must_use]
    pub fn client_id() -> Option<String> {
        env::var("TOCHKA_CLIENT_ID").ok()
    }

    /// `TOCHKA_CLIENT_SECRET`, if set
    #[must_use]
    pub fn client_secret() -> Option<String> {
        env::var("TOCHKA_CLIENT_SECRET").ok()
    }

    /// `TOCHKA_REDIRECT_URI`, if set
    #[must_use]
    pub fn redirect_uri() -> Option<String> {
        env::var("TOCHKA_REDIRECT_URI").ok()
    }
}
