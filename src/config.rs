// ABOUTME: Endpoint and credential configuration for the API facades
// ABOUTME: Defaults target production; environment variables override for sandbox targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::constants::{endpoints, env_config};

/// URLs of the remote API surface
///
/// `Default` points at the production Tochka endpoints; [`Endpoints::from_env`]
/// honors the `TOCHKA_API_BASE`, `TOCHKA_TOKEN_URL`, `TOCHKA_CONSENT_URL`
/// and `TOCHKA_AUTH_URL` overrides.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// Base URL for bearer-authenticated resource calls, with trailing slash
    pub api_base: String,
    /// Token endpoint for all OAuth2 grants
    pub token_url: String,
    /// Consent creation endpoint
    pub consent_url: String,
    /// Authorization endpoint for consent confirmation
    pub authorize_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            api_base: endpoints::API_BASE.into(),
            token_url: endpoints::TOKEN_URL.into(),
            consent_url: endpoints::CONSENT_URL.into(),
            authorize_url: endpoints::AUTHORIZE_URL.into(),
        }
    }
}

impl Endpoints {
    /// Endpoints with environment overrides applied
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_base: env_config::api_base(),
            token_url: env_config::token_url(),
            consent_url: env_config::consent_url(),
            authorize_url: env_config::authorize_url(),
        }
    }
}

/// OAuth2 application credentials
///
/// Immutable once constructed. The `redirect_uri` registered with the bank
/// is fixed here and reused by both the confirmation URL and the
/// authorization-code exchange.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// OAuth client ID issued by the bank
    pub client_id: String,
    /// OAuth client secret issued by the bank
    pub client_secret: String,
    /// Redirect URI registered with the bank
    pub redirect_uri: String,
}

impl Credentials {
    /// Credentials from explicit values
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
        }
    }

    /// Credentials from `TOCHKA_CLIENT_ID`, `TOCHKA_CLIENT_SECRET` and
    /// `TOCHKA_REDIRECT_URI`, if all three are set
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Some(Self {
            client_id: env_config::client_id()?,
            client_secret: env_config::client_secret()?,
            redirect_uri: env_config::redirect_uri()?,
        })
    }
}
