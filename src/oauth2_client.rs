// ABOUTME: OAuth2 + consent handshake orchestration against the Tochka token endpoints
// ABOUTME: client_credentials token, consent creation, confirmation URL, code exchange, refresh
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # OAuth2 Consent Flow
//!
//! Drives the three-legged authorization sequence: an application-scoped
//! token via `client_credentials`, a consent created under that token, the
//! confirmation URL the user approves the consent at, and finally the
//! `authorization_code` exchange and `refresh_token` renewal.
//!
//! Every step is explicit - nothing here triggers automatically, and no
//! step mutates the client. A step that the bank refuses (a decodable
//! response missing the expected field) is logged at error level with the
//! client id and the raw body, and surfaces as an absent value through the
//! normal return channel. `Err` is reserved for transport failures.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;
use url::Url;

use crate::config::{Credentials, Endpoints};
use crate::constants::{consent, oauth};
use crate::errors::{Error, Result};
use crate::transport::{ApiTransport, HttpTransport};

/// Result record of a token-issuing operation
///
/// Both tokens are `Some` on success and both `None` on refusal - never
/// partially valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenGrant {
    /// Client id the grant was requested for
    pub client_id: String,
    /// User-scoped access token
    pub access_token: Option<String>,
    /// Refresh token for renewing the access token
    pub refresh_token: Option<String>,
}

impl TokenGrant {
    /// Whether both tokens are present
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.access_token.is_some() && self.refresh_token.is_some()
    }

    fn refused(client_id: &str) -> Self {
        Self {
            client_id: client_id.into(),
            access_token: None,
            refresh_token: None,
        }
    }
}

/// Token response of the `client_credentials` grant
///
/// Only `access_token` is required; a response without it fails decoding
/// and counts as a refusal.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Token response of the `authorization_code` and `refresh_token` grants
///
/// Both tokens are required, matching the all-or-nothing grant contract.
#[derive(Debug, Deserialize)]
struct AuthTokenResponse {
    access_token: String,
    refresh_token: String,
}

#[derive(Debug, Deserialize)]
struct ConsentResponse {
    #[serde(rename = "Data")]
    data: ConsentData,
}

#[derive(Debug, Deserialize)]
struct ConsentData {
    #[serde(rename = "consentId")]
    consent_id: String,
}

/// Orchestrates the OAuth2 consent handshake
pub struct OAuth2Client {
    credentials: Credentials,
    endpoints: Endpoints,
    transport: Arc<dyn ApiTransport>,
}

impl OAuth2Client {
    /// Client with production endpoints and the default HTTP transport
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self::with_parts(
            credentials,
            Endpoints::default(),
            Arc::new(HttpTransport::new()),
        )
    }

    /// Client with explicit endpoints and transport
    #[must_use]
    pub fn with_parts(
        credentials: Credentials,
        endpoints: Endpoints,
        transport: Arc<dyn ApiTransport>,
    ) -> Self {
        Self {
            credentials,
            endpoints,
            transport,
        }
    }

    /// The credentials this flow was constructed with
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Start the authorization sequence
    ///
    /// Acquires a `client_credentials` token, creates a consent under it,
    /// and returns the URL the user must visit to confirm the consent.
    /// The consent step is only attempted once a token is in hand.
    ///
    /// Returns `Ok(None)` when either step is refused by the bank; the
    /// refusal has already been logged.
    ///
    /// # Errors
    ///
    /// Returns an error if a request fails at the transport level or the
    /// configured authorize URL cannot be parsed.
    pub async fn start_authorization(&self) -> Result<Option<String>> {
        let Some(access_token) = self.client_credentials_token().await? else {
            return Ok(None);
        };

        let Some(consent_id) = self.create_consent(&access_token).await? else {
            return Ok(None);
        };

        self.confirmation_url(&consent_id).map(Some)
    }

    /// Exchange the authorization `code` from the redirect for user tokens
    ///
    /// Uses the `redirect_uri` fixed at construction. On refusal the
    /// returned grant carries `None` for both tokens.
    ///
    /// # Errors
    ///
    /// Returns an error only if the request fails at the transport level.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenGrant> {
        let params = [
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("grant_type", oauth::grant_types::AUTHORIZATION_CODE),
            ("scope", oauth::DEFAULT_SCOPES),
            ("code", code),
            ("redirect_uri", self.credentials.redirect_uri.as_str()),
        ];

        let reply = self
            .transport
            .post_form(&self.endpoints.token_url, &params)
            .await?;

        match serde_json::from_value::<AuthTokenResponse>(reply.body.clone()) {
            Ok(tokens) => Ok(TokenGrant {
                client_id: self.credentials.client_id.clone(),
                access_token: Some(tokens.access_token),
                refresh_token: Some(tokens.refresh_token),
            }),
            Err(_) => {
                error!(
                    client_id = %self.credentials.client_id,
                    body = %reply.body,
                    "authorization_code grant refused: no refresh_token in response"
                );
                Ok(TokenGrant::refused(&self.credentials.client_id))
            }
        }
    }

    /// Renew tokens with a previously issued `refresh_token`
    ///
    /// Same success and refusal contract as [`Self::exchange_code`].
    ///
    /// # Errors
    ///
    /// Returns an error only if the request fails at the transport level.
    pub async fn refresh_tokens(&self, refresh_token: &str) -> Result<TokenGrant> {
        let params = [
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("grant_type", oauth::grant_types::REFRESH_TOKEN),
            ("refresh_token", refresh_token),
        ];

        let reply = self
            .transport
            .post_form(&self.endpoints.token_url, &params)
            .await?;

        match serde_json::from_value::<AuthTokenResponse>(reply.body.clone()) {
            Ok(tokens) => Ok(TokenGrant {
                client_id: self.credentials.client_id.clone(),
                access_token: Some(tokens.access_token),
                refresh_token: Some(tokens.refresh_token),
            }),
            Err(_) => {
                error!(
                    client_id = %self.credentials.client_id,
                    body = %reply.body,
                    "refresh_token grant refused: no refresh_token in response"
                );
                Ok(TokenGrant::refused(&self.credentials.client_id))
            }
        }
    }

    /// Application-scoped token via the `client_credentials` grant
    async fn client_credentials_token(&self) -> Result<Option<String>> {
        let params = [
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("grant_type", oauth::grant_types::CLIENT_CREDENTIALS),
            ("scope", oauth::DEFAULT_SCOPES),
            ("state", oauth::CLIENT_CREDENTIALS_STATE),
        ];

        let reply = self
            .transport
            .post_form(&self.endpoints.token_url, &params)
            .await?;

        match serde_json::from_value::<TokenResponse>(reply.body.clone()) {
            Ok(token) => Ok(Some(token.access_token)),
            Err(_) => {
                error!(
                    client_id = %self.credentials.client_id,
                    body = %reply.body,
                    "client_credentials grant refused: no access_token in response"
                );
                Ok(None)
            }
        }
    }

    /// Create a consent under the application-scoped token
    async fn create_consent(&self, access_token: &str) -> Result<Option<String>> {
        let body = json!({
            "Data": {
                "permissions": consent::PERMISSIONS,
                "expirationDateTime": consent::EXPIRATION_DATE_TIME,
            }
        });

        let reply = self
            .transport
            .post_json_bearer(&self.endpoints.consent_url, access_token, &body)
            .await?;

        match serde_json::from_value::<ConsentResponse>(reply.body.clone()) {
            Ok(response) => Ok(Some(response.data.consent_id)),
            Err(_) => {
                error!(
                    client_id = %self.credentials.client_id,
                    body = %reply.body,
                    "consent request refused: no Data.consentId in response"
                );
                Ok(None)
            }
        }
    }

    /// URL the user visits to confirm the consent at the bank
    fn confirmation_url(&self, consent_id: &str) -> Result<String> {
        let mut url =
            Url::parse(&self.endpoints.authorize_url).map_err(|source| Error::InvalidEndpoint {
                url: self.endpoints.authorize_url.clone(),
                source,
            })?;

        url.query_pairs_mut()
            .append_pair("client_id", &self.credentials.client_id)
            .append_pair("response_type", "code")
            .append_pair("state", oauth::AUTHORIZE_STATE)
            .append_pair("redirect_uri", &self.credentials.redirect_uri)
            .append_pair("scope", oauth::DEFAULT_SCOPES)
            .append_pair("consent_id", consent_id);

        Ok(url.into())
    }
}
