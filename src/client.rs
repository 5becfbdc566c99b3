// ABOUTME: Bearer-authenticated resource client for accounts, balances and statements
// ABOUTME: Each method is one HTTP call that unwraps the documented Data.* sub-path
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Resource Client
//!
//! Read access to accounts, balances and statements plus statement
//! generation, against `.../open-banking/v1.0/`. The client is stateless
//! beyond its immutable access token: getters can be called repeatedly
//! and perform exactly one HTTP call each, with no retries and no
//! pagination handling - a list call returns whatever the single response
//! page contains.
//!
//! The token is expected to be valid; acquiring one is the job of
//! [`OAuth2Client`](crate::oauth2_client::OAuth2Client).

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::config::Endpoints;
use crate::errors::{Error, Result};
use crate::models::{Account, AccountsData, Balance, Statement};
use crate::transport::{ApiTransport, HttpTransport};

#[derive(Debug, Deserialize)]
struct AccountsEnvelope {
    #[serde(rename = "Data")]
    data: AccountsData,
}

#[derive(Debug, Deserialize)]
struct BalancesEnvelope {
    #[serde(rename = "Data")]
    data: BalancesData,
}

#[derive(Debug, Deserialize)]
struct BalancesData {
    #[serde(rename = "Balance", default)]
    balance: Vec<Balance>,
}

#[derive(Debug, Deserialize)]
struct StatementListEnvelope {
    #[serde(rename = "Data")]
    data: StatementListData,
}

#[derive(Debug, Deserialize)]
struct StatementListData {
    #[serde(rename = "Statement", default)]
    statement: Vec<Statement>,
}

#[derive(Debug, Deserialize)]
struct StatementEnvelope {
    #[serde(rename = "Data")]
    data: StatementData,
}

#[derive(Debug, Deserialize)]
struct StatementData {
    #[serde(rename = "Statement")]
    statement: Statement,
}

/// Authenticated client for the Open Banking resource endpoints
pub struct OpenBankingClient {
    access_token: String,
    endpoints: Endpoints,
    transport: Arc<dyn ApiTransport>,
}

impl OpenBankingClient {
    /// Client with production endpoints and the default HTTP transport
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::with_parts(
            access_token,
            Endpoints::default(),
            Arc::new(HttpTransport::new()),
        )
    }

    /// Client with explicit endpoints and transport
    #[must_use]
    pub fn with_parts(
        access_token: impl Into<String>,
        endpoints: Endpoints,
        transport: Arc<dyn ApiTransport>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            endpoints,
            transport,
        }
    }

    /// List the accounts visible to the consent
    ///
    /// Unwraps `Data.Account`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status, or a body
    /// that does not match the documented shape.
    pub async fn get_accounts(&self) -> Result<Vec<Account>> {
        let envelope: AccountsEnvelope = self.get("accounts").await?;
        Ok(envelope.data.account)
    }

    /// Detail for one account
    ///
    /// Returns the `Data` payload; the API wraps the detail in an
    /// `Account` array even for a single account.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status, or a body
    /// that does not match the documented shape.
    pub async fn get_account(&self, account_id: &str) -> Result<AccountsData> {
        let envelope: AccountsEnvelope = self.get(&format!("accounts/{account_id}")).await?;
        Ok(envelope.data)
    }

    /// Balances across all visible accounts
    ///
    /// Unwraps `Data.Balance`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status, or a body
    /// that does not match the documented shape.
    pub async fn get_balances(&self) -> Result<Vec<Balance>> {
        let envelope: BalancesEnvelope = self.get("balances").await?;
        Ok(envelope.data.balance)
    }

    /// Balance records for one account
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status, or a body
    /// that does not match the documented shape.
    pub async fn get_balance(&self, account_id: &str) -> Result<Vec<Balance>> {
        let envelope: BalancesEnvelope =
            self.get(&format!("accounts/{account_id}/balances")).await?;
        Ok(envelope.data.balance)
    }

    /// Request generation of a statement over a date range
    ///
    /// The bounds are passed through to the bank exactly as supplied.
    /// Returns the created statement descriptor; generation itself is
    /// asynchronous on the bank side and tracked via the descriptor's
    /// `status`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status, or a body
    /// that does not match the documented shape.
    pub async fn create_statement(
        &self,
        account_id: &str,
        start_date_time: &str,
        end_date_time: &str,
    ) -> Result<Statement> {
        let body = json!({
            "Data": {
                "Statement": {
                    "accountId": account_id,
                    "startDateTime": start_date_time,
                    "endDateTime": end_date_time,
                }
            }
        });

        let url = format!("{}statements", self.endpoints.api_base);
        debug!(%url, account_id, "requesting statement generation");

        let reply = self
            .transport
            .post_json_bearer(&url, &self.access_token, &body)
            .await?;
        if !reply.is_success() {
            return Err(Error::status("statements", reply.status, reply.body));
        }

        let envelope: StatementEnvelope = serde_json::from_value(reply.body)
            .map_err(|source| Error::decode("statements", source))?;
        Ok(envelope.data.statement)
    }

    /// List the statement descriptors known to the consent
    ///
    /// Unwraps `Data.Statement`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status, or a body
    /// that does not match the documented shape.
    pub async fn get_statements(&self) -> Result<Vec<Statement>> {
        let envelope: StatementListEnvelope = self.get("statements").await?;
        Ok(envelope.data.statement)
    }

    /// One statement descriptor by account and statement id
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status, or a body
    /// that does not match the documented shape.
    pub async fn get_statement(&self, account_id: &str, statement_id: &str) -> Result<Statement> {
        let envelope: StatementEnvelope = self
            .get(&format!("accounts/{account_id}/statements/{statement_id}"))
            .await?;
        Ok(envelope.data.statement)
    }

    /// One bearer-authenticated GET, decoded into the typed envelope
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.endpoints.api_base, path);
        debug!(%url, "fetching resource");

        let reply = self.transport.get_bearer(&url, &self.access_token).await?;
        if !reply.is_success() {
            return Err(Error::status(path, reply.status, reply.body));
        }

        serde_json::from_value(reply.body).map_err(|source| Error::decode(path, source))
    }
}
