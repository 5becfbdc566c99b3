// ABOUTME: Typed records for the Open Banking wire shapes returned by the Tochka API
// ABOUTME: Field names mirror the remote JSON exactly (Data.Account, Data.Balance, Data.Statement)
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Data Models
//!
//! Typed representations of the payloads the Tochka Open Banking API emits.
//! Every struct mirrors the wire JSON exactly; serde renames carry the
//! remote field names (`accountId`, `creditDebitIndicator`, `Amount`, ...).
//!
//! Fields the API documents as optional, or that differ between account
//! kinds, are `Option` so a partial payload still decodes. A body missing
//! the envelope itself (`Data.Account` and friends) fails decoding and
//! surfaces as [`Error::Decode`](crate::errors::Error::Decode).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single account record from `Data.Account`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Account identifier used in all per-account resource paths
    #[serde(rename = "accountId")]
    pub account_id: String,
    /// Customer code the account belongs to
    #[serde(rename = "customerCode", skip_serializing_if = "Option::is_none")]
    pub customer_code: Option<String>,
    /// ISO currency code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Account kind as reported by the bank
    #[serde(rename = "accountType", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    /// Human-readable account name
    #[serde(rename = "accountName", skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    /// Account status ("Enabled", "Disabled", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// When the status last changed
    #[serde(
        rename = "statusUpdateDateTime",
        skip_serializing_if = "Option::is_none"
    )]
    pub status_update_date_time: Option<DateTime<Utc>>,
    /// Date the account was opened
    #[serde(rename = "registrationDate", skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<NaiveDate>,
    /// Full account number
    #[serde(rename = "accountDetails", skip_serializing_if = "Option::is_none")]
    pub account_details: Option<String>,
}

/// The `Data` payload of a single-account lookup
///
/// The API wraps even a single account detail in an `Account` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountsData {
    /// Accounts carried by this payload
    #[serde(rename = "Account", default)]
    pub account: Vec<Account>,
}

/// A balance record from `Data.Balance`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    /// Account the balance belongs to
    #[serde(rename = "accountId")]
    pub account_id: String,
    /// "Credit" or "Debit"
    #[serde(
        rename = "creditDebitIndicator",
        skip_serializing_if = "Option::is_none"
    )]
    pub credit_debit_indicator: Option<String>,
    /// Balance kind ("OpeningAvailable", "ClosingAvailable", "Expected", ...)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub balance_type: Option<String>,
    /// Moment the balance was computed
    #[serde(rename = "dateTime", skip_serializing_if = "Option::is_none")]
    pub date_time: Option<DateTime<Utc>>,
    /// Monetary amount of the balance
    #[serde(rename = "Amount")]
    pub amount: Amount,
}

/// Monetary amount with its currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    /// Numeric amount
    pub amount: f64,
    /// ISO currency code
    pub currency: String,
}

/// A statement descriptor from `Data.Statement`
///
/// Statements are generated asynchronously: `create_statement` registers the
/// request and the descriptor's `status` tracks readiness. The date range
/// bounds are echoed back exactly as supplied, so they stay plain strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    /// Account the statement was generated for
    #[serde(rename = "accountId")]
    pub account_id: String,
    /// Identifier to retrieve the statement with
    #[serde(rename = "statementId")]
    pub statement_id: String,
    /// Generation status ("Created", "Processing", "Ready", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Start of the reported period, as supplied on creation
    #[serde(rename = "startDateTime", skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<String>,
    /// End of the reported period, as supplied on creation
    #[serde(rename = "endDateTime", skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<String>,
    /// When the generation request was registered
    #[serde(rename = "creationDateTime", skip_serializing_if = "Option::is_none")]
    pub creation_date_time: Option<DateTime<Utc>>,
}
