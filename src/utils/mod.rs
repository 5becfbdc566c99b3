// ABOUTME: Utility modules shared across the crate
// ABOUTME: Currently holds HTTP client construction helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// HTTP client configuration and helpers
pub mod http_client;
