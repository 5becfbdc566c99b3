// ABOUTME: Tracing subscriber initialization for applications embedding the client
// ABOUTME: Handshake refusal diagnostics are emitted at error level through this stack
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logging setup built on `tracing-subscriber`.
//!
//! The library itself only emits events; installing a subscriber is the
//! embedding application's choice. These helpers cover the common case.

use tracing_subscriber::EnvFilter;

/// Install a formatted subscriber honoring `RUST_LOG`, defaulting to `info`
///
/// A no-op if a global subscriber is already set.
pub fn init() {
    init_with_default_filter("info");
}

/// Install a formatted subscriber with an explicit fallback filter
///
/// `RUST_LOG` still takes precedence when set. A no-op if a global
/// subscriber is already set.
pub fn init_with_default_filter(directives: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives.to_owned()));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
