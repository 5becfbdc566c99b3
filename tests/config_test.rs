// ABOUTME: Configuration tests for endpoint defaults and environment overrides
// ABOUTME: Environment-mutating tests are serialized
//
// SPDX-License-Identifier: MIT OR Apache-2.0
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::env;

use serial_test::serial;

use tochka_open_banking::config::{Credentials, Endpoints};

#[test]
fn default_endpoints_target_production() {
    let endpoints = Endpoints::default();

    assert_eq!(
        endpoints.api_base,
        "https://enter.tochka.com/uapi/open-banking/v1.0/"
    );
    assert_eq!(endpoints.token_url, "https://enter.tochka.com/connect/token");
    assert_eq!(
        endpoints.consent_url,
        "https://enter.tochka.com/uapi/v1.0/consents"
    );
    assert_eq!(
        endpoints.authorize_url,
        "https://enter.tochka.com/connect/authorize"
    );
}

#[test]
#[serial]
fn endpoints_honor_environment_overrides() {
    env::set_var("TOCHKA_API_BASE", "http://localhost:8080/uapi/v1.0/");
    env::set_var("TOCHKA_TOKEN_URL", "http://localhost:8080/connect/token");

    let endpoints = Endpoints::from_env();

    assert_eq!(endpoints.api_base, "http://localhost:8080/uapi/v1.0/");
    assert_eq!(endpoints.token_url, "http://localhost:8080/connect/token");
    // Unset variables fall back to production
    assert_eq!(
        endpoints.consent_url,
        "https://enter.tochka.com/uapi/v1.0/consents"
    );

    env::remove_var("TOCHKA_API_BASE");
    env::remove_var("TOCHKA_TOKEN_URL");
}

#[test]
#[serial]
fn credentials_from_env_require_all_three() {
    env::remove_var("TOCHKA_CLIENT_ID");
    env::remove_var("TOCHKA_CLIENT_SECRET");
    env::remove_var("TOCHKA_REDIRECT_URI");

    assert!(Credentials::from_env().is_none());

    env::set_var("TOCHKA_CLIENT_ID", "id");
    env::set_var("TOCHKA_CLIENT_SECRET", "secret");
    assert!(Credentials::from_env().is_none());

    env::set_var("TOCHKA_REDIRECT_URI", "https://app.example/callback");
    let credentials = Credentials::from_env().expect("all three variables set");
    assert_eq!(credentials.client_id, "id");
    assert_eq!(credentials.redirect_uri, "https://app.example/callback");

    env::remove_var("TOCHKA_CLIENT_ID");
    env::remove_var("TOCHKA_CLIENT_SECRET");
    env::remove_var("TOCHKA_REDIRECT_URI");
}
