// ABOUTME: Shared test utilities: recorded stub transport and error-log capture
// ABOUTME: Included from integration tests via `mod common;`
//
// SPDX-License-Identifier: MIT OR Apache-2.0
#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

//! Shared test utilities for `tochka_open_banking`
//!
//! The stub transport replays canned [`TransportResponse`] values in order
//! and records every call it receives, so tests can assert both what was
//! sent and what the facades made of the replies.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use tochka_open_banking::errors::Result;
use tochka_open_banking::transport::{ApiTransport, TransportResponse};

/// One request the stub transport received
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    GetBearer {
        url: String,
        token: String,
    },
    PostJsonBearer {
        url: String,
        token: String,
        body: Value,
    },
    PostForm {
        url: String,
        params: Vec<(String, String)>,
    },
}

impl RecordedCall {
    pub fn url(&self) -> &str {
        match self {
            Self::GetBearer { url, .. }
            | Self::PostJsonBearer { url, .. }
            | Self::PostForm { url, .. } => url,
        }
    }

    pub fn form_param(&self, key: &str) -> Option<&str> {
        match self {
            Self::PostForm { params, .. } => params
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value.as_str()),
            _ => None,
        }
    }
}

/// Transport stub replaying canned replies in order
#[derive(Default)]
pub struct StubTransport {
    replies: Mutex<VecDeque<TransportResponse>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubTransport {
    pub fn with_replies(replies: Vec<TransportResponse>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn next_reply(&self) -> TransportResponse {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("stub transport ran out of canned replies")
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ApiTransport for StubTransport {
    async fn get_bearer(&self, url: &str, token: &str) -> Result<TransportResponse> {
        self.record(RecordedCall::GetBearer {
            url: url.into(),
            token: token.into(),
        });
        Ok(self.next_reply())
    }

    async fn post_json_bearer(
        &self,
        url: &str,
        token: &str,
        body: &Value,
    ) -> Result<TransportResponse> {
        self.record(RecordedCall::PostJsonBearer {
            url: url.into(),
            token: token.into(),
            body: body.clone(),
        });
        Ok(self.next_reply())
    }

    async fn post_form(&self, url: &str, params: &[(&str, &str)]) -> Result<TransportResponse> {
        self.record(RecordedCall::PostForm {
            url: url.into(),
            params: params
                .iter()
                .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
                .collect(),
        });
        Ok(self.next_reply())
    }
}

/// 200 reply carrying the given JSON body
pub fn ok_reply(body: Value) -> TransportResponse {
    TransportResponse { status: 200, body }
}

/// Reply with an explicit status code
pub fn reply_with_status(status: u16, body: Value) -> TransportResponse {
    TransportResponse { status, body }
}

/// Layer counting error-level events
#[derive(Clone, Default)]
pub struct ErrorCounter {
    errors: Arc<AtomicUsize>,
}

impl ErrorCounter {
    pub fn errors(&self) -> usize {
        self.errors.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if event.metadata().level() == &Level::ERROR {
            self.errors.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Count error-level events emitted while the returned guard is alive
pub fn capture_errors() -> (ErrorCounter, tracing::subscriber::DefaultGuard) {
    let counter = ErrorCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let guard = tracing::subscriber::set_default(subscriber);
    (counter, guard)
}
