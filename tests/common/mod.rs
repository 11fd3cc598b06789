//! Common test utilities and helpers
//!
//! - In-process comment server backed by an in-memory store
//! - Mock comment server fixtures for client tests
//! - Assertion macros

#![allow(dead_code)]

pub mod assertions;

use std::time::Duration;

use axum_test::TestServer;
use serde_json::{json, Value};
use wiremock::MockServer;

use commentbox::backend::comments::CommentStore;
use commentbox::backend::server::create_app_with_store;
use commentbox::egui_app::{CommentApiClient, Reconciler};

/// Test server over a fresh in-memory store; the store handle is returned
/// so tests can inspect or break it.
pub async fn test_server() -> (TestServer, CommentStore) {
    let store = CommentStore::in_memory()
        .await
        .expect("in-memory store opens");
    let app = create_app_with_store(store.clone());
    let server = TestServer::new(app).expect("test server starts");
    (server, store)
}

/// Reconciler talking to `server`, running on the current test runtime
pub fn reconciler_for(server: &MockServer) -> Reconciler {
    let api = CommentApiClient::with_base_url(&server.uri()).expect("mock server URI is valid");
    Reconciler::new(api, tokio::runtime::Handle::current())
}

/// Like [`reconciler_for`], with requests abandoned after `timeout`
pub fn reconciler_with_timeout(server: &MockServer, timeout: Duration) -> Reconciler {
    let api = CommentApiClient::with_timeout(&server.uri(), timeout)
        .expect("mock server URI is valid");
    Reconciler::new(api, tokio::runtime::Handle::current())
}

/// A comment as the server lists it
pub fn comment_json(id: &str, author: &str, text: &str) -> Value {
    json!({ "id": id, "author": author, "text": text })
}

/// Block until `server` has seen `count` requests
pub async fn wait_for_requests(server: &MockServer, count: usize) {
    let waited = tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            let seen = server
                .received_requests()
                .await
                .map_or(0, |requests| requests.len());
            if seen >= count {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await;
    assert!(waited.is_ok(), "mock server never saw {count} requests");
}
