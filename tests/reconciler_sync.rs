//! Client synchronization tests
//!
//! The reconciler runs against a `wiremock` server standing in for the
//! comment service.

mod common;

use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use commentbox::egui_app::sync::{CachedComment, Reconciler, SyncPhase};
use commentbox::shared::{CommentDraft, CommentPatch, DurableId};
use common::{comment_json, reconciler_for, reconciler_with_timeout, wait_for_requests};

async fn mount_list(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn refresh(reconciler: &mut Reconciler) {
    reconciler.request_refresh();
    reconciler.process_next().await;
}

fn durable_ids(reconciler: &Reconciler) -> Vec<Option<DurableId>> {
    reconciler
        .cache()
        .entries()
        .iter()
        .map(|entry| entry.durable_id().cloned())
        .collect()
}

#[tokio::test]
async fn test_refresh_is_idempotent() {
    let server = MockServer::start().await;
    mount_list(
        &server,
        json!([comment_json("a", "Ann", "hi"), comment_json("b", "Bo", "yo")]),
    )
    .await;
    let mut reconciler = reconciler_for(&server);

    refresh(&mut reconciler).await;
    let first: Vec<CachedComment> = reconciler.cache().entries().to_vec();
    refresh(&mut reconciler).await;

    assert_eq!(reconciler.cache().entries(), first.as_slice());
    assert_eq!(reconciler.status().phase, SyncPhase::Settled);
    assert!(reconciler.status().last_refresh.is_some());
}

#[tokio::test]
async fn test_legacy_underscore_id_is_accepted() {
    let server = MockServer::start().await;
    mount_list(&server, json!([{ "_id": "m1", "author": "Ann", "text": "hi" }])).await;
    let mut reconciler = reconciler_for(&server);

    refresh(&mut reconciler).await;

    assert_eq!(durable_ids(&reconciler), vec![Some(DurableId::new("m1"))]);
}

#[tokio::test]
async fn test_failed_create_rolls_back_its_entry() {
    let server = MockServer::start().await;
    mount_list(&server, json!([comment_json("a", "Bo", "yo")])).await;
    Mock::given(method("POST"))
        .and(path("/api/comments"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({ "error": "Comment store unavailable", "status": 500 })),
        )
        .mount(&server)
        .await;
    let mut reconciler = reconciler_for(&server);
    refresh(&mut reconciler).await;

    reconciler.create(CommentDraft::new("Ann", "hi"));

    // visible immediately, before the server answers
    assert_eq!(reconciler.cache().len(), 2);
    assert!(reconciler.cache().entries()[1].is_pending());
    assert_eq!(reconciler.status().phase, SyncPhase::Pending);

    reconciler.process_next().await;

    assert_eq!(durable_ids(&reconciler), vec![Some(DurableId::new("a"))]);
    let status = reconciler.status();
    assert_eq!(status.phase, SyncPhase::Settled);
    let error = status.last_error.unwrap_or_default();
    assert!(error.contains("Comment store unavailable"), "{error}");
}

#[tokio::test]
async fn test_created_comment_appears_once_after_refresh() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/comments"))
        .and(body_json(json!({ "author": "Ann", "text": "hi" })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({ "message": "Comment successfully added!", "id": "d1" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    mount_list(&server, json!([comment_json("d1", "Ann", "hi")])).await;
    let mut reconciler = reconciler_for(&server);

    reconciler.create(CommentDraft::new("Ann", "hi"));
    reconciler.process_next().await;

    // promoted in place by the acknowledgment
    assert_eq!(durable_ids(&reconciler), vec![Some(DurableId::new("d1"))]);

    refresh(&mut reconciler).await;

    let entries = reconciler.cache().entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].author.as_deref(), Some("Ann"));
    assert_eq!(entries[0].text.as_deref(), Some("hi"));
    assert_eq!(reconciler.status().phase, SyncPhase::Settled);
}

#[tokio::test]
async fn test_refresh_overtaking_create_ack_keeps_single_entry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/comments"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({ "message": "Comment successfully added!", "id": "d1" }))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    mount_list(&server, json!([comment_json("d1", "Ann", "hi")])).await;
    let mut reconciler = reconciler_for(&server);

    reconciler.create(CommentDraft::new("Ann", "hi"));
    reconciler.request_refresh();

    // refresh lands first and replaces the pending entry
    reconciler.process_next().await;
    assert_eq!(durable_ids(&reconciler), vec![Some(DurableId::new("d1"))]);

    // the late acknowledgment finds nothing to promote
    reconciler.process_next().await;
    assert_eq!(durable_ids(&reconciler), vec![Some(DurableId::new("d1"))]);
    assert_eq!(reconciler.status().phase, SyncPhase::Settled);
}

#[tokio::test]
async fn test_out_of_order_refresh_is_discarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/comments"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([comment_json("old", "Ann", "stale")]))
                .set_delay(Duration::from_millis(300)),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_list(&server, json!([comment_json("new", "Ann", "fresh")])).await;
    let mut reconciler = reconciler_for(&server);

    let older = reconciler.request_refresh();
    wait_for_requests(&server, 1).await;
    let newer = reconciler.request_refresh();
    assert!(newer > older);

    reconciler.process_next().await;
    reconciler.process_next().await;

    assert_eq!(durable_ids(&reconciler), vec![Some(DurableId::new("new"))]);
}

#[tokio::test]
async fn test_update_and_delete_use_durable_id_and_leave_cache() {
    let server = MockServer::start().await;
    mount_list(&server, json!([comment_json("d1", "Ann", "hi")])).await;
    Mock::given(method("PUT"))
        .and(path("/api/comments/d1"))
        .and(body_json(json!({ "author": "Bo" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Comment has been updated" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/comments/d1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "Comment was already absent", "deleted": false })),
        )
        .expect(1)
        .mount(&server)
        .await;
    let mut reconciler = reconciler_for(&server);
    refresh(&mut reconciler).await;
    let before: Vec<CachedComment> = reconciler.cache().entries().to_vec();

    let id = assert_ok!(reconciler.cache().entries()[0].durable_id().cloned().ok_or("pending"));
    reconciler.update(&id, CommentPatch::new().author("Bo"));
    reconciler.delete(&id);
    assert_eq!(reconciler.status().outstanding_writes, 2);

    reconciler.process_next().await;
    reconciler.process_next().await;

    assert_eq!(reconciler.cache().entries(), before.as_slice());
    let status = reconciler.status();
    assert_eq!(status.outstanding_writes, 0);
    assert_eq!(status.last_error, None);
}

#[tokio::test]
async fn test_update_of_vanished_comment_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/comments/gone"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({ "error": "Comment gone not found", "status": 404 })),
        )
        .mount(&server)
        .await;
    let mut reconciler = reconciler_for(&server);

    reconciler.update(&DurableId::new("gone"), CommentPatch::new().text("x"));
    reconciler.process_next().await;

    let error = reconciler.status().last_error.unwrap_or_default();
    assert!(error.contains("gone"), "{error}");
}

#[tokio::test]
async fn test_polling_continues_after_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/comments"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({ "error": "Comment store unavailable", "status": 500 })),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_list(&server, json!([comment_json("a", "Ann", "hi")])).await;
    let mut reconciler = reconciler_for(&server);

    reconciler.start_polling(Duration::from_millis(50));
    let recovered = tokio::time::timeout(Duration::from_secs(5), async {
        while reconciler.cache().is_empty() {
            reconciler.process_next().await;
        }
    })
    .await;

    assert!(recovered.is_ok(), "polling stopped after the failed refresh");
    assert!(reconciler.status().last_error.is_some());
    assert!(reconciler.is_polling());

    reconciler.stop_polling();
    assert!(!reconciler.is_polling());
}

#[tokio::test]
async fn test_create_that_never_returns_is_rolled_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/comments"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({ "message": "Comment successfully added!", "id": "d1" }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;
    let mut reconciler = reconciler_with_timeout(&server, Duration::from_millis(200));

    reconciler.create(CommentDraft::new("Ann", "hi"));
    assert_eq!(reconciler.status().outstanding_writes, 1);

    let finished =
        tokio::time::timeout(Duration::from_secs(3), reconciler.process_next()).await;

    assert!(finished.is_ok(), "create never completed");
    assert!(reconciler.cache().is_empty());
    let status = reconciler.status();
    assert_eq!(status.phase, SyncPhase::Settled);
    assert_eq!(status.outstanding_writes, 0);
    let error = status.last_error.unwrap_or_default();
    assert!(error.starts_with("Comment could not be posted"), "{error}");
}
