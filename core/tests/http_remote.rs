#![allow(clippy::unwrap_used, clippy::panic)]

//! Drives `HttpRemoteNotes` against a real HTTP server on an ephemeral
//! port, covering status propagation, envelope decoding and the
//! client-side id merge on update.

use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use noteboard_core::{Envelope, HttpRemoteNotes, Note, NoteDraft, RemoteNotes, RemoteNotesError};
use serde_json::{json, Value};

type Received = Arc<Mutex<Vec<Value>>>;

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

fn sample_note() -> Note {
    Note {
        id: 42,
        title: "Learn Rust".to_string(),
        subheading: "ownership".to_string(),
        content: "first line\nsecond line".to_string(),
    }
}

#[tokio::test]
async fn test_fetch_all_decodes_envelope() {
    let note = sample_note();
    let app = Router::new().route(
        "/all-notes",
        get({
            let note = note.clone();
            move || async move {
                Json(Envelope {
                    message: "ok".to_string(),
                    data: vec![note],
                })
            }
        }),
    );

    let client = HttpRemoteNotes::new(serve(app).await);
    let notes = client.fetch_all().await.unwrap();

    assert_eq!(notes, vec![note]);
    // Newlines survive the round trip
    assert_eq!(notes[0].content, "first line\nsecond line");
}

#[tokio::test]
async fn test_fetch_all_propagates_non_success_status() {
    let app = Router::new().route(
        "/all-notes",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );

    let client = HttpRemoteNotes::new(serve(app).await);
    let result = client.fetch_all().await;

    match result {
        Err(RemoteNotesError::Remote { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected Remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_all_missing_data_is_malformed() {
    let app = Router::new().route("/all-notes", get(|| async { Json(json!({ "message": "ok" })) }));

    let client = HttpRemoteNotes::new(serve(app).await);
    let result = client.fetch_all().await;

    assert!(matches!(
        result,
        Err(RemoteNotesError::MalformedResponse(_))
    ));
}

#[tokio::test]
async fn test_create_sends_json_body_and_decodes_ack() {
    let received: Received = Arc::default();
    let app = Router::new().route(
        "/add-note",
        post({
            let received = Arc::clone(&received);
            move |Json(body): Json<Value>| async move {
                received.lock().unwrap().push(body.clone());
                Json(json!({ "message": "created", "data": body }))
            }
        }),
    );

    let client = HttpRemoteNotes::new(serve(app).await);
    let note = sample_note();
    let ack = client.create(&note).await.unwrap();

    assert_eq!(ack, note);

    let sent = received.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0]["id"], 42);
    assert_eq!(sent[0]["title"], "Learn Rust");
}

#[tokio::test]
async fn test_create_propagates_non_success_status() {
    let app = Router::new().route(
        "/add-note",
        post(|| async { (StatusCode::BAD_REQUEST, "nope") }),
    );

    let client = HttpRemoteNotes::new(serve(app).await);
    let result = client.create(&sample_note()).await;

    assert!(matches!(
        result,
        Err(RemoteNotesError::Remote { status: 400, .. })
    ));
}

#[tokio::test]
async fn test_update_merges_id_into_payload() {
    let received: Received = Arc::default();
    let app = Router::new().route(
        "/update-note",
        put({
            let received = Arc::clone(&received);
            move |Json(body): Json<Value>| async move {
                received.lock().unwrap().push(body.clone());
                Json(json!({ "message": "updated", "data": body }))
            }
        }),
    );

    let client = HttpRemoteNotes::new(serve(app).await);
    let draft = NoteDraft {
        title: "Learn Rust".to_string(),
        subheading: "borrowing".to_string(),
        content: "revised".to_string(),
    };
    let ack = client.update(7, &draft).await.unwrap();

    assert_eq!(ack.id, 7);
    assert_eq!(ack.subheading, "borrowing");

    let sent = received.lock().unwrap();
    assert_eq!(sent[0]["id"], 7);
    assert_eq!(sent[0]["content"], "revised");
}

#[tokio::test]
async fn test_unreachable_service_is_a_network_error() {
    // Nothing listens here; the port comes from a listener we drop
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpRemoteNotes::new(format!("http://{addr}"));
    let result = client.fetch_all().await;

    assert!(matches!(result, Err(RemoteNotesError::Network(_))));
}
