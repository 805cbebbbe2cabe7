//! HttpTransport against a real in-process HTTP server
//!
//! Spins up an axum router on an ephemeral port that decodes the form body
//! the same way the intake endpoint does.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Form, Json, Router};
use intake_core::{
    Field, HttpTransport, IntakeConfig, Redirector, SubmissionOutcome, SubmitError, Submitter,
    Transport, WizardState,
};
use serde_json::{json, Value};

type Seen = Arc<Mutex<Vec<(String, HashMap<String, String>)>>>;

async fn intake(
    State(seen): State<Seen>,
    headers: HeaderMap,
    Form(fields): Form<HashMap<String, String>>,
) -> Json<Value> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let duplicate = fields.get("Phone").map(String::as_str) == Some("910000000000");
    seen.lock().unwrap().push((content_type, fields));

    if duplicate {
        Json(json!({ "status": "error", "message": "Duplicate phone" }))
    } else {
        Json(json!({ "status": "success", "row": 12 }))
    }
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "script error")
}

async fn not_json() -> &'static str {
    "<!doctype html><p>sign in</p>"
}

/// Start the test server, returning its base URL and the request log.
async fn spawn_server() -> (String, Seen) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/exec", post(intake))
        .route("/broken", post(broken))
        .route("/html", post(not_json))
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });

    (format!("http://{}", addr), seen)
}

#[derive(Default)]
struct RecordingRedirect(Mutex<Vec<String>>);

impl Redirector for RecordingRedirect {
    fn redirect(&self, url: &str) {
        self.0.lock().unwrap().push(url.to_string());
    }
}

fn finished_wizard(phone: &str) -> WizardState {
    let mut state = WizardState::new();
    let values = [
        "Ravi Kumar",
        "29",
        phone,
        "Male",
        "Moderately true",
        "Completely true",
        "Slightly true",
    ];
    for (field, value) in Field::ALL.into_iter().zip(values) {
        state.set_answer(field, value);
    }
    while !state.is_last() {
        state.go_next();
    }
    state
}

fn submitter_for(endpoint: String) -> Submitter<HttpTransport, RecordingRedirect> {
    let config = IntakeConfig::from_overrides(
        Some(endpoint),
        Some("https://pay.example.test/consult".to_string()),
        None,
    )
    .expect("valid config");
    Submitter::new(config, HttpTransport::new(), RecordingRedirect::default())
}

#[tokio::test]
async fn test_posts_form_encoded_body() {
    let (base, seen) = spawn_server().await;
    let transport = HttpTransport::new();
    let payload = finished_wizard("919876543210").answers().to_payload();

    let reply = transport
        .post_form(&format!("{}/exec", base), &payload)
        .await
        .expect("request succeeds");

    assert_eq!(reply.status, 200);
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (content_type, fields) = &seen[0];
    assert_eq!(content_type, "application/x-www-form-urlencoded");
    assert_eq!(fields.len(), 7);
    assert_eq!(fields["Name"], "Ravi Kumar");
    assert_eq!(fields["Age"], "29");
    assert_eq!(fields["Phone"], "919876543210");
    assert_eq!(fields["Gender"], "Male");
    assert_eq!(fields["Question1"], "Moderately true");
    assert_eq!(fields["Question2"], "Completely true");
    assert_eq!(fields["Question3"], "Slightly true");
}

#[tokio::test]
async fn test_end_to_end_success() {
    let (base, _seen) = spawn_server().await;
    let submitter = submitter_for(format!("{}/exec", base));
    let mut state = finished_wizard("919876543210");

    let outcome = submitter.submit(&mut state).await;

    assert_eq!(outcome, SubmissionOutcome::Accepted);
    assert_eq!(state, WizardState::new());
    assert_eq!(
        *submitter.redirector().0.lock().unwrap(),
        vec!["https://pay.example.test/consult".to_string()]
    );
}

#[tokio::test]
async fn test_end_to_end_rejection() {
    let (base, _seen) = spawn_server().await;
    let submitter = submitter_for(format!("{}/exec", base));
    let mut state = finished_wizard("910000000000");

    submitter.submit(&mut state).await;

    assert_eq!(state.submission().error.as_deref(), Some("Duplicate phone"));
    assert_eq!(state.answers().get(Field::Name), "Ravi Kumar");
    assert!(submitter.redirector().0.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_server_error_status() {
    let (base, _seen) = spawn_server().await;
    let submitter = submitter_for(format!("{}/broken", base));
    let mut state = finished_wizard("919876543210");

    let outcome = submitter.submit(&mut state).await;

    assert!(matches!(
        outcome,
        SubmissionOutcome::Failed(SubmitError::Transport(_))
    ));
    assert_eq!(
        state.submission().error.as_deref(),
        Some("Failed to submit form")
    );
}

#[tokio::test]
async fn test_html_reply_fails_to_decode() {
    let (base, _seen) = spawn_server().await;
    let submitter = submitter_for(format!("{}/html", base));
    let mut state = finished_wizard("919876543210");

    let outcome = submitter.submit(&mut state).await;

    assert!(matches!(
        outcome,
        SubmissionOutcome::Failed(SubmitError::Decode(_))
    ));
}

#[tokio::test]
async fn test_unreachable_endpoint() {
    // Bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let submitter = submitter_for(format!("http://{}/exec", addr));
    let mut state = finished_wizard("919876543210");

    let outcome = submitter.submit(&mut state).await;

    assert!(matches!(
        outcome,
        SubmissionOutcome::Failed(SubmitError::Transport(_))
    ));
    assert_eq!(state.current_index(), 6);
}
