//! reqwest store against a local stand-in for the PostgREST endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::Json,
    routing::post,
    Router,
};
use portal::SupabaseStore;
use portal_core::{Outcome, ProblemForm, StoreError, SubmissionWorkflow, SupabaseConfig};
use serde_json::{json, Value};
use tokio::net::TcpListener;

type Captured = Arc<Mutex<Vec<(HeaderMap, Value)>>>;

async fn accept(
    State(captured): State<Captured>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> StatusCode {
    captured.lock().unwrap().push((headers, body));
    StatusCode::CREATED
}

async fn reject() -> (StatusCode, Json<Value>) {
    (
        StatusCode::CONFLICT,
        Json(json!({
            "code": "23505",
            "details": null,
            "hint": null,
            "message": "duplicate key value violates unique constraint"
        })),
    )
}

async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn jane() -> ProblemForm {
    ProblemForm {
        name: "Jane Doe".into(),
        affiliation: "DUK".into(),
        contact_email: "jane@duk.ac.in".into(),
        problem_title: "Crop disease detection".into(),
        problem_description: "We need an on-device model to detect leaf blight from phone photos in low connectivity areas.".into(),
        category: "Computer Vision".into(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_insert_reaches_table_endpoint() {
    let captured = Captured::default();
    let app = Router::new()
        .route("/rest/v1/problem_submissions", post(accept))
        .with_state(captured.clone());
    let base = spawn(app).await;

    let workflow = SubmissionWorkflow::new(SupabaseStore::new(SupabaseConfig::new(base, "anon-key")));
    let mut form = jane();

    let outcome = workflow.submit(&mut form).await;

    assert!(outcome.is_submitted(), "got {:?}", outcome);
    assert!(form.is_empty());

    let captured = captured.lock().unwrap();
    assert_eq!(captured.len(), 1);
    let (headers, body) = &captured[0];
    assert_eq!(headers["apikey"], "anon-key");
    assert_eq!(headers["authorization"], "Bearer anon-key");
    assert_eq!(headers["prefer"], "return=minimal");
    assert_eq!(body["contact_email"], "jane@duk.ac.in");
    assert_eq!(body["category"], "Computer Vision");
    assert!(body["additional_files_links"].is_null());
}

#[tokio::test]
async fn test_rejection_keeps_form() {
    let app = Router::new().route("/rest/v1/problem_submissions", post(reject));
    let base = spawn(app).await;

    let workflow = SubmissionWorkflow::new(SupabaseStore::new(SupabaseConfig::new(base, "anon-key")));
    let mut form = jane();

    let outcome = workflow.submit(&mut form).await;

    match outcome {
        Outcome::Failed(StoreError::Rejected { status, message }) => {
            assert_eq!(status, 409);
            assert!(message.contains("duplicate key"));
        }
        other => panic!("expected rejection, got {:?}", other),
    }
    assert_eq!(form, jane());
    assert!(!workflow.is_submitting());
}

#[tokio::test]
async fn test_unreachable_store_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let workflow = SubmissionWorkflow::new(SupabaseStore::new(SupabaseConfig::new(
        format!("http://{}", addr),
        "anon-key",
    )));
    let mut form = jane();

    let outcome = workflow.submit(&mut form).await;

    assert!(matches!(outcome, Outcome::Failed(StoreError::Network(_))));
    assert_eq!(form, jane());
}
