use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{router, state::AppState};


fn app(db: &DatabaseConnection) -> Router {
    router::router().with_state(AppState::new(db.clone()))
}

/// Sends one request through the router.
///
/// Returns the status and the parsed JSON body, `None` when the body is empty.
async fn send(
    db: &DatabaseConnection,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Option<Value>) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(match body {
            Some(body) => Body::from(body.to_string()),
            None => Body::empty(),
        })
        .unwrap();

    let response = app(db).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    if bytes.is_empty() {
        (status, None)
    } else {
        (status, Some(serde_json::from_slice(&bytes).unwrap()))
    }
}
