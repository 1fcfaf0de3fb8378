//! Shared helpers for router-level tests.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::api::v1::extractors::RequestCtx;
use crate::repos::UserStore;
use crate::repos::user_repo::memory::MemoryUserStore;
use crate::services::auth::TokenVerifier;
use crate::services::auth::access_jwt::testing::SECRET;
use crate::state::AppState;

pub fn state_with_store(users: Arc<dyn UserStore>) -> AppState {
    AppState::new(
        Arc::new(TokenVerifier::new(SECRET, 0)),
        users,
        Duration::from_secs(2),
        64 * 1024,
    )
}

pub fn test_state() -> AppState {
    state_with_store(Arc::new(MemoryUserStore::default()))
}

/// Terminal handler that reports what the filters put into the context.
pub async fn echo_ctx(ctx: RequestCtx) -> Json<Value> {
    Json(json!({
        "decoded_token": ctx.decoded_token,
        "user_data": ctx.user_data,
        "role_name": ctx.role_name,
    }))
}

pub fn get_with_auth(uri: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::get(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let res = app.oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn send_raw(app: Router, uri: &str, body: &'static str) -> (StatusCode, Value) {
    let req = Request::post(uri)
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(body))
        .unwrap();
    send(app, req).await
}
