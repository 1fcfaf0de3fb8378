//! identity filter: `body.username` が store に存在するユーザーであること
//!
//! - 見つかった: レコードを `RequestCtx.user_data` に入れる
//! - 見つからない (username が使えない場合も): 401 `Invalid credentials`
//! - store 障害 / timeout: `AppError::Store` (error boundary で 500)

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};
use serde_json::Value;

use crate::api::v1::extractors::RequestCtx;
use crate::error::AppError;
use crate::repos::{UserRecord, error::RepoError};
use crate::state::AppState;

use super::body;

pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.route_layer(middleware::from_fn_with_state(state, identity_middleware))
}

async fn identity_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let (mut req, json) = body::buffer_json(req, state.body_limit).await?;

    let Some(username) = body::field(json.as_ref(), "username").and_then(Value::as_str) else {
        return Err(AppError::InvalidCredentials);
    };

    let user = resolve(&state, username).await?.ok_or_else(|| {
        tracing::info!(username = %username, "unknown username");
        AppError::InvalidCredentials
    })?;

    RequestCtx::update(req.extensions_mut(), |ctx| ctx.user_data = Some(user));

    Ok(next.run(req).await)
}

/// 時間制限付きで 1 回だけ検索する (リトライなし)。
async fn resolve(state: &AppState, username: &str) -> Result<Option<UserRecord>, RepoError> {
    tokio::time::timeout(
        state.user_lookup_timeout,
        state.users.find_by_username(username),
    )
    .await
    .map_err(|_| RepoError::Timeout)?
}
