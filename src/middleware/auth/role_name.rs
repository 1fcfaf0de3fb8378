//! signup 用 role-name filter
//!
//! `body.role_name` を正規化して `RequestCtx.role_name` に入れる:
//! なし / null / 空白のみ → `"student"`、それ以外は trim した値。
//! ただし `"admin"` と 32 文字超は 422。

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
use crate::state::AppState;

use super::body;

pub const DEFAULT_ROLE_NAME: &str = "student";
pub const RESERVED_ROLE_NAME: &str = "admin";
pub const MAX_ROLE_NAME_CHARS: usize = 32;

/// 判定順: 空白 → 予約名 → 長さ
pub fn normalize_role_name(raw: Option<&str>) -> Result<String, AppError> {
    let trimmed = raw.map(str::trim).unwrap_or_default();

    if trimmed.is_empty() {
        return Ok(DEFAULT_ROLE_NAME.to_string());
    }
    if trimmed == RESERVED_ROLE_NAME {
        return Err(AppError::RoleNameAdmin);
    }
    if trimmed.chars().count() > MAX_ROLE_NAME_CHARS {
        return Err(AppError::RoleNameTooLong);
    }

    Ok(trimmed.to_string())
}

/// `role_name` as it appears in a JSON body.
fn role_name_from_body(value: Option<&Value>) -> Result<String, AppError> {
    match value {
        None | Some(Value::Null) => normalize_role_name(None),
        Some(Value::String(s)) => normalize_role_name(Some(s)),
        Some(_) => Err(AppError::RoleNameNotString),
    }
}

pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.route_layer(middleware::from_fn_with_state(state, role_name_middleware))
}

async fn role_name_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let (mut req, json) = body::buffer_json(req, state.body_limit).await?;

    let role_name = role_name_from_body(body::field(json.as_ref(), "role_name"))?;

    RequestCtx::update(req.extensions_mut(), |ctx| ctx.role_name = Some(role_name));

    Ok(next.run(req).await)
}
