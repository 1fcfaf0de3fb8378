/*
 * Responsibility
 * - POST /auth/register: role-name filter の後ろ。正規化済み role で受け付ける
 *   (永続化・パスワードハッシュはここでは扱わない)
 * - POST /auth/login: identity filter の後ろ。解決済みユーザーに応答する
 *   (token 発行はここでは扱わない)
 */
use axum::{Json, http::StatusCode};

use crate::{
    api::v1::{
        dto::auth::{LoginResponse, RegisterRequest, RegisterResponse},
        extractors::RequestCtx,
    },
    error::AppError,
};

pub async fn register(
    ctx: RequestCtx,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    req.validate().map_err(|reason| {
        tracing::debug!(reason, "signup rejected");
        AppError::InvalidBody
    })?;

    let role_name = ctx
        .role_name
        .ok_or(AppError::Internal("role name filter not applied"))?;

    Ok((
        StatusCode::ACCEPTED,
        Json(RegisterResponse {
            username: req.username.trim().to_string(),
            role_name,
        }),
    ))
}

pub async fn login(ctx: RequestCtx) -> Result<Json<LoginResponse>, AppError> {
    let user = ctx
        .user_data
        .ok_or(AppError::Internal("identity filter not applied"))?;

    Ok(Json(LoginResponse {
        message: format!("{} is back!", user.username),
    }))
}
