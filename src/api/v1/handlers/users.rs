/*
 * Responsibility
 * - /users 系 handler (参照のみ)
 * - token filter の後ろで動く。/users/{user_id} と /users/resolve は only("admin")、
 *   /users/resolve はさらに identity filter の後ろ
 */
use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{
    api::v1::{dto::users::UserResponse, extractors::RequestCtx},
    error::AppError,
    services::auth::Claims,
    state::AppState,
};

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let rows = state.users.list().await?;

    Ok(Json(rows.into_iter().map(UserResponse::from).collect()))
}

/// 検証済み claims をそのまま返す。
pub async fn me(ctx: RequestCtx) -> Result<Json<Claims>, AppError> {
    ctx.decoded_token
        .map(Json)
        .ok_or(AppError::Internal("token filter not applied"))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserResponse>, AppError> {
    let row = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or(AppError::not_found("user"))?;

    Ok(Json(row.into()))
}

/// admin 向け username 検索。レコードは identity filter が解決済み。
pub async fn resolve_user(ctx: RequestCtx) -> Result<Json<UserResponse>, AppError> {
    ctx.user_data
        .map(|u| Json(u.into()))
        .ok_or(AppError::Internal("identity filter not applied"))
}
