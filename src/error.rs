/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / `{"message": ...}` body)
 * - システム障害はここで一度だけログに出す
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::repos::error::RepoError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Every way a request can be turned away.
///
/// The `#[error]` text of the request-level variants is the client-facing message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Token required")]
    TokenRequired,
    #[error("Token invalid")]
    TokenInvalid,
    #[error("This is not for you")]
    Forbidden,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Role name can not be admin")]
    RoleNameAdmin,
    #[error("Role name can not be longer than 32 chars")]
    RoleNameTooLong,
    #[error("Role name must be a string")]
    RoleNameNotString,
    #[error("Invalid request body")]
    InvalidBody,
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    #[error("user store failure")]
    Store(#[from] RepoError),
    #[error("internal error: {0}")]
    Internal(&'static str),
}

impl AppError {
    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::TokenRequired | AppError::TokenInvalid | AppError::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::RoleNameAdmin | AppError::RoleNameTooLong | AppError::RoleNameNotString => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::InvalidBody => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Store(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if status.is_server_error() {
            // store/driver の詳細はクライアントに返さない
            tracing::error!(error = ?self, "request failed");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let res = err.into_response();
        let status = res.status();
        let body = res.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn request_level_errors_render_their_message() {
        let cases = [
            (AppError::TokenRequired, 401, "Token required"),
            (AppError::TokenInvalid, 401, "Token invalid"),
            (AppError::Forbidden, 403, "This is not for you"),
            (AppError::InvalidCredentials, 401, "Invalid credentials"),
            (AppError::RoleNameAdmin, 422, "Role name can not be admin"),
            (
                AppError::RoleNameTooLong,
                422,
                "Role name can not be longer than 32 chars",
            ),
            (AppError::not_found("user"), 404, "user not found"),
        ];

        for (err, status, message) in cases {
            let (got_status, body) = render(err).await;
            assert_eq!(got_status.as_u16(), status);
            assert_eq!(body, serde_json::json!({ "message": message }));
        }
    }

    #[tokio::test]
    async fn system_failures_are_opaque() {
        let (status, body) = render(AppError::Store(RepoError::Timeout)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Internal server error");

        let (status, body) = render(AppError::Internal("decoded token missing")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Internal server error");
    }
}
