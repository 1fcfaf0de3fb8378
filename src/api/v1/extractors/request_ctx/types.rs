/*
 * Responsibility
 * - auth filter が埋めて handler が読むリクエスト単位のコンテキスト
 * - request extensions に置く (受信 payload は書き換えない)
 */
use axum::http::Extensions;

use crate::repos::UserRecord;
use crate::services::auth::Claims;

/// What the filter chain has learned about the current request so far.
///
/// - `decoded_token`: set by the token filter
/// - `user_data`: set by the identity filter
/// - `role_name`: the normalized signup role, set by the role-name filter
#[derive(Debug, Clone, Default)]
pub struct RequestCtx {
    pub decoded_token: Option<Claims>,
    pub user_data: Option<UserRecord>,
    pub role_name: Option<String>,
}

impl RequestCtx {
    /// Apply `f` to the context stored in `extensions`, creating it on first use.
    pub fn update(extensions: &mut Extensions, f: impl FnOnce(&mut RequestCtx)) {
        let mut ctx = extensions.remove::<RequestCtx>().unwrap_or_default();
        f(&mut ctx);
        extensions.insert(ctx);
    }
}
