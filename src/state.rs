/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - token verifier (secret を保持), user store, 検索ごとの制限値
 * - Clone 前提で持つ (内部は Arc)。リクエストごとに書き換えない
 */
use std::sync::Arc;
use std::time::Duration;

use crate::repos::UserStore;
use crate::services::auth::TokenVerifier;

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<TokenVerifier>,
    pub users: Arc<dyn UserStore>,
    pub user_lookup_timeout: Duration,
    pub body_limit: usize,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("auth", &self.auth)
            .field("user_lookup_timeout", &self.user_lookup_timeout)
            .field("body_limit", &self.body_limit)
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(
        auth: Arc<TokenVerifier>,
        users: Arc<dyn UserStore>,
        user_lookup_timeout: Duration,
        body_limit: usize,
    ) -> Self {
        Self {
            auth,
            users,
            user_lookup_timeout,
            body_limit,
        }
    }
}
