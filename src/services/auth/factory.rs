/// Factory: `Config` から `TokenVerifier` を組み立てる
use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::TokenVerifier;

pub fn build_token_verifier(config: &Config) -> Arc<TokenVerifier> {
    Arc::new(TokenVerifier::new(
        &config.jwt_secret,
        config.token_leeway_seconds,
    ))
}
