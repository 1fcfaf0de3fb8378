//! access token 検証 → `RequestCtx.decoded_token`
//!
//! - `Authorization: <jwt>` または `Authorization: Bearer <jwt>`
//! - header なし・空・scheme のみ: 401 `Token required`
//! - 設定された secret で検証できないもの: 401 `Token invalid`

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::RequestCtx;
use crate::error::AppError;
use crate::state::AppState;

/// `router` に現在ある全 route の前に token filter を掛ける。
///
/// 例：
/// ```ignore
/// let users = Router::new().route("/users", get(list_users));
/// let users = middleware::auth::access::apply(users, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.route_layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let raw = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AppError::TokenRequired)?;

    let raw = raw.to_str().map_err(|_| {
        tracing::warn!("authorization header is not valid UTF-8");
        AppError::TokenInvalid
    })?;

    let token = bearer_token(raw).ok_or(AppError::TokenRequired)?;

    let claims = match state.auth.verify(token) {
        Ok(claims) => claims,
        Err(err) => {
            tracing::warn!(error = %err, "access token verification failed");
            return Err(AppError::TokenInvalid);
        }
    };

    tracing::debug!(role_name = %claims.role_name, "access token verified");

    RequestCtx::update(req.extensions_mut(), |ctx| ctx.decoded_token = Some(claims));

    Ok(next.run(req).await)
}

// issuer は素の token を返す。`Bearer ` を付けるクライアントも受け付ける。
// scheme だけで token が無いもの（`Bearer `）と空白のみは未指定扱い。
fn bearer_token(raw: &str) -> Option<&str> {
    let raw = raw.trim();
    let token = match raw.split_once(char::is_whitespace) {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim_start(),
        _ if raw.eq_ignore_ascii_case("bearer") => "",
        _ => raw,
    };

    (!token.is_empty()).then_some(token)
}
