//! role gate: 検証済み token の role が一致したときだけ `only("admin")` を通す
//!
//! `access::apply` の内側に掛けること。token filter が入れた claims を読むだけで、
//! 自分では何も検証しない。

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::RequestCtx;
use crate::error::AppError;
use crate::services::auth::Claims;
use crate::state::AppState;

/// A configured role filter. Cheap to clone, holds nothing but the role it wants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequireRole {
    role_name: Arc<str>,
}

/// `only(role_name)`: build the filter for one required role.
pub fn only(role_name: impl Into<Arc<str>>) -> RequireRole {
    RequireRole {
        role_name: role_name.into(),
    }
}

impl RequireRole {
    pub fn role_name(&self) -> &str {
        &self.role_name
    }

    /// Exact, case-sensitive comparison. No wildcards, no hierarchy.
    pub fn check(&self, claims: &Claims) -> Result<(), AppError> {
        if claims.role_name == *self.role_name {
            Ok(())
        } else {
            Err(AppError::Forbidden)
        }
    }

    async fn run(self, req: Request<Body>, next: Next) -> Result<Response, AppError> {
        let Some(claims) = req
            .extensions()
            .get::<RequestCtx>()
            .and_then(|ctx| ctx.decoded_token.as_ref())
        else {
            // layer の組み方の誤り (クライアント起因ではない)
            tracing::error!(
                required = %self.role_name(),
                "role filter ran before the token filter"
            );
            return Err(AppError::Internal("decoded token missing"));
        };

        if let Err(err) = self.check(claims) {
            tracing::info!(
                required = %self.role_name(),
                actual = %claims.role_name,
                "role mismatch"
            );
            return Err(err);
        }

        Ok(next.run(req).await)
    }
}

/// Put `required` in front of every route currently in `router`.
pub fn apply(router: Router<AppState>, required: RequireRole) -> Router<AppState> {
    router.route_layer(middleware::from_fn(move |req: Request<Body>, next: Next| {
        required.clone().run(req, next)
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::routing::get;
    use serde_json::{Map, json};

    use super::*;
    use crate::middleware::auth::access;
    use crate::services::auth::access_jwt::testing::token_for;
    use crate::test_support::{echo_ctx, get_with_auth, send, test_state};

    fn claims(role_name: &str) -> Claims {
        Claims {
            role_name: role_name.to_string(),
            extra: Map::new(),
        }
    }

    fn app(required: &str) -> Router {
        let state = test_state();
        let router = Router::new().route("/echo", get(echo_ctx));
        let router = apply(router, only(required));
        access::apply(router, state.clone()).with_state(state)
    }

    #[test]
    fn check_is_exact_and_case_sensitive() {
        let admin = only("admin");
        assert!(admin.check(&claims("admin")).is_ok());

        for other in ["Admin", "ADMIN", " admin", "admin ", "", "*", "student"] {
            assert!(
                matches!(admin.check(&claims(other)), Err(AppError::Forbidden)),
                "role {other:?} must be refused"
            );
        }
    }

    #[test]
    fn factory_captures_the_role() {
        let instructor = only(String::from("instructor"));
        assert_eq!(instructor.role_name(), "instructor");
        assert_eq!(instructor.clone(), only("instructor"));
    }

    #[tokio::test]
    async fn matching_role_proceeds() {
        let token = token_for("alice", "admin");
        let (status, body) = send(app("admin"), get_with_auth("/echo", Some(&token))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["decoded_token"]["role_name"], "admin");
    }

    #[tokio::test]
    async fn other_role_is_refused() {
        let token = token_for("bob", "student");
        let (status, body) = send(app("admin"), get_with_auth("/echo", Some(&token))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, json!({ "message": "This is not for you" }));
    }

    #[tokio::test]
    async fn token_filter_runs_first() {
        // No token at all: the 401 from the outer filter wins over any role decision.
        let (status, body) = send(app("admin"), get_with_auth("/echo", None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "message": "Token required" }));
    }

    #[tokio::test]
    async fn missing_token_filter_is_a_server_error() {
        let router = apply(Router::new().route("/echo", get(echo_ctx)), only("admin"));
        let app = router.with_state(test_state());

        let (status, _) = send(app, get_with_auth("/echo", None)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
