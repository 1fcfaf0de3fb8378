/*
 * Responsibility
 * - v1 の URL 構造と、どの route にどの filter を掛けるか
 *   - /health                      public
 *   - /users, /users/me            token
 *   - /users/{user_id}             token → only("admin")
 *   - /users/resolve               token → only("admin") → identity
 *   - /auth/register               role-name
 *   - /auth/login                  identity
 * - `route_layer` はその時点の route にしか掛からないので、内側の filter から順に組み、
 *   token filter は最後に掛ける (= 最初に走る)
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::auth::{access, identity, only, role, role_name};
use crate::state::AppState;

use crate::api::v1::handlers::{
    auth::{login, register},
    health::health,
    users::{get_user, list_users, me, resolve_user},
};

pub fn routes(state: AppState) -> Router<AppState> {
    let resolve = identity::apply(
        Router::new().route("/users/resolve", post(resolve_user)),
        state.clone(),
    );

    let admin = Router::new()
        .route("/users/{user_id}", get(get_user))
        .merge(resolve);
    let admin = role::apply(admin, only("admin"));

    let protected = Router::new()
        .route("/users", get(list_users))
        .route("/users/me", get(me))
        .merge(admin);
    let protected = access::apply(protected, state.clone());

    let signup = role_name::apply(
        Router::new().route("/auth/register", post(register)),
        state.clone(),
    );
    let signin = identity::apply(Router::new().route("/auth/login", post(login)), state);

    Router::new()
        .route("/health", get(health))
        .merge(protected)
        .merge(signup)
        .merge(signin)
}
