/*
 * Responsibility
 * - 認可 filter チェーン
 *   - access:    token → RequestCtx.decoded_token (401)
 *   - role:      only(role) over decoded_token (403)
 *   - identity:  body.username → RequestCtx.user_data (401 / 500)
 *   - role_name: signup body.role_name → RequestCtx.role_name (422)
 * - 保護 route では外側から access → role → identity の順に掛ける
 */
pub mod access;
mod body;
pub mod identity;
pub mod role;
pub mod role_name;

pub use role::{RequireRole, only};
