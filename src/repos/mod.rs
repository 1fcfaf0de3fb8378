/*
 * Responsibility
 * - 永続化の境界 (UserStore) とそのエラー型
 */
pub mod error;
pub mod user_repo;

pub use user_repo::{PgUserStore, UserRecord, UserStore};
