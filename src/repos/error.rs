/**
 * Responsibility
 * - user store が検索に答えられなかったときに上へ返すエラー
 * - 「ユーザーがいない」はエラーではない (Ok(None) を返す)
 */
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("db error")]
    Db(#[from] sqlx::Error),
    #[error("lookup timed out")]
    Timeout,
}

pub type RepoResult<T> = Result<T, RepoError>;
