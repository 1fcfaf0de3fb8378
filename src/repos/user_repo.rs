/*
 * Responsibility
 * - UserStore: username 検索 (identity filter 用) と、/users handler 用の id 検索・一覧
 * - PgUserStore: `users` / `roles` テーブル向け SQLx 実装
 * - 見つかった/見つからないは Option で明示し、エラーはエラーとして返す
 */
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct UserRecord {
    pub user_id: Uuid,
    pub username: String,
    pub role_name: String,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Exact, case-sensitive match on `username`.
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<UserRecord>>;

    async fn find_by_id(&self, user_id: Uuid) -> RepoResult<Option<UserRecord>>;

    async fn list(&self) -> RepoResult<Vec<UserRecord>>;
}

#[derive(Clone, Debug)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<UserRecord>> {
        let row = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT u.user_id, u.username, r.role_name, u.created_at
            FROM users u
            JOIN roles r ON r.role_id = u.role_id
            WHERE u.username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }

    async fn find_by_id(&self, user_id: Uuid) -> RepoResult<Option<UserRecord>> {
        let row = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT u.user_id, u.username, r.role_name, u.created_at
            FROM users u
            JOIN roles r ON r.role_id = u.role_id
            WHERE u.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }

    async fn list(&self) -> RepoResult<Vec<UserRecord>> {
        let rows = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT u.user_id, u.username, r.role_name, u.created_at
            FROM users u
            JOIN roles r ON r.role_id = u.role_id
            ORDER BY u.created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows)
    }
}
