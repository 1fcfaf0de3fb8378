/*
 * Responsibility
 * - users の response DTO
 */
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::repos::UserRecord;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user_id: Uuid,
    pub username: String,
    pub role_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserRecord> for UserResponse {
    fn from(u: UserRecord) -> Self {
        Self {
            user_id: u.user_id,
            username: u.username,
            role_name: u.role_name,
            created_at: u.created_at,
        }
    }
}
