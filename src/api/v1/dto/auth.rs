/*
 * Responsibility
 * - /auth の request/response DTO
 * - RegisterRequest には role_name を持たせない (role-name filter が正規化して
 *   RequestCtx 経由で渡す)
 */
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.username.trim().is_empty() {
            return Err("username is required");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub username: String,
    pub role_name: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
}
