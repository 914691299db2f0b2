//! Account Model
//!
//! Login identities. Separate from [`Employee`](super::Employee) records:
//! an employee entry is directory data, an account is who may edit it.

use serde::{Deserialize, Serialize};

/// Role name granting write access to the directory
pub const ROLE_ADMIN: &str = "Admin";

/// Account row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Account {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub hash_pass: String,
    pub role: String,
}

/// Create account payload (password already hashed)
#[derive(Debug, Clone)]
pub struct AccountCreate {
    pub username: String,
    pub hash_pass: String,
    pub role: String,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Public account info returned after login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub role: String,
}

/// Login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}
