//! Authentication Handlers
//!
//! Exchanges account credentials for a JWT access token

use std::time::Duration;

use axum::{Json, extract::State};
use shared::models::{LoginRequest, LoginResponse, UserInfo};

use crate::AppError;
use crate::auth::password::verify_password;
use crate::core::ServerState;
use crate::db::repository::account;
use crate::security_log;
use crate::utils::validation::{MAX_PASSWORD_LEN, MAX_USERNAME_LEN};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// Login handler
///
/// Unknown usernames, wrong passwords and oversized input produce the same
/// error. Oversized input never reaches the database or argon2.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let username = req.username.trim().to_string();
    let oversized = username.chars().count() > MAX_USERNAME_LEN
        || req.password.chars().count() > MAX_PASSWORD_LEN;

    let account = if oversized {
        None
    } else {
        account::find_by_username(&state.db, &username).await?
    };

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    if oversized {
        security_log!("WARN", "login_failed", reason = "oversized_input");
        return Err(AppError::invalid_credentials());
    }

    let account = match account {
        Some(a) if verify_password(&req.password, &a.hash_pass) => a,
        Some(_) => {
            security_log!("WARN", "login_failed", username = username.as_str(), reason = "invalid_password");
            return Err(AppError::invalid_credentials());
        }
        None => {
            security_log!("WARN", "login_failed", username = username.as_str(), reason = "user_not_found");
            return Err(AppError::invalid_credentials());
        }
    };

    let token = state
        .get_jwt_service()
        .generate_token(account.id, &account.username, &account.role)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(
        user_id = account.id,
        username = %account.username,
        role = %account.role,
        "User logged in successfully"
    );

    Ok(Json(LoginResponse {
        token,
        user: UserInfo {
            id: account.id,
            username: account.username,
            role: account.role,
        },
    }))
}
