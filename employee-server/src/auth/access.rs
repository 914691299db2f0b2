//! Access predicate
//!
//! Each protected handler states its requirement at the top:
//!
//! ```ignore
//! Access::Role(ROLE_ADMIN).check(user.as_ref())?;
//! ```

use crate::auth::CurrentUser;
use crate::security_log;
use crate::utils::{AppError, AppResult, ErrorCode};

/// Who may perform an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Anyone, including anonymous callers
    Public,
    /// Any caller with a valid token
    Authenticated,
    /// Authenticated with the given role (case-insensitive)
    Role(&'static str),
}

impl Access {
    /// 401 when a token is needed but absent, 403 when the role does not match
    pub fn check(&self, user: Option<&CurrentUser>) -> AppResult<()> {
        match (self, user) {
            (Access::Public, _) => Ok(()),
            (_, None) => Err(AppError::unauthorized()),
            (Access::Authenticated, Some(_)) => Ok(()),
            (Access::Role(role), Some(user)) => {
                if user.has_role(role) {
                    return Ok(());
                }
                security_log!(
                    "WARN",
                    "role_denied",
                    username = user.username.as_str(),
                    role = user.role.as_str(),
                    required = *role
                );
                Err(role_error(role))
            }
        }
    }
}

fn role_error(role: &str) -> AppError {
    if role.eq_ignore_ascii_case(shared::models::ROLE_ADMIN) {
        AppError::new(ErrorCode::AdminRequired)
    } else {
        AppError::with_message(ErrorCode::RoleRequired, format!("Role '{role}' is required"))
            .with_detail("role", role)
    }
}
