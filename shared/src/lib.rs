//! Shared types for the employee directory
//!
//! Common types used by the server and its clients: error codes, the
//! JSON error body, and the domain models.

pub mod error;
pub mod models;

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
