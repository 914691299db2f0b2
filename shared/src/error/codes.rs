//! Error codes returned by the employee directory
//!
//! The leading digit groups a code (see [`super::ErrorCategory`]):
//! 0xxx general, 1xxx auth, 2xxx permission, 65xx photo upload,
//! 8xxx employee records, 9xxx system.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric error code carried in every error response.
///
/// Serialized as a bare number so clients can match on it without
/// depending on variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    Success = 0,
    /// One or more submitted fields were rejected
    ValidationFailed = 2,
    NotFound = 3,
    AlreadyExists = 4,
    InvalidRequest = 5,
    RequiredField = 7,

    NotAuthenticated = 1001,
    InvalidCredentials = 1002,
    TokenExpired = 1003,
    TokenInvalid = 1004,

    /// The caller is signed in but lacks the role the route needs
    RoleRequired = 2002,
    AdminRequired = 2003,

    FileTooLarge = 6501,
    /// Extension outside `.jpg`, `.jpeg`, `.png`, `.gif`
    UnsupportedFileFormat = 6502,
    /// Allowed extension, but the bytes do not decode as an image
    InvalidImageFile = 6503,
    NoFilename = 6506,
    InvalidFileExtension = 6507,
    FileStorageFailed = 6509,
    PhotoNotFound = 6510,

    EmployeeNotFound = 8001,

    InternalError = 9001,
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: [ErrorCode; 22] = [
        ErrorCode::Success,
        ErrorCode::ValidationFailed,
        ErrorCode::NotFound,
        ErrorCode::AlreadyExists,
        ErrorCode::InvalidRequest,
        ErrorCode::RequiredField,
        ErrorCode::NotAuthenticated,
        ErrorCode::InvalidCredentials,
        ErrorCode::TokenExpired,
        ErrorCode::TokenInvalid,
        ErrorCode::RoleRequired,
        ErrorCode::AdminRequired,
        ErrorCode::FileTooLarge,
        ErrorCode::UnsupportedFileFormat,
        ErrorCode::InvalidImageFile,
        ErrorCode::NoFilename,
        ErrorCode::InvalidFileExtension,
        ErrorCode::FileStorageFailed,
        ErrorCode::PhotoNotFound,
        ErrorCode::EmployeeNotFound,
        ErrorCode::InternalError,
        ErrorCode::DatabaseError,
    ];

    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default message used when an error is built without one.
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "OK",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field is missing",

            ErrorCode::NotAuthenticated => "Sign in required",
            ErrorCode::InvalidCredentials => "Invalid username or password",
            ErrorCode::TokenExpired => "Session has expired",
            ErrorCode::TokenInvalid => "Session token is invalid",

            ErrorCode::RoleRequired => "A role this account lacks is required",
            ErrorCode::AdminRequired => "Admin role is required",

            ErrorCode::FileTooLarge => "Photo is too large",
            ErrorCode::UnsupportedFileFormat => "Photo format is not supported",
            ErrorCode::InvalidImageFile => "Photo is not a valid image",
            ErrorCode::NoFilename => "Photo has no file name",
            ErrorCode::InvalidFileExtension => "Photo file name has no extension",
            ErrorCode::FileStorageFailed => "Photo storage failed",
            ErrorCode::PhotoNotFound => "Photo not found",

            ErrorCode::EmployeeNotFound => "Employee not found",

            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        ErrorCode::ALL
            .into_iter()
            .find(|code| code.code() == value)
            .ok_or(InvalidErrorCode(value))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
