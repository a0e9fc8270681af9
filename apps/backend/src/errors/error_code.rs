//! Error codes for the Finora backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and appear verbatim in the `code`
//! field of problem-details responses.

use core::fmt;

/// Centralized error codes for the Finora backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Authorization header missing or not of the form `Bearer <token>`
    UnauthorizedMissingBearer,
    /// Access token rejected (bad signature, expired, malformed or wrong type)
    UnauthorizedInvalidJwt,
    /// Refresh token rejected (bad signature, expired, malformed or wrong type)
    InvalidRefreshToken,
    /// Unknown mobile number or wrong password
    InvalidCredentials,

    // Request Validation
    /// Request body failed field validation
    ValidationError,
    /// Request body could not be parsed
    BadRequest,

    // Conflicts
    /// Signup with a mobile number that is already registered
    UserAlreadyExists,

    // System Errors
    /// Backing data file could not be read or written
    StorageError,
    /// Backing data file exists but does not parse
    DataCorruption,
    Internal,
    ConfigError,
    /// Too many requests from one client
    RateLimited,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            Self::InvalidRefreshToken => "INVALID_REFRESH_TOKEN",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",

            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",

            Self::StorageError => "STORAGE_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
            Self::RateLimited => "RATE_LIMITED",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
