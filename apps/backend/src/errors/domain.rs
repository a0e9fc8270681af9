//! Domain-level error type used across services and stores.
//!
//! This error type is HTTP-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! through `From<DomainError> for AppError`.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Operational failures of the file-backed stores
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfraErrorKind {
    /// Reading, writing or locking a data file failed
    Storage,
    /// A data file exists but its contents do not deserialize
    DataCorruption,
    /// A blocking task panicked or was cancelled
    TaskFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictKind {
    /// Another user already owns this mobile number
    DuplicateMobile,
}

/// Errors raised by stores
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Write refused because it would break a uniqueness rule
    Conflict(ConflictKind, String),
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }
}

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::infra(InfraErrorKind::Storage, e.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            DomainError::infra(InfraErrorKind::Storage, e.to_string())
        } else {
            DomainError::infra(InfraErrorKind::DataCorruption, e.to_string())
        }
    }
}

impl From<tokio::task::JoinError> for DomainError {
    fn from(e: tokio::task::JoinError) -> Self {
        DomainError::infra(InfraErrorKind::TaskFailed, e.to_string())
    }
}
