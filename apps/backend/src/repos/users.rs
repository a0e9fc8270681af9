//! User storage port.

use async_trait::async_trait;

use crate::errors::domain::DomainError;

/// User domain model. `mobile` is the identity key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
    pub mobile: String,
    /// bcrypt hash string, salt and cost included
    pub password_hash: String,
}

/// Persistence for user records, keyed by mobile number.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<User>, DomainError>;

    async fn exists(&self, mobile: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_mobile(mobile).await?.is_some())
    }

    /// Persist a new user.
    ///
    /// Must fail with `ConflictKind::DuplicateMobile` when the mobile is
    /// already registered; the check and the write are atomic.
    async fn append(&self, user: User) -> Result<(), DomainError>;
}
