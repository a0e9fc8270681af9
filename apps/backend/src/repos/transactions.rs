//! Transaction storage port.

use async_trait::async_trait;

use crate::errors::domain::DomainError;

/// A single income or expense entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub category: String,
    pub amount: f64,
    /// Free text; clients send `income` or `expense`.
    pub kind: String,
    pub note: Option<String>,
    /// Mobile number of the owning user, always taken from the access token.
    pub owner_mobile: String,
}

#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// All transactions owned by `mobile`, in insertion order.
    async fn list_by_owner(&self, mobile: &str) -> Result<Vec<Transaction>, DomainError>;

    async fn append(&self, txn: Transaction) -> Result<(), DomainError>;
}
