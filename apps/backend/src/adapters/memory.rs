//! In-memory stores for tests and ephemeral runs.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::errors::domain::{ConflictKind, DomainError};
use crate::repos::transactions::{Transaction, TransactionStore};
use crate::repos::users::{User, UserStore};

#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().iter().find(|u| u.mobile == mobile).cloned())
    }

    async fn append(&self, user: User) -> Result<(), DomainError> {
        let mut users = self.users.write();
        if users.iter().any(|u| u.mobile == user.mobile) {
            return Err(DomainError::conflict(
                ConflictKind::DuplicateMobile,
                "mobile number already registered",
            ));
        }
        users.push(user);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryTransactionStore {
    transactions: RwLock<Vec<Transaction>>,
}

#[async_trait]
impl TransactionStore for InMemoryTransactionStore {
    async fn list_by_owner(&self, mobile: &str) -> Result<Vec<Transaction>, DomainError> {
        Ok(self
            .transactions
            .read()
            .iter()
            .filter(|t| t.owner_mobile == mobile)
            .cloned()
            .collect())
    }

    async fn append(&self, txn: Transaction) -> Result<(), DomainError> {
        self.transactions.write().push(txn);
        Ok(())
    }
}
