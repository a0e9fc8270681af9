//! Recording and listing a user's transactions.

use tracing::debug;

use crate::error::AppError;
use crate::logging::pii::MaskedMobile;
use crate::repos::transactions::{Transaction, TransactionStore};

/// Transaction fields supplied by the client. The owner is not among them.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub category: String,
    pub amount: f64,
    pub kind: String,
    pub note: Option<String>,
}

impl NewTransaction {
    fn validate(&self) -> Result<(), AppError> {
        if self.category.trim().is_empty() {
            return Err(AppError::invalid("category must not be empty"));
        }
        if self.kind.trim().is_empty() {
            return Err(AppError::invalid("type must not be empty"));
        }
        if !self.amount.is_finite() {
            return Err(AppError::invalid("amount must be a finite number"));
        }
        Ok(())
    }

    fn owned_by(self, owner_mobile: &str) -> Transaction {
        Transaction {
            category: self.category,
            amount: self.amount,
            kind: self.kind,
            note: self.note,
            owner_mobile: owner_mobile.to_string(),
        }
    }
}

/// Record a transaction for `owner_mobile`, which callers take from the
/// verified access token.
pub async fn add_transaction(
    store: &dyn TransactionStore,
    owner_mobile: &str,
    input: NewTransaction,
) -> Result<(), AppError> {
    input.validate()?;
    store.append(input.owned_by(owner_mobile)).await?;
    debug!(owner = %MaskedMobile(owner_mobile), "transaction recorded");
    Ok(())
}

pub async fn list_transactions(
    store: &dyn TransactionStore,
    owner_mobile: &str,
) -> Result<Vec<Transaction>, AppError> {
    Ok(store.list_by_owner(owner_mobile).await?)
}
