//! `TransactionStore` backed by a JSON array in `finance.json`.

mod dto;

use std::path::PathBuf;

use async_trait::async_trait;

pub use dto::TransactionRecord;

use crate::adapters::json_file::JsonFile;
use crate::errors::domain::DomainError;
use crate::repos::transactions::{Transaction, TransactionStore};

#[derive(Debug, Clone)]
pub struct JsonTransactionStore {
    file: JsonFile,
}

impl JsonTransactionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }
}

#[async_trait]
impl TransactionStore for JsonTransactionStore {
    async fn list_by_owner(&self, mobile: &str) -> Result<Vec<Transaction>, DomainError> {
        let records: Vec<TransactionRecord> = self.file.read_all().await?;
        Ok(records
            .into_iter()
            .filter(|r| r.mobile == mobile)
            .map(Transaction::from)
            .collect())
    }

    async fn append(&self, txn: Transaction) -> Result<(), DomainError> {
        let record = TransactionRecord::from(txn);
        self.file
            .modify(move |records: &mut Vec<TransactionRecord>| {
                records.push(record);
                Ok(())
            })
            .await
    }
}
