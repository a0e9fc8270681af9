//! On-disk shape of a transaction in `finance.json`.

use serde::{Deserialize, Serialize};

use crate::repos::transactions::Transaction;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub category: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Owner's mobile number
    pub mobile: String,
}

impl From<TransactionRecord> for Transaction {
    fn from(r: TransactionRecord) -> Self {
        Transaction {
            category: r.category,
            amount: r.amount,
            kind: r.kind,
            note: r.note,
            owner_mobile: r.mobile,
        }
    }
}

impl From<Transaction> for TransactionRecord {
    fn from(t: Transaction) -> Self {
        TransactionRecord {
            category: t.category,
            amount: t.amount,
            kind: t.kind,
            note: t.note,
            mobile: t.owner_mobile,
        }
    }
}
