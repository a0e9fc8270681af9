//! `UserStore` backed by a JSON array in `users.json`.

mod dto;

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::info;

pub use dto::UserRecord;

use crate::adapters::json_file::JsonFile;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::repos::users::{User, UserStore};

#[derive(Debug, Clone)]
pub struct JsonUserStore {
    file: JsonFile,
}

impl JsonUserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }
}

#[async_trait]
impl UserStore for JsonUserStore {
    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<User>, DomainError> {
        let records: Vec<UserRecord> = self.file.read_all().await?;
        Ok(records
            .into_iter()
            .find(|r| r.mobile == mobile)
            .map(User::from))
    }

    async fn append(&self, user: User) -> Result<(), DomainError> {
        let record = UserRecord::from(user);
        self.file
            .modify(move |records: &mut Vec<UserRecord>| {
                if records.iter().any(|r| r.mobile == record.mobile) {
                    return Err(DomainError::conflict(
                        ConflictKind::DuplicateMobile,
                        "mobile number already registered",
                    ));
                }
                records.push(record);
                Ok(())
            })
            .await?;

        info!(path = %self.file.path().display(), "user appended");
        Ok(())
    }
}
