use std::fmt;
use std::sync::Arc;

use super::security_config::SecurityConfig;
use crate::adapters::memory::{InMemoryTransactionStore, InMemoryUserStore};
use crate::repos::transactions::TransactionStore;
use crate::repos::users::UserStore;

/// Application state shared by every worker.
///
/// Stores are trait objects so the same handlers run against the JSON files
/// in production and in-memory stores in tests.
#[derive(Clone)]
pub struct AppState {
    /// Security configuration including JWT settings
    pub security: SecurityConfig,
    pub users: Arc<dyn UserStore>,
    pub transactions: Arc<dyn TransactionStore>,
}

impl AppState {
    pub fn new(
        security: SecurityConfig,
        users: Arc<dyn UserStore>,
        transactions: Arc<dyn TransactionStore>,
    ) -> Self {
        Self {
            security,
            users,
            transactions,
        }
    }

    /// State backed by empty in-memory stores.
    pub fn in_memory(security: SecurityConfig) -> Self {
        Self::new(
            security,
            Arc::new(InMemoryUserStore::default()),
            Arc::new(InMemoryTransactionStore::default()),
        )
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::in_memory(SecurityConfig::for_tests())
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("algorithm", &self.security.algorithm)
            .finish_non_exhaustive()
    }
}
