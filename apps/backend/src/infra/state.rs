use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::adapters::{JsonTransactionStore, JsonUserStore};
use crate::config::{FINANCE_FILE, USERS_FILE};
use crate::error::AppError;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    security_config: Option<SecurityConfig>,
    data_dir: Option<PathBuf>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: None,
            data_dir: None,
        }
    }

    /// Persist users and transactions as JSON files under `dir`.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = Some(security_config);
        self
    }

    /// Without a data dir the state uses in-memory stores.
    pub async fn build(self) -> Result<AppState, AppError> {
        let security = self
            .security_config
            .ok_or_else(|| AppError::config("security configuration is required"))?;

        let Some(dir) = self.data_dir else {
            return Ok(AppState::in_memory(security));
        };

        let create_dir = dir.clone();
        tokio::task::spawn_blocking(move || std::fs::create_dir_all(&create_dir))
            .await?
            .map_err(|e| {
                AppError::config(format!(
                    "cannot create data directory '{}': {e}",
                    dir.display()
                ))
            })?;

        info!(data_dir = %dir.display(), "using JSON file stores");
        Ok(AppState::new(
            security,
            Arc::new(JsonUserStore::new(dir.join(USERS_FILE))),
            Arc::new(JsonTransactionStore::new(dir.join(FINANCE_FILE))),
        ))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
