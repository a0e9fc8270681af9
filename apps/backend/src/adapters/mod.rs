//! Storage backends for the store traits in `repos`.

pub mod json_file;
pub mod memory;
pub mod transactions_json;
pub mod users_json;

pub use json_file::JsonFile;
pub use memory::{InMemoryTransactionStore, InMemoryUserStore};
pub use transactions_json::JsonTransactionStore;
pub use users_json::JsonUserStore;
