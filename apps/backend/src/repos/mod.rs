//! Storage ports consumed by the services.

pub mod transactions;
pub mod users;

pub use transactions::{Transaction, TransactionStore};
pub use users::{User, UserStore};
