// Public API - what other modules can use
pub use handlers::{create_transaction, delete_transaction, list_transactions};
pub use models::{Direction, Transaction};
pub use types::TransactionRequest;

// Internal modules
mod handlers;
pub mod models;
pub mod repository;
pub mod service;
mod types;
