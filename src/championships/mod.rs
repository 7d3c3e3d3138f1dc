// Public API - what other modules can use
pub use handlers::{create_championship, delete_championship, list_championships};
pub use models::Championship;
pub use types::ChampionshipRequest;

// Internal modules
mod handlers;
pub mod models;
pub mod repository;
pub mod service;
mod types;
