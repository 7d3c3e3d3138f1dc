// Library crate for the Pelada Sagaz API
// This file exposes the public API for the binary and integration tests

pub mod app;
pub mod auth;
pub mod championships;
pub mod config;
pub mod db;
pub mod games;
pub mod players;
pub mod shared;
pub mod stats;
pub mod treasury;

// Re-export commonly used types for easier access in tests
pub use app::router;
pub use config::AppConfig;
pub use shared::{AppError, AppState};
