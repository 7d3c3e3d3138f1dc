// Public API - what other modules can use
pub use handlers::{create_player, delete_player, get_player, list_players, update_player};
pub use models::{AttendanceTendency, Player, Position, RATING_MAX, RATING_MIN};
pub use types::PlayerRequest;

// Internal modules
mod handlers;
pub mod models;
pub mod repository;
pub mod service;
mod types;
