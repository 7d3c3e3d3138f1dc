// Public API - what other modules can use
pub use handlers::{
    create_game, delete_game, delete_goal, get_attendance, get_game, list_game_goals, list_games,
    record_goals, set_attendance,
};
pub use models::{Game, GameType, GoalTally};
pub use types::{AttendanceRequest, GameDetails, GameRequest, GoalRequest};

// Internal modules
mod handlers;
pub mod models;
pub mod repository;
pub mod service;
mod types;
