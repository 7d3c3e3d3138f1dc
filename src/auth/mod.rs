// Public API - what other modules can use
pub use middleware::jwt_auth;
pub use roles::{can_access, can_modify, require_access, require_modify, Resource, Role};
pub use token::TokenConfig;
pub use types::AuthClaims;

// Internal modules
mod middleware;
pub mod roles;
mod token;
mod types;
