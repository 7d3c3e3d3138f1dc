//! Server configuration loaded from environment variables (or a `.env`
//! file via `dotenvy`).

use std::net::SocketAddr;

/// Top-level server configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`)
    pub listen_addr: SocketAddr,

    /// PostgreSQL connection string. Without it the server keeps all data
    /// in memory and loses it on restart. Pending migrations run on connect.
    pub database_url: Option<String>,

    /// Maximum number of database connections in the pool
    pub database_max_connections: u32,

    /// Shared secret the identity provider signs session tokens with
    pub jwt_secret: String,

    /// Lifetime of tokens minted locally
    pub token_expiration_days: i64,

    /// Allow cross-origin requests from any origin (the SPA dev server)
    pub cors_allow_any: bool,
}

impl AppConfig {
    /// Loads configuration from environment variables, falling back to
    /// defaults when a variable is not set.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed.
    pub fn from_env() -> Result<Self, std::net::AddrParseError> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()?;

        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        Ok(Self {
            listen_addr,
            database_url,
            database_max_connections: parse_env("DATABASE_MAX_CONNECTIONS", 5),
            jwt_secret: std::env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            token_expiration_days: parse_env("TOKEN_EXPIRATION_DAYS", 7),
            cors_allow_any: parse_env_bool("CORS_ALLOW_ANY", false),
        })
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn parse_env_bool(key: &str, default: bool) -> bool {
    match std::env::var(key).ok().as_deref() {
        Some("true") | Some("TRUE") | Some("1") => true,
        Some("false") | Some("FALSE") | Some("0") => false,
        _ => default,
    }
}
