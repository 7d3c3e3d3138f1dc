use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pelada_sagaz::{
    app,
    db,
    auth::TokenConfig,
    championships::repository::{InMemoryChampionshipRepository, PostgresChampionshipRepository},
    games::repository::{InMemoryGameRepository, PostgresGameRepository},
    players::repository::{InMemoryPlayerRepository, PostgresPlayerRepository},
    treasury::repository::{InMemoryTransactionRepository, PostgresTransactionRepository},
    AppConfig, AppState,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pelada_sagaz=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(err) = run().await {
        error!(error = %err, "Server stopped with an error");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    info!(listen_addr = %config.listen_addr, "Starting Pelada Sagaz server");

    let token_config = TokenConfig::new(config.jwt_secret.clone(), config.token_expiration_days);

    let app_state = match &config.database_url {
        Some(database_url) => {
            let pool = db::connect(database_url, config.database_max_connections).await?;

            AppState::new(
                Arc::new(PostgresPlayerRepository::new(pool.clone())),
                Arc::new(PostgresGameRepository::new(pool.clone())),
                Arc::new(PostgresTransactionRepository::new(pool.clone())),
                Arc::new(PostgresChampionshipRepository::new(pool)),
                token_config,
            )
        }
        None => {
            warn!("DATABASE_URL not set, keeping data in memory");
            AppState::new(
                Arc::new(InMemoryPlayerRepository::new()),
                Arc::new(InMemoryGameRepository::new()),
                Arc::new(InMemoryTransactionRepository::new()),
                Arc::new(InMemoryChampionshipRepository::new()),
                token_config,
            )
        }
    };

    let router = if config.cors_allow_any {
        app::router_with_cors(app_state)
    } else {
        app::router(app_state)
    };

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!("Server running on http://{}", config.listen_addr);
    axum::serve(listener, router).await?;
    Ok(())
}
