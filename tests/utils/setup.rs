use std::sync::Arc;

use pelada_sagaz::{
    auth::{Role, TokenConfig},
    championships::repository::InMemoryChampionshipRepository,
    games::repository::InMemoryGameRepository,
    players::repository::InMemoryPlayerRepository,
    router,
    treasury::repository::InMemoryTransactionRepository,
    AppState,
};

pub const TEST_SECRET: &str = "integration-test-secret";

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

/// Full router over in-memory repositories plus one token per role
pub struct TestApp {
    pub state: AppState,
    pub admin_token: String,
    pub treasurer_token: String,
    pub player_token: String,
    pub viewer_token: String,
}

impl TestApp {
    pub fn token_for(&self, role: Role) -> &str {
        match role {
            Role::Admin => &self.admin_token,
            Role::Treasurer => &self.treasurer_token,
            Role::Player => &self.player_token,
            Role::Viewer => &self.viewer_token,
        }
    }

    pub fn router(&self) -> axum::Router {
        router(self.state.clone())
    }
}

pub struct TestAppBuilder {
    token_config: TokenConfig,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            token_config: TokenConfig::new(TEST_SECRET.to_string(), 1),
        }
    }

    pub fn build(self) -> TestApp {
        let state = AppState::new(
            Arc::new(InMemoryPlayerRepository::new()),
            Arc::new(InMemoryGameRepository::new()),
            Arc::new(InMemoryTransactionRepository::new()),
            Arc::new(InMemoryChampionshipRepository::new()),
            self.token_config.clone(),
        );

        let mint = |sub: &str, role: Role| {
            self.token_config
                .create_token(sub.to_string(), format!("{}@pelada.test", sub), role)
                .unwrap()
        };

        TestApp {
            admin_token: mint("admin", Role::Admin),
            treasurer_token: mint("treasurer", Role::Treasurer),
            player_token: mint("player", Role::Player),
            viewer_token: mint("viewer", Role::Viewer),
            state,
        }
    }
}
