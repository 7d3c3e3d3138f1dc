use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`

use pelada_sagaz::auth::Role;

use super::setup::TestApp;

// ============================================================================
// Request helpers
// ============================================================================

impl TestApp {
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.router().oneshot(request).await.unwrap()
    }

    pub async fn get_as(&self, role: Role, uri: &str) -> Response {
        self.send("GET", uri, Some(self.token_for(role)), None).await
    }

    pub async fn post_as(&self, role: Role, uri: &str, body: Value) -> Response {
        self.send("POST", uri, Some(self.token_for(role)), Some(body))
            .await
    }

    /// Creates a player as admin and returns its id
    pub async fn add_player(&self, name: &str) -> String {
        let response = self
            .post_as(
                Role::Admin,
                "/players",
                json!({
                    "name": name,
                    "position": "forward",
                    "rating": 3.5,
                    "attendance": "regular"
                }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        id_of(response).await
    }

    /// Creates a game as admin and returns its id
    pub async fn add_game(&self, date: &str, game_type: &str) -> String {
        let response = self
            .post_as(
                Role::Admin,
                "/games",
                json!({ "date": date, "game_type": game_type }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        id_of(response).await
    }

    pub async fn add_goals(&self, game_id: &str, player_id: &str, count: u32) {
        let response = self
            .post_as(
                Role::Admin,
                &format!("/games/{}/goals", game_id),
                json!({ "player_id": player_id, "count": count }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    pub async fn add_transaction(&self, date: &str, direction: &str, amount: &str) {
        let response = self
            .post_as(
                Role::Treasurer,
                "/transactions",
                json!({
                    "date": date,
                    "direction": direction,
                    "amount": amount,
                    "description": "mensalidade"
                }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    pub async fn add_title(&self, player_id: &str, date: &str) {
        let response = self
            .post_as(
                Role::Admin,
                "/championships",
                json!({ "player_id": player_id, "date": date }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}

pub async fn body_json(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn id_of(response: Response) -> String {
    body_json(response).await["id"]
        .as_str()
        .unwrap()
        .to_string()
}
