use axum::{http::StatusCode, response::Response};
use serde_json::Value;

// ============================================================================
// Response assertions
// ============================================================================

pub struct ResponseAssertion {
    status: StatusCode,
    body: Value,
}

impl ResponseAssertion {
    pub async fn from(response: Response) -> Self {
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        Self { status, body }
    }

    pub fn status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status, expected,
            "unexpected status, body: {}",
            self.body
        );
        self
    }

    pub fn has_error(self) -> Self {
        assert!(
            self.body["error"].is_string(),
            "expected an error body, got {}",
            self.body
        );
        self
    }

    /// Names of a ranking response, in order
    pub fn ranked_names(&self) -> Vec<String> {
        ranked(&self.body)
            .iter()
            .map(|entry| entry["player"]["name"].as_str().unwrap().to_string())
            .collect()
    }

    pub fn ranked_totals(&self) -> Vec<u64> {
        ranked(&self.body)
            .iter()
            .map(|entry| entry["total"].as_u64().unwrap())
            .collect()
    }

    pub fn period_ids(&self) -> Vec<String> {
        self.body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_str().unwrap().to_string())
            .collect()
    }

    pub fn body(&self) -> &Value {
        &self.body
    }
}

fn ranked(body: &Value) -> &Vec<Value> {
    body.as_array()
        .or_else(|| body["ranking"].as_array())
        .unwrap()
}
