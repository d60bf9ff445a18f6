#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Value, json};
use tower::ServiceExt;

use haven_auth::jwt::TokenVerifier;
use haven_bedrock::completion::{Completion, CompletionRequest, TextCompleter};
use haven_bedrock::error::BedrockError;
use haven_bedrock::interpret::{InterpretSettings, Interpreter};
use haven_lambda::state::AppState;
use haven_storage::memory::MemoryStore;
use haven_storage::store::WellnessStore;

pub const SECRET: &[u8] = b"integration-secret";

/// Completer that either answers with fixed text or always fails.
pub struct Scripted(pub Option<&'static str>);

#[async_trait]
impl TextCompleter for Scripted {
    async fn complete(&self, _request: &CompletionRequest) -> Result<Completion, BedrockError> {
        match self.0 {
            Some(text) => Ok(Completion {
                text: text.to_string(),
            }),
            None => Err(BedrockError::Invocation("service unavailable".to_string())),
        }
    }
}

pub struct Harness {
    pub store: Arc<MemoryStore>,
    pub app: Router,
}

pub fn harness(completion: Option<&'static str>) -> Harness {
    let store = Arc::new(MemoryStore::new());
    Harness {
        app: app_over(store.clone(), completion),
        store,
    }
}

/// The app over any store, for tests that need a store which misbehaves.
pub fn app_over(store: Arc<dyn WellnessStore>, completion: Option<&'static str>) -> Router {
    haven_lambda::app(AppState {
        store,
        interpreter: Arc::new(Interpreter::new(
            Arc::new(Scripted(completion)),
            InterpretSettings::new(Duration::from_millis(200), 2),
        )),
        verifier: Arc::new(TokenVerifier::hs256(SECRET, None)),
        profile_update_attempts: 3,
    })
}

pub fn token(sub: &str) -> String {
    let exp = jiff::Timestamp::now().as_second() + 600;
    encode(
        &Header::default(),
        &json!({ "sub": sub, "exp": exp }),
        &EncodingKey::from_secret(SECRET),
    )
    .unwrap()
}

pub async fn send(
    app: &Router,
    method: &str,
    path: &str,
    user: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(user) = user {
        builder = builder.header("authorization", format!("Bearer {}", token(user)));
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}
