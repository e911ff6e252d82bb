#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, header};
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use unisocial_core::scenario::ScenarioCatalog;
use unisocial_core::secret::SecretService;
use unisocial_interaction::{
    GenerationRequest, GenerativeModel, ModelError, ModelRoute, PerformanceAnalyzer,
    ReplyGenerator,
};
use unisocial_server::{AppState, build_router};

pub const TEST_KEY: &str = "AIzaSyTestKeyDoNotLeak9876";

/// Model that always gives the same answer and counts calls.
pub struct FixedModel {
    name: &'static str,
    result: Result<Value, ModelError>,
    calls: AtomicUsize,
}

impl FixedModel {
    pub fn ok(name: &'static str, payload: Value) -> Arc<Self> {
        Arc::new(Self {
            name,
            result: Ok(payload),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn err(name: &'static str, err: ModelError) -> Arc<Self> {
        Arc::new(Self {
            name,
            result: Err(err),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerativeModel for FixedModel {
    fn model_name(&self) -> &str {
        self.name
    }

    async fn generate(&self, _request: &GenerationRequest) -> Result<Value, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

/// Model whose calls never complete.
pub struct HangingModel;

#[async_trait]
impl GenerativeModel for HangingModel {
    fn model_name(&self) -> &str {
        "hanging"
    }

    async fn generate(&self, _request: &GenerationRequest) -> Result<Value, ModelError> {
        std::future::pending().await
    }
}

pub struct StaticSecret(pub Option<&'static str>);

impl SecretService for StaticSecret {
    fn gemini_api_key(&self) -> Option<String> {
        self.0.map(str::to_string)
    }
}

pub fn gemini_text(text: &str) -> Value {
    json!({ "candidates": [{ "content": { "parts": [{ "text": text }] } }] })
}

/// Router whose primary and fallback both behave like `model`.
pub fn app_with(model: Arc<FixedModel>, key: Option<&'static str>) -> Router {
    app_with_route(ModelRoute::new(model.clone(), model, Duration::from_secs(30)), key)
}

pub fn app_with_route(route: ModelRoute, key: Option<&'static str>) -> Router {
    let state = AppState::new(
        ScenarioCatalog::default(),
        Arc::new(ReplyGenerator::new(route.clone(), 0.9)),
        Arc::new(PerformanceAnalyzer::new(route, 0.9)),
        Arc::new(StaticSecret(key)),
    );
    build_router(Arc::new(state), 1024 * 1024)
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

pub fn transcript(len: usize) -> Value {
    let messages: Vec<Value> = (0..len)
        .map(|i| {
            let sender = if i % 2 == 0 { "model" } else { "user" };
            json!({ "id": format!("m{i}"), "text": format!("第{i}句"), "sender": sender })
        })
        .collect();
    Value::Array(messages)
}
