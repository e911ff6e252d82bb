#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use unisocial_interaction::{
    GenerationRequest, GenerativeModel, ModelError, ModelRoute, PerformanceAnalyzer,
    ReplyGenerator, RolePlayService,
};

pub const ATTEMPT_TIMEOUT: Duration = Duration::from_secs(30);

/// What a scripted model does on one call.
#[derive(Clone)]
pub enum Step {
    Respond(Value),
    Fail(ModelError),
    /// Never completes; only the route's timeout ends it.
    Hang,
}

/// Model that plays back a fixed script and records every request.
pub struct ScriptedModel {
    name: String,
    steps: Mutex<VecDeque<Step>>,
    calls: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl ScriptedModel {
    pub fn new(name: &str, steps: impl IntoIterator<Item = Step>) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            steps: Mutex::new(steps.into_iter().collect()),
            calls: Arc::new(Mutex::new(Vec::new())),
        })
    }

    /// A model with an empty script; any call fails.
    pub fn idle(name: &str) -> Arc<Self> {
        Self::new(name, Vec::new())
    }

    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }

    pub async fn last_call(&self) -> Option<GenerationRequest> {
        self.calls.lock().await.last().cloned()
    }
}

#[async_trait]
impl GenerativeModel for ScriptedModel {
    fn model_name(&self) -> &str {
        &self.name
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<Value, ModelError> {
        self.calls.lock().await.push(request.clone());
        let step = self.steps.lock().await.pop_front();
        match step {
            Some(Step::Respond(value)) => Ok(value),
            Some(Step::Fail(err)) => Err(err),
            Some(Step::Hang) => std::future::pending().await,
            None => Err(ModelError::Transport("script exhausted".to_string())),
        }
    }
}

/// Native Gemini response carrying `text`.
pub fn gemini_text(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] }
        }]
    })
}

pub fn refused() -> ModelError {
    ModelError::Transport("error sending request: connection refused".to_string())
}

pub fn route(primary: &Arc<ScriptedModel>, fallback: &Arc<ScriptedModel>) -> ModelRoute {
    ModelRoute::new(primary.clone(), fallback.clone(), ATTEMPT_TIMEOUT)
}

pub fn service(primary: &Arc<ScriptedModel>, fallback: &Arc<ScriptedModel>) -> RolePlayService {
    RolePlayService::new(
        Arc::new(ReplyGenerator::new(route(primary, fallback), 0.9)),
        Arc::new(PerformanceAnalyzer::new(route(primary, fallback), 0.9)),
    )
}
