//! Primary-then-fallback model routing.

use crate::model::{GenerationRequest, GenerativeModel, ModelError};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Successful routed call.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteOutcome {
    pub payload: Value,
    /// Name of the model that produced `payload`
    pub model: String,
    pub used_fallback: bool,
}

/// Sends a request to the primary model and, if that attempt fails for any
/// reason, exactly once to the fallback model.
///
/// Each attempt gets its own `attempt_timeout`. The error of a failed route is
/// the fallback's error.
#[derive(Clone)]
pub struct ModelRoute {
    primary: Arc<dyn GenerativeModel>,
    fallback: Arc<dyn GenerativeModel>,
    attempt_timeout: Duration,
}

impl ModelRoute {
    pub fn new(
        primary: Arc<dyn GenerativeModel>,
        fallback: Arc<dyn GenerativeModel>,
        attempt_timeout: Duration,
    ) -> Self {
        Self {
            primary,
            fallback,
            attempt_timeout,
        }
    }

    pub fn attempt_timeout(&self) -> Duration {
        self.attempt_timeout
    }

    pub async fn generate(&self, request: &GenerationRequest) -> Result<RouteOutcome, ModelError> {
        match self.attempt(self.primary.as_ref(), request).await {
            Ok(payload) => {
                return Ok(RouteOutcome {
                    payload,
                    model: self.primary.model_name().to_string(),
                    used_fallback: false,
                });
            }
            Err(err) => {
                warn!(
                    model = self.primary.model_name(),
                    error = %err,
                    "primary model failed, trying fallback"
                );
            }
        }

        match self.attempt(self.fallback.as_ref(), request).await {
            Ok(payload) => {
                debug!(model = self.fallback.model_name(), "fallback model succeeded");
                Ok(RouteOutcome {
                    payload,
                    model: self.fallback.model_name().to_string(),
                    used_fallback: true,
                })
            }
            Err(err) => {
                warn!(
                    model = self.fallback.model_name(),
                    error = %err,
                    "fallback model failed"
                );
                Err(err)
            }
        }
    }

    async fn attempt(
        &self,
        model: &dyn GenerativeModel,
        request: &GenerationRequest,
    ) -> Result<Value, ModelError> {
        match tokio::time::timeout(self.attempt_timeout, model.generate(request)).await {
            Ok(result) => result,
            Err(_) => Err(ModelError::Timeout),
        }
    }
}
