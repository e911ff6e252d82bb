use axum::Json;
use axum::extract::State;
use unisocial_core::api::HealthResponse;

use crate::app::SharedState;

/// `GET /health`. Reports whether a credential is present, never the credential.
pub async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        credential_configured: state.credential_configured(),
    })
}
