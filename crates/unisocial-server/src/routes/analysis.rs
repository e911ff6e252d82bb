//! `POST /conversation-analysis`

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use tracing::{error, info};
use unisocial_core::analysis::{AnalysisResult, MIN_ANALYZABLE_MESSAGES};
use unisocial_core::api::ConversationAnalysisRequest;
use unisocial_interaction::FailureKind;

use crate::app::SharedState;
use crate::error::ApiError;

/// Every error response of this route carries `fallbackAnalysis`.
pub async fn conversation_analysis(
    State(state): State<SharedState>,
    payload: Result<Json<ConversationAnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    analyze(&state, payload)
        .await
        .map(Json)
        .map_err(|err| err.or_fallback_analysis(AnalysisResult::service_unavailable()))
}

async fn analyze(
    state: &SharedState,
    payload: Result<Json<ConversationAnalysisRequest>, JsonRejection>,
) -> Result<AnalysisResult, ApiError> {
    let Json(request) = payload?;
    let scenario_title = request
        .scenario_title
        .filter(|title| !title.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("请求必须包含 scenarioTitle"))?;
    let messages = request
        .messages
        .ok_or_else(|| ApiError::bad_request("请求必须包含 messages 数组"))?;

    if messages.len() >= MIN_ANALYZABLE_MESSAGES && !state.credential_configured() {
        error!(kind = ?FailureKind::Config, "analysis rejected: no credential configured");
        return Err(ApiError::from_kind(FailureKind::Config));
    }

    info!(
        scenario_title = %scenario_title,
        messages = messages.len(),
        "conversation analysis requested"
    );
    let result = state.analyzer.try_analyze(&scenario_title, &messages).await?;
    Ok(result)
}
