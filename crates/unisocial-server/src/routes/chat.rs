//! `POST /chat-completion`

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use tracing::{error, info};
use unisocial_core::api::{ChatCompletionRequest, ChatCompletionResponse};
use unisocial_interaction::FailureKind;

use crate::app::SharedState;
use crate::error::ApiError;

pub async fn chat_completion(
    State(state): State<SharedState>,
    payload: Result<Json<ChatCompletionRequest>, JsonRejection>,
) -> Result<Json<ChatCompletionResponse>, ApiError> {
    let Json(request) = payload?;
    let messages = request
        .messages
        .filter(|messages| !messages.is_empty())
        .ok_or_else(|| ApiError::bad_request("请求必须包含非空的 messages 数组"))?;

    if !state.credential_configured() {
        error!(kind = ?FailureKind::Config, "chat completion rejected: no credential configured");
        return Err(ApiError::from_kind(FailureKind::Config));
    }

    info!(messages = messages.len(), "chat completion requested");
    let text = state
        .generator
        .try_generate(&messages, &request.system_instruction)
        .await?;

    Ok(Json(ChatCompletionResponse { text }))
}
