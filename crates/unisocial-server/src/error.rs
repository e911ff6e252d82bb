//! Mapping of failures to JSON error responses.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use unisocial_core::analysis::AnalysisResult;
use unisocial_core::api::ErrorResponse;
use unisocial_core::error::UniSocialError;
use unisocial_interaction::{AnalysisFailure, FailureKind, ReplyFailure};

/// A failed request: status code plus `{error, details?, timestamp, fallbackAnalysis?}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    pub fn from_kind(kind: FailureKind) -> Self {
        Self {
            status: StatusCode::from_u16(kind.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body: ErrorResponse::new(kind.headline()).with_details(kind.details()),
        }
    }

    pub fn bad_request(details: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorResponse::new(FailureKind::BadRequest.headline()).with_details(details),
        }
    }

    pub fn not_found(details: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: ErrorResponse::new("未找到请求的资源").with_details(details),
        }
    }

    /// Attaches a report unless one is already present.
    pub fn or_fallback_analysis(mut self, analysis: AnalysisResult) -> Self {
        if self.body.fallback_analysis.is_none() {
            self.body.fallback_analysis = Some(analysis);
        }
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &ErrorResponse {
        &self.body
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<ReplyFailure> for ApiError {
    fn from(failure: ReplyFailure) -> Self {
        Self::from_kind(failure.kind)
    }
}

impl From<AnalysisFailure> for ApiError {
    fn from(failure: AnalysisFailure) -> Self {
        Self::from_kind(failure.kind).or_fallback_analysis(failure.fallback_analysis)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return Self {
                status: StatusCode::PAYLOAD_TOO_LARGE,
                body: ErrorResponse::new("请求体过大").with_details(rejection.body_text()),
            };
        }
        Self::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<UniSocialError> for ApiError {
    fn from(err: UniSocialError) -> Self {
        match err {
            UniSocialError::NotFound { .. } => Self::not_found(err.to_string()),
            UniSocialError::InvalidInput(message) => Self::bad_request(message),
            other => {
                tracing::error!(error = %other, "request failed");
                Self::from_kind(FailureKind::Upstream)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_their_status() {
        assert_eq!(
            ApiError::from_kind(FailureKind::Timeout).status(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            ApiError::from_kind(FailureKind::Network).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::from_kind(FailureKind::RateLimited).status(),
            StatusCode::TOO_MANY_REQUESTS
        );
    }

    #[test]
    fn existing_fallback_analysis_is_kept() {
        let err = ApiError::from_kind(FailureKind::Network)
            .or_fallback_analysis(AnalysisResult::malformed_payload())
            .or_fallback_analysis(AnalysisResult::service_unavailable());
        assert_eq!(
            err.body().fallback_analysis,
            Some(AnalysisResult::malformed_payload())
        );
    }

    #[test]
    fn domain_errors_map_to_client_statuses() {
        let not_found: ApiError = UniSocialError::not_found("scenario", "x").into();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        let invalid: ApiError = UniSocialError::invalid_input("blank").into();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
    }
}
