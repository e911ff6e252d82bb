//! Structured performance analysis of a finished transcript.

use crate::extraction::ExtractionChain;
use crate::failure::FailureKind;
use crate::model::{GenerationRequest, ModelError};
use crate::prompt::{analysis_prompt, analysis_schema};
use crate::route::ModelRoute;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::{error, info, warn};
use unisocial_core::analysis::{AnalysisResult, MIN_ANALYZABLE_MESSAGES};
use unisocial_core::transcript::Message;

static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*```[A-Za-z]*\s*(.*?)\s*```\s*$").expect("code fence pattern is valid")
});

/// Terminal failure of an analysis, with the report to show instead.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind:?} analysis failure: {source}")]
pub struct AnalysisFailure {
    pub kind: FailureKind,
    pub source: ModelError,
    pub fallback_analysis: AnalysisResult,
}

impl From<ModelError> for AnalysisFailure {
    fn from(source: ModelError) -> Self {
        Self {
            kind: FailureKind::classify(&source),
            source,
            fallback_analysis: AnalysisResult::service_unavailable(),
        }
    }
}

/// Scores a transcript by asking the model for a JSON report.
pub struct PerformanceAnalyzer {
    route: ModelRoute,
    temperature: f32,
    extraction: ExtractionChain,
}

impl PerformanceAnalyzer {
    pub fn new(route: ModelRoute, temperature: f32) -> Self {
        Self {
            route,
            temperature,
            extraction: ExtractionChain::standard("{}"),
        }
    }

    /// Analyzes the transcript, reporting transport-level failures.
    ///
    /// Short transcripts return [`AnalysisResult::insufficient_sample`] without
    /// contacting the model. Malformed payloads are repaired, never reported.
    pub async fn try_analyze(
        &self,
        scenario_title: &str,
        messages: &[Message],
    ) -> Result<AnalysisResult, AnalysisFailure> {
        if messages.len() < MIN_ANALYZABLE_MESSAGES {
            return Ok(AnalysisResult::insufficient_sample());
        }

        let prompt = analysis_prompt(scenario_title, messages).map_err(ModelError::from)?;
        let request = GenerationRequest::json(prompt, self.temperature, analysis_schema());

        let outcome = self.route.generate(&request).await.map_err(|err| {
            let failure = AnalysisFailure::from(err);
            error!(kind = ?failure.kind, error = %failure.source, "analysis failed");
            failure
        })?;

        let text = self.extraction.extract(&outcome.payload);
        let result = parse_analysis_text(&text);
        info!(
            model = %outcome.model,
            used_fallback = outcome.used_fallback,
            score = result.score,
            "analysis completed"
        );
        Ok(result)
    }

    /// Analyzes the transcript. Never fails; every failure path yields a
    /// best-effort report with an in-range score.
    pub async fn analyze(&self, scenario_title: &str, messages: &[Message]) -> AnalysisResult {
        self.try_analyze(scenario_title, messages)
            .await
            .unwrap_or_else(|failure| failure.fallback_analysis)
    }
}

/// Turns model output text into a complete report.
///
/// A surrounding markdown code fence is ignored. Text that is not JSON yields
/// [`AnalysisResult::malformed_payload`]; JSON with missing or mistyped fields
/// is repaired field by field.
pub fn parse_analysis_text(text: &str) -> AnalysisResult {
    let body = CODE_FENCE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map_or(text, |m| m.as_str());

    match serde_json::from_str::<Value>(body) {
        Ok(value) => AnalysisResult::from_value(&value),
        Err(err) => {
            warn!(error = %err, raw_len = text.len(), "analysis payload is not JSON");
            AnalysisResult::malformed_payload()
        }
    }
}
