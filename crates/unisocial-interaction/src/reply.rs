//! In-character reply generation.

use crate::extraction::ExtractionChain;
use crate::failure::FailureKind;
use crate::model::{GenerationRequest, ModelError};
use crate::prompt::reply_prompt;
use crate::route::ModelRoute;
use thiserror::Error;
use tracing::{error, info};
use unisocial_core::transcript::Message;

/// Shown when the model answered but no text could be found.
pub const NO_RESPONSE_TEXT: &str = "（对方未回应）";

/// Terminal failure of one reply turn (after the fallback attempt).
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind:?} reply failure: {source}")]
pub struct ReplyFailure {
    pub kind: FailureKind,
    pub source: ModelError,
}

impl From<ModelError> for ReplyFailure {
    fn from(source: ModelError) -> Self {
        Self {
            kind: FailureKind::classify(&source),
            source,
        }
    }
}

/// Produces the character's next line from the full transcript.
pub struct ReplyGenerator {
    route: ModelRoute,
    temperature: f32,
    extraction: ExtractionChain,
}

impl ReplyGenerator {
    pub fn new(route: ModelRoute, temperature: f32) -> Self {
        Self {
            route,
            temperature,
            extraction: ExtractionChain::standard(NO_RESPONSE_TEXT),
        }
    }

    /// Generates reply text, reporting categorized failures.
    ///
    /// A response without usable text is not a failure: it yields
    /// [`NO_RESPONSE_TEXT`]. The transcript is only read.
    pub async fn try_generate(
        &self,
        messages: &[Message],
        persona_instruction: &str,
    ) -> Result<String, ReplyFailure> {
        let prompt = reply_prompt(persona_instruction, messages).map_err(ModelError::from)?;
        let request = GenerationRequest::text(prompt, self.temperature);

        let outcome = self.route.generate(&request).await.map_err(|err| {
            let failure = ReplyFailure::from(err);
            error!(kind = ?failure.kind, error = %failure.source, "reply generation failed");
            failure
        })?;

        info!(
            model = %outcome.model,
            used_fallback = outcome.used_fallback,
            "reply generated"
        );
        Ok(self.extraction.extract(&outcome.payload))
    }

    /// Generates the character message for this turn. Never fails: a terminal
    /// failure becomes a character message explaining what went wrong.
    pub async fn generate_reply(&self, messages: &[Message], persona_instruction: &str) -> Message {
        match self.try_generate(messages, persona_instruction).await {
            Ok(text) => Message::character(text),
            Err(failure) => Message::character(failure.kind.reply_text()),
        }
    }
}
