use crate::analysis::AnalysisResult;
use crate::transcript::Message;
use async_trait::async_trait;

/// Backend that produces character replies and performance reports.
///
/// Implementations absorb every failure: a broken upstream turns into a
/// character message explaining the problem, or a fallback report. The session
/// layer therefore never handles errors from this trait.
#[async_trait]
pub trait ConversationService: Send + Sync {
    /// Produces the character's next line for the given transcript.
    async fn reply(&self, messages: &[Message], persona_instruction: &str) -> Message;

    /// Scores a finished transcript.
    async fn analyze(&self, scenario_title: &str, messages: &[Message]) -> AnalysisResult;
}
