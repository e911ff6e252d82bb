//! Lifecycle of one role-play session.

use super::service::ConversationService;
use crate::analysis::AnalysisResult;
use crate::error::{Result, UniSocialError};
use crate::scenario::Scenario;
use crate::transcript::{Message, Transcript, TranscriptSnapshot};
use std::sync::Arc;

/// Frozen transcript together with the report computed from it.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    pub transcript: TranscriptSnapshot,
    pub analysis: AnalysisResult,
}

/// Drives one session: opening line, user turns, and the final analysis.
///
/// `send` borrows the controller mutably for the whole round trip, so a second
/// turn cannot start while a reply is outstanding. Returning to the catalog is
/// simply dropping the controller.
pub struct SessionController<S: ConversationService + ?Sized> {
    service: Arc<S>,
    scenario: Scenario,
    transcript: Transcript,
    report: Option<SessionReport>,
}

impl<S: ConversationService + ?Sized> SessionController<S> {
    /// Starts a session seeded with the scenario's opening line.
    pub fn start(service: Arc<S>, scenario: Scenario) -> Self {
        let transcript = Transcript::open(scenario.opening_line.clone());
        Self {
            service,
            scenario,
            transcript,
            report: None,
        }
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn is_ended(&self) -> bool {
        self.report.is_some()
    }

    pub fn report(&self) -> Option<&SessionReport> {
        self.report.as_ref()
    }

    /// Sends one user line and waits for the character's answer.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` for blank input (nothing is sent)
    /// - `Session` once the session has ended
    pub async fn send(&mut self, text: &str) -> Result<&Message> {
        if self.is_ended() {
            return Err(UniSocialError::session(
                "session has ended; retry or return to the catalog",
            ));
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(UniSocialError::invalid_input("message cannot be empty"));
        }

        self.transcript.push_user(text);
        let reply = self
            .service
            .reply(self.transcript.messages(), &self.scenario.persona_instruction)
            .await;
        tracing::debug!(
            scenario_id = %self.scenario.id,
            messages = self.transcript.len() + 1,
            "reply received"
        );
        Ok(self.transcript.push(reply))
    }

    /// Freezes the transcript and analyzes it.
    ///
    /// The analysis runs at most once; later calls return the stored report.
    pub async fn end_session(&mut self) -> &SessionReport {
        let report = match self.report.take() {
            Some(report) => report,
            None => {
                let transcript = self.transcript.snapshot();
                let analysis = self.service.analyze(&self.scenario.title, &transcript).await;
                tracing::info!(
                    scenario_id = %self.scenario.id,
                    score = analysis.score,
                    messages = transcript.len(),
                    "session analyzed"
                );
                SessionReport {
                    transcript,
                    analysis,
                }
            }
        };
        self.report.insert(report)
    }

    /// Discards the transcript and report, keeping the scenario.
    pub fn retry(&mut self) {
        self.transcript = Transcript::open(self.scenario.opening_line.clone());
        self.report = None;
    }
}
