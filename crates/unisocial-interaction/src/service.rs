//! In-process conversation backend built on the reply generator and analyzer.

use crate::analyzer::PerformanceAnalyzer;
use crate::gemini_api_agent::GeminiApiAgent;
use crate::model::GenerativeModel;
use crate::reply::ReplyGenerator;
use crate::route::ModelRoute;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use unisocial_core::analysis::AnalysisResult;
use unisocial_core::config::RootConfig;
use unisocial_core::secret::SecretService;
use unisocial_core::session::ConversationService;
use unisocial_core::transcript::Message;

/// Runs replies and analyses directly against the generation models.
#[derive(Clone)]
pub struct RolePlayService {
    generator: Arc<ReplyGenerator>,
    analyzer: Arc<PerformanceAnalyzer>,
}

impl RolePlayService {
    pub fn new(generator: Arc<ReplyGenerator>, analyzer: Arc<PerformanceAnalyzer>) -> Self {
        Self {
            generator,
            analyzer,
        }
    }

    /// Wires Gemini agents for the configured primary and fallback models.
    ///
    /// All agents share one HTTP client. A missing key is not an error here;
    /// each call then fails with a configuration failure instead.
    pub fn from_config(config: &RootConfig, secrets: &dyn SecretService) -> Self {
        let client = Client::new();
        let api_key = secrets.gemini_api_key();
        tracing::info!(
            primary = %config.models.primary,
            fallback = %config.models.fallback,
            credential_configured = secrets.credential_configured(),
            "configuring generation models"
        );

        let agent = |model: &str| -> Arc<dyn GenerativeModel> {
            Arc::new(
                GeminiApiAgent::new(client.clone(), api_key.clone(), model)
                    .with_base_url(config.gemini.base_url.clone()),
            )
        };
        let primary = agent(&config.models.primary);
        let fallback = agent(&config.models.fallback);
        let temperature = config.models.temperature;

        let generator = ReplyGenerator::new(
            ModelRoute::new(
                primary.clone(),
                fallback.clone(),
                config.timeouts.reply_attempt(),
            ),
            temperature,
        );
        let analyzer = PerformanceAnalyzer::new(
            ModelRoute::new(primary, fallback, config.timeouts.analysis_attempt()),
            temperature,
        );

        Self::new(Arc::new(generator), Arc::new(analyzer))
    }

    pub fn generator(&self) -> &Arc<ReplyGenerator> {
        &self.generator
    }

    pub fn analyzer(&self) -> &Arc<PerformanceAnalyzer> {
        &self.analyzer
    }
}

#[async_trait]
impl ConversationService for RolePlayService {
    async fn reply(&self, messages: &[Message], persona_instruction: &str) -> Message {
        self.generator
            .generate_reply(messages, persona_instruction)
            .await
    }

    async fn analyze(&self, scenario_title: &str, messages: &[Message]) -> AnalysisResult {
        self.analyzer.analyze(scenario_title, messages).await
    }
}
