use std::sync::Arc;

use tokio::sync::RwLock;
use unisocial_core::config::RootConfig;
use unisocial_core::scenario::ScenarioCatalog;
use unisocial_core::secret::SecretService;
use unisocial_interaction::{PerformanceAnalyzer, ReplyGenerator, RolePlayService};

/// Application state shared across request handlers.
///
/// The catalog is the only mutable shared state; every orchestration call
/// carries its own transcript.
pub struct AppState {
    pub catalog: RwLock<ScenarioCatalog>,
    pub generator: Arc<ReplyGenerator>,
    pub analyzer: Arc<PerformanceAnalyzer>,
    pub secret_service: Arc<dyn SecretService>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(
        catalog: ScenarioCatalog,
        generator: Arc<ReplyGenerator>,
        analyzer: Arc<PerformanceAnalyzer>,
        secret_service: Arc<dyn SecretService>,
    ) -> Self {
        Self {
            catalog: RwLock::new(catalog),
            generator,
            analyzer,
            secret_service,
        }
    }

    /// Wires Gemini-backed orchestration and the built-in catalog.
    pub fn from_config(config: &RootConfig, secret_service: Arc<dyn SecretService>) -> Self {
        let service = RolePlayService::from_config(config, secret_service.as_ref());
        Self::new(
            ScenarioCatalog::default(),
            service.generator().clone(),
            service.analyzer().clone(),
            secret_service,
        )
    }

    pub fn credential_configured(&self) -> bool {
        self.secret_service.credential_configured()
    }
}
