//! Conversation orchestration for UniSocial.
//!
//! Turns a transcript into either the character's next line
//! ([`ReplyGenerator`]) or a scored report ([`PerformanceAnalyzer`]). Both run
//! through a [`ModelRoute`] (primary model, then one fallback, each attempt
//! under its own timeout) and never surface upstream failures to the session.
//!
//! Three [`ConversationService`](unisocial_core::session::ConversationService)
//! backends are provided:
//!
//! - [`RolePlayService`]: in-process, against Gemini
//! - [`RemoteConversationService`]: over HTTP, against `unisocial-server`
//! - [`OfflineService`]: canned responses, no network

pub mod analyzer;
pub mod extraction;
pub mod failure;
pub mod gemini_api_agent;
pub mod model;
pub mod offline;
pub mod prompt;
pub mod remote_service;
pub mod reply;
pub mod route;
pub mod service;

pub use analyzer::{AnalysisFailure, PerformanceAnalyzer, parse_analysis_text};
pub use extraction::{ExtractionChain, ExtractionStrategy};
pub use failure::FailureKind;
pub use gemini_api_agent::GeminiApiAgent;
pub use model::{GenerationRequest, GenerativeModel, ModelError, ResponseFormat};
pub use offline::OfflineService;
pub use remote_service::RemoteConversationService;
pub use reply::{NO_RESPONSE_TEXT, ReplyFailure, ReplyGenerator};
pub use route::{ModelRoute, RouteOutcome};
pub use service::RolePlayService;
