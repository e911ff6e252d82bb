//! Domain layer for UniSocial, a role-play practice tool.
//!
//! A user picks a [`scenario::Scenario`], talks to an AI-played character, and
//! receives an [`analysis::AnalysisResult`] at the end. This crate holds the
//! data model and the session lifecycle. Upstream model calls live behind
//! [`session::ConversationService`].

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod scenario;
pub mod secret;
pub mod session;
pub mod transcript;

// Re-export common error type
pub use error::{Result, UniSocialError};
