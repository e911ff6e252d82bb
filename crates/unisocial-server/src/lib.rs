//! HTTP proxy for UniSocial.
//!
//! Exposes the reply and analysis orchestration to the browser front end,
//! together with the scenario catalog. The upstream credential stays on this
//! side of the wire.

pub mod app;
pub mod error;
pub mod routes;
pub mod telemetry;

pub use app::{AppState, SharedState, build_router};
pub use error::ApiError;
