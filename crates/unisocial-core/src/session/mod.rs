//! Session domain module.
//!
//! - `service`: The `ConversationService` seam the controller talks through
//! - `controller`: Transcript lifecycle for one role-play session

mod controller;
mod service;

pub use controller::{SessionController, SessionReport};
pub use service::ConversationService;
