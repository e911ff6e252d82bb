//! Transcript domain module.
//!
//! - `message`: Turn-tagged messages (`Message`, `Sender`)
//! - `model`: The append-only session log (`Transcript`) and its frozen form

mod message;
mod model;

pub use message::{Message, Sender};
pub use model::{Transcript, TranscriptSnapshot, render_transcript};
