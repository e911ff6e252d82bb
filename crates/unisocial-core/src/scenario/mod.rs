//! Scenario domain module.
//!
//! # Module Structure
//!
//! - `model`: Core scenario models (`Scenario`, `Category`, `Difficulty`)
//! - `preset`: Built-in scenarios and learning objectives
//! - `catalog`: In-memory catalog with filtering and description editing

mod catalog;
mod model;
mod preset;

// Re-export public API
pub use catalog::ScenarioCatalog;
pub use model::{Category, Difficulty, Scenario};
pub use preset::{GENERAL_OBJECTIVES, category_objectives, get_default_scenarios};
