//! Scenario domain model.
//!
//! A scenario is a social situation the user rehearses against an AI-played
//! character. The character is driven by the scenario's persona instruction.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Social domain a scenario belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Category {
    /// Roommate and dormitory life
    Dorm,
    /// Talking with teachers and professors
    Academic,
    /// Dating and relationships
    Romance,
    /// Clubs, interviews, workplace
    Career,
    /// Everyday small talk
    Social,
    /// Repairing friendships and resolving conflicts
    Interpersonal,
}

impl Category {
    /// Display label shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Dorm => "宿舍关系",
            Category::Academic => "师生沟通",
            Category::Romance => "情感恋爱",
            Category::Career => "社团职场",
            Category::Social => "日常社交",
            Category::Interpersonal => "人际交往",
        }
    }
}

/// How demanding the character is.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Display label shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "入门",
            Difficulty::Medium => "进阶",
            Difficulty::Hard => "挑战",
        }
    }
}

/// A role-play scenario.
///
/// Everything except `description` is fixed at catalog construction time.
/// The description may be edited in memory while browsing the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// Stable identifier (e.g. `dorm_conflict_cleaning`)
    pub id: String,
    /// Short title, also sent to the analyzer
    pub title: String,
    /// User-facing situation description
    pub description: String,
    pub category: Category,
    pub difficulty: Difficulty,
    /// Personality and response rules handed to the generation model
    pub persona_instruction: String,
    /// First line spoken by the character; seeds every transcript
    pub opening_line: String,
    /// Emoji icon
    pub icon: String,
}
