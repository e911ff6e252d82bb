//! In-memory scenario catalog.

use super::model::{Category, Scenario};
use super::preset::{GENERAL_OBJECTIVES, category_objectives, get_default_scenarios};
use crate::error::{Result, UniSocialError};

/// The scenario list as seen during one process lifetime.
///
/// Description edits live only here; restarting the process restores the
/// built-in descriptions.
#[derive(Debug, Clone)]
pub struct ScenarioCatalog {
    scenarios: Vec<Scenario>,
}

impl ScenarioCatalog {
    pub fn new(scenarios: Vec<Scenario>) -> Self {
        Self { scenarios }
    }

    /// All scenarios in catalog order.
    pub fn all(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn get(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    /// Scenarios in the given category, or every scenario when `None`.
    pub fn filter(&self, category: Option<Category>) -> Vec<&Scenario> {
        self.scenarios
            .iter()
            .filter(|s| category.is_none_or(|c| s.category == c))
            .collect()
    }

    /// Replaces the description of a scenario in place.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the new description is blank
    /// - `NotFound` if no scenario has the given id
    pub fn update_description(&mut self, id: &str, description: &str) -> Result<&Scenario> {
        let trimmed = description.trim();
        if trimmed.is_empty() {
            return Err(UniSocialError::invalid_input(
                "scenario description cannot be empty",
            ));
        }

        let scenario = self
            .scenarios
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| UniSocialError::not_found("scenario", id))?;
        scenario.description = trimmed.to_string();
        tracing::debug!(scenario_id = id, "scenario description updated");
        Ok(scenario)
    }

    /// Learning objectives for a category, or the general ones for `None`.
    pub fn objectives(category: Option<Category>) -> Vec<&'static str> {
        match category {
            Some(category) => category_objectives(category).to_vec(),
            None => GENERAL_OBJECTIVES.to_vec(),
        }
    }
}

impl Default for ScenarioCatalog {
    fn default() -> Self {
        Self::new(get_default_scenarios())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn default_catalog_covers_every_category_once() {
        let catalog = ScenarioCatalog::default();
        for category in Category::iter() {
            assert_eq!(catalog.filter(Some(category)).len(), 1, "{category}");
        }
        assert_eq!(catalog.filter(None).len(), catalog.all().len());
    }

    #[test]
    fn scenario_ids_are_unique_and_lines_present() {
        let catalog = ScenarioCatalog::default();
        let ids: HashSet<_> = catalog.all().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.all().len());
        for scenario in catalog.all() {
            assert!(!scenario.opening_line.is_empty());
            assert!(scenario.persona_instruction.contains("Chinese (Simplified)"));
        }
    }

    #[test]
    fn update_description_edits_in_place() {
        let mut catalog = ScenarioCatalog::default();
        let updated = catalog
            .update_description("social_party", "  新的描述  ")
            .unwrap();
        assert_eq!(updated.description, "新的描述");
        assert_eq!(catalog.get("social_party").unwrap().description, "新的描述");
    }

    #[test]
    fn update_description_rejects_unknown_and_blank() {
        let mut catalog = ScenarioCatalog::default();
        assert!(catalog.update_description("nope", "x").unwrap_err().is_not_found());
        assert!(
            catalog
                .update_description("social_party", "   ")
                .unwrap_err()
                .is_invalid_input()
        );
    }

    #[test]
    fn objectives_fall_back_to_general() {
        assert_eq!(ScenarioCatalog::objectives(None), GENERAL_OBJECTIVES.to_vec());
        assert_eq!(ScenarioCatalog::objectives(Some(Category::Dorm)).len(), 3);
    }
}
