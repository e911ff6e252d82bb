use std::str::FromStr;

use colored::Colorize;
use strum::IntoEnumIterator;
use unisocial_core::scenario::{Category, ScenarioCatalog};

/// clap value parser for `--category`.
pub fn parse_category(value: &str) -> Result<Category, String> {
    Category::from_str(value.trim()).map_err(|_| {
        let known: Vec<String> = Category::iter().map(|c| c.to_string()).collect();
        format!("unknown category '{value}' (expected one of: {})", known.join(", "))
    })
}

pub fn list_scenarios(category: Option<Category>) {
    let catalog = ScenarioCatalog::default();
    for scenario in catalog.filter(category) {
        println!(
            "{} {}  {}",
            scenario.icon,
            scenario.title.bold(),
            format!("[{}]", scenario.id).bright_black()
        );
        println!(
            "   {} · {}",
            scenario.category.label().cyan(),
            scenario.difficulty.label().yellow()
        );
        println!("   {}", scenario.description);
        println!();
    }
}

pub fn list_objectives(category: Option<Category>) {
    let heading = category.map_or("通用目标", |c| c.label());
    println!("{}", heading.bright_magenta().bold());
    for objective in ScenarioCatalog::objectives(category) {
        println!("  • {objective}");
    }
}
