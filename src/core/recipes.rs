//! Recipe listings and ingredient availability against a ledger snapshot.

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::core::views::{filter_by_query, sort_by_rating};
use crate::domain::{CookingEntry, IngredientRecord, Recipe};
use crate::errors::LedgerError;
use crate::ledger::RecipeCatalog;

/// Tabs of the recipe screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecipeTab {
    /// Catalog order.
    #[default]
    Recipes,
    /// Highest rated first.
    Recommended,
    /// Recipes from the cooking log, most recently cooked first.
    CookingLog,
}

impl fmt::Display for RecipeTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecipeTab::Recipes => "recipes",
            RecipeTab::Recommended => "recommended",
            RecipeTab::CookingLog => "log",
        };
        f.write_str(label)
    }
}

impl FromStr for RecipeTab {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "recipes" | "all" | "레시피" => Ok(RecipeTab::Recipes),
            "recommended" | "top" | "레시피 추천" => Ok(RecipeTab::Recommended),
            "log" | "history" | "요리 기록" => Ok(RecipeTab::CookingLog),
            other => Err(LedgerError::InvalidInput(format!(
                "unknown recipe tab `{}`",
                other
            ))),
        }
    }
}

/// Recipes shown for `tab`, narrowed by `query` over title, description and tags.
///
/// `log` is expected newest first, as returned by the ledger. A recipe cooked
/// several times appears once, at its most recent position.
pub fn recipe_view(
    catalog: &RecipeCatalog,
    tab: RecipeTab,
    log: &[CookingEntry],
    query: &str,
) -> Vec<Recipe> {
    let base: Vec<Recipe> = match tab {
        RecipeTab::Recipes => catalog.all().to_vec(),
        RecipeTab::Recommended => sort_by_rating(catalog.all()),
        RecipeTab::CookingLog => {
            let mut seen: Vec<&str> = Vec::new();
            let mut cooked = Vec::new();
            for entry in log {
                if seen.contains(&entry.recipe_id.as_str()) {
                    continue;
                }
                seen.push(entry.recipe_id.as_str());
                if let Some(recipe) = catalog.get(&entry.recipe_id) {
                    cooked.push(recipe.clone());
                }
            }
            cooked
        }
    };
    filter_by_query(&base, query)
}

/// Whether the ledger holds an ingredient with this name (trimmed, case-insensitive).
pub fn ingredient_available(name: &str, snapshot: &[IngredientRecord]) -> bool {
    let wanted = name.trim().to_lowercase();
    !wanted.is_empty()
        && snapshot
            .iter()
            .any(|record| record.name.trim().to_lowercase() == wanted)
}

/// One line of a recipe's ingredient checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientAvailability {
    pub name: String,
    pub available: bool,
}

/// Checks every recipe ingredient against the snapshot, in recipe order.
pub fn recipe_availability(
    recipe: &Recipe,
    snapshot: &[IngredientRecord],
) -> Vec<IngredientAvailability> {
    recipe
        .ingredients
        .iter()
        .map(|name| IngredientAvailability {
            name: name.clone(),
            available: ingredient_available(name, snapshot),
        })
        .collect()
}

/// Recipe ingredients the snapshot lacks.
pub fn missing_ingredients(recipe: &Recipe, snapshot: &[IngredientRecord]) -> Vec<String> {
    recipe_availability(recipe, snapshot)
        .into_iter()
        .filter(|line| !line.available)
        .map(|line| line.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StorageLocation;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn snapshot() -> Vec<IngredientRecord> {
        ["우유", "Garlic", "계란"]
            .iter()
            .map(|name| {
                IngredientRecord::new(name, StorageLocation::Refrigerated, date(2026, 1, 2))
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn availability_matches_whole_names() {
        let snapshot = snapshot();
        assert!(ingredient_available(" 우유", &snapshot));
        assert!(ingredient_available("garlic", &snapshot));
        assert!(!ingredient_available("우", &snapshot));
        assert!(!ingredient_available("", &snapshot));
    }

    #[test]
    fn cream_pasta_lacks_noodles_and_butter() {
        let catalog = RecipeCatalog::seeded();
        let pasta = catalog.get("cream-pasta").unwrap();
        let missing = missing_ingredients(pasta, &snapshot());
        assert_eq!(missing, vec!["파스타면".to_string(), "버터".to_string(), "마늘".to_string()]);
    }

    #[test]
    fn recommended_tab_orders_by_rating() {
        let catalog = RecipeCatalog::seeded();
        let ids: Vec<_> = recipe_view(&catalog, RecipeTab::Recommended, &[], "")
            .into_iter()
            .map(|recipe| recipe.id)
            .collect();
        assert_eq!(ids, ["kimchi-jjigae", "cream-pasta", "egg-fried-rice"]);
    }

    #[test]
    fn log_tab_deduplicates_and_skips_unknown_recipes() {
        let catalog = RecipeCatalog::seeded();
        let log = vec![
            CookingEntry {
                recipe_id: "egg-fried-rice".into(),
                cooked_on: date(2026, 1, 3),
            },
            CookingEntry {
                recipe_id: "missing".into(),
                cooked_on: date(2026, 1, 2),
            },
            CookingEntry {
                recipe_id: "egg-fried-rice".into(),
                cooked_on: date(2026, 1, 1),
            },
        ];
        let view = recipe_view(&catalog, RecipeTab::CookingLog, &log, "");
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "egg-fried-rice");
    }

    #[test]
    fn query_searches_tags() {
        let catalog = RecipeCatalog::seeded();
        let view = recipe_view(&catalog, RecipeTab::Recipes, &[], "국물");
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "kimchi-jjigae");
    }
}
