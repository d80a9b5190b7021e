use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::*;

/// A catalog recipe. Recipes are looked up by their slug id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    /// 0.0 to 5.0.
    pub rating: f64,
    pub cook_minutes: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
}

impl Displayable for Recipe {
    fn display_label(&self) -> String {
        format!("{} ★{:.1} · {}min", self.title, self.rating, self.cook_minutes)
    }
}

impl Searchable for Recipe {
    fn search_fields(&self) -> Vec<&str> {
        [self.title.as_str(), self.description.as_str()]
            .into_iter()
            .chain(self.tags.iter().map(String::as_str))
            .collect()
    }
}

impl Rated for Recipe {
    fn rating(&self) -> f64 {
        self.rating
    }
}

/// A cooking log entry: which recipe was cooked on which day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CookingEntry {
    pub recipe_id: String,
    pub cooked_on: NaiveDate,
}
