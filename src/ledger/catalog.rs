use once_cell::sync::Lazy;

use crate::domain::Recipe;

static SEEDED: Lazy<RecipeCatalog> = Lazy::new(|| RecipeCatalog::new(seed_recipes()));

/// Read-only recipe lookup keyed by slug. The ledger does not own or modify it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// The built-in catalog shipped with the app.
    pub fn seeded() -> Self {
        SEEDED.clone()
    }

    /// Looks up a recipe by slug. Unknown slugs yield `None`.
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        let id = id.trim();
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[allow(clippy::too_many_arguments)]
fn recipe(
    id: &str,
    title: &str,
    description: &str,
    rating: f64,
    cook_minutes: u32,
    tags: &[&str],
    ingredients: &[&str],
    steps: &[&str],
) -> Recipe {
    let owned =
        |items: &[&str]| -> Vec<String> { items.iter().map(|item| item.to_string()).collect() };
    Recipe {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        rating,
        cook_minutes,
        tags: owned(tags),
        ingredients: owned(ingredients),
        steps: owned(steps),
    }
}

fn seed_recipes() -> Vec<Recipe> {
    vec![
        recipe(
            "kimchi-jjigae",
            "김치찌개",
            "집에 있는 김치로 간단하게 끓이는 레시피",
            4.6,
            25,
            &["한식", "국물", "매콤"],
            &["김치", "돼지고기", "두부", "대파"],
            &[
                "냄비에 김치와 고기를 볶습니다.",
                "물을 붓고 끓입니다.",
                "두부를 넣고 5분 더 끓입니다.",
                "대파를 올리고 마무리합니다.",
            ],
        ),
        recipe(
            "cream-pasta",
            "크림 파스타",
            "우유/생크림으로 만드는 부드러운 파스타",
            4.2,
            20,
            &["양식", "면", "크림"],
            &["파스타면", "우유", "버터", "마늘"],
            &[
                "면을 삶습니다.",
                "팬에 버터/마늘을 볶습니다.",
                "우유를 넣고 졸입니다.",
                "면을 넣고 섞어 마무리합니다.",
            ],
        ),
        recipe(
            "egg-fried-rice",
            "계란 볶음밥",
            "계란만 있으면 되는 초간단 한 끼",
            4.0,
            10,
            &["간편", "밥", "10분"],
            &["밥", "계란", "간장"],
            &[
                "계란을 풀어 볶습니다.",
                "밥을 넣고 볶습니다.",
                "간을 맞추고 마무리합니다.",
            ],
        ),
    ]
}
