pub mod common;
pub mod fridge;
pub mod ingredient;
pub mod recipe;

pub use common::{Displayable, Expiring, Identifiable, Rated, Searchable, Stored};
pub use fridge::FridgeRecord;
pub use ingredient::{IngredientPatch, IngredientRecord, StorageFilter, StorageLocation, Urgency};
pub use recipe::{CookingEntry, Recipe};
