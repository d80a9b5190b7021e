use chrono::NaiveDate;
use uuid::Uuid;

use crate::core::dates::{add_days, parse_date};
use crate::domain::ingredient::normalize_name;
use crate::domain::{
    CookingEntry, FridgeRecord, Identifiable, IngredientPatch, IngredientRecord, StorageLocation,
};
use crate::errors::{LedgerError, LedgerResult};

/// In-memory store of ingredient records, fridges, and the cooking log.
///
/// Collections are kept newest first. Every command either applies fully or
/// leaves the ledger unchanged; commands aimed at an unknown id are no-ops.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    ingredients: Vec<IngredientRecord>,
    fridges: Vec<FridgeRecord>,
    cooking_log: Vec<CookingEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a record and puts it at the front of the list.
    pub fn add(
        &mut self,
        name_input: &str,
        storage: StorageLocation,
        expires_on: NaiveDate,
    ) -> LedgerResult<IngredientRecord> {
        let record = IngredientRecord::new(name_input, storage, expires_on).inspect_err(|err| {
            tracing::warn!(error = %err, "rejected ingredient");
        })?;
        self.insert(record.clone())?;
        Ok(record)
    }

    /// Like [`Ledger::add`], parsing the expiration from `YYYY-MM-DD`.
    /// The name is validated before the date.
    pub fn add_from_str(
        &mut self,
        name_input: &str,
        storage: StorageLocation,
        expires_on: &str,
    ) -> LedgerResult<IngredientRecord> {
        if name_input.trim().is_empty() {
            tracing::warn!("rejected ingredient with blank name");
            return Err(LedgerError::InvalidInput("name must not be empty".into()));
        }
        let expires_on = parse_date(expires_on)?;
        self.add(name_input, storage, expires_on)
    }

    /// Adds an ingredient bought on `purchased_on` that keeps for `shelf_life_days`.
    pub fn add_purchased(
        &mut self,
        name_input: &str,
        storage: StorageLocation,
        purchased_on: NaiveDate,
        shelf_life_days: i64,
    ) -> LedgerResult<IngredientRecord> {
        let expires_on = add_days(purchased_on, shelf_life_days)?;
        self.add(name_input, storage, expires_on)
    }

    /// Prepends an already-built record. Rejects blank names and ids the ledger already holds.
    pub fn insert(&mut self, mut record: IngredientRecord) -> LedgerResult<Uuid> {
        record.name = normalize_name(&record.name).inspect_err(|err| {
            tracing::warn!(error = %err, "rejected ingredient");
        })?;
        let id = record.id;
        if self.get(id).is_some() {
            return Err(LedgerError::InvalidInput(format!(
                "ingredient {} already exists",
                id
            )));
        }
        tracing::debug!(%id, name = %record.name, "ingredient added");
        self.ingredients.insert(0, record);
        Ok(id)
    }

    /// Deletes the record with `id`, returning it when it existed.
    pub fn remove(&mut self, id: Uuid) -> Option<IngredientRecord> {
        let index = self.ingredients.iter().position(|record| record.id == id)?;
        let removed = self.ingredients.remove(index);
        tracing::debug!(%id, "ingredient removed");
        Some(removed)
    }

    /// Applies `patch` in place. Returns `false` when no record has `id`.
    pub fn update(&mut self, id: Uuid, patch: &IngredientPatch) -> LedgerResult<bool> {
        let Some(record) = self.ingredient_mut(id) else {
            return Ok(false);
        };
        let mut staged = record.clone();
        patch.apply_to(&mut staged)?;
        *record = staged;
        tracing::debug!(%id, "ingredient updated");
        Ok(true)
    }

    /// Moves the expiration of `id` by `delta_days` (negative moves it earlier).
    pub fn bump_expiration(&mut self, id: Uuid, delta_days: i64) -> LedgerResult<bool> {
        let Some(record) = self.get(id) else {
            return Ok(false);
        };
        let shifted = add_days(record.expires_on, delta_days)?;
        self.update(
            id,
            &IngredientPatch {
                expires_on: Some(shifted),
                ..IngredientPatch::default()
            },
        )
    }

    /// Flips the checked mark of `id`. Returns `false` when no record has `id`.
    pub fn toggle_checked(&mut self, id: Uuid) -> bool {
        let Some(record) = self.ingredient_mut(id) else {
            return false;
        };
        record.checked = !record.checked;
        tracing::debug!(%id, checked = record.checked, "ingredient check toggled");
        true
    }

    /// Snapshot of the records, newest first. Changing it leaves the ledger untouched.
    pub fn list(&self) -> Vec<IngredientRecord> {
        self.ingredients.clone()
    }

    pub fn ingredients(&self) -> &[IngredientRecord] {
        &self.ingredients
    }

    pub fn get(&self, id: Uuid) -> Option<&IngredientRecord> {
        self.ingredients.iter().find(|record| record.id == id)
    }

    fn ingredient_mut(&mut self, id: Uuid) -> Option<&mut IngredientRecord> {
        self.ingredients.iter_mut().find(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Ingredient ids starting with `prefix` (case-insensitive hyphenated form).
    pub fn ingredient_ids_with_prefix(&self, prefix: &str) -> Vec<Uuid> {
        ids_with_prefix(&self.ingredients, prefix)
    }

    pub fn add_fridge<I, S>(&mut self, name: &str, sections: I) -> LedgerResult<FridgeRecord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fridge = FridgeRecord::new(name, sections)?;
        tracing::debug!(id = %fridge.id, name = %fridge.name, "fridge added");
        self.fridges.insert(0, fridge.clone());
        Ok(fridge)
    }

    pub fn remove_fridge(&mut self, id: Uuid) -> Option<FridgeRecord> {
        let index = self.fridges.iter().position(|fridge| fridge.id == id)?;
        let removed = self.fridges.remove(index);
        tracing::debug!(%id, "fridge removed");
        Some(removed)
    }

    /// Snapshot of the fridges, newest first.
    pub fn fridges(&self) -> Vec<FridgeRecord> {
        self.fridges.clone()
    }

    pub fn fridge_ids_with_prefix(&self, prefix: &str) -> Vec<Uuid> {
        ids_with_prefix(&self.fridges, prefix)
    }

    /// Records that `recipe_id` was cooked on `cooked_on`.
    pub fn log_cooking(
        &mut self,
        recipe_id: &str,
        cooked_on: NaiveDate,
    ) -> LedgerResult<CookingEntry> {
        let recipe_id = recipe_id.trim();
        if recipe_id.is_empty() {
            return Err(LedgerError::InvalidInput("recipe id must not be empty".into()));
        }
        let entry = CookingEntry {
            recipe_id: recipe_id.to_string(),
            cooked_on,
        };
        tracing::debug!(recipe = %entry.recipe_id, %cooked_on, "cooking logged");
        self.cooking_log.insert(0, entry.clone());
        Ok(entry)
    }

    /// Cooking log, latest day first; entries of the same day keep newest-first order.
    pub fn cooking_log(&self) -> Vec<CookingEntry> {
        let mut log = self.cooking_log.clone();
        log.sort_by(|a, b| b.cooked_on.cmp(&a.cooked_on));
        log
    }
}

fn ids_with_prefix<T: Identifiable>(items: &[T], prefix: &str) -> Vec<Uuid> {
    let needle = prefix.trim().to_ascii_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    items
        .iter()
        .map(Identifiable::id)
        .filter(|id| id.hyphenated().to_string().starts_with(&needle))
        .collect()
}
