//! Demo content shown on first launch.

use chrono::NaiveDate;

use crate::core::dates::add_days;
use crate::domain::{FridgeRecord, IngredientRecord, StorageLocation};
use crate::errors::LedgerResult;

use super::Ledger;

/// (name, storage, days until expiry, tags), in display order.
const SAMPLE_INGREDIENTS: [(&str, StorageLocation, i64, &str); 4] = [
    ("소고기", StorageLocation::Refrigerated, 4, "meat"),
    ("우유", StorageLocation::Refrigerated, 3, "dairy"),
    ("양파", StorageLocation::Ambient, 6, "vegetable"),
    ("계란", StorageLocation::Refrigerated, 11, "egg"),
];

impl Ledger {
    /// A ledger holding the demo ingredients (dated relative to `today`) and one fridge.
    pub fn with_sample_data(today: NaiveDate) -> LedgerResult<Self> {
        let mut ledger = Ledger::default();
        ledger.add_fridge("메인 냉장고", FridgeRecord::default_sections())?;
        for (name, storage, offset, tag) in SAMPLE_INGREDIENTS.iter().rev() {
            let record = IngredientRecord::new(name, *storage, add_days(today, *offset)?)?
                .with_tags([tag]);
            ledger.insert(record)?;
        }
        Ok(ledger)
    }
}
