//! Pure view derivations over ledger snapshots.
//!
//! Every function borrows its input and returns a fresh vector, so steps can be
//! chained in any order without touching the store.

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::dates::days_until;
use crate::domain::{
    Expiring, IngredientRecord, Rated, Searchable, StorageFilter, Stored, Urgency,
};

/// Keeps records in the selected location; `StorageFilter::All` passes everything through.
pub fn filter_by_storage<T>(records: &[T], filter: StorageFilter) -> Vec<T>
where
    T: Stored + Clone,
{
    records
        .iter()
        .filter(|record| filter.matches(record.storage_location()))
        .cloned()
        .collect()
}

/// Case-insensitive substring match over the record's searchable fields.
/// A blank query keeps every record.
pub fn filter_by_query<T>(records: &[T], query: &str) -> Vec<T>
where
    T: Searchable + Clone,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| record.search_fields().join(" ").to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Soonest expiration first. Stable: equal day counts keep their input order.
pub fn sort_by_urgency<T>(records: &[T], reference: NaiveDate) -> Vec<T>
where
    T: Expiring + Clone,
{
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|record| days_until(record.expires_on(), reference));
    sorted
}

/// Highest rating first. Stable: equal ratings keep their input order.
pub fn sort_by_rating<T>(records: &[T]) -> Vec<T>
where
    T: Rated + Clone,
{
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.rating().total_cmp(&a.rating()));
    sorted
}

/// A record together with its day count relative to a reference day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpiryEntry {
    pub record: IngredientRecord,
    pub days_left: i64,
    pub urgency: Urgency,
}

/// Pairs each record with its day count, preserving input order.
pub fn annotate(
    records: &[IngredientRecord],
    reference: NaiveDate,
    soon_within: i64,
) -> Vec<ExpiryEntry> {
    records
        .iter()
        .map(|record| {
            let days_left = days_until(record.expires_on, reference);
            ExpiryEntry {
                record: record.clone(),
                days_left,
                urgency: Urgency::classify(days_left, soon_within),
            }
        })
        .collect()
}

/// Records expiring within `days` of `reference` (overdue ones included), soonest first.
pub fn expiring_within(
    records: &[IngredientRecord],
    reference: NaiveDate,
    days: i64,
) -> Vec<ExpiryEntry> {
    let sorted = sort_by_urgency(records, reference);
    annotate(&sorted, reference, days)
        .into_iter()
        .filter(|entry| entry.days_left <= days)
        .collect()
}

/// Settings of the ingredient list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientQuery {
    pub storage: StorageFilter,
    pub text: String,
    /// Sort soonest-expiring first against this day; `None` keeps store order.
    pub reference: Option<NaiveDate>,
}

impl IngredientQuery {
    pub fn new(storage: StorageFilter) -> Self {
        Self {
            storage,
            text: String::new(),
            reference: None,
        }
    }

    pub fn matching(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn by_urgency(mut self, reference: NaiveDate) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Storage filter, then text filter, then the optional urgency sort.
    pub fn apply(&self, records: &[IngredientRecord]) -> Vec<IngredientRecord> {
        let by_storage = filter_by_storage(records, self.storage);
        let by_text = filter_by_query(&by_storage, &self.text);
        match self.reference {
            Some(reference) => sort_by_urgency(&by_text, reference),
            None => by_text,
        }
    }
}

impl Default for IngredientQuery {
    fn default() -> Self {
        Self::new(StorageFilter::All)
    }
}
