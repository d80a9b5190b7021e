//! Ingredient records and the storage locations they are kept in.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;
use crate::errors::{LedgerError, LedgerResult};

/// Where an ingredient is kept. Independent of any physical fridge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageLocation {
    #[default]
    Refrigerated,
    Frozen,
    Ambient,
}

impl StorageLocation {
    pub const ALL: [StorageLocation; 3] = [
        StorageLocation::Refrigerated,
        StorageLocation::Frozen,
        StorageLocation::Ambient,
    ];

    /// Short Korean label used by the mobile screens.
    pub fn label_ko(self) -> &'static str {
        match self {
            StorageLocation::Refrigerated => "냉장",
            StorageLocation::Frozen => "냉동",
            StorageLocation::Ambient => "실온",
        }
    }
}

impl fmt::Display for StorageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StorageLocation::Refrigerated => "refrigerated",
            StorageLocation::Frozen => "frozen",
            StorageLocation::Ambient => "ambient",
        };
        f.write_str(label)
    }
}

impl FromStr for StorageLocation {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "refrigerated" | "fridge" | "chilled" | "냉장" => Ok(StorageLocation::Refrigerated),
            "frozen" | "freezer" | "냉동" => Ok(StorageLocation::Frozen),
            "ambient" | "pantry" | "room" | "실온" => Ok(StorageLocation::Ambient),
            other => Err(LedgerError::InvalidInput(format!(
                "unknown storage location `{}`",
                other
            ))),
        }
    }
}

/// Storage tab selection: every location, or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageFilter {
    #[default]
    All,
    Location(StorageLocation),
}

impl StorageFilter {
    pub fn matches(self, location: StorageLocation) -> bool {
        match self {
            StorageFilter::All => true,
            StorageFilter::Location(selected) => selected == location,
        }
    }

    /// Location assigned to a record created while this filter is active.
    pub fn location_or(self, fallback: StorageLocation) -> StorageLocation {
        match self {
            StorageFilter::All => fallback,
            StorageFilter::Location(selected) => selected,
        }
    }
}

impl From<StorageLocation> for StorageFilter {
    fn from(location: StorageLocation) -> Self {
        StorageFilter::Location(location)
    }
}

impl fmt::Display for StorageFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageFilter::All => f.write_str("all"),
            StorageFilter::Location(location) => location.fmt(f),
        }
    }
}

impl FromStr for StorageFilter {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "all" | "전체" => Ok(StorageFilter::All),
            other => other.parse().map(StorageFilter::Location),
        }
    }
}

/// A tracked ingredient. Only the ledger creates and mutates records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngredientRecord {
    pub id: Uuid,
    pub name: String,
    pub storage: StorageLocation,
    pub expires_on: NaiveDate,
    #[serde(default)]
    pub checked: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl IngredientRecord {
    /// Builds a record with a fresh id, rejecting names that trim to nothing.
    pub fn new(
        name: &str,
        storage: StorageLocation,
        expires_on: NaiveDate,
    ) -> LedgerResult<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            name: normalize_name(name)?,
            storage,
            expires_on,
            checked: false,
            tags: Vec::new(),
        })
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = normalize_tags(tags);
        self
    }
}

impl Identifiable for IngredientRecord {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Stored for IngredientRecord {
    fn storage_location(&self) -> StorageLocation {
        self.storage
    }
}

impl Expiring for IngredientRecord {
    fn expires_on(&self) -> NaiveDate {
        self.expires_on
    }
}

impl Searchable for IngredientRecord {
    fn search_fields(&self) -> Vec<&str> {
        std::iter::once(self.name.as_str())
            .chain(self.tags.iter().map(String::as_str))
            .collect()
    }
}

/// Partial update applied by [`crate::ledger::Ledger::update`]. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientPatch {
    pub name: Option<String>,
    pub storage: Option<StorageLocation>,
    pub expires_on: Option<NaiveDate>,
    pub checked: Option<bool>,
    pub tags: Option<Vec<String>>,
}

impl IngredientPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.storage.is_none()
            && self.expires_on.is_none()
            && self.checked.is_none()
            && self.tags.is_none()
    }

    /// Validates the patch and writes it into `record`. Leaves `record` untouched on error.
    pub(crate) fn apply_to(&self, record: &mut IngredientRecord) -> LedgerResult<()> {
        let name = self.name.as_deref().map(normalize_name).transpose()?;
        if let Some(name) = name {
            record.name = name;
        }
        if let Some(storage) = self.storage {
            record.storage = storage;
        }
        if let Some(expires_on) = self.expires_on {
            record.expires_on = expires_on;
        }
        if let Some(checked) = self.checked {
            record.checked = checked;
        }
        if let Some(tags) = &self.tags {
            record.tags = normalize_tags(tags);
        }
        Ok(())
    }
}

/// How pressing an expiration is, relative to a reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Urgency {
    Expired,
    DueToday,
    Soon,
    Fresh,
}

impl Urgency {
    /// Classifies a signed day count; `soon_within` is the last day still counted as soon.
    pub fn classify(days_left: i64, soon_within: i64) -> Self {
        match days_left {
            d if d < 0 => Urgency::Expired,
            0 => Urgency::DueToday,
            d if d <= soon_within => Urgency::Soon,
            _ => Urgency::Fresh,
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Urgency::Expired => "expired",
            Urgency::DueToday => "due today",
            Urgency::Soon => "soon",
            Urgency::Fresh => "fresh",
        };
        f.write_str(label)
    }
}

pub(crate) fn normalize_name(input: &str) -> LedgerResult<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::InvalidInput("name must not be empty".into()));
    }
    Ok(trimmed.to_string())
}

fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().trim().to_lowercase();
        if !tag.is_empty() && !normalized.contains(&tag) {
            normalized.push(tag);
        }
    }
    normalized
}
