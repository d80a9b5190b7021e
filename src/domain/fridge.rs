use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;
use crate::domain::ingredient::{normalize_name, StorageLocation};
use crate::errors::LedgerResult;

/// A physical fridge and its named sections.
///
/// Ingredient records do not reference fridges; storage location stays a flat attribute.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FridgeRecord {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub sections: Vec<String>,
}

impl FridgeRecord {
    /// Creates a fridge, dropping blank and repeated section names.
    pub fn new<I, S>(name: &str, sections: I) -> LedgerResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut kept: Vec<String> = Vec::new();
        for section in sections {
            let section = section.as_ref().trim();
            if !section.is_empty() && !kept.iter().any(|existing| existing == section) {
                kept.push(section.to_string());
            }
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name: normalize_name(name)?,
            sections: kept,
        })
    }

    /// Section names a new fridge starts with.
    pub fn default_sections() -> Vec<String> {
        [StorageLocation::Refrigerated, StorageLocation::Frozen]
            .iter()
            .map(|location| location.label_ko().to_string())
            .collect()
    }
}

impl Identifiable for FridgeRecord {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for FridgeRecord {
    fn display_label(&self) -> String {
        if self.sections.is_empty() {
            self.name.clone()
        } else {
            format!("{} [{}]", self.name, self.sections.join(", "))
        }
    }
}
