use chrono::NaiveDate;
use uuid::Uuid;

use super::ingredient::StorageLocation;

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Entities kept in one of the storage locations.
pub trait Stored {
    fn storage_location(&self) -> StorageLocation;
}

/// Entities carrying a calendar expiration date.
pub trait Expiring {
    fn expires_on(&self) -> NaiveDate;
}

/// Entities that can be matched against a free-text query.
pub trait Searchable {
    /// Text fragments the query is matched against, in any order.
    fn search_fields(&self) -> Vec<&str>;
}

/// Entities ranked by a user rating.
pub trait Rated {
    fn rating(&self) -> f64;
}

// Re-export common dependencies so consumers can rely on this module as a façade.
pub use chrono;
pub use serde;
pub use uuid;
