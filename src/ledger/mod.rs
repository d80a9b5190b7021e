//! The ingredient ledger store and the recipe catalog it is read alongside.

pub mod catalog;
#[allow(clippy::module_inception)]
pub mod ledger;
mod samples;

pub use catalog::RecipeCatalog;
pub use ledger::Ledger;
