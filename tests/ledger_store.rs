mod common;

use common::{date, sample_ledger};
use pantry_core::domain::{IngredientPatch, StorageLocation};
use pantry_core::errors::LedgerError;
use pantry_core::ledger::Ledger;
use uuid::Uuid;

#[test]
fn add_then_remove_restores_previous_state() {
    let mut ledger = sample_ledger();
    let before = ledger.list();

    let added = ledger
        .add("두부", StorageLocation::Refrigerated, date(2026, 1, 2))
        .unwrap();
    assert_eq!(ledger.list()[0], added);
    assert_eq!(ledger.len(), before.len() + 1);

    let removed = ledger.remove(added.id).unwrap();
    assert_eq!(removed, added);
    assert_eq!(ledger.list(), before);
}

#[test]
fn added_names_are_trimmed_and_ids_unique() {
    let mut ledger = Ledger::default();
    let first = ledger
        .add("  우유 ", StorageLocation::Refrigerated, date(2026, 1, 2))
        .unwrap();
    let second = ledger
        .add("우유", StorageLocation::Refrigerated, date(2026, 1, 2))
        .unwrap();
    assert_eq!(first.name, "우유");
    assert!(!first.checked);
    assert_ne!(first.id, second.id);
}

#[test]
fn rejected_input_leaves_ledger_unchanged() {
    let mut ledger = sample_ledger();
    let before = ledger.list();

    assert!(matches!(
        ledger.add("   ", StorageLocation::Frozen, date(2026, 1, 2)),
        Err(LedgerError::InvalidInput(_))
    ));
    assert!(matches!(
        ledger.add_from_str("두부", StorageLocation::Frozen, "2026/01/02"),
        Err(LedgerError::InvalidDate(_))
    ));
    assert!(matches!(
        ledger.add_from_str("", StorageLocation::Frozen, "garbage"),
        Err(LedgerError::InvalidInput(_))
    ));
    assert_eq!(ledger.list(), before);
}

#[test]
fn purchased_items_use_shelf_life() {
    let mut ledger = Ledger::default();
    let record = ledger
        .add_purchased("대파", StorageLocation::Ambient, date(2025, 1, 28), 5)
        .unwrap();
    assert_eq!(record.expires_on, date(2025, 2, 2));
}

#[test]
fn bump_moves_expiration_by_whole_days() {
    let mut ledger = Ledger::default();
    let jan = ledger
        .add("a", StorageLocation::Refrigerated, date(2025, 1, 1))
        .unwrap();
    let late_jan = ledger
        .add("b", StorageLocation::Refrigerated, date(2025, 1, 28))
        .unwrap();

    assert!(ledger.bump_expiration(jan.id, 5).unwrap());
    assert!(ledger.bump_expiration(late_jan.id, 5).unwrap());
    assert_eq!(ledger.get(jan.id).unwrap().expires_on, date(2025, 1, 6));
    assert_eq!(ledger.get(late_jan.id).unwrap().expires_on, date(2025, 2, 2));

    assert!(ledger.bump_expiration(jan.id, -10).unwrap());
    assert_eq!(ledger.get(jan.id).unwrap().expires_on, date(2024, 12, 27));
}

#[test]
fn unknown_ids_are_silent_no_ops() {
    let mut ledger = sample_ledger();
    let before = ledger.list();
    let missing = Uuid::new_v4();

    assert!(ledger.remove(missing).is_none());
    assert!(!ledger.toggle_checked(missing));
    assert_eq!(ledger.bump_expiration(missing, 5), Ok(false));
    let patch = IngredientPatch {
        name: Some("무".into()),
        ..IngredientPatch::default()
    };
    assert_eq!(ledger.update(missing, &patch), Ok(false));
    assert_eq!(ledger.list(), before);
}

#[test]
fn toggle_twice_restores_checked() {
    let mut ledger = sample_ledger();
    let record = ledger.list()[2].clone();
    assert!(ledger.toggle_checked(record.id));
    assert!(ledger.get(record.id).unwrap().checked);
    assert!(ledger.toggle_checked(record.id));
    assert_eq!(ledger.get(record.id), Some(&record));
}

#[test]
fn update_keeps_id_and_position() {
    let mut ledger = sample_ledger();
    let target = ledger.list()[1].clone();
    let patch = IngredientPatch {
        name: Some(" 저지방 우유 ".into()),
        storage: Some(StorageLocation::Frozen),
        tags: Some(vec!["Dairy".into(), "dairy".into(), " low-fat ".into()]),
        ..IngredientPatch::default()
    };
    assert_eq!(ledger.update(target.id, &patch), Ok(true));

    let updated = ledger.list()[1].clone();
    assert_eq!(updated.id, target.id);
    assert_eq!(updated.name, "저지방 우유");
    assert_eq!(updated.storage, StorageLocation::Frozen);
    assert_eq!(updated.tags, ["dairy", "low-fat"]);
    assert_eq!(updated.expires_on, target.expires_on);
}

#[test]
fn list_returns_an_independent_snapshot() {
    let mut ledger = sample_ledger();
    let mut snapshot = ledger.list();
    snapshot.clear();
    assert_eq!(ledger.len(), 4);

    let before = ledger.list();
    let id = before[0].id;
    ledger.toggle_checked(id);
    assert!(!before[0].checked);
}
