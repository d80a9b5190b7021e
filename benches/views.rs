use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pantry_core::core::views::{expiring_within, sort_by_urgency, IngredientQuery};
use pantry_core::domain::{StorageFilter, StorageLocation};
use pantry_core::ledger::Ledger;

const NAMES: [&str; 6] = ["우유", "소고기", "양파", "계란", "두부", "김치"];

fn build_sample_ledger(count: usize) -> Ledger {
    let mut ledger = Ledger::new();
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    for idx in 0..count {
        let storage = StorageLocation::ALL[idx % StorageLocation::ALL.len()];
        ledger
            .add_purchased(NAMES[idx % NAMES.len()], storage, start, (idx % 90) as i64)
            .unwrap();
    }
    ledger
}

fn bench_views(c: &mut Criterion) {
    let ledger = build_sample_ledger(5_000);
    let today = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();

    c.bench_function("sort_by_urgency_5k", |b| {
        b.iter(|| sort_by_urgency(black_box(ledger.ingredients()), today))
    });

    c.bench_function("list_query_5k", |b| {
        let query = IngredientQuery::new(StorageFilter::Location(StorageLocation::Refrigerated))
            .matching("우")
            .by_urgency(today);
        b.iter(|| query.apply(black_box(ledger.ingredients())))
    });

    c.bench_function("expiring_within_5k", |b| {
        b.iter(|| expiring_within(black_box(ledger.ingredients()), today, 3))
    });
}

criterion_group!(benches, bench_views);
criterion_main!(benches);
