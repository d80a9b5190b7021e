#![allow(dead_code)]

use std::sync::Mutex;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use pantry_core::{config::ConfigManager, ledger::Ledger};
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub const TODAY: &str = "2025-12-30";

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

pub fn today() -> NaiveDate {
    date(2025, 12, 30)
}

/// Creates an isolated config directory for each test.
pub fn temp_base() -> std::path::PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

pub fn setup_config() -> ConfigManager {
    ConfigManager::with_base_dir(temp_base()).expect("create config manager for temp dir")
}

pub fn sample_ledger() -> Ledger {
    Ledger::with_sample_data(today()).expect("sample ledger")
}
