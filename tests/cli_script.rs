mod common;

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn plain_home() -> std::path::PathBuf {
    let base = common::temp_base();
    std::fs::write(
        base.join("config.json"),
        r#"{"ui_color_enabled": false, "theme": "plain"}"#,
    )
    .unwrap();
    base
}

fn run_script(home: &Path, input: &str) -> assert_cmd::assert::Assert {
    Command::cargo_bin("pantry_cli")
        .unwrap()
        .env("PANTRY_CORE_CLI_SCRIPT", "1")
        .env("PANTRY_CORE_TODAY", common::TODAY)
        .env("PANTRY_CORE_HOME", home)
        .env("RUST_LOG", "off")
        .write_stdin(input.to_string())
        .assert()
}

#[test]
fn list_shows_samples_soonest_first() {
    let home = plain_home();
    let output = run_script(&home, "list\nexit\n").success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    let milk = stdout.find("우유").unwrap();
    let beef = stdout.find("소고기").unwrap();
    let eggs = stdout.find("계란").unwrap();
    assert!(milk < beef && beef < eggs);
    assert!(stdout.contains("D-3"));
}

#[test]
fn add_reports_dday_and_shows_in_expiring() {
    let home = plain_home();
    run_script(
        &home,
        "add 두부 --expires 2025-12-31 --tag soy\nexpiring 2\nexit\n",
    )
    .success()
    .stdout(contains("Added 두부 (냉장), expires 2025-12-31 (D-1)"))
    .stdout(contains("D-1    두부"));
}

#[test]
fn invalid_input_is_reported_and_shell_continues() {
    let home = plain_home();
    run_script(
        &home,
        "add 두부 --expires 2025-13-01\nadd \"\" --expires 2025-12-31\nlst\nversion\n",
    )
    .success()
    .stdout(contains("ERROR: Invalid date"))
    .stdout(contains("ERROR: Invalid input"))
    .stdout(contains("Unknown command `lst`"))
    .stdout(contains("Suggestion: `list`?"))
    .stdout(contains("Pantry Core"));
}

#[test]
fn recipe_checklist_follows_ledger() {
    let home = plain_home();
    run_script(
        &home,
        "recipe kimchi-jjigae\nadd 김치\nrecipe kimchi-jjigae\ncook kimchi-jjigae\nrecipes log\n",
    )
    .success()
    .stdout(contains("김치 (없음)"))
    .stdout(contains("김치 (있음)"))
    .stdout(contains("Logged kimchi-jjigae on 2025-12-30."))
    .stdout(contains("Recipes (log)"));
}

#[test]
fn config_set_is_persisted() {
    let home = plain_home();
    run_script(&home, "config set urgency_threshold_days 5\nconfig show\n")
        .success()
        .stdout(contains("urgency_threshold_days set to 5."));

    let json = std::fs::read_to_string(home.join("config.json")).unwrap();
    assert!(json.contains("\"urgency_threshold_days\": 5"));
}

#[test]
fn fridge_commands_manage_fridges() {
    let home = plain_home();
    run_script(
        &home,
        "fridge add 김치 냉장고 --section 김치\nfridge list\nfridge open\n",
    )
    .success()
    .stdout(contains("Added fridge 김치 냉장고 [김치]"))
    .stdout(contains("메인 냉장고"))
    .stdout(contains("unknown fridge action `open`"));
}

#[test]
fn invalid_pinned_today_fails_startup() {
    let home = plain_home();
    Command::cargo_bin("pantry_cli")
        .unwrap()
        .env("PANTRY_CORE_CLI_SCRIPT", "1")
        .env("PANTRY_CORE_TODAY", "30/12/2025")
        .env("PANTRY_CORE_HOME", &home)
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(contains("Error: Invalid date").and(contains("30/12/2025")));
}
