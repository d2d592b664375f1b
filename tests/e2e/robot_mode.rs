//! Robot-mode end-to-end tests.

use serde_json::{Value, json};

use crate::common::assertions::assert_json_has_fields;
use crate::common::cli::CliRunner;
use crate::common::fixtures::{FakeHome, unreachable_artwork_config};
use crate::common::init_test_logging;

fn cli_for(home: &FakeHome) -> CliRunner {
    CliRunner::new()
        .with_home(home.path())
        .with_env("RUST_LOG", "off")
}

#[test]
fn robot_add_outputs_report() {
    init_test_logging();
    let home = FakeHome::new().with_pollymc().with_steam_user("123");
    let result = cli_for(&home).run_robot(&["--skip-artwork"]);
    result.assert_success();

    let report = result.json();
    let _ = assert_json_has_fields(
        &report,
        &["ok", "app_name", "appid", "index", "store_path", "launcher", "shortcut"],
    );
    result
        .assert_json_field("/ok", &json!(true))
        .assert_json_field("/dry_run", &json!(false))
        .assert_json_field("/index", &json!(0))
        .assert_json_field("/launcher/label", &json!("PollyMC"))
        .assert_json_field("/steam_user/id", &json!("123"));

    let appid = report["appid"].as_u64().unwrap();
    assert!(appid >= 0x8000_0000, "appid {appid} missing bit 31");
    assert!(report.get("artwork").is_none());
}

#[test]
fn robot_second_run_gets_next_index() {
    init_test_logging();
    let home = FakeHome::new().with_pollymc().with_steam_user("123");
    let cli = cli_for(&home);

    cli.run_robot(&["--skip-artwork"]).assert_success();
    cli.run_robot(&["--skip-artwork"])
        .assert_success()
        .assert_json_field("/index", &json!(1));
}

#[test]
fn robot_artwork_failures_are_reported_not_fatal() {
    init_test_logging();
    let home = FakeHome::new()
        .with_pollymc()
        .with_steam_user("123")
        .with_config(&unreachable_artwork_config());

    let result = cli_for(&home).run_robot(&[]);
    result
        .assert_success()
        .assert_json_array_len("/artwork/outcomes", 5);

    let report = result.json();
    for outcome in report["artwork"]["outcomes"].as_array().unwrap() {
        assert_eq!(outcome["status"], json!("failed"), "{outcome}");
        assert!(outcome["reason"].is_string());
    }
    assert!(home.store_path("123").exists());
}

#[test]
fn robot_dry_run_includes_plan() {
    init_test_logging();
    let home = FakeHome::new().with_pollymc().with_steam_user("123");
    let result = cli_for(&home).run_robot(&["--dry-run"]);

    result
        .assert_success()
        .assert_json_field("/dry_run", &json!(true))
        .assert_json_field("/plan/index", &json!(0))
        .assert_json_field("/plan/store_exists", &json!(false));
    assert!(!home.store_path("123").exists());
}

#[test]
fn robot_error_is_json_on_stderr() {
    init_test_logging();
    let home = FakeHome::new().with_pollymc();
    let result = cli_for(&home).run_robot(&["--skip-artwork"]);

    result.assert_exit_code(1).assert_stdout_is_empty();
    let err: Value = result.error_json();
    assert_eq!(err["error"], json!(true));
    assert_eq!(err["recoverable"], json!(true));
    assert!(err["message"].as_str().unwrap().contains("No Steam user"));
    assert!(err["suggestion"].is_string());
}

#[test]
fn robot_malformed_store_error() {
    init_test_logging();
    let original = b"\x00shortcuts\x00".to_vec();
    let home = FakeHome::new()
        .with_pollymc()
        .with_steam_user("123")
        .with_store("123", &original);

    let result = cli_for(&home).run_robot(&["--skip-artwork"]);
    result.assert_exit_code(1);

    let err = result.error_json();
    assert!(err["message"].as_str().unwrap().contains("Unrecognized shortcuts file"));
    assert_eq!(home.read_store("123"), original);
}

#[test]
fn robot_compact_format_is_single_line() {
    init_test_logging();
    let home = FakeHome::new().with_pollymc().with_steam_user("123");
    let result = cli_for(&home).run(&["--format=json-compact", "--skip-artwork"]);
    result.assert_success();

    assert_eq!(result.stdout.trim_end().lines().count(), 1);
    result.assert_json_field("/index", &json!(0));
}

#[test]
fn robot_version_outputs_json() {
    init_test_logging();
    let result = CliRunner::new()
        .with_env("RUST_LOG", "off")
        .run_robot(&["version"]);
    result.assert_success();

    let _ = assert_json_has_fields(&result.json(), &["version", "git_sha", "target"]);
}
