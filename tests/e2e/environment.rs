//! Environment variable behavior end-to-end tests.

use serde_json::json;

use crate::common::cli::CliRunner;
use crate::common::fixtures::FakeHome;
use crate::common::init_test_logging;

fn cli_for(home: &FakeHome) -> CliRunner {
    CliRunner::new()
        .with_home(home.path())
        .with_env("RUST_LOG", "off")
}

#[test]
fn ssa_format_env_sets_json_output() {
    init_test_logging();
    let result = CliRunner::new()
        .with_env("RUST_LOG", "off")
        .with_env("SSA_FORMAT", "json")
        .run(&["version"]);
    result.assert_success();

    assert!(result.json().get("version").is_some());
}

#[test]
fn cli_format_flag_overrides_env() {
    init_test_logging();
    let result = CliRunner::new()
        .with_env("RUST_LOG", "off")
        .with_env("SSA_FORMAT", "json")
        .run(&["version", "--format=text"]);
    result.assert_success();

    assert!(
        serde_json::from_str::<serde_json::Value>(result.stdout.trim()).is_err(),
        "--format=text should override SSA_FORMAT=json"
    );
}

#[test]
fn ssa_app_name_env_sets_name() {
    init_test_logging();
    let home = FakeHome::new().with_pollymc().with_steam_user("123");
    let result = cli_for(&home)
        .with_env("SSA_APP_NAME", "Splitscreen Night")
        .run_robot(&["--skip-artwork"]);

    result
        .assert_success()
        .assert_json_field("/app_name", &json!("Splitscreen Night"));
    let store = home.read_store("123");
    assert!(
        store
            .windows(b"Splitscreen Night".len())
            .any(|w| w == b"Splitscreen Night")
    );
}

#[test]
fn ssa_steam_userdata_env_selects_root() {
    init_test_logging();
    let home = FakeHome::new().with_pollymc();
    let other = home.path().join("elsewhere");
    std::fs::create_dir_all(other.join("777")).unwrap();

    let result = cli_for(&home)
        .with_env("SSA_STEAM_USERDATA", &other.to_string_lossy())
        .run_robot(&["--skip-artwork"]);

    result
        .assert_success()
        .assert_json_field("/steam_user/id", &json!("777"));
    assert!(other.join("777/config/shortcuts.vdf").exists());
}

#[test]
fn ssa_config_env_missing_file_is_fatal() {
    init_test_logging();
    let home = FakeHome::new().with_pollymc().with_steam_user("123");
    let missing = home.path().join("nope.toml");

    let result = cli_for(&home)
        .with_env("SSA_CONFIG", &missing.to_string_lossy())
        .run_robot(&["--skip-artwork"]);

    result.assert_exit_code(1);
    let err = result.error_json();
    assert!(err["message"].as_str().unwrap().contains("not found"));
    assert!(!home.store_path("123").exists());
}

#[test]
fn default_config_file_is_read() {
    init_test_logging();
    let home = FakeHome::new()
        .with_pollymc()
        .with_steam_user("123")
        .with_config("app_name = \"From Config\"\n");

    cli_for(&home)
        .run_robot(&["--skip-artwork"])
        .assert_success()
        .assert_json_field("/app_name", &json!("From Config"));
}

#[test]
fn no_color_env_is_accepted() {
    init_test_logging();
    let home = FakeHome::new().with_pollymc().with_steam_user("123");
    let result = cli_for(&home)
        .with_env("NO_COLOR", "1")
        .run(&["--skip-artwork"]);

    result.assert_success();
    assert!(!result.stdout.contains("\u{1b}["));
}
