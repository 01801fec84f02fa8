use crate::helpers::{clear_env, run_cli, set_env};

use serde_json::Value;
use serial_test::serial;

fn cfg_json() -> Value {
    let res = run_cli(&["cfg"]);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    serde_json::from_str(&res.stdout).unwrap()
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    clear_env();
    let json = cfg_json();
    assert_eq!(json["ai"]["value"], "scripted");
    assert_eq!(json["ai"]["source"], "default");
    assert_eq!(json["ai_chips"]["value"], 100);
    assert!(json["seed"]["value"].is_null());
    assert_eq!(json["ledger"]["value"], "sevenpoker_coins.json");
}

#[test]
#[serial]
fn env_overrides_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sevenpoker.toml");
    std::fs::write(&path, "seed = 456\nai = \"passive\"\nai_chips = 60\n").unwrap();
    set_env("SEVENPOKER_CONFIG", &path);

    let json = cfg_json();
    assert_eq!(json["seed"]["value"], 456);
    assert_eq!(json["seed"]["source"], "file");
    assert_eq!(json["ai"]["value"], "passive");
    assert_eq!(json["ai_chips"]["source"], "file");

    set_env("SEVENPOKER_SEED", "789");
    set_env("SEVENPOKER_AI", "scripted");
    let json = cfg_json();
    assert_eq!(json["seed"]["value"], 789);
    assert_eq!(json["seed"]["source"], "env");
    assert_eq!(json["ai"]["source"], "env");
    assert_eq!(json["ai_chips"]["value"], 60);
    assert_eq!(json["ledger"]["source"], "default");

    clear_env();
}

#[test]
#[serial]
fn invalid_env_values_fail() {
    clear_env();
    set_env("SEVENPOKER_SEED", "not-a-number");
    let res = run_cli(&["cfg"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Invalid seed"));

    clear_env();
    set_env("SEVENPOKER_AI_CHIPS", "1");
    let res = run_cli(&["cfg"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("ai_chips"));

    clear_env();
    set_env("SEVENPOKER_AI", "genius");
    let res = run_cli(&["cfg"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("genius"));

    clear_env();
}

#[test]
#[serial]
fn file_ai_stack_below_ante_fails() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sevenpoker.toml");
    std::fs::write(&path, "ai_chips = 2\n").unwrap();
    set_env("SEVENPOKER_CONFIG", &path);

    let res = run_cli(&["cfg"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("ai_chips must be >= 3"));

    clear_env();
}

#[test]
#[serial]
fn unreadable_config_file_fails() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    set_env("SEVENPOKER_CONFIG", dir.path().join("missing.toml"));
    let res = run_cli(&["cfg"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("cannot read config file"));

    let bad = dir.path().join("bad.toml");
    std::fs::write(&bad, "seed = \"abc\"\n").unwrap();
    set_env("SEVENPOKER_CONFIG", &bad);
    let res = run_cli(&["cfg"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("cannot parse config file"));

    clear_env();
}
