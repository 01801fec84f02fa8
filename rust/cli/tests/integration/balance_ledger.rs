use crate::helpers::{clear_env, run_cli, use_ledger};

use serial_test::serial;

#[test]
#[serial]
fn first_balance_grants_coins_and_persists() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("coins.json");
    use_ledger(&path);

    let res = run_cli(&["balance"]);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.starts_with("Balance: 100 coins"));
    assert!(path.exists());

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved["chips"], 100);
    assert_eq!(saved["first_grant"], true);

    let res = run_cli(&["balance"]);
    assert!(res.stdout.contains("Balance: 100 coins"));
    assert!(res.stdout.contains("+10 coins in"));

    clear_env();
}

#[test]
#[serial]
fn set_balance_round_trips_and_clamps() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    use_ledger(&dir.path().join("coins.json"));

    let res = run_cli(&["balance", "--set", "250"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("Balance: 250 coins"));

    let res = run_cli(&["balance"]);
    assert!(res.stdout.starts_with("Balance: 250 coins"));

    let res = run_cli(&["balance", "--set", "123456"]);
    assert!(res.stdout.contains("Balance: 9999 coins"));

    clear_env();
}

#[test]
#[serial]
fn corrupt_ledger_is_reported() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("coins.json");
    std::fs::write(&path, "{not json").unwrap();
    use_ledger(&path);

    let res = run_cli(&["balance"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("corrupt"));

    clear_env();
}

#[test]
#[serial]
fn ledger_in_missing_directory_is_created() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a").join("b").join("coins.json");
    use_ledger(&path);

    let res = run_cli(&["balance", "--set", "5"]);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(path.exists());

    clear_env();
}
