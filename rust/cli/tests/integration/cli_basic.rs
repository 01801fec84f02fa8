use crate::helpers::run_cli;

#[test]
fn help_lists_every_command() {
    let res = run_cli(&["--help"]);
    assert_eq!(res.exit_code, 0);
    for cmd in ["play", "deal", "eval", "balance", "cfg"] {
        assert!(res.stdout.contains(cmd), "help is missing {cmd}");
    }
    assert!(res.stderr.is_empty());
}

#[test]
fn version_prints_to_stdout() {
    let res = run_cli(&["--version"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.contains("sevenpoker"));
}

#[test]
fn missing_subcommand_prints_usage() {
    let res = run_cli(&[]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Usage: sevenpoker <command>"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let res = run_cli(&["deal", "--level", "3"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.is_empty());
}

#[test]
fn zero_hands_rejected_by_parser() {
    let res = run_cli(&["play", "--hands", "0"]);
    assert_eq!(res.exit_code, 2);
}

#[test]
fn deal_is_reproducible_with_seed() {
    let a = run_cli(&["deal", "--seed", "2024"]);
    let b = run_cli(&["deal", "--seed", "2024"]);
    assert_eq!(a.exit_code, 0);
    assert_eq!(a.stdout, b.stdout);
    assert!(a.stdout.contains("Seed: 2024"));
}

#[test]
fn eval_seven_cards() {
    let res = run_cli(&["eval", "♠A", "♠K", "♠Q", "♠J", "♠10", "♥2", "♥3"]);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.contains("Royal Straight Flush"));
    assert!(res.stdout.contains("Hidden:"));
}

#[test]
fn eval_json_is_machine_readable() {
    let res = run_cli(&["eval", "--json", "2c", "2d", "9h", "9s", "Kc"]);
    assert_eq!(res.exit_code, 0);
    let v: serde_json::Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(v["category"], "Two Pair");
    assert_eq!(v["tiebreaker"], serde_json::json!([9, 2, 13]));
}

#[test]
fn eval_errors_go_to_stderr() {
    let res = run_cli(&["eval", "As", "Xx", "Qs", "Js", "Ts"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.is_empty());
    assert!(res.stderr.starts_with("Error: Invalid input"));
}
