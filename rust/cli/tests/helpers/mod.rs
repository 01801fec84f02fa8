//! Shared helpers for the CLI integration tests.
//!
//! - [`run_cli`] runs the CLI in-process and captures stdout, stderr and the exit code.
//! - [`clear_env`] removes every `SEVENPOKER_*` variable the config layer reads.
//!
//! Tests that touch the environment must be `#[serial]`.

use std::path::Path;

pub const CONFIG_VARS: &[&str] = &[
    "SEVENPOKER_CONFIG",
    "SEVENPOKER_SEED",
    "SEVENPOKER_AI",
    "SEVENPOKER_LEDGER",
    "SEVENPOKER_AI_CHIPS",
];

#[derive(Debug)]
pub struct CliOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Runs `sevenpoker <args..>` through the library entry point.
pub fn run_cli(args: &[&str]) -> CliOutput {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let argv = std::iter::once("sevenpoker").chain(args.iter().copied());
    let exit_code = sevenpoker_cli::run(argv, &mut out, &mut err);
    CliOutput {
        exit_code,
        stdout: String::from_utf8(out).expect("stdout is utf-8"),
        stderr: String::from_utf8(err).expect("stderr is utf-8"),
    }
}

pub fn clear_env() {
    for var in CONFIG_VARS {
        unsafe {
            std::env::remove_var(var);
        }
    }
}

pub fn set_env(var: &str, value: impl AsRef<std::ffi::OsStr>) {
    unsafe {
        std::env::set_var(var, value);
    }
}

/// Points the ledger at `path` so tests never touch the working directory.
pub fn use_ledger(path: &Path) {
    set_env("SEVENPOKER_LEDGER", path);
}
