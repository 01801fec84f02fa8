//! # Seven-Card Poker CLI Library
//!
//! Command-line front end for the open/hidden seven-card poker engine: play
//! hands against the scripted opponent, inspect deals, evaluate hands and
//! manage the saved chip balance.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["sevenpoker", "play", "--hands", "3", "--seed", "7"];
//! let code = sevenpoker_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play hands against the AI, reading actions from stdin
//! - `deal`: Deal a single hand for inspection
//! - `eval`: Evaluate a five- or seven-card hand
//! - `balance`: Show or set the saved chip balance
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod formatters;
pub mod io_utils;
pub mod ledger;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, SevenPokerCli};
use commands::{
    PlaySettings, handle_balance_command, handle_cfg_command, handle_deal_command,
    handle_eval_command, handle_play_command,
};
use ledger::{BalanceLedger, FileLedger};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "deal", "eval", "balance", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for usage errors and failed commands.
///
/// # Example
///
/// ```
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = sevenpoker_cli::run(["sevenpoker", "deal", "--seed", "42"], &mut out, &mut err);
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("You"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match SevenPokerCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_usage_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Play {
            hands,
            seed,
            chips,
            ai,
        } => run_play(hands, seed, chips, ai, out, err),
        Commands::Deal { seed } => handle_deal_command(seed, out),
        Commands::Eval { cards, json } => handle_eval_command(&cards, json, out),
        Commands::Balance { set } => config::load_with_sources()
            .map_err(CliError::from)
            .and_then(|resolved| {
                let mut ledger = FileLedger::new(&resolved.config.ledger);
                handle_balance_command(set, &mut ledger, out)
            }),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            2
        }
    }
}

fn report_usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version print to stdout and exit 0
    if matches!(
        e.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    ) {
        return match write!(out, "{}", e) {
            Ok(()) => 0,
            Err(_) => 2,
        };
    }

    let _ = write_usage(e, err);
    2
}

fn write_usage(e: clap::Error, err: &mut dyn Write) -> std::io::Result<()> {
    writeln!(err, "{}", e)?;
    writeln!(err)?;
    writeln!(err, "Seven-Card Poker CLI")?;
    writeln!(err, "Usage: sevenpoker <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in COMMANDS {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: sevenpoker --help")
}

/// Resolves config, picks the stake source and runs the interactive loop on stdin.
fn run_play(
    hands: Option<u32>,
    seed: Option<u64>,
    chips: Option<u32>,
    ai: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let resolved = config::load_with_sources()?;
    let cfg = resolved.config;
    let settings = PlaySettings {
        hands: hands.unwrap_or(1),
        seed: seed.or(cfg.seed),
        ai: ai.unwrap_or(cfg.ai),
        ai_chips: cfg.ai_chips,
        stake: chips,
    };

    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    if settings.stake.is_some() {
        handle_play_command(&settings, None, out, err, &mut stdin_lock)
    } else {
        let mut ledger = FileLedger::new(&cfg.ledger);
        handle_play_command(
            &settings,
            Some(&mut ledger as &mut dyn BalanceLedger),
            out,
            err,
            &mut stdin_lock,
        )
    }
}
