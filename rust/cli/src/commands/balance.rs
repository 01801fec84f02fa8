//! Balance command handler.
//!
//! Shows the saved chip balance, applying the first grant or any refill
//! that has come due, or overwrites it with `--set`.

use std::io::Write;

use chrono::Utc;

use crate::error::CliError;
use crate::ledger::{BalanceLedger, COIN_CAP, format_next_refill};

/// Handle the balance command.
///
/// # Examples
///
/// ```
/// use sevenpoker_cli::commands::handle_balance_command;
/// use sevenpoker_cli::ledger::MemoryLedger;
///
/// let mut ledger = MemoryLedger::default();
/// let mut out = Vec::new();
/// handle_balance_command(None, &mut ledger, &mut out).unwrap();
/// assert!(String::from_utf8(out).unwrap().starts_with("Balance: 100 coins"));
/// ```
pub fn handle_balance_command(
    set: Option<u32>,
    ledger: &mut dyn BalanceLedger,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if let Some(value) = set {
        let stored = ledger.set_balance(value)?;
        if stored < value {
            writeln!(out, "Balance capped at {} coins", COIN_CAP)?;
        }
        writeln!(out, "Balance: {} coins", stored)?;
        return Ok(());
    }

    let status = ledger.ensure_coins(Utc::now())?;
    writeln!(out, "Balance: {} coins", status.chips)?;
    let next = format_next_refill(status.next_refill);
    if !next.is_empty() {
        writeln!(out, "{}", next)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{FileLedger, MemoryLedger};

    #[test]
    fn test_first_visit_shows_grant() {
        let mut ledger = MemoryLedger::default();
        let mut out = Vec::new();
        handle_balance_command(None, &mut ledger, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Balance: 100 coins\n");
    }

    #[test]
    fn test_refill_countdown_after_grant() {
        let mut ledger = MemoryLedger::default();
        handle_balance_command(None, &mut ledger, &mut std::io::sink()).unwrap();

        let mut out = Vec::new();
        handle_balance_command(None, &mut ledger, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Balance: 100 coins"));
        assert!(text.contains("+10 coins in"));
    }

    #[test]
    fn test_set_is_clamped() {
        let mut ledger = MemoryLedger::default();
        let mut out = Vec::new();
        handle_balance_command(Some(20_000), &mut ledger, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("capped"));
        assert!(text.contains("Balance: 9999 coins"));
    }

    #[test]
    fn test_file_ledger_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("coins.json");

        let mut ledger = FileLedger::new(&path);
        handle_balance_command(Some(42), &mut ledger, &mut std::io::sink()).unwrap();

        let reopened = FileLedger::new(&path);
        assert_eq!(reopened.get_balance().unwrap(), 42);
    }
}
