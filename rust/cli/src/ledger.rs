//! Persisted chip balance with a timed free refill.
//!
//! A first visit grants [`FIRST_GRANT`] chips. After that, every
//! [`REFILL_INTERVAL_MINUTES`] adds [`REFILL_AMOUNT`] chips, but timed refills
//! never lift the balance above [`REFILL_CAP`]. Winnings can push the balance
//! up to [`COIN_CAP`].
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeDelta, Utc};
//! use sevenpoker_cli::ledger::{BalanceLedger, MemoryLedger};
//!
//! let mut ledger = MemoryLedger::default();
//! let start = Utc::now();
//! assert_eq!(ledger.ensure_coins(start).unwrap().chips, 100);
//!
//! ledger.set_balance(40).unwrap();
//! let later = start + TimeDelta::minutes(25);
//! assert_eq!(ledger.ensure_coins(later).unwrap().chips, 60);
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::io_utils::ensure_parent_dir;

pub const FIRST_GRANT: u32 = 100;
pub const REFILL_CAP: u32 = 100;
pub const COIN_CAP: u32 = 9999;
pub const REFILL_AMOUNT: u32 = 10;
pub const REFILL_INTERVAL_MINUTES: i64 = 10;

#[derive(Debug)]
pub enum LedgerError {
    Io(std::io::Error),
    Corrupt(String),
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::Io(e) => write!(f, "ledger I/O failed: {}", e),
            LedgerError::Corrupt(msg) => write!(f, "ledger file is corrupt: {}", msg),
        }
    }
}

impl std::error::Error for LedgerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LedgerError::Io(e) => Some(e),
            LedgerError::Corrupt(_) => None,
        }
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(e: std::io::Error) -> Self {
        LedgerError::Io(e)
    }
}

/// What the ledger file holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinState {
    pub chips: u32,
    /// RFC 3339 timestamp of the last refill
    pub last_refill: String,
    pub first_grant: bool,
}

impl CoinState {
    pub fn fresh(now: DateTime<Utc>) -> Self {
        Self {
            chips: 0,
            last_refill: timestamp(now),
            first_grant: false,
        }
    }

    fn last_refill_time(&self) -> Result<DateTime<Utc>, LedgerError> {
        DateTime::parse_from_rfc3339(&self.last_refill)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|e| LedgerError::Corrupt(format!("last_refill: {}", e)))
    }
}

/// Balance after applying grants and refills, and the wait for the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefillStatus {
    pub chips: u32,
    pub next_refill: Option<TimeDelta>,
}

fn timestamp(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn refill_interval() -> TimeDelta {
    TimeDelta::minutes(REFILL_INTERVAL_MINUTES)
}

/// Applies the first grant or any due refills to `state` as of `now`.
///
/// Returns whether `state` changed and needs saving.
pub fn apply_refill(
    state: &mut CoinState,
    now: DateTime<Utc>,
) -> Result<(RefillStatus, bool), LedgerError> {
    if !state.first_grant {
        state.chips = (state.chips + FIRST_GRANT).min(REFILL_CAP);
        state.first_grant = true;
        state.last_refill = timestamp(now);
        let status = RefillStatus {
            chips: state.chips,
            next_refill: None,
        };
        return Ok((status, true));
    }

    let elapsed = now - state.last_refill_time()?;
    let interval = refill_interval();
    if elapsed < interval {
        let status = RefillStatus {
            chips: state.chips,
            next_refill: Some(interval - elapsed),
        };
        return Ok((status, false));
    }

    let periods = (elapsed.num_milliseconds() / interval.num_milliseconds()).max(0);
    let earned = u32::try_from(periods)
        .unwrap_or(u32::MAX)
        .saturating_mul(REFILL_AMOUNT);
    let add = earned.min(REFILL_CAP.saturating_sub(state.chips));
    state.chips += add;
    state.last_refill = timestamp(now);
    debug!(periods, add, chips = state.chips, "ledger refill");
    let status = RefillStatus {
        chips: state.chips,
        next_refill: (add > 0).then(refill_interval),
    };
    Ok((status, true))
}

/// Storage for the player's chip balance.
pub trait BalanceLedger {
    fn load(&self, now: DateTime<Utc>) -> Result<CoinState, LedgerError>;
    fn save(&mut self, state: &CoinState) -> Result<(), LedgerError>;

    /// Grants or refills as due, persists the result and returns the balance.
    fn ensure_coins(&mut self, now: DateTime<Utc>) -> Result<RefillStatus, LedgerError> {
        let mut state = self.load(now)?;
        let (status, changed) = apply_refill(&mut state, now)?;
        if changed {
            self.save(&state)?;
        }
        Ok(status)
    }

    fn get_balance(&self) -> Result<u32, LedgerError> {
        Ok(self.load(Utc::now())?.chips)
    }

    /// Stores `value` clamped to `0..=COIN_CAP`; returns what was stored.
    fn set_balance(&mut self, value: u32) -> Result<u32, LedgerError> {
        let mut state = self.load(Utc::now())?;
        state.chips = value.min(COIN_CAP);
        self.save(&state)?;
        Ok(state.chips)
    }
}

/// JSON file ledger.
#[derive(Debug, Clone)]
pub struct FileLedger {
    path: PathBuf,
}

impl FileLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BalanceLedger for FileLedger {
    fn load(&self, now: DateTime<Utc>) -> Result<CoinState, LedgerError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => {
                serde_json::from_str(&text).map_err(|e| LedgerError::Corrupt(e.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(CoinState::fresh(now)),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, state: &CoinState) -> Result<(), LedgerError> {
        ensure_parent_dir(&self.path).map_err(LedgerError::Io)?;
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| LedgerError::Corrupt(e.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-process ledger for tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    state: Option<CoinState>,
}

impl BalanceLedger for MemoryLedger {
    fn load(&self, now: DateTime<Utc>) -> Result<CoinState, LedgerError> {
        Ok(self
            .state
            .clone()
            .unwrap_or_else(|| CoinState::fresh(now)))
    }

    fn save(&mut self, state: &CoinState) -> Result<(), LedgerError> {
        self.state = Some(state.clone());
        Ok(())
    }
}

/// `+10 coins in 4m 12s`, or empty when no refill is pending.
pub fn format_next_refill(next: Option<TimeDelta>) -> String {
    let Some(d) = next else {
        return String::new();
    };
    let secs = d.num_seconds().max(0);
    let (m, s) = (secs / 60, secs % 60);
    if m > 0 {
        format!("+{} coins in {}m {}s", REFILL_AMOUNT, m, s)
    } else {
        format!("+{} coins in {}s", REFILL_AMOUNT, s)
    }
}
