//! Command handler modules for the CLI.
//!
//! Each subcommand lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers: Helper functions specific to that command
//! - Dependency injection: Output streams (`&mut dyn Write`), stdin and the
//!   balance ledger are passed in, so handlers run the same in tests
//! - Error propagation: All errors propagated via `CliError` enum

mod balance;
mod cfg;
mod deal;
mod eval;
mod play;

pub use balance::handle_balance_command;
pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::{PlaySettings, handle_play_command};
