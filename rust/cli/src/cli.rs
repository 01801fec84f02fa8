//! Command-line definitions (clap derive).

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "sevenpoker",
    version,
    about = "Open/hidden seven-card poker against a scripted opponent"
)]
pub struct SevenPokerCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play hands against the AI, reading actions from stdin
    Play {
        /// Number of hands to play
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        hands: Option<u32>,
        /// RNG seed for deals and AI decisions
        #[arg(long)]
        seed: Option<u64>,
        /// Practice stake; skips the balance ledger
        #[arg(long)]
        chips: Option<u32>,
        /// Opponent type (scripted, passive)
        #[arg(long)]
        ai: Option<String>,
    },
    /// Deal a single hand and show both sides' open and hidden cards
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Evaluate five or seven cards, e.g. `eval ♠A ♠K ♠Q ♠J ♠10` or `eval As Kd 10h`
    Eval {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
        /// Print the evaluation as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the saved chip balance (applying any due refill), or set it
    Balance {
        #[arg(long)]
        set: Option<u32>,
    },
    /// Display the resolved configuration and where each value came from
    Cfg,
}
