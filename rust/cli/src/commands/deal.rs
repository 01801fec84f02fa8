//! Deal command handler for single hand dealing and display.
//!
//! Deals one hand exactly as `play` would (same shuffle, same open-card
//! selection) and prints both sides' open and hidden cards with their best
//! hands. With a seed the output is reproducible.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::error::CliError;
use crate::formatters::{format_cards, format_winner};
use sevenpoker_engine::game::{GameState, Winner};
use sevenpoker_engine::hand::{best_of_seven, describe};
use sevenpoker_engine::player::Player;
use sevenpoker_engine::rules::AI_STARTING_CHIPS;
use std::cmp::Ordering;
use std::io::Write;

/// Handle the deal command.
///
/// # Examples
///
/// ```
/// use sevenpoker_cli::commands::handle_deal_command;
///
/// let mut out = Vec::new();
/// handle_deal_command(Some(42), &mut out).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("Seed: 42"));
/// ```
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let game = GameState::new(AI_STARTING_CHIPS, AI_STARTING_CHIPS, &mut rng)?;

    writeln!(out, "Seed: {}", seed)?;
    write_side(out, "You", game.player())?;
    write_side(out, "AI", game.ai())?;

    let player_eval = best_of_seven(game.player().hand());
    let ai_eval = best_of_seven(game.ai().hand());
    let verdict = match player_eval.cmp(&ai_eval) {
        Ordering::Greater => format_winner(Winner::Player),
        Ordering::Less => format_winner(Winner::Ai),
        Ordering::Equal => format_winner(Winner::Tie),
    };
    writeln!(out, "Showdown: {}", verdict)?;
    Ok(())
}

fn write_side(out: &mut dyn Write, label: &str, seat: &Player) -> Result<(), CliError> {
    writeln!(
        out,
        "{:<4} open {} hidden {}",
        label,
        format_cards(seat.open_cards()),
        format_cards(seat.hidden_cards())
    )?;
    writeln!(out, "     best {}", describe(&best_of_seven(seat.hand())))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(seed: u64) -> String {
        let mut out = Vec::new();
        handle_deal_command(Some(seed), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_deal_command_with_seed_is_deterministic() {
        assert_eq!(deal(42), deal(42));
    }

    #[test]
    fn test_deal_shows_both_sides() {
        let output = deal(7);
        assert!(output.contains("You  open ["));
        assert!(output.contains("AI   open ["));
        assert_eq!(output.matches("hidden [").count(), 2);
        assert!(output.contains("Showdown: "));
    }

    #[test]
    fn test_different_seeds_usually_differ() {
        assert_ne!(deal(1), deal(2));
    }
}
