//! Hand evaluation command.
//!
//! Ranks five cards directly, or seven cards as the best five out of seven.
//! For seven cards it also shows which five would be dealt open (the weakest
//! five-card subset) and which two stay hidden.

use std::collections::HashSet;
use std::io::Write;

use serde::Serialize;

use crate::error::CliError;
use crate::formatters::{format_cards, format_evaluation};
use sevenpoker_engine::cards::{Card, parse_cards};
use sevenpoker_engine::hand::{
    Evaluation, best_of_seven, choose_open_cards, describe, evaluate_five,
};
use sevenpoker_engine::player::OPEN_CARDS;

/// JSON shape of `eval --json`.
#[derive(Debug, Serialize)]
struct EvalReport {
    cards: Vec<String>,
    category: String,
    description: String,
    tiebreaker: Vec<u8>,
    score: i32,
    best5: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    open: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hidden: Option<Vec<String>>,
}

fn card_strings(cards: &[Card]) -> Vec<String> {
    cards.iter().map(Card::to_string).collect()
}

/// Handle the eval command.
///
/// `cards` are joined and parsed together, so both `eval ♠A ♠K` and
/// `eval "♠A,♠K"` work.
///
/// # Errors
///
/// `CliError::InvalidInput` for unparsable cards, duplicates, or a count
/// other than five or seven.
///
/// # Examples
///
/// ```
/// use sevenpoker_cli::commands::handle_eval_command;
///
/// let cards: Vec<String> = ["7h", "7c", "7d", "7s", "9c"].iter().map(|s| s.to_string()).collect();
/// let mut out = Vec::new();
/// handle_eval_command(&cards, false, &mut out).unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("Four of a Kind"));
/// ```
pub fn handle_eval_command(
    cards: &[String],
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cards = parse_cards(&cards.join(" "))?;
    let mut seen = HashSet::new();
    if let Some(dup) = cards.iter().find(|c| !seen.insert(**c)) {
        return Err(CliError::InvalidInput(format!("duplicate card {}", dup)));
    }

    let (eval, split) = match cards.len() {
        5 => (evaluate_five(&cards), None),
        7 => {
            let ordered = choose_open_cards(&cards);
            let (open, hidden) = ordered.split_at(OPEN_CARDS);
            (best_of_seven(&cards), Some((open.to_vec(), hidden.to_vec())))
        }
        n => {
            return Err(CliError::InvalidInput(format!(
                "expected 5 or 7 cards, got {}",
                n
            )));
        }
    };

    if json {
        let report = build_report(&cards, &eval, split.as_ref());
        let text = serde_json::to_string_pretty(&report).map_err(std::io::Error::other)?;
        writeln!(out, "{}", text)?;
        return Ok(());
    }

    writeln!(out, "Cards: {}", format_cards(&cards))?;
    writeln!(out, "Hand:  {}", describe(&eval))?;
    writeln!(out, "Rank:  {}", format_evaluation(&eval))?;
    writeln!(out, "Score: {}", eval.score())?;
    if let Some((open, hidden)) = &split {
        writeln!(out, "Open:  {}", format_cards(open))?;
        writeln!(out, "Hidden: {}", format_cards(hidden))?;
    }
    Ok(())
}

fn build_report(
    cards: &[Card],
    eval: &Evaluation,
    split: Option<&(Vec<Card>, Vec<Card>)>,
) -> EvalReport {
    EvalReport {
        cards: card_strings(cards),
        category: eval.category.name().to_string(),
        description: describe(eval),
        tiebreaker: eval.tiebreaker.clone(),
        score: eval.score(),
        best5: eval.best5.as_ref().map(|b| card_strings(b)).unwrap_or_default(),
        open: split.map(|(open, _)| card_strings(open)),
        hidden: split.map(|(_, hidden)| card_strings(hidden)),
    }
}
