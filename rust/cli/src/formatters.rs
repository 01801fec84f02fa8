//! Card, hand and action formatters for terminal display.
//!
//! Cards print suit first, then rank (`♠A`, `♥10`). On terminals without
//! Unicode support the suit falls back to a letter (`sA`, `h10`), which the
//! card parser also accepts.
//!
//! ## Example
//!
//! ```rust
//! use sevenpoker_engine::cards::{Card, Rank, Suit};
//! use sevenpoker_cli::formatters::{format_card, format_cards};
//!
//! let ace_spades = Card::new(Suit::Spades, Rank::Ace);
//! assert!(format_card(&ace_spades) == "♠A" || format_card(&ace_spades) == "sA");
//! assert!(format_cards(&[ace_spades]).starts_with('['));
//! ```

use sevenpoker_engine::cards::{Card, Suit};
use sevenpoker_engine::game::{Settlement, ShowdownReason, Winner};
use sevenpoker_engine::hand::Evaluation;
use sevenpoker_engine::player::PlayerAction;
use sevenpoker_engine::rules::{LegalActions, MIN_BET};

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_suit(card.suit), card.rank.label())
}

/// `[♠A ♥K ...]`, or `[]` for no cards.
pub fn format_cards(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

pub fn format_action(action: &PlayerAction) -> String {
    match action {
        PlayerAction::Fold => "fold".to_string(),
        PlayerAction::Check => "check".to_string(),
        PlayerAction::Call => "call".to_string(),
        PlayerAction::Bet(amount) => format!("bet {}", amount),
        PlayerAction::Raise(to) => format!("raise to {}", to),
    }
}

/// Category, tiebreaker and best five, e.g. `Four of a Kind [7, 9] [♠7 ♥7 ♦7 ♣7 ♣9]`.
pub fn format_evaluation(eval: &Evaluation) -> String {
    let mut s = format!("{} {:?}", eval.category.name(), eval.tiebreaker);
    if let Some(best) = &eval.best5 {
        s.push(' ');
        s.push_str(&format_cards(best));
    }
    s
}

/// Prompt listing only what is legal, e.g. `check | bet [3+] | fold`.
pub fn format_legal_actions(legal: &LegalActions) -> String {
    let mut options = Vec::new();
    if legal.check {
        options.push("check".to_string());
    }
    if legal.bet {
        options.push(format!("bet [{}+]", MIN_BET));
    }
    if legal.call {
        options.push(format!("call {}", legal.call_amount));
    }
    if legal.raise {
        options.push(format!("raise [{}+]", legal.min_raise_to));
    }
    if legal.fold {
        options.push("fold".to_string());
    }
    options.join(" | ")
}

pub fn format_winner(winner: Winner) -> &'static str {
    match winner {
        Winner::Player => "You win",
        Winner::Ai => "AI wins",
        Winner::Tie => "Tie",
    }
}

/// One-line result, e.g. `AI wins by fold: pot 9 (you 97, ai 103)`.
pub fn format_settlement(s: &Settlement) -> String {
    let how = match s.reason {
        ShowdownReason::Fold => "by fold",
        ShowdownReason::Hand => "at showdown",
    };
    format!(
        "{} {}: pot {} (you {}, ai {})",
        format_winner(s.winner),
        how,
        s.pot,
        s.player_chips,
        s.ai_chips
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sevenpoker_engine::cards::{parse_cards, Rank};
    use sevenpoker_engine::hand::evaluate_five;

    #[test]
    fn test_format_card() {
        let ten_hearts = Card::new(Suit::Hearts, Rank::Ten);
        let formatted = format_card(&ten_hearts);
        assert!(formatted == "♥10" || formatted == "h10");
    }

    #[test]
    fn test_formatted_cards_parse_back() {
        let cards = parse_cards("♠A ♥10 ♦2 ♣K").unwrap();
        let text = format_cards(&cards);
        let inner = text.trim_start_matches('[').trim_end_matches(']');
        assert_eq!(parse_cards(inner).unwrap(), cards);
    }

    #[test]
    fn test_format_cards_empty() {
        assert_eq!(format_cards(&[]), "[]");
    }

    #[test]
    fn test_format_action() {
        assert_eq!(format_action(&PlayerAction::Fold), "fold");
        assert_eq!(format_action(&PlayerAction::Bet(5)), "bet 5");
        assert_eq!(format_action(&PlayerAction::Raise(9)), "raise to 9");
    }

    #[test]
    fn test_format_evaluation_includes_tiebreaker() {
        let eval = evaluate_five(&parse_cards("♥7 ♣7 ♦7 ♠7 ♣9").unwrap());
        let s = format_evaluation(&eval);
        assert!(s.starts_with("Four of a Kind [7, 9]"));
    }

    #[test]
    fn test_format_legal_actions_facing_bet() {
        let legal = LegalActions {
            call: true,
            raise: true,
            fold: true,
            call_amount: 5,
            min_raise_to: 8,
            ..LegalActions::default()
        };
        assert_eq!(format_legal_actions(&legal), "call 5 | raise [8+] | fold");
    }
}
