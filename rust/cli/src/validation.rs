//! Input parsing for the interactive `play` loop.

use sevenpoker_engine::player::PlayerAction;
use sevenpoker_engine::rules::MIN_BET;

/// Result type for parsing user input into player actions.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid player action parsed from input
    Action(PlayerAction),
    /// User entered quit command (q or quit); forfeits the current hand
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input string into a PlayerAction or special commands.
///
/// Accepts the following input formats (case-insensitive):
/// - "f" or "fold" → Fold
/// - "c" or "check" → Check
/// - "call" → Call
/// - "bet [X]" → Bet X (the minimum bet when X is omitted)
/// - "raise [X]" → Raise to X (the minimum raise when X is omitted)
/// - "q" or "quit" → Quit command
///
/// # Example
///
/// ```rust
/// # use sevenpoker_cli::validation::{parse_player_action, ParseResult};
/// use sevenpoker_engine::player::PlayerAction;
///
/// assert_eq!(
///     parse_player_action("fold"),
///     ParseResult::Action(PlayerAction::Fold)
/// );
/// assert_eq!(
///     parse_player_action("bet 10"),
///     ParseResult::Action(PlayerAction::Bet(10))
/// );
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
///
/// match parse_player_action("allin") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    if parts[0] == "q" || parts[0] == "quit" {
        return ParseResult::Quit;
    }

    match parts[0] {
        "fold" | "f" => ParseResult::Action(PlayerAction::Fold),
        "check" | "c" => ParseResult::Action(PlayerAction::Check),
        "call" => ParseResult::Action(PlayerAction::Call),
        "bet" | "b" => match parse_amount(parts.get(1).copied(), "Bet") {
            Ok(amount) => ParseResult::Action(PlayerAction::Bet(amount.unwrap_or(MIN_BET))),
            Err(msg) => ParseResult::Invalid(msg),
        },
        // a raise without a target is lifted to the minimum by the engine
        "raise" | "r" => match parse_amount(parts.get(1).copied(), "Raise") {
            Ok(amount) => ParseResult::Action(PlayerAction::Raise(amount.unwrap_or(0))),
            Err(msg) => ParseResult::Invalid(msg),
        },
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: fold, check, call, bet [amount], raise [to], q",
            parts[0]
        )),
    }
}

fn parse_amount(text: Option<&str>, what: &str) -> Result<Option<u32>, String> {
    let Some(text) = text else {
        return Ok(None);
    };
    match text.parse::<u32>() {
        Ok(amount) if amount > 0 => Ok(Some(amount)),
        Ok(_) => Err(format!("{} amount must be positive", what)),
        Err(_) => Err(format!("Invalid {} amount", what.to_lowercase())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fold() {
        assert_eq!(parse_player_action("f"), ParseResult::Action(PlayerAction::Fold));
        assert_eq!(parse_player_action("FOLD"), ParseResult::Action(PlayerAction::Fold));
    }

    #[test]
    fn test_parse_check_and_call() {
        assert_eq!(parse_player_action("Check"), ParseResult::Action(PlayerAction::Check));
        assert_eq!(parse_player_action("c"), ParseResult::Action(PlayerAction::Check));
        assert_eq!(parse_player_action("call"), ParseResult::Action(PlayerAction::Call));
    }

    #[test]
    fn test_parse_bet_defaults_to_minimum() {
        assert_eq!(parse_player_action("bet"), ParseResult::Action(PlayerAction::Bet(3)));
        assert_eq!(parse_player_action("b 7"), ParseResult::Action(PlayerAction::Bet(7)));
    }

    #[test]
    fn test_parse_raise() {
        assert_eq!(parse_player_action("raise"), ParseResult::Action(PlayerAction::Raise(0)));
        assert_eq!(parse_player_action("raise 12"), ParseResult::Action(PlayerAction::Raise(12)));
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!(parse_player_action("q"), ParseResult::Quit);
        assert_eq!(parse_player_action("QUIT"), ParseResult::Quit);
    }

    #[test]
    fn test_parse_bad_amounts() {
        assert!(matches!(parse_player_action("bet 0"), ParseResult::Invalid(m) if m.contains("positive")));
        assert!(matches!(parse_player_action("bet -5"), ParseResult::Invalid(m) if m.contains("Invalid bet")));
        assert!(matches!(parse_player_action("raise x"), ParseResult::Invalid(m) if m.contains("Invalid raise")));
    }

    #[test]
    fn test_parse_empty_and_unknown() {
        assert_eq!(parse_player_action("   "), ParseResult::Invalid("Empty input".to_string()));
        assert!(matches!(parse_player_action("shove"), ParseResult::Invalid(_)));
    }
}
