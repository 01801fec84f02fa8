//! # Play Command
//!
//! Interactive hands against the AI opponent.
//!
//! Each hand is dealt fresh: both sides ante, the human sees their own seven
//! cards and the AI's five open cards, then betting alternates until a fold
//! or a closing call/check. Actions are read line by line from stdin, so the
//! command works the same on a TTY and on piped input.
//!
//! ## Stakes
//!
//! - With a ledger, the stake is the saved balance (after any due refill) and
//!   the result of every hand is written back.
//! - With `--chips`, the stake is a practice amount and nothing is saved.
//!
//! Typing `q`, or closing stdin, forfeits the hand in progress and ends the session.

use std::io::{BufRead, Write};

use chrono::Utc;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info, warn};

use crate::error::CliError;
use crate::formatters::{format_action, format_cards, format_legal_actions, format_settlement};
use crate::io_utils::read_stdin_line;
use crate::ledger::{BalanceLedger, format_next_refill};
use crate::ui;
use crate::validation::{ParseResult, parse_player_action};
use sevenpoker_ai::{AIOpponent, create_ai};
use sevenpoker_engine::game::{GameState, Phase, ShowdownReason};
use sevenpoker_engine::hand::{best_of_seven, describe};
use sevenpoker_engine::player::{PlayerAction, Side};
use sevenpoker_engine::rules::ANTE;

/// Resolved options for a play session.
#[derive(Debug, Clone)]
pub struct PlaySettings {
    pub hands: u32,
    /// Seeds both the deals and the AI's random rolls; random when `None`
    pub seed: Option<u64>,
    pub ai: String,
    /// AI stack at the start of every hand
    pub ai_chips: u32,
    /// Practice stake; when set the ledger is neither read nor written
    pub stake: Option<u32>,
}

/// Whether the session continues after a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HandEnd {
    Continue,
    Quit,
}

/// Handle the play command: interactive hands against the AI.
///
/// # Errors
///
/// - `CliError::InvalidInput` if `hands` is zero
/// - `CliError::Config` for an unknown AI name, or no stake source
/// - `CliError::Ledger` if the balance cannot be read or saved
/// - `CliError::Io` on output failures
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use sevenpoker_cli::commands::{PlaySettings, handle_play_command};
///
/// let settings = PlaySettings {
///     hands: 1,
///     seed: Some(3),
///     ai: "passive".into(),
///     ai_chips: 100,
///     stake: Some(50),
/// };
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let mut input = Cursor::new("check\n");
/// handle_play_command(&settings, None, &mut out, &mut err, &mut input).unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("Hands played: 1"));
/// ```
pub fn handle_play_command(
    settings: &PlaySettings,
    mut ledger: Option<&mut dyn BalanceLedger>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if settings.hands == 0 {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let ai = create_ai(&settings.ai)?;
    let seed = settings.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha20Rng::seed_from_u64(seed);

    writeln!(
        out,
        "play: hands={} seed={} ai={}",
        settings.hands,
        seed,
        ai.name()
    )?;

    let mut chips = match settings.stake {
        Some(stake) => {
            writeln!(out, "Practice stake: {} chips (balance not saved)", stake)?;
            stake
        }
        None => {
            let ledger = ledger
                .as_deref_mut()
                .ok_or_else(|| CliError::Config("no balance ledger configured".into()))?;
            let status = ledger.ensure_coins(Utc::now())?;
            writeln!(out, "Balance: {} coins", status.chips)?;
            let next = format_next_refill(status.next_refill);
            if !next.is_empty() {
                writeln!(out, "{}", next)?;
            }
            status.chips
        }
    };

    let mut played = 0u32;
    for i in 1..=settings.hands {
        if chips < ANTE {
            writeln!(out, "Not enough chips for the ante of {}.", ANTE)?;
            break;
        }
        writeln!(out, "Hand {}", i)?;
        info!(hand = i, chips, "hand started");

        let mut game = GameState::new(chips, settings.ai_chips, &mut rng)?;
        let end = play_hand(&mut game, ai.as_ref(), &mut rng, out, err, stdin)?;

        let showdown = game.resolve_showdown()?;
        if showdown.reason == ShowdownReason::Hand {
            writeln!(out, "AI hidden: {}", format_cards(game.ai_hidden_cards()))?;
            writeln!(out, "You: {}", describe(&showdown.player_eval))?;
            writeln!(out, "AI:  {}", describe(&showdown.ai_eval))?;
        }
        let settlement = game.settle()?;
        writeln!(out, "{}", format_settlement(&settlement))?;
        chips = settlement.player_chips;

        if settings.stake.is_none()
            && let Some(ledger) = ledger.as_deref_mut()
        {
            chips = ledger.set_balance(chips)?;
        }
        ui::write_separator(out)?;
        played += 1;

        if end == HandEnd::Quit {
            break;
        }
    }

    writeln!(out, "Hands played: {}", played)?;
    if settings.stake.is_none() {
        writeln!(out, "Balance saved: {} coins", chips)?;
    } else {
        writeln!(out, "Chips: {}", chips)?;
    }
    Ok(())
}

/// Runs the betting round of one hand until it reaches showdown.
fn play_hand(
    game: &mut GameState,
    ai: &dyn AIOpponent,
    rng: &mut ChaCha20Rng,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<HandEnd, CliError> {
    writeln!(out, "Pot: {} (ante {} each)", game.pot(), ANTE)?;
    writeln!(
        out,
        "Your open: {}  hidden: {}",
        format_cards(game.player_open_cards()),
        format_cards(game.player_hidden_cards())
    )?;
    writeln!(out, "Your best: {}", describe(&best_of_seven(game.player().hand())))?;
    writeln!(out, "AI open:   {}", format_cards(game.ai_open_cards()))?;

    while game.phase() == Phase::Betting {
        match game.turn() {
            Side::Player => {
                write!(
                    out,
                    "Your action ({}) [q to quit]: ",
                    format_legal_actions(&game.legal_actions())
                )?;
                out.flush()?;

                let Some(input) = read_stdin_line(stdin) else {
                    debug!("stdin closed, forfeiting");
                    writeln!(out)?;
                    game.forfeit()?;
                    return Ok(HandEnd::Quit);
                };
                match parse_player_action(&input) {
                    ParseResult::Action(action) => match game.apply_player_action(action) {
                        Ok(_) => {
                            writeln!(out, "You: {}", format_action(&action))?;
                            writeln!(out, "Pot: {}", game.pot())?;
                        }
                        Err(e) => ui::write_error(err, &format!("Invalid action: {}", e))?,
                    },
                    ParseResult::Quit => {
                        game.forfeit()?;
                        return Ok(HandEnd::Quit);
                    }
                    ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
                }
            }
            Side::Ai => {
                let action = ai.get_action(game, rng).unwrap_or(PlayerAction::Fold);
                let action = match game.apply_ai_action(action) {
                    Ok(_) => action,
                    Err(e) => {
                        warn!(error = %e, ?action, "AI chose an illegal action, folding");
                        game.apply_ai_action(PlayerAction::Fold)?;
                        PlayerAction::Fold
                    }
                };
                writeln!(out, "AI: {}", format_action(&action))?;
                writeln!(out, "Pot: {}", game.pot())?;
            }
        }
    }
    Ok(HandEnd::Continue)
}
