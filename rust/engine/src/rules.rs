use crate::errors::GameError;
use crate::game::{GameState, Phase};
use crate::player::{PlayerAction as A, Side};

/// Forced contribution from each side before the deal.
pub const ANTE: u32 = 3;
/// Smallest opening bet.
pub const MIN_BET: u32 = 3;
/// Smallest increment over the current bet for a raise.
pub const MIN_RAISE: u32 = 3;
/// Maximum raises within one betting round.
pub const RAISE_CAP: u8 = 3;
/// Stack the scripted opponent sits down with.
pub const AI_STARTING_CHIPS: u32 = 100;

/// An action that passed validation, with the chip amounts resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Chips to pay (may be short of the amount owed when the actor is all-in)
    Call(u32),
    /// Chips to pay
    Bet(u32),
    /// New round total and the chips to pay toward it
    Raise { to: u32, pay: u32 },
}

/// Validates an action for `side` against the current state.
///
/// Returns the resolved chip movement for a legal action. Every rejection is
/// reported as a [`GameError`] and the caller's state is left untouched.
///
/// # Errors
///
/// - [`GameError::HandComplete`] - betting is over
/// - [`GameError::NotYourTurn`] - `side` is not the side to act
/// - [`GameError::AlreadyFolded`] - `side` has folded
/// - [`GameError::BetAlreadyOpen`] - check or bet while a bet is open
/// - [`GameError::NoBetToCall`] - call with nothing owed
/// - [`GameError::RaiseCapReached`] - the round already has [`RAISE_CAP`] raises
/// - [`GameError::InsufficientChips`] - the actor cannot cover the minimum
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
/// use sevenpoker_engine::game::GameState;
/// use sevenpoker_engine::player::{PlayerAction, Side};
/// use sevenpoker_engine::rules::{validate_action, ValidatedAction};
///
/// let mut rng = ChaCha20Rng::seed_from_u64(7);
/// let state = GameState::new(50, 100, &mut rng).unwrap();
///
/// // Bets below the minimum are lifted to it
/// let v = validate_action(&state, Side::Player, PlayerAction::Bet(1)).unwrap();
/// assert_eq!(v, ValidatedAction::Bet(3));
///
/// // Nothing to call yet
/// assert!(validate_action(&state, Side::Player, PlayerAction::Call).is_err());
/// ```
pub fn validate_action(
    state: &GameState,
    side: Side,
    action: A,
) -> Result<ValidatedAction, GameError> {
    if state.phase() != Phase::Betting {
        return Err(GameError::HandComplete);
    }
    if state.turn() != side {
        return Err(GameError::NotYourTurn {
            expected: state.turn(),
            actual: side,
        });
    }
    let actor = state.seat(side);
    if actor.folded() {
        return Err(GameError::AlreadyFolded);
    }
    let current_bet = state.current_bet();
    let chips = actor.chips();

    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if current_bet == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(GameError::BetAlreadyOpen)
            }
        }
        A::Bet(amount) => {
            if current_bet != 0 {
                return Err(GameError::BetAlreadyOpen);
            }
            if chips < MIN_BET {
                return Err(GameError::InsufficientChips);
            }
            Ok(ValidatedAction::Bet(amount.max(MIN_BET).min(chips)))
        }
        A::Call => {
            let owed = current_bet.saturating_sub(actor.bet_this_round());
            if current_bet == 0 || owed == 0 {
                return Err(GameError::NoBetToCall);
            }
            // an all-in caller pays nothing and still closes the round
            Ok(ValidatedAction::Call(owed.min(chips)))
        }
        A::Raise(to) => {
            if state.raises_this_round() >= RAISE_CAP {
                return Err(GameError::RaiseCapReached { cap: RAISE_CAP });
            }
            let min_to = min_raise_to(state);
            if chips < min_to - actor.bet_this_round() {
                return Err(GameError::InsufficientChips);
            }
            let target = to.max(min_to);
            let pay = (target - actor.bet_this_round()).min(chips);
            Ok(ValidatedAction::Raise {
                to: actor.bet_this_round() + pay,
                pay,
            })
        }
    }
}

/// Smallest legal raise-to total.
pub fn min_raise_to(state: &GameState) -> u32 {
    state.current_bet() + MIN_RAISE
}

/// Chips `side` would pay to call right now (clamped to its stack).
pub fn to_call(state: &GameState, side: Side) -> u32 {
    let seat = state.seat(side);
    if state.current_bet() == 0 {
        return 0;
    }
    state
        .current_bet()
        .saturating_sub(seat.bet_this_round())
        .min(seat.chips())
}

pub fn can_check(state: &GameState, side: Side) -> bool {
    validate_action(state, side, A::Check).is_ok()
}

pub fn can_bet(state: &GameState, side: Side) -> bool {
    validate_action(state, side, A::Bet(MIN_BET)).is_ok()
}

pub fn can_call(state: &GameState, side: Side) -> bool {
    validate_action(state, side, A::Call).is_ok()
}

pub fn can_raise(state: &GameState, side: Side) -> bool {
    validate_action(state, side, A::Raise(min_raise_to(state))).is_ok()
}

pub fn can_fold(state: &GameState, side: Side) -> bool {
    validate_action(state, side, A::Fold).is_ok()
}

/// Snapshot of what `side` may do, for menus and prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LegalActions {
    pub check: bool,
    pub bet: bool,
    pub call: bool,
    pub raise: bool,
    pub fold: bool,
    pub call_amount: u32,
    pub min_raise_to: u32,
}

impl LegalActions {
    pub fn any(&self) -> bool {
        self.check || self.bet || self.call || self.raise || self.fold
    }
}

pub fn legal_actions(state: &GameState, side: Side) -> LegalActions {
    LegalActions {
        check: can_check(state, side),
        bet: can_bet(state, side),
        call: can_call(state, side),
        raise: can_raise(state, side),
        fold: can_fold(state, side),
        call_amount: to_call(state, side),
        min_raise_to: min_raise_to(state),
    }
}
