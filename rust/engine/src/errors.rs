use thiserror::Error;

use crate::player::Side;

/// Reasons an action or settlement step is refused. A refused call never
/// mutates the game state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("It's not {actual:?}'s turn (expected {expected:?})")]
    NotYourTurn { expected: Side, actual: Side },
    #[error("Betting is closed for this hand")]
    HandComplete,
    #[error("Player already folded")]
    AlreadyFolded,
    #[error("A bet is already open this round")]
    BetAlreadyOpen,
    #[error("There is no bet to call")]
    NoBetToCall,
    #[error("Insufficient chips for action")]
    InsufficientChips,
    #[error("Raise cap of {cap} reached")]
    RaiseCapReached { cap: u8 },
    #[error("Hand has not reached showdown")]
    ShowdownNotReached,
    #[error("Hand already settled")]
    AlreadySettled,
}
