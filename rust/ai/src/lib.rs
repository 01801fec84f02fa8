//! # sevenpoker-ai: Scripted Opponents for Open/Hidden Seven-Card Poker
//!
//! Decision engines that read a [`GameState`] and propose the AI's next
//! action. Opponents see their own seven cards and only the human's five
//! open cards; randomness (bluffs) comes from an injected RNG so that every
//! decision can be reproduced from a seed.
//!
//! ## Core Components
//!
//! - [`AIOpponent`] - Trait defining the interface for AI decision-making
//! - [`scripted`] - Strength-comparison opponent with bluffing and bluff-catching
//! - [`passive`] - Always checks or calls; a reference opponent for tests
//! - [`create_ai`] - Factory function for creating AI opponents by name
//!
//! ## Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//! use sevenpoker_ai::create_ai;
//! use sevenpoker_engine::game::GameState;
//! use sevenpoker_engine::player::PlayerAction;
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//! let mut game = GameState::new(100, 100, &mut rng).unwrap();
//! game.apply_player_action(PlayerAction::Check).unwrap();
//!
//! let ai = create_ai("scripted").unwrap();
//! let action = ai.get_action(&game, &mut rng).expect("AI to act");
//! assert!(game.apply_ai_action(action).is_ok());
//! ```

use rand::RngCore;
use sevenpoker_engine::game::GameState;
use sevenpoker_engine::player::PlayerAction;
use thiserror::Error;

pub mod passive;
pub mod scripted;

/// Name used when no opponent is configured.
pub const DEFAULT_AI: &str = "scripted";

/// Every name [`create_ai`] accepts.
pub const AI_NAMES: [&str; 2] = ["scripted", "passive"];

/// Trait defining the interface for AI opponents.
///
/// # Example Implementation
///
/// ```rust
/// use rand::RngCore;
/// use sevenpoker_ai::AIOpponent;
/// use sevenpoker_engine::game::GameState;
/// use sevenpoker_engine::player::PlayerAction;
///
/// struct AlwaysFold;
///
/// impl AIOpponent for AlwaysFold {
///     fn get_action(&self, _state: &GameState, _rng: &mut dyn RngCore) -> Option<PlayerAction> {
///         Some(PlayerAction::Fold)
///     }
///
///     fn name(&self) -> &str {
///         "AlwaysFold"
///     }
/// }
/// ```
pub trait AIOpponent: Send + Sync {
    /// Determine the AI's next action.
    ///
    /// Returns `None` when it is not the AI's turn, the AI has folded or
    /// betting is over. Any random draw is taken from `rng`.
    fn get_action(&self, state: &GameState, rng: &mut dyn RngCore) -> Option<PlayerAction>;

    /// Return the name/identifier of this AI implementation.
    fn name(&self) -> &str;
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown AI type: {0} (expected one of: scripted, passive)")]
pub struct UnknownAi(pub String);

/// Factory function to create AI opponents by type string.
///
/// # Supported AI Types
///
/// - `"scripted"` - Strength comparison plus bluffing ([`scripted::ScriptedAI`])
/// - `"passive"` - Check or call, never bets ([`passive::PassiveAI`])
///
/// # Example
///
/// ```rust
/// use sevenpoker_ai::create_ai;
///
/// let ai = create_ai("scripted").unwrap();
/// assert_eq!(ai.name(), "ScriptedAI");
/// assert!(create_ai("gto").is_err());
/// ```
///
/// # Errors
///
/// [`UnknownAi`] for any other name.
pub fn create_ai(ai_type: &str) -> Result<Box<dyn AIOpponent>, UnknownAi> {
    match ai_type.trim().to_ascii_lowercase().as_str() {
        "scripted" => Ok(Box::new(scripted::ScriptedAI::new())),
        "passive" => Ok(Box::new(passive::PassiveAI)),
        _ => Err(UnknownAi(ai_type.to_string())),
    }
}
