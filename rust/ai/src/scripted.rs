//! Scripted opponent: compares its own best hand against what the human shows.
//!
//! The AI scores its best five of seven cards and the human's five open cards
//! on the same scalar scale (`category * 1000 + top tiebreaker`), adds a
//! threat bonus for draws visible in the open cards, and acts on the
//! difference. A handful of random rolls turn some checks into bets, some
//! calls into raises and some folds into calls.
//!
//! # Example
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//! use sevenpoker_ai::scripted::{decide, DecisionInputs};
//! use sevenpoker_engine::player::PlayerAction;
//!
//! let inputs = DecisionInputs {
//!     my_score: 2_014,
//!     opp_score: 1_000,
//!     threat: 0,
//!     current_bet: 0,
//!     bet_this_round: 0,
//!     chips: 97,
//!     raises_this_round: 0,
//!     player_was_aggressor: false,
//! };
//! let mut rng = ChaCha20Rng::seed_from_u64(1);
//! assert_eq!(decide(&inputs, &mut rng), PlayerAction::Bet(5));
//! ```

use std::collections::HashMap;

use crate::AIOpponent;
use rand::{Rng, RngCore};
use sevenpoker_engine::cards::{Card, Rank};
use sevenpoker_engine::game::{GameState, Phase};
use sevenpoker_engine::hand::{best_of_seven, evaluate_five};
use sevenpoker_engine::player::{PlayerAction, Side};
use sevenpoker_engine::rules::{MIN_BET, MIN_RAISE, RAISE_CAP};
use tracing::debug;

/// Chance to bet anyway where the AI would otherwise check.
pub const BLUFF_BET_CHANCE: f64 = 0.14;
/// Chance to raise where the AI would otherwise call.
pub const BLUFF_RAISE_CHANCE: f64 = 0.12;
/// Chance to call where the AI would otherwise fold.
pub const BLUFF_CALL_CHANCE: f64 = 0.11;
/// Chance to call a suspected bluff with a hand that would otherwise fold.
pub const BLUFF_CATCH_CHANCE: f64 = 0.45;
/// Chance to re-raise a suspected bluff with a hand that would otherwise call.
pub const BLUFF_SQUEEZE_CHANCE: f64 = 0.25;
/// Effective opponent scores below this count as a weak open.
pub const OPP_WEAK_THRESHOLD: i32 = 1200;

/// Threat bonuses for what the open cards might become.
const FLUSH_DRAW_FOUR: i32 = 400;
const FLUSH_DRAW_THREE: i32 = 200;
const STRAIGHT_DRAW: i32 = 150;
const PAIR_SHOWING: i32 = 80;
const HIGH_CARDS: i32 = 50;

/// Strong-hand bet sizes and raise increments.
const BIG_BET: u32 = 5;
const BIG_RAISE: u32 = 5;

/// Scores the draw potential of the human's five open cards.
///
/// Sums the flush draw (+400 for four of a suit, else +200 for three), a
/// straight draw (+150 when four distinct ranks fit in a span of four), a
/// visible pair (+80) and at least two Aces, Kings or Queens (+50). Fewer
/// than five cards score 0.
pub fn opponent_threat(open: &[Card]) -> i32 {
    if open.len() < 5 {
        return 0;
    }
    let mut threat = 0;

    let mut suits: HashMap<_, u32> = HashMap::new();
    for c in open {
        *suits.entry(c.suit).or_default() += 1;
    }
    let max_suit = suits.values().copied().max().unwrap_or(0);
    if max_suit >= 4 {
        threat += FLUSH_DRAW_FOUR;
    } else if max_suit >= 3 {
        threat += FLUSH_DRAW_THREE;
    }

    let mut ranks: Vec<u8> = open.iter().map(|c| c.rank.value()).collect();
    ranks.sort_unstable();
    let paired = ranks.windows(2).any(|w| w[0] == w[1]);
    ranks.dedup();
    if ranks.windows(4).any(|seg| seg[3] - seg[0] <= 4) {
        threat += STRAIGHT_DRAW;
    }
    if paired {
        threat += PAIR_SHOWING;
    }

    let high = open
        .iter()
        .filter(|c| matches!(c.rank, Rank::Ace | Rank::King | Rank::Queen))
        .count();
    if high >= 2 {
        threat += HIGH_CARDS;
    }
    threat
}

/// Everything the scripted opponent looks at when choosing an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionInputs {
    /// Scalar strength of the AI's best five of seven
    pub my_score: i32,
    /// Scalar strength of the human's five open cards
    pub opp_score: i32,
    /// [`opponent_threat`] of the human's open cards
    pub threat: i32,
    pub current_bet: u32,
    /// AI's stake in the current round
    pub bet_this_round: u32,
    /// AI's stack
    pub chips: u32,
    pub raises_this_round: u8,
    /// The human made the last bet or raise
    pub player_was_aggressor: bool,
}

impl DecisionInputs {
    /// Reads the inputs off a live hand. `None` unless the AI is to act.
    pub fn from_state(state: &GameState) -> Option<Self> {
        if state.phase() != Phase::Betting || state.turn() != Side::Ai || state.ai().folded() {
            return None;
        }
        let ai = state.ai();
        let open = state.player_open_cards();
        Some(Self {
            my_score: best_of_seven(ai.hand()).score(),
            opp_score: evaluate_five(open).score(),
            threat: opponent_threat(open),
            current_bet: state.current_bet(),
            bet_this_round: ai.bet_this_round(),
            chips: ai.chips(),
            raises_this_round: state.raises_this_round(),
            player_was_aggressor: state.last_aggressor() == Some(Side::Player),
        })
    }

    pub fn effective_opponent(&self) -> i32 {
        self.opp_score + self.threat
    }

    pub fn diff(&self) -> i32 {
        self.my_score - self.effective_opponent()
    }

    fn can_check(&self) -> bool {
        self.current_bet == 0
    }

    fn can_bet(&self) -> bool {
        self.current_bet == 0 && self.chips >= MIN_BET
    }

    /// Only full calls; the scripted opponent never calls short.
    fn can_call(&self) -> bool {
        self.current_bet > 0 && self.chips >= self.current_bet.saturating_sub(self.bet_this_round)
    }

    fn can_raise(&self) -> bool {
        self.raises_this_round < RAISE_CAP
            && (self.current_bet + MIN_RAISE).saturating_sub(self.bet_this_round) <= self.chips
    }

    /// The human is pushing with a weak-looking open.
    pub fn suspect_bluff(&self) -> bool {
        self.current_bet > 0
            && self.player_was_aggressor
            && self.effective_opponent() < OPP_WEAK_THRESHOLD
    }
}

/// Chooses an action from the inputs. Random draws happen only at the bluff
/// branches, and only once the branch's other conditions hold.
pub fn decide(inputs: &DecisionInputs, rng: &mut dyn RngCore) -> PlayerAction {
    let diff = inputs.diff();
    let cb = inputs.current_bet;

    if inputs.can_check() && !inputs.can_bet() {
        return PlayerAction::Check;
    }

    if cb == 0 {
        if diff >= 800 {
            return PlayerAction::Bet(BIG_BET);
        }
        if diff >= 200 {
            return PlayerAction::Bet(MIN_BET);
        }
        if rng.random_bool(BLUFF_BET_CHANCE) {
            return PlayerAction::Bet(MIN_BET);
        }
        return PlayerAction::Check;
    }

    let can_call = inputs.can_call();
    let can_raise = inputs.can_raise();
    let suspect = inputs.suspect_bluff();

    if !can_call && !can_raise {
        return PlayerAction::Fold;
    }
    if diff >= 600 && can_raise {
        return PlayerAction::Raise(cb + BIG_RAISE);
    }
    if diff >= 200 && can_raise {
        return PlayerAction::Raise(cb + MIN_RAISE);
    }
    if diff >= -200 && can_raise && rng.random_bool(BLUFF_RAISE_CHANCE) {
        return PlayerAction::Raise(cb + MIN_RAISE);
    }
    if suspect && diff >= -500 && can_raise && rng.random_bool(BLUFF_SQUEEZE_CHANCE) {
        return PlayerAction::Raise(cb + MIN_RAISE);
    }
    if diff >= -500 && can_call {
        return PlayerAction::Call;
    }
    if can_call {
        let chance = if suspect {
            BLUFF_CATCH_CHANCE
        } else {
            BLUFF_CALL_CHANCE
        };
        if rng.random_bool(chance) {
            return PlayerAction::Call;
        }
    }
    PlayerAction::Fold
}

/// The bluffing opponent the game ships with.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAI;

impl ScriptedAI {
    pub fn new() -> Self {
        Self
    }
}

impl AIOpponent for ScriptedAI {
    fn get_action(&self, state: &GameState, rng: &mut dyn RngCore) -> Option<PlayerAction> {
        let inputs = DecisionInputs::from_state(state)?;
        let action = decide(&inputs, rng);
        debug!(
            my_score = inputs.my_score,
            opp_score = inputs.opp_score,
            threat = inputs.threat,
            diff = inputs.diff(),
            suspect = inputs.suspect_bluff(),
            ?action,
            "ai decision"
        );
        Some(action)
    }

    fn name(&self) -> &str {
        "ScriptedAI"
    }
}
