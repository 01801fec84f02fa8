//! Opponent that never puts in chips voluntarily beyond calling.

use crate::AIOpponent;
use rand::RngCore;
use sevenpoker_engine::game::{GameState, Phase};
use sevenpoker_engine::player::{PlayerAction, Side};
use sevenpoker_engine::rules;

/// Checks when free, calls when facing a bet, folds only when it cannot call.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassiveAI;

impl AIOpponent for PassiveAI {
    fn get_action(&self, state: &GameState, _rng: &mut dyn RngCore) -> Option<PlayerAction> {
        if state.phase() != Phase::Betting || state.turn() != Side::Ai || state.ai().folded() {
            return None;
        }
        let action = if rules::can_check(state, Side::Ai) {
            PlayerAction::Check
        } else if rules::can_call(state, Side::Ai) {
            PlayerAction::Call
        } else {
            PlayerAction::Fold
        };
        Some(action)
    }

    fn name(&self) -> &str {
        "PassiveAI"
    }
}
