use crate::cards::Card;
use serde::{Deserialize, Serialize};

/// Which of the two seats is meant: the human player or the scripted opponent.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Human player
    Player,
    /// Scripted opponent
    Ai,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Ai => "ai",
        }
    }
}

/// Represents a player action during the betting round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (only valid if no bet is open)
    Check,
    /// Call the current bet
    Call,
    /// Open the round with the given amount
    Bet(u32),
    /// Raise the round's bet to the given total
    Raise(u32),
}

/// Number of cards shown to the opponent.
pub const OPEN_CARDS: usize = 5;

/// One seat's chips, cards and per-round stake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    is_ai: bool,
    chips: u32,
    /// Seven cards ordered `[open5.., hidden2..]`, or empty before the deal
    hand: Vec<Card>,
    folded: bool,
    bet_this_round: u32,
}

impl Player {
    pub fn new(is_ai: bool, chips: u32) -> Self {
        Self {
            is_ai,
            chips,
            hand: Vec::new(),
            folded: false,
            bet_this_round: 0,
        }
    }

    pub fn is_ai(&self) -> bool {
        self.is_ai
    }
    pub fn chips(&self) -> u32 {
        self.chips
    }
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }
    pub fn folded(&self) -> bool {
        self.folded
    }
    pub fn bet_this_round(&self) -> u32 {
        self.bet_this_round
    }

    pub fn open_cards(&self) -> &[Card] {
        &self.hand[..self.hand.len().min(OPEN_CARDS)]
    }

    pub fn hidden_cards(&self) -> &[Card] {
        &self.hand[self.hand.len().min(OPEN_CARDS)..]
    }

    pub(crate) fn set_hand(&mut self, hand: Vec<Card>) {
        self.hand = hand;
    }

    pub(crate) fn fold(&mut self) {
        self.folded = true;
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.chips = self.chips.saturating_add(amount);
    }

    /// Moves up to `amount` chips out of the stack (an implicit all-in when
    /// short) and returns what was actually paid.
    pub fn pay(&mut self, amount: u32) -> u32 {
        let paid = amount.min(self.chips);
        self.chips -= paid;
        paid
    }

    /// Pays toward the current round's stake.
    pub(crate) fn put_in(&mut self, amount: u32) -> u32 {
        let paid = self.pay(amount);
        self.bet_this_round += paid;
        paid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pay_is_clamped_to_stack() {
        let mut p = Player::new(false, 5);
        assert_eq!(p.pay(3), 3);
        assert_eq!(p.pay(10), 2);
        assert_eq!(p.chips(), 0);
    }

    #[test]
    fn put_in_tracks_round_stake() {
        let mut p = Player::new(true, 20);
        p.put_in(6);
        p.put_in(3);
        assert_eq!(p.bet_this_round(), 9);
        assert_eq!(p.chips(), 11);
    }

    #[test]
    fn empty_hand_has_no_open_or_hidden_cards() {
        let p = Player::new(false, 10);
        assert!(p.open_cards().is_empty());
        assert!(p.hidden_cards().is_empty());
    }

    #[test]
    fn side_opponent_flips() {
        assert_eq!(Side::Player.opponent(), Side::Ai);
        assert_eq!(Side::Ai.opponent(), Side::Player);
    }
}
