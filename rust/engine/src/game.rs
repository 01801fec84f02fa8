use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{best_of_seven, choose_open_cards, Evaluation};
use crate::player::{Player, PlayerAction, Side};
use crate::rules::{self, LegalActions, ValidatedAction, ANTE};

/// Cards dealt to each side.
pub const HAND_SIZE: usize = 7;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    Betting,
    Showdown,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Winner {
    Player,
    Ai,
    Tie,
}

impl From<Side> for Winner {
    fn from(side: Side) -> Self {
        match side {
            Side::Player => Winner::Player,
            Side::Ai => Winner::Ai,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum ShowdownReason {
    /// One side folded (or forfeited)
    Fold,
    /// Best hands were compared
    Hand,
}

/// Where the hand stands after a successful action.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Transition {
    /// The scripted opponent acts next
    AwaitingAi,
    /// The human acts next
    AwaitingPlayer,
    /// Betting closed without a fold; compare hands
    Showdown,
    /// A fold ended the hand
    Folded { winner: Winner },
}

impl Transition {
    pub fn is_done(self) -> bool {
        matches!(self, Transition::Showdown | Transition::Folded { .. })
    }
}

/// One applied action, kept for display during the hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub side: Side,
    pub action: PlayerAction,
    /// Chips moved into the pot by this action
    pub paid: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowdownResult {
    pub winner: Winner,
    pub reason: ShowdownReason,
    pub player_eval: Evaluation,
    pub ai_eval: Evaluation,
}

/// Outcome of paying out a finished hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settlement {
    pub winner: Winner,
    pub reason: ShowdownReason,
    pub pot: u32,
    /// Chips returned to the player's stack by settlement
    pub player_payout: u32,
    /// Chips returned to the AI's stack by settlement
    pub ai_payout: u32,
    pub player_chips: u32,
    pub ai_chips: u32,
}

/// State of a single hand between the human and the scripted opponent.
///
/// Created fresh per hand, mutated only through [`GameState::apply_player_action`]
/// and [`GameState::apply_ai_action`], then closed by [`GameState::settle`].
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
/// use sevenpoker_engine::game::{GameState, Phase, Transition};
/// use sevenpoker_engine::player::PlayerAction;
///
/// let mut rng = ChaCha20Rng::seed_from_u64(42);
/// let mut game = GameState::new(100, 100, &mut rng).unwrap();
/// assert_eq!(game.pot(), 6);
///
/// assert_eq!(game.apply_player_action(PlayerAction::Bet(3)), Ok(Transition::AwaitingAi));
/// assert_eq!(game.apply_ai_action(PlayerAction::Call), Ok(Transition::Showdown));
/// assert_eq!(game.phase(), Phase::Showdown);
///
/// let settlement = game.settle().unwrap();
/// assert_eq!(settlement.pot, 12);
/// ```
#[derive(Debug, Clone)]
pub struct GameState {
    deck: Deck,
    player: Player,
    ai: Player,
    pot: u32,
    current_bet: u32,
    raises_this_round: u8,
    phase: Phase,
    turn: Side,
    player_total_put_in: u32,
    ai_total_put_in: u32,
    last_aggressor: Option<Side>,
    winner: Option<Winner>,
    reason: Option<ShowdownReason>,
    settled: bool,
    paid_out: bool,
    history: Vec<ActionRecord>,
}

impl GameState {
    /// Shuffles a fresh deck, deals seven cards to each side, picks each
    /// side's open cards and takes the ante from both stacks.
    ///
    /// # Errors
    ///
    /// [`GameError::InsufficientChips`] if either stack cannot cover the ante.
    pub fn new<R: Rng + ?Sized>(
        player_chips: u32,
        ai_chips: u32,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        Self::check_ante(player_chips, ai_chips)?;
        let mut deck = Deck::new();
        deck.shuffle(rng);
        let player_hand = deck.draw(HAND_SIZE);
        let ai_hand = deck.draw(HAND_SIZE);
        Ok(Self::deal(deck, player_chips, ai_chips, &player_hand, &ai_hand))
    }

    /// Builds a hand from explicit cards. The deck keeps every card not dealt.
    ///
    /// # Errors
    ///
    /// [`GameError::InsufficientChips`] if either stack cannot cover the ante.
    pub fn from_hands(
        player_chips: u32,
        ai_chips: u32,
        player_hand: &[Card],
        ai_hand: &[Card],
    ) -> Result<Self, GameError> {
        Self::check_ante(player_chips, ai_chips)?;
        let mut deck = Deck::new();
        deck.retain(|c| !player_hand.contains(c) && !ai_hand.contains(c));
        Ok(Self::deal(deck, player_chips, ai_chips, player_hand, ai_hand))
    }

    fn check_ante(player_chips: u32, ai_chips: u32) -> Result<(), GameError> {
        if player_chips < ANTE || ai_chips < ANTE {
            return Err(GameError::InsufficientChips);
        }
        Ok(())
    }

    fn deal(
        deck: Deck,
        player_chips: u32,
        ai_chips: u32,
        player_hand: &[Card],
        ai_hand: &[Card],
    ) -> Self {
        let mut player = Player::new(false, player_chips);
        player.set_hand(choose_open_cards(player_hand));
        let mut ai = Player::new(true, ai_chips);
        ai.set_hand(choose_open_cards(ai_hand));

        let player_ante = player.pay(ANTE);
        let ai_ante = ai.pay(ANTE);
        debug!(player_chips, ai_chips, "hand dealt");

        Self {
            deck,
            player,
            ai,
            pot: player_ante + ai_ante,
            current_bet: 0,
            raises_this_round: 0,
            phase: Phase::Betting,
            turn: Side::Player,
            player_total_put_in: player_ante,
            ai_total_put_in: ai_ante,
            last_aggressor: None,
            winner: None,
            reason: None,
            settled: false,
            paid_out: false,
            history: Vec::new(),
        }
    }

    pub fn apply_player_action(&mut self, action: PlayerAction) -> Result<Transition, GameError> {
        self.apply(Side::Player, action)
    }

    pub fn apply_ai_action(&mut self, action: PlayerAction) -> Result<Transition, GameError> {
        self.apply(Side::Ai, action)
    }

    fn apply(&mut self, side: Side, action: PlayerAction) -> Result<Transition, GameError> {
        let validated = match rules::validate_action(self, side, action) {
            Ok(v) => v,
            Err(e) => {
                debug!(side = side.as_str(), ?action, error = %e, "action rejected");
                return Err(e);
            }
        };

        let mut paid = 0;
        let transition = match validated {
            ValidatedAction::Fold => {
                self.seat_mut(side).fold();
                self.end_by_fold(side.opponent())
            }
            ValidatedAction::Check => match side {
                Side::Player => self.pass_turn(side),
                // the opponent's check always closes the round
                Side::Ai => self.close_betting(),
            },
            ValidatedAction::Bet(pay) => {
                paid = self.put_in(side, pay);
                self.current_bet = self.seat(side).bet_this_round();
                self.last_aggressor = Some(side);
                self.pass_turn(side)
            }
            ValidatedAction::Call(pay) => {
                paid = self.put_in(side, pay);
                let actor = self.seat(side);
                let other = self.seat(side.opponent());
                if other.folded()
                    || actor.bet_this_round() == other.bet_this_round()
                    || actor.chips() == 0
                {
                    self.close_betting()
                } else {
                    self.pass_turn(side)
                }
            }
            ValidatedAction::Raise { pay, .. } => {
                paid = self.put_in(side, pay);
                self.current_bet = self.seat(side).bet_this_round();
                self.raises_this_round += 1;
                self.last_aggressor = Some(side);
                self.pass_turn(side)
            }
        };

        self.history.push(ActionRecord { side, action, paid });
        debug!(
            side = side.as_str(),
            ?action,
            paid,
            pot = self.pot,
            current_bet = self.current_bet,
            ?transition,
            "action applied"
        );
        Ok(transition)
    }

    /// The human abandons the hand. Counts as a fold whoever's turn it is.
    pub fn forfeit(&mut self) -> Result<Transition, GameError> {
        if self.phase != Phase::Betting {
            return Err(GameError::HandComplete);
        }
        self.player.fold();
        self.history.push(ActionRecord {
            side: Side::Player,
            action: PlayerAction::Fold,
            paid: 0,
        });
        debug!("player forfeited");
        Ok(self.end_by_fold(Side::Ai))
    }

    fn put_in(&mut self, side: Side, amount: u32) -> u32 {
        let paid = self.seat_mut(side).put_in(amount);
        match side {
            Side::Player => self.player_total_put_in += paid,
            Side::Ai => self.ai_total_put_in += paid,
        }
        self.pot += paid;
        paid
    }

    fn pass_turn(&mut self, side: Side) -> Transition {
        self.turn = side.opponent();
        match self.turn {
            Side::Ai => Transition::AwaitingAi,
            Side::Player => Transition::AwaitingPlayer,
        }
    }

    fn close_betting(&mut self) -> Transition {
        self.phase = Phase::Showdown;
        self.settled = true;
        Transition::Showdown
    }

    fn end_by_fold(&mut self, winner: Side) -> Transition {
        let winner = Winner::from(winner);
        self.phase = Phase::Showdown;
        self.settled = true;
        self.winner = Some(winner);
        self.reason = Some(ShowdownReason::Fold);
        Transition::Folded { winner }
    }

    /// Decides the winner once betting is closed. A fold decides it directly;
    /// otherwise the best five-card hands are compared and equal hands tie.
    ///
    /// # Errors
    ///
    /// [`GameError::ShowdownNotReached`] while betting is still open.
    pub fn resolve_showdown(&mut self) -> Result<ShowdownResult, GameError> {
        if self.phase != Phase::Showdown {
            return Err(GameError::ShowdownNotReached);
        }
        let player_eval = best_of_seven(self.player.hand());
        let ai_eval = best_of_seven(self.ai.hand());

        let (winner, reason) = match (self.winner, self.reason) {
            (Some(w), Some(r)) => (w, r),
            _ => {
                let winner = match player_eval.cmp(&ai_eval) {
                    std::cmp::Ordering::Greater => Winner::Player,
                    std::cmp::Ordering::Less => Winner::Ai,
                    std::cmp::Ordering::Equal => Winner::Tie,
                };
                self.winner = Some(winner);
                self.reason = Some(ShowdownReason::Hand);
                (winner, ShowdownReason::Hand)
            }
        };

        Ok(ShowdownResult {
            winner,
            reason,
            player_eval,
            ai_eval,
        })
    }

    /// Pays out the pot: a tie refunds each side's own contribution, a
    /// decisive result moves the whole pot to the winner.
    ///
    /// # Errors
    ///
    /// - [`GameError::ShowdownNotReached`] while betting is still open
    /// - [`GameError::AlreadySettled`] on a second call
    pub fn settle(&mut self) -> Result<Settlement, GameError> {
        if self.paid_out {
            return Err(GameError::AlreadySettled);
        }
        let result = self.resolve_showdown()?;

        let (player_payout, ai_payout) = match result.winner {
            Winner::Tie => (self.player_total_put_in, self.ai_total_put_in),
            Winner::Player => (self.pot, 0),
            Winner::Ai => (0, self.pot),
        };
        self.player.add_chips(player_payout);
        self.ai.add_chips(ai_payout);
        self.paid_out = true;

        info!(
            winner = ?result.winner,
            reason = ?result.reason,
            pot = self.pot,
            player_chips = self.player.chips(),
            ai_chips = self.ai.chips(),
            "hand settled"
        );

        Ok(Settlement {
            winner: result.winner,
            reason: result.reason,
            pot: self.pot,
            player_payout,
            ai_payout,
            player_chips: self.player.chips(),
            ai_chips: self.ai.chips(),
        })
    }

    pub fn seat(&self, side: Side) -> &Player {
        match side {
            Side::Player => &self.player,
            Side::Ai => &self.ai,
        }
    }

    fn seat_mut(&mut self, side: Side) -> &mut Player {
        match side {
            Side::Player => &mut self.player,
            Side::Ai => &mut self.ai,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }
    pub fn ai(&self) -> &Player {
        &self.ai
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn raises_this_round(&self) -> u8 {
        self.raises_this_round
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn turn(&self) -> Side {
        self.turn
    }
    pub fn total_put_in(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player_total_put_in,
            Side::Ai => self.ai_total_put_in,
        }
    }
    pub fn last_aggressor(&self) -> Option<Side> {
        self.last_aggressor
    }
    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }
    pub fn reason(&self) -> Option<ShowdownReason> {
        self.reason
    }
    pub fn is_settled(&self) -> bool {
        self.settled
    }
    pub fn is_paid_out(&self) -> bool {
        self.paid_out
    }
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    pub fn player_open_cards(&self) -> &[Card] {
        self.player.open_cards()
    }
    pub fn player_hidden_cards(&self) -> &[Card] {
        self.player.hidden_cards()
    }
    pub fn ai_open_cards(&self) -> &[Card] {
        self.ai.open_cards()
    }
    pub fn ai_hidden_cards(&self) -> &[Card] {
        self.ai.hidden_cards()
    }

    pub fn can_check(&self) -> bool {
        rules::can_check(self, Side::Player)
    }
    pub fn can_bet(&self) -> bool {
        rules::can_bet(self, Side::Player)
    }
    pub fn can_call(&self) -> bool {
        rules::can_call(self, Side::Player)
    }
    pub fn can_raise(&self) -> bool {
        rules::can_raise(self, Side::Player)
    }
    /// Chips the human would pay to call.
    pub fn call_amount(&self) -> u32 {
        rules::to_call(self, Side::Player)
    }
    pub fn min_raise_to(&self) -> u32 {
        rules::min_raise_to(self)
    }
    /// Everything the human may do right now.
    pub fn legal_actions(&self) -> LegalActions {
        rules::legal_actions(self, Side::Player)
    }
}
