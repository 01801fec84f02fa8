//! # sevenpoker-engine: Open/Hidden Seven-Card Poker Core
//!
//! A heads-up poker engine where each side holds seven cards: five open
//! cards the opponent can see and two hidden cards revealed at showdown.
//! Provides hand evaluation, the betting state machine and settlement, with
//! injectable RNG so every deal can be reproduced.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), text form and deck construction
//! - [`deck`] - Shuffling and drawing from the top of the deck
//! - [`hand`] - Five-card evaluation, best-of-seven and weakest-open-five selection
//! - [`player`] - Seats, actions and chip movement
//! - [`rules`] - Action validation, legality predicates and table constants
//! - [`game`] - Per-hand state machine, showdown and settlement
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use sevenpoker_engine::cards::parse_cards;
//! use sevenpoker_engine::hand::{best_of_seven, Category};
//!
//! let cards = parse_cards("♠A ♠K ♠Q ♠J ♠10 ♥2 ♥3").unwrap();
//! let eval = best_of_seven(&cards);
//! assert_eq!(eval.category, Category::RoyalStraightFlush);
//! assert_eq!(eval.tiebreaker, vec![14]);
//! ```
//!
//! ## Playing a Hand
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//! use sevenpoker_engine::game::GameState;
//! use sevenpoker_engine::player::PlayerAction;
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(1);
//! let mut game = GameState::new(100, 100, &mut rng).unwrap();
//! assert_eq!(game.player_open_cards().len(), 5);
//! assert_eq!(game.player_hidden_cards().len(), 2);
//!
//! game.apply_player_action(PlayerAction::Check).unwrap();
//! game.apply_ai_action(PlayerAction::Check).unwrap();
//! let settlement = game.settle().unwrap();
//! assert_eq!(settlement.pot, 6);
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod player;
pub mod rules;
