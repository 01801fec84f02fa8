use sevenpoker_engine::cards::{parse_cards, Card};
use sevenpoker_engine::errors::GameError;
use sevenpoker_engine::game::{GameState, ShowdownReason, Winner};
use sevenpoker_engine::player::{PlayerAction as A, Side};

fn cards(text: &str) -> Vec<Card> {
    parse_cards(text).unwrap()
}

fn tied_game(player_chips: u32, ai_chips: u32) -> GameState {
    GameState::from_hands(
        player_chips,
        ai_chips,
        &cards("♠A ♠K ♦Q ♣J ♥9 ♠2 ♥3"),
        &cards("♥A ♥K ♣Q ♦J ♣9 ♦2 ♣3"),
    )
    .unwrap()
}

fn royal_vs_quads(player_chips: u32, ai_chips: u32) -> GameState {
    GameState::from_hands(
        player_chips,
        ai_chips,
        &cards("♠A ♠K ♠Q ♠J ♠10 ♥2 ♥3"),
        &cards("♥7 ♣7 ♦7 ♠7 ♦2 ♣9 ♦9"),
    )
    .unwrap()
}

#[test]
fn tie_refunds_each_side_its_own_stake() {
    let mut g = tied_game(40, 100);
    g.apply_player_action(A::Bet(5)).unwrap();
    g.apply_ai_action(A::Call).unwrap();
    let s = g.settle().unwrap();
    assert_eq!(s.winner, Winner::Tie);
    assert_eq!(s.reason, ShowdownReason::Hand);
    assert_eq!(s.player_payout, 8);
    assert_eq!(s.ai_payout, 8);
    assert_eq!(s.player_chips, 40);
    assert_eq!(s.ai_chips, 100);
}

#[test]
fn tie_after_uneven_all_in_refunds_exact_contributions() {
    let mut g = tied_game(6, 100);
    g.apply_player_action(A::Check).unwrap();
    g.apply_ai_action(A::Bet(9)).unwrap();
    g.apply_player_action(A::Call).unwrap();
    assert_eq!(g.total_put_in(Side::Player), 6);
    assert_eq!(g.total_put_in(Side::Ai), 12);
    let s = g.settle().unwrap();
    assert_eq!(s.player_chips, 6);
    assert_eq!(s.ai_chips, 100);
}

#[test]
fn decisive_showdown_pays_whole_pot_to_winner() {
    let mut g = royal_vs_quads(100, 100);
    g.apply_player_action(A::Bet(10)).unwrap();
    g.apply_ai_action(A::Raise(13)).unwrap();
    g.apply_player_action(A::Call).unwrap();
    let pot = g.pot();
    assert_eq!(pot, 6 + 13 + 13);
    let s = g.settle().unwrap();
    assert_eq!(s.winner, Winner::Player);
    assert_eq!(s.player_payout, pot);
    assert_eq!(s.ai_payout, 0);
    assert_eq!(s.player_chips, 100 - 16 + pot);
    assert_eq!(s.ai_chips, 100 - 16);
}

#[test]
fn fold_gives_pot_to_other_side_regardless_of_cards() {
    let mut g = royal_vs_quads(100, 100);
    g.apply_player_action(A::Fold).unwrap();
    let s = g.settle().unwrap();
    assert_eq!(s.winner, Winner::Ai);
    assert_eq!(s.reason, ShowdownReason::Fold);
    assert_eq!(s.pot, 6);
    assert_eq!(s.ai_chips, 103);
    assert_eq!(s.player_chips, 97);
}

#[test]
fn settle_is_one_shot() {
    let mut g = tied_game(100, 100);
    g.apply_player_action(A::Check).unwrap();
    g.apply_ai_action(A::Check).unwrap();
    assert!(g.settle().is_ok());
    assert!(g.is_paid_out());
    assert_eq!(g.settle(), Err(GameError::AlreadySettled));
    assert_eq!(g.player().chips(), 100);
}

#[test]
fn settle_during_betting_is_rejected() {
    let mut g = tied_game(100, 100);
    assert_eq!(g.settle(), Err(GameError::ShowdownNotReached));
    assert!(!g.is_paid_out());
    assert_eq!(g.pot(), 6);
}

#[test]
fn chips_are_conserved_through_settlement() {
    let mut g = royal_vs_quads(30, 70);
    g.apply_player_action(A::Check).unwrap();
    g.apply_ai_action(A::Bet(20)).unwrap();
    g.apply_player_action(A::Call).unwrap();
    let s = g.settle().unwrap();
    assert_eq!(s.player_chips + s.ai_chips, 100);
}
