use sevenpoker_engine::cards::{parse_cards, Card};
use sevenpoker_engine::errors::GameError;
use sevenpoker_engine::game::{GameState, ShowdownReason, Winner};
use sevenpoker_engine::hand::Category;
use sevenpoker_engine::player::PlayerAction as A;

fn cards(text: &str) -> Vec<Card> {
    parse_cards(text).unwrap()
}

#[test]
fn showdown_not_reached_while_betting() {
    let mut g = GameState::from_hands(
        100,
        100,
        &cards("♠A ♠K ♠Q ♠J ♠10 ♥2 ♥3"),
        &cards("♥7 ♣7 ♦7 ♠7 ♦2 ♣9 ♦9"),
    )
    .unwrap();
    assert_eq!(g.resolve_showdown(), Err(GameError::ShowdownNotReached));
    assert_eq!(g.winner(), None);
}

#[test]
fn showdown_reports_both_evaluations() {
    let mut g = GameState::from_hands(
        100,
        100,
        &cards("♥7 ♣7 ♦7 ♠7 ♦2 ♣9 ♦9"),
        &cards("♠A ♠K ♠Q ♠J ♠10 ♥2 ♥3"),
    )
    .unwrap();
    g.apply_player_action(A::Check).unwrap();
    g.apply_ai_action(A::Check).unwrap();
    let result = g.resolve_showdown().unwrap();
    assert_eq!(result.winner, Winner::Ai);
    assert_eq!(result.reason, ShowdownReason::Hand);
    assert_eq!(result.player_eval.category, Category::FourOfAKind);
    assert_eq!(result.player_eval.tiebreaker, vec![7, 9]);
    assert_eq!(result.ai_eval.category, Category::RoyalStraightFlush);
    assert_eq!(g.winner(), Some(Winner::Ai));
    assert_eq!(g.reason(), Some(ShowdownReason::Hand));
}

#[test]
fn resolving_twice_is_stable() {
    let mut g = GameState::from_hands(
        100,
        100,
        &cards("♠2 ♠3 ♦4 ♣5 ♥6 ♠9 ♥J"),
        &cards("♥2 ♥3 ♣4 ♦5 ♣7 ♦9 ♣J"),
    )
    .unwrap();
    g.apply_player_action(A::Check).unwrap();
    g.apply_ai_action(A::Check).unwrap();
    let first = g.resolve_showdown().unwrap();
    let second = g.resolve_showdown().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.winner, Winner::Player);
    assert_eq!(first.player_eval.category, Category::Straight);
}

#[test]
fn fold_keeps_fold_reason_at_showdown() {
    let mut g = GameState::from_hands(
        100,
        100,
        &cards("♠A ♠K ♠Q ♠J ♠10 ♥2 ♥3"),
        &cards("♥7 ♣7 ♦7 ♠7 ♦2 ♣9 ♦9"),
    )
    .unwrap();
    g.apply_player_action(A::Bet(3)).unwrap();
    g.apply_ai_action(A::Fold).unwrap();
    let result = g.resolve_showdown().unwrap();
    assert_eq!(result.winner, Winner::Player);
    assert_eq!(result.reason, ShowdownReason::Fold);
}

#[test]
fn settlement_and_history_serialize_for_display() {
    let mut g = GameState::from_hands(
        100,
        100,
        &cards("♠A ♠K ♠Q ♠J ♠10 ♥2 ♥3"),
        &cards("♥7 ♣7 ♦7 ♠7 ♦2 ♣9 ♦9"),
    )
    .unwrap();
    g.apply_player_action(A::Bet(5)).unwrap();
    g.apply_ai_action(A::Call).unwrap();
    let settlement = g.settle().unwrap();

    let json = serde_json::to_value(&settlement).unwrap();
    assert_eq!(json["winner"], "Player");
    assert_eq!(json["reason"], "Hand");
    assert_eq!(json["pot"], 16);
    assert_eq!(json["player_chips"], 108);

    let history = serde_json::to_value(g.history()).unwrap();
    assert_eq!(history[0]["action"], serde_json::json!({ "Bet": 5 }));
    assert_eq!(history[1]["side"], "Ai");
    assert_eq!(history[1]["paid"], 5);
}
