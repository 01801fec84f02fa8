use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalStraightFlush = 9,
}

impl Category {
    pub fn value(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalStraightFlush => "Royal Straight Flush",
        }
    }
}

/// Result of ranking a five-card hand.
///
/// Ordering compares `category` first, then `tiebreaker` lexicographically
/// with missing entries read as 0. `best5` never takes part in comparisons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub category: Category,
    // rank values, most significant first
    pub tiebreaker: Vec<u8>,
    #[serde(default)]
    pub best5: Option<[Card; 5]>,
}

impl Evaluation {
    /// Default returned for malformed input (wrong number of cards).
    pub fn neutral() -> Self {
        Self {
            category: Category::HighCard,
            tiebreaker: vec![0; 5],
            best5: None,
        }
    }

    /// Scalar strength: `category * 1000 + primary tiebreaker`.
    pub fn score(&self) -> i32 {
        let primary = self.tiebreaker.first().copied().unwrap_or(0);
        self.category.value() as i32 * 1000 + i32::from(primary)
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Evaluation {}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.category.cmp(&other.category) {
            Ordering::Equal => {
                let len = self.tiebreaker.len().max(other.tiebreaker.len());
                for i in 0..len {
                    let a = self.tiebreaker.get(i).copied().unwrap_or(0);
                    let b = other.tiebreaker.get(i).copied().unwrap_or(0);
                    if a != b {
                        return a.cmp(&b);
                    }
                }
                Ordering::Equal
            }
            ord => ord,
        }
    }
}

/// Ranks exactly five cards. Any other count yields [`Evaluation::neutral`].
pub fn evaluate_five(cards: &[Card]) -> Evaluation {
    let Ok(five) = <[Card; 5]>::try_from(cards) else {
        return Evaluation::neutral();
    };

    let mut ranks: Vec<u8> = five.iter().map(|c| c.rank.value()).collect();
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let flush = five.iter().all(|c| c.suit == five[0].suit);
    let straight = straight_high(&ranks);

    let (category, tiebreaker) = classify(&ranks, flush, straight);
    Evaluation {
        category,
        tiebreaker,
        best5: Some(five),
    }
}

fn classify(ranks: &[u8], flush: bool, straight: Option<u8>) -> (Category, Vec<u8>) {
    if let (true, Some(high)) = (flush, straight) {
        let cat = if high == Rank::Ace.value() {
            Category::RoyalStraightFlush
        } else {
            Category::StraightFlush
        };
        return (cat, vec![high]);
    }

    let groups = rank_groups(ranks);
    let count_of = |n: u8| groups.iter().filter(move |(_, c)| *c == n).map(|(r, _)| *r);

    if let Some(quad) = count_of(4).next() {
        let kicker = ranks.iter().copied().find(|&r| r != quad).unwrap_or(0);
        return (Category::FourOfAKind, vec![quad, kicker]);
    }

    let trips = count_of(3).next();
    let pairs: Vec<u8> = count_of(2).collect();

    if let (Some(t), Some(&p)) = (trips, pairs.first()) {
        return (Category::FullHouse, vec![t, p]);
    }
    if flush {
        return (Category::Flush, ranks.to_vec());
    }
    if let Some(high) = straight {
        return (Category::Straight, vec![high]);
    }
    if let Some(t) = trips {
        let mut tb = vec![t];
        tb.extend(ranks.iter().copied().filter(|&r| r != t).take(2));
        return (Category::ThreeOfAKind, tb);
    }
    if pairs.len() >= 2 {
        let (hi, lo) = (pairs[0], pairs[1]);
        let kicker = ranks
            .iter()
            .copied()
            .find(|&r| r != hi && r != lo)
            .unwrap_or(0);
        return (Category::TwoPair, vec![hi, lo, kicker]);
    }
    if let Some(&p) = pairs.first() {
        let mut tb = vec![p];
        tb.extend(ranks.iter().copied().filter(|&r| r != p).take(3));
        return (Category::OnePair, tb);
    }
    (Category::HighCard, ranks.to_vec())
}

/// (rank, count) pairs ordered by rank descending.
fn rank_groups(desc_ranks: &[u8]) -> Vec<(u8, u8)> {
    let mut groups: Vec<(u8, u8)> = Vec::with_capacity(5);
    for &r in desc_ranks {
        match groups.last_mut() {
            Some((rank, count)) if *rank == r => *count += 1,
            _ => groups.push((r, 1)),
        }
    }
    groups
}

/// High card of a five-card straight, with the wheel (A-2-3-4-5) reported as 5.
fn straight_high(desc_ranks: &[u8]) -> Option<u8> {
    if desc_ranks.len() != 5 {
        return None;
    }
    if desc_ranks == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    let consecutive = desc_ranks.windows(2).all(|w| w[0] == w[1] + 1);
    consecutive.then_some(desc_ranks[0])
}

/// All C(n,5) five-card subsets in lexicographic index order.
pub fn five_card_subsets(cards: &[Card]) -> Vec<[Card; 5]> {
    let n = cards.len();
    let mut out = Vec::new();
    if n < 5 {
        return out;
    }
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    for e in d + 1..n {
                        out.push([cards[a], cards[b], cards[c], cards[d], cards[e]]);
                    }
                }
            }
        }
    }
    out
}

/// Strongest five-card evaluation out of seven cards; ties keep the first subset found.
pub fn best_of_seven(cards: &[Card]) -> Evaluation {
    if cards.len() != 7 {
        return Evaluation::neutral();
    }
    let mut best: Option<Evaluation> = None;
    for five in five_card_subsets(cards) {
        let e = evaluate_five(&five);
        if best.as_ref().is_none_or(|b| e > *b) {
            best = Some(e);
        }
    }
    best.unwrap_or_else(Evaluation::neutral)
}

/// Reorders seven cards as `[open5.., hidden2..]`, where the open five is the
/// weakest five-card subset of the hand.
///
/// The cards are put in canonical order first so the choice depends only on
/// which cards were dealt, never on the deal order. Input that is not exactly
/// seven cards is returned unchanged.
pub fn choose_open_cards(hand: &[Card]) -> Vec<Card> {
    if hand.len() != 7 {
        return hand.to_vec();
    }
    let mut sorted = hand.to_vec();
    sorted.sort_unstable_by(|a, b| a.rank.cmp(&b.rank).then(a.suit.cmp(&b.suit)));

    let mut worst: Option<(Evaluation, [Card; 5])> = None;
    for five in five_card_subsets(&sorted) {
        let e = evaluate_five(&five);
        if worst.as_ref().is_none_or(|(w, _)| e < *w) {
            worst = Some((e, five));
        }
    }
    let Some((_, open)) = worst else {
        return hand.to_vec();
    };

    let mut out: Vec<Card> = open.to_vec();
    out.extend(sorted.iter().copied().filter(|c| !open.contains(c)));
    out
}

/// Compares the best five-card hands of two seven-card hands.
pub fn compare_hands(a: &[Card], b: &[Card]) -> Ordering {
    best_of_seven(a).cmp(&best_of_seven(b))
}

/// One-line human readable summary such as "Kings Full House" or "Ace-high Straight".
pub fn describe(eval: &Evaluation) -> String {
    // neutral evaluations carry no ranks to name
    if eval.tiebreaker.first().copied().unwrap_or(0) == 0 {
        return eval.category.name().to_string();
    }
    let rank = |i: usize| Rank::from_u8(eval.tiebreaker.get(i).copied().unwrap_or(14));
    let name = eval.category.name();
    match eval.category {
        Category::RoyalStraightFlush => name.to_string(),
        Category::StraightFlush | Category::Flush | Category::Straight | Category::HighCard => {
            format!("{}-high {}", rank(0).name(), name)
        }
        Category::FourOfAKind
        | Category::FullHouse
        | Category::ThreeOfAKind
        | Category::OnePair => format!("{} {}", rank(0).plural(), name),
        Category::TwoPair => format!("{} and {} {}", rank(0).plural(), rank(1).plural(), name),
    }
}
