// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! This evaluator follows the [Cactus Kev's][kevlink] poker evaluator to
//! evaluate 5 cards hands with three table lookups, and evaluates 6 and 7 cards
//! hands by taking the best of all the 5 cards subsets.
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, sync::Arc};

use showdown_cards::format_hand;

use crate::{Card, EvalError, Tables};

/// Creates the table of the 5 positions subsets of N positions.
const fn five_card_subsets<const N: usize, const M: usize>() -> [[usize; 5]; M] {
    let mut out = [[0; 5]; M];
    let mut idx = 0;

    let mut a = 0;
    while a < N {
        let mut b = a + 1;
        while b < N {
            let mut c = b + 1;
            while c < N {
                let mut d = c + 1;
                while d < N {
                    let mut e = d + 1;
                    while e < N {
                        out[idx] = [a, b, c, d, e];
                        idx += 1;
                        e += 1;
                    }
                    d += 1;
                }
                c += 1;
            }
            b += 1;
        }
        a += 1;
    }

    assert!(idx == M, "M must be N choose 5");
    out
}

const SUBSETS5: [[usize; 5]; 1] = five_card_subsets::<5, 1>();
const SUBSETS6: [[usize; 5]; 6] = five_card_subsets::<6, 6>();
const SUBSETS7: [[usize; 5]; 21] = five_card_subsets::<7, 21>();

/// A Poker hand evaluator.
///
/// The evaluator holds a shared reference to the read-only lookup tables and
/// can be cloned and used from multiple threads.
///
/// ```
/// # use showdown_eval::*;
/// let eval = Evaluator::default();
/// let cards = ["Ts", "9s", "7s", "Js", "Ad", "3c", "8s"].map(|c| c.parse().unwrap());
/// assert_eq!(eval.eval7(&cards).rank(), HandRank::StraightFlush);
/// ```
#[derive(Debug, Clone)]
pub struct Evaluator {
    tables: Arc<Tables>,
}

impl Evaluator {
    /// Creates an evaluator that uses the given tables.
    pub fn new(tables: Arc<Tables>) -> Self {
        Self { tables }
    }

    /// Evaluates 5 distinct cards.
    ///
    /// Panics if the cards are not distinct, use [Evaluator::eval] to get an
    /// error instead.
    #[inline]
    pub fn eval5(&self, cards: &[Card; 5]) -> HandValue {
        assert_distinct(cards);
        self.lookup5(cards)
    }

    /// Evaluates 7 distinct cards, returns the value of the best 5 cards hand.
    ///
    /// Panics if the cards are not distinct.
    pub fn eval7(&self, cards: &[Card; 7]) -> HandValue {
        assert_distinct(cards);
        SUBSETS7
            .iter()
            .map(|s| self.lookup5(&s.map(|i| cards[i])))
            .fold(HandValue::WORST, Ord::max)
    }

    /// Evaluates a hand of 5, 6, or 7 cards.
    ///
    /// Returns an error if the hand size is wrong or has duplicate cards.
    pub fn eval(&self, cards: &[Card]) -> Result<HandValue, EvalError> {
        let subsets = check_hand(cards)?;
        Ok(self.best_subset(cards, subsets).0)
    }

    /// Evaluates a hand of 5, 6, or 7 distinct cards, for hands that come
    /// from a deck and are known to be valid.
    ///
    /// Panics if the hand size is wrong or has duplicate cards.
    pub fn eval_hand(&self, cards: &[Card]) -> HandValue {
        match check_hand(cards) {
            Ok(subsets) => self.best_subset(cards, subsets).0,
            Err(e) => panic!("{e}"),
        }
    }

    /// Evaluates a hand of 5, 6, or 7 cards and returns its best 5 cards.
    pub fn best_hand(&self, cards: &[Card]) -> Result<BestHand, EvalError> {
        let subsets = check_hand(cards)?;
        let (value, subset) = self.best_subset(cards, subsets);
        let mut cards = subset.map(|i| cards[i]);
        cards.sort_by(|c1, c2| c2.rank().cmp(&c1.rank()));
        Ok(BestHand { value, cards })
    }

    fn best_subset(&self, cards: &[Card], subsets: &[[usize; 5]]) -> (HandValue, [usize; 5]) {
        let mut best = (HandValue::WORST, subsets[0]);
        for subset in subsets {
            let value = self.lookup5(&subset.map(|i| cards[i]));
            if value > best.0 {
                best = (value, *subset);
            }
        }

        best
    }

    /// Table lookups for 5 cards, the cards must be distinct.
    #[inline]
    fn lookup5(&self, cards: &[Card; 5]) -> HandValue {
        let [c1, c2, c3, c4, c5] = cards.map(|c| c.id());
        let rank_mask = ((c1 | c2 | c3 | c4 | c5) >> 16) as usize;

        let value = if c1 & c2 & c3 & c4 & c5 & 0xf000 != 0 {
            self.tables.flush(rank_mask)
        } else {
            match self.tables.unique5(rank_mask) {
                0 => {
                    let product =
                        (c1 & 0xff) * (c2 & 0xff) * (c3 & 0xff) * (c4 & 0xff) * (c5 & 0xff);
                    self.tables.product(product)
                }
                value => value,
            }
        };

        debug_assert!((1..=HandValue::COUNT as u16).contains(&value));
        HandValue(value)
    }
}

/// Panics if the same card appears more than once.
#[inline]
fn assert_distinct(cards: &[Card]) {
    let mask = cards.iter().fold(0u64, |mask, c| mask | 1 << c.index());
    assert!(
        mask.count_ones() as usize == cards.len(),
        "duplicate cards in {}",
        format_hand(cards)
    );
}

impl Default for Evaluator {
    /// An evaluator that uses the process wide tables.
    fn default() -> Self {
        Self::new(Tables::shared())
    }
}

/// Checks the hand size and that all the cards are distinct.
fn check_hand(cards: &[Card]) -> Result<&'static [[usize; 5]], EvalError> {
    let subsets: &'static [[usize; 5]] = match cards.len() {
        5 => &SUBSETS5,
        6 => &SUBSETS6,
        7 => &SUBSETS7,
        n => return Err(EvalError::InvalidHandSize(n)),
    };

    let mut seen = 0u64;
    for card in cards {
        let bit = 1u64 << card.index();
        if seen & bit != 0 {
            return Err(EvalError::DuplicateCard(*card));
        }

        seen |= bit;
    }

    Ok(subsets)
}

/// The value of a 5 cards hand.
///
/// Values go from 1 for a royal flush to 7462 for 7-5-4-3-2 high card, hands
/// with the same category and kickers have the same value. Values are ordered
/// by hand strength so that the best hand compares greater:
///
/// ```
/// # use showdown_eval::*;
/// let royal = HandValue::try_from(1u16).unwrap();
/// let worst = HandValue::try_from(7462u16).unwrap();
/// assert!(royal > worst);
/// assert_eq!(royal.value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct HandValue(u16);

impl HandValue {
    /// Number of distinct hand values.
    pub const COUNT: usize = 7462;

    /// The royal flush.
    pub const BEST: HandValue = HandValue(1);

    /// The 7-5-4-3-2 high card.
    pub const WORST: HandValue = HandValue(Self::COUNT as u16);

    /// Evaluates a hand of 5, 6, or 7 cards with the default evaluator.
    pub fn eval(cards: &[Card]) -> Result<Self, EvalError> {
        Evaluator::default().eval(cards)
    }

    /// The numeric value, lower is better.
    pub fn value(&self) -> u16 {
        self.0
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        HandRank::from_value(self.0)
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cmp(&self.0)
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl TryFrom<u16> for HandValue {
    type Error = EvalError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        if (1..=Self::COUNT as u16).contains(&value) {
            Ok(Self(value))
        } else {
            Err(EvalError::InvalidHandValue(value))
        }
    }
}

impl From<HandValue> for u16 {
    fn from(value: HandValue) -> Self {
        value.0
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.rank(), self.0)
    }
}

/// Compares two hand values, the stronger hand is greater.
pub fn compare(a: HandValue, b: HandValue) -> Ordering {
    a.cmp(&b)
}

/// A hand category, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandRank {
    /// All categories from the weakest to the strongest.
    pub const ALL: [HandRank; 9] = [
        HandRank::HighCard,
        HandRank::OnePair,
        HandRank::TwoPair,
        HandRank::ThreeOfAKind,
        HandRank::Straight,
        HandRank::Flush,
        HandRank::FullHouse,
        HandRank::FourOfAKind,
        HandRank::StraightFlush,
    ];

    /// The category of a hand value.
    pub fn from_value(value: u16) -> HandRank {
        if value > 6185 {
            HandRank::HighCard
        } else if value > 3325 {
            HandRank::OnePair
        } else if value > 2467 {
            HandRank::TwoPair
        } else if value > 1609 {
            HandRank::ThreeOfAKind
        } else if value > 1599 {
            HandRank::Straight
        } else if value > 322 {
            HandRank::Flush
        } else if value > 166 {
            HandRank::FullHouse
        } else if value > 10 {
            HandRank::FourOfAKind
        } else {
            HandRank::StraightFlush
        }
    }

    /// The value of the best hand in this category.
    pub const fn best_value(self) -> u16 {
        match self {
            HandRank::StraightFlush => 1,
            HandRank::FourOfAKind => 11,
            HandRank::FullHouse => 167,
            HandRank::Flush => 323,
            HandRank::Straight => 1600,
            HandRank::ThreeOfAKind => 1610,
            HandRank::TwoPair => 2468,
            HandRank::OnePair => 3326,
            HandRank::HighCard => 6186,
        }
    }

    /// The value of the worst hand in this category.
    pub const fn worst_value(self) -> u16 {
        match self {
            HandRank::StraightFlush => 10,
            HandRank::FourOfAKind => 166,
            HandRank::FullHouse => 322,
            HandRank::Flush => 1599,
            HandRank::Straight => 1609,
            HandRank::ThreeOfAKind => 2467,
            HandRank::TwoPair => 3325,
            HandRank::OnePair => 6185,
            HandRank::HighCard => 7462,
        }
    }

    /// Number of distinct values in this category.
    pub const fn classes(self) -> usize {
        (self.worst_value() - self.best_value()) as usize + 1
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{name}")
    }
}

/// The best 5 cards of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestHand {
    /// The hand value.
    pub value: HandValue,
    /// The cards sorted by descending rank.
    pub cards: [Card; 5],
}

impl fmt::Display for BestHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value.rank(), format_hand(&self.cards))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Deck;
    use ahash::{AHashSet, HashSet};
    use rand::prelude::*;

    fn cards<const N: usize>(s: [&str; N]) -> [Card; N] {
        s.map(|c| c.parse().unwrap())
    }

    fn eval7(s: [&str; 7]) -> HandValue {
        Evaluator::default().eval7(&cards(s))
    }

    #[test]
    fn royal_flush() {
        let v = eval7(["Td", "Kd", "7s", "Jd", "Ad", "3c", "Qd"]);
        assert_eq!(v, HandValue::BEST);
        assert_eq!(v.rank(), HandRank::StraightFlush);
    }

    #[test]
    fn straight_flush() {
        let v = eval7(["Ts", "9s", "7s", "Js", "Ad", "3c", "8s"]);
        assert_eq!(v.rank(), HandRank::StraightFlush);
        // Jack high is the fourth best straight flush.
        assert_eq!(v.value(), 4);
    }

    #[test]
    fn steel_wheel() {
        // Put an off-suit ace first to try and trick the evaluator.
        let v1 = eval7(["Ad", "Ac", "2c", "4c", "Kd", "3c", "5c"]);
        let v2 = eval7(["Ac", "Ad", "2c", "4c", "Kd", "3c", "5c"]);
        let v3 = eval7(["2c", "4c", "Kd", "3c", "5c", "Ad", "Ac"]);
        assert_eq!(v1.rank(), HandRank::StraightFlush);
        assert_eq!(v1.value(), 10);
        assert_eq!(v1, v2);
        assert_eq!(v1, v3);
    }

    #[test]
    fn wheel_is_the_lowest_straight() {
        let eval = Evaluator::default();
        let wheel = eval.eval5(&cards(["Ah", "2c", "3d", "4s", "5h"]));
        let six_high = eval.eval5(&cards(["6h", "2c", "3d", "4s", "5h"]));
        assert_eq!(wheel.rank(), HandRank::Straight);
        assert_eq!(wheel.value(), HandRank::Straight.worst_value());
        assert!(six_high > wheel);
    }

    #[test]
    fn four_of_a_kind() {
        let v = eval7(["Ts", "Tc", "8h", "7s", "Td", "Kd", "Th"]);
        assert_eq!(v.rank(), HandRank::FourOfAKind);
    }

    #[test]
    fn full_house() {
        let tens_full = eval7(["Ts", "Tc", "8h", "7s", "Td", "Kd", "Kh"]);
        let kings_full = eval7(["Ts", "Tc", "8h", "Ks", "Td", "Kd", "Kh"]);
        assert_eq!(tens_full.rank(), HandRank::FullHouse);
        assert_eq!(kings_full.rank(), HandRank::FullHouse);
        assert!(kings_full > tens_full);
        assert!(kings_full.value() < tens_full.value());
    }

    #[test]
    fn flush() {
        let v = eval7(["Ts", "9s", "8h", "Ks", "7s", "2s", "Kh"]);
        assert_eq!(v.rank(), HandRank::Flush);
    }

    #[test]
    fn straight() {
        let v = eval7(["Ts", "9s", "8h", "Ks", "7s", "3d", "Jh"]);
        assert_eq!(v.rank(), HandRank::Straight);
    }

    #[test]
    fn three_of_a_kind() {
        let v = eval7(["Ts", "9s", "8h", "9d", "9c", "3d", "Jh"]);
        assert_eq!(v.rank(), HandRank::ThreeOfAKind);
    }

    #[test]
    fn two_pair() {
        let v = eval7(["Ts", "Td", "8h", "Ks", "7s", "3d", "7h"]);
        assert_eq!(v.rank(), HandRank::TwoPair);
    }

    #[test]
    fn one_pair() {
        let v = eval7(["Ts", "9s", "8h", "9c", "4c", "3d", "Jh"]);
        assert_eq!(v.rank(), HandRank::OnePair);
    }

    #[test]
    fn high_card() {
        let v = eval7(["Ts", "9s", "8h", "Ks", "4s", "3d", "Jh"]);
        assert_eq!(v.rank(), HandRank::HighCard);
    }

    #[test]
    fn worst_hand() {
        let eval = Evaluator::default();
        let v = eval.eval5(&cards(["7h", "5c", "4d", "3s", "2h"]));
        assert_eq!(v, HandValue::WORST);
    }

    #[test]
    fn kickers_order() {
        let eval = Evaluator::default();

        let aces_king = eval.eval5(&cards(["Ah", "Ac", "Kd", "4s", "2h"]));
        let aces_queen = eval.eval5(&cards(["Ad", "As", "Qd", "Js", "Th"]));
        assert!(aces_king > aces_queen);

        let high_two_pair = eval.eval5(&cards(["Ah", "Ac", "3d", "3s", "2h"]));
        let low_two_pair = eval.eval5(&cards(["Kh", "Kc", "Qd", "Qs", "Ah"]));
        assert!(high_two_pair > low_two_pair);

        // Same strength with different suits.
        let p1 = eval.eval5(&cards(["9h", "9c", "Kd", "7s", "2h"]));
        let p2 = eval.eval5(&cards(["9d", "9s", "Kh", "7c", "2d"]));
        assert_eq!(p1, p2);
        assert_eq!(compare(p1, p2), Ordering::Equal);
    }

    #[test]
    fn all_five_cards_hands() {
        let eval = Evaluator::default();
        let mut values = AHashSet::default();
        let mut hands = [0usize; 9];

        Deck::default().for_each(5, |hand| {
            let hand = [hand[0], hand[1], hand[2], hand[3], hand[4]];
            let value = eval.eval5(&hand);
            assert!((1..=7462).contains(&value.value()));
            hands[value.rank() as usize] += 1;
            values.insert(value);
        });

        assert_eq!(values.len(), HandValue::COUNT);

        let mut classes = [0usize; 9];
        for value in &values {
            classes[value.rank() as usize] += 1;
        }

        assert_eq!(
            classes,
            [1277, 2860, 858, 858, 10, 1277, 156, 156, 10],
            "distinct values per category"
        );

        assert_eq!(
            hands,
            [1302540, 1098240, 123552, 54912, 10200, 5108, 3744, 624, 40],
            "hands per category"
        );

        for rank in HandRank::ALL {
            assert_eq!(classes[rank as usize], rank.classes());
        }
    }

    #[test]
    fn eval7_ignores_order() {
        let eval = Evaluator::default();
        let mut rng = StdRng::seed_from_u64(7);

        Deck::default().sample_with(&mut StdRng::seed_from_u64(17), 200, 7, |hand| {
            let mut hand = [hand[0], hand[1], hand[2], hand[3], hand[4], hand[5], hand[6]];
            let value = eval.eval7(&hand);

            for _ in 0..10 {
                hand.shuffle(&mut rng);
                assert_eq!(eval.eval7(&hand), value);
            }

            hand.reverse();
            assert_eq!(eval.eval7(&hand), value);
        });
    }

    #[test]
    fn checked_eval_matches_eval7() {
        let eval = Evaluator::default();
        let mut rng = StdRng::seed_from_u64(23);

        Deck::default().sample_with(&mut rng, 500, 7, |hand| {
            let value = eval.eval(hand).unwrap();
            assert_eq!(eval.eval_hand(hand), value);
            assert_eq!(eval.eval_hand(&hand[..6]), eval.eval(&hand[..6]).unwrap());
            let array = [hand[0], hand[1], hand[2], hand[3], hand[4], hand[5], hand[6]];
            assert_eq!(value, eval.eval7(&array));

            let best = eval.best_hand(hand).unwrap();
            assert_eq!(best.value, value);
            assert_eq!(eval.eval5(&best.cards), value);
            assert!(best.cards.iter().all(|c| hand.contains(c)));

            // Six cards are never better than seven and never worse than five.
            let six = eval.eval(&hand[..6]).unwrap();
            let five = eval.eval(&hand[..5]).unwrap();
            assert!(six <= value);
            assert!(five <= six);
        });
    }

    #[test]
    fn invalid_hands() {
        let eval = Evaluator::default();
        let hand = cards(["As", "Ks", "Qs", "Js", "Ts", "9s", "8s", "7s"]);

        assert_eq!(eval.eval(&hand[..4]), Err(EvalError::InvalidHandSize(4)));
        assert_eq!(eval.eval(&hand), Err(EvalError::InvalidHandSize(8)));
        assert_eq!(eval.eval(&[]), Err(EvalError::InvalidHandSize(0)));

        let dup = cards(["As", "Ks", "Qs", "Js", "As"]);
        assert_eq!(eval.eval(&dup), Err(EvalError::DuplicateCard(dup[0])));
        assert!(eval.best_hand(&dup).is_err());
    }

    #[test]
    #[should_panic(expected = "duplicate cards")]
    fn eval5_duplicate_cards() {
        let hand = cards(["As", "As", "Ks", "Qs", "Js"]);
        Evaluator::default().eval5(&hand);
    }

    #[test]
    #[should_panic(expected = "duplicate cards")]
    fn eval7_duplicate_cards() {
        eval7(["As", "As", "Ks", "Qs", "Js", "2d", "3h"]);
    }

    #[test]
    #[should_panic(expected = "duplicate card")]
    fn eval_hand_duplicate_cards() {
        let hand = cards(["As", "Kd", "Ks", "Qs", "Js", "Kd"]);
        Evaluator::default().eval_hand(&hand);
    }

    #[test]
    #[should_panic(expected = "invalid hand size")]
    fn eval_hand_size() {
        let hand = cards(["As", "Kd", "Ks", "Qs"]);
        Evaluator::default().eval_hand(&hand);
    }

    #[test]
    fn best_hand_cards() {
        let eval = Evaluator::default();
        let hand = cards(["Ts", "Tc", "8h", "Ks", "Td", "Kd", "Kh"]);
        let best = eval.best_hand(&hand).unwrap();

        assert_eq!(best.value.rank(), HandRank::FullHouse);
        assert!(best.cards[..3].iter().all(|c| c.rank() == showdown_cards::Rank::King));
        assert!(best.cards[3..].iter().all(|c| c.rank() == showdown_cards::Rank::Ten));
        assert!(best.to_string().starts_with("Full House (K"));
    }

    #[test]
    fn category_thresholds() {
        for rank in HandRank::ALL {
            assert_eq!(HandRank::from_value(rank.best_value()), rank);
            assert_eq!(HandRank::from_value(rank.worst_value()), rank);
        }

        let total = HandRank::ALL.iter().map(|r| r.classes()).sum::<usize>();
        assert_eq!(total, HandValue::COUNT);

        // A stronger value never has a weaker category.
        for value in 1..HandValue::COUNT as u16 {
            assert!(HandRank::from_value(value) >= HandRank::from_value(value + 1));
        }
    }

    #[test]
    fn compare_is_a_total_order() {
        let mut rng = StdRng::seed_from_u64(11);
        let values = (0..200)
            .map(|_| HandValue::try_from(rng.random_range(1..=7462u16)).unwrap())
            .collect::<Vec<_>>();

        for &a in &values {
            assert_eq!(compare(a, a), Ordering::Equal);

            for &b in &values {
                assert_eq!(compare(a, b), compare(b, a).reverse());
                assert_eq!(compare(a, b), b.value().cmp(&a.value()));

                if a.rank() > b.rank() {
                    assert_eq!(compare(a, b), Ordering::Greater);
                }

                for &c in values.iter().take(20) {
                    if a > b && b > c {
                        assert!(a > c);
                    }
                }
            }
        }
    }

    #[test]
    fn hand_value_range() {
        assert_eq!(HandValue::try_from(0u16), Err(EvalError::InvalidHandValue(0)));
        assert_eq!(
            HandValue::try_from(7463u16),
            Err(EvalError::InvalidHandValue(7463))
        );
        assert_eq!(HandValue::try_from(7462u16), Ok(HandValue::WORST));
        assert_eq!(u16::from(HandValue::BEST), 1);
        assert_eq!(HandValue::BEST.to_string(), "Straight Flush (1)");
    }

    #[test]
    fn serde_hand_value() {
        let value = eval7(["Ts", "Tc", "8h", "7s", "Td", "Kd", "Kh"]);
        let buf = bincode::serialize(&value).unwrap();
        assert_eq!(buf, bincode::serialize(&value.value()).unwrap());
        assert_eq!(bincode::deserialize::<HandValue>(&buf).unwrap(), value);

        for invalid in [0u16, 7463] {
            let buf = bincode::serialize(&invalid).unwrap();
            assert!(bincode::deserialize::<HandValue>(&buf).is_err());
        }

        let buf = bincode::serialize(&HandRank::FullHouse).unwrap();
        assert_eq!(
            bincode::deserialize::<HandRank>(&buf).unwrap(),
            HandRank::FullHouse
        );
    }

    #[test]
    fn shared_evaluator() {
        let hand = cards(["Ts", "Tc", "8h", "7s", "Td", "Kd", "Th"]);
        let value = HandValue::eval(&hand).unwrap();
        assert_eq!(value, Evaluator::new(Tables::shared()).eval7(&hand));

        let tables = Arc::new(Tables::build().unwrap());
        assert_eq!(Evaluator::new(tables).eval7(&hand), value);
    }

    #[test]
    fn subsets_tables() {
        let unique = SUBSETS7.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), 21);
        assert!(SUBSETS7.iter().all(|s| s.windows(2).all(|w| w[0] < w[1])));
        assert_eq!(SUBSETS6[5], [1, 2, 3, 4, 5]);
        assert_eq!(SUBSETS5[0], [0, 1, 2, 3, 4]);
    }

    // Goes through all the 133M hands.
    #[test]
    #[ignore]
    fn all_seven_cards_hands() {
        let eval = Evaluator::default();
        let mut hands = [0usize; 9];

        Deck::default().for_each(7, |hand| {
            let hand = [hand[0], hand[1], hand[2], hand[3], hand[4], hand[5], hand[6]];
            hands[eval.eval7(&hand).rank() as usize] += 1;
        });

        assert_eq!(
            hands,
            [
                23294460, 58627800, 31433400, 6461620, 6180020, 4047644, 3473184, 224848, 41584
            ]
        );
    }
}
