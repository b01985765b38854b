// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluator lookup tables.
//!
//! The tables are generated from the poker hands rules instead of being
//! embedded as constants:
//!
//! - `flushes` maps the 13 bits rank mask of a 5 cards flush to its value,
//!   straight flushes included.
//! - `unique5` maps the rank mask of 5 distinct ranks to the value of the
//!   straight or high card hand.
//! - `products` is a perfect hash from the product of the rank primes of a
//!   hand with a repeated rank to its value.
//!
//! Hands in a category are ordered by the repeated ranks first and then by the
//! kickers, all in descending order, see [Tables::build].
use ahash::AHashSet;
use log::debug;
use std::{
    fmt,
    sync::{Arc, LazyLock},
    time::Instant,
};

use showdown_cards::PRIMES;

use crate::{HandRank, HandValue, TableError};

mod perfect_hash;
use perfect_hash::PerfectHash;

/// Number of 13 bits rank masks.
const RANK_MASKS: usize = 1 << 13;

/// Number of hands with at least a repeated rank.
const REPEATED_RANK_HANDS: usize = 4888;

/// Rank mask of the A-2-3-4-5 straight.
const WHEEL: usize = 0b1_0000_0000_1111;

/// Hands shapes with a repeated rank, each entry is the number of cards for
/// each rank in order of significance.
const SHAPES: [(HandRank, &[u32]); 5] = [
    (HandRank::FourOfAKind, &[4, 1]),
    (HandRank::FullHouse, &[3, 2]),
    (HandRank::ThreeOfAKind, &[3, 1, 1]),
    (HandRank::TwoPair, &[2, 2, 1]),
    (HandRank::OnePair, &[2, 1, 1, 1]),
];

static SHARED: LazyLock<Arc<Tables>> = LazyLock::new(|| match Tables::build() {
    Ok(tables) => Arc::new(tables),
    Err(e) => panic!("Cannot build evaluator tables: {e}"),
});

/// The evaluator lookup tables.
#[derive(Clone, PartialEq, Eq)]
pub struct Tables {
    flushes: Box<[u16]>,
    unique5: Box<[u16]>,
    products: PerfectHash,
}

impl Tables {
    /// Builds and verifies the lookup tables.
    ///
    /// The generation is deterministic, an error means the generator is broken.
    pub fn build() -> Result<Self, TableError> {
        let now = Instant::now();

        let (flushes, unique5) = distinct_ranks_tables()?;
        let repeated = repeated_rank_hands()?;
        let products = PerfectHash::build(&repeated)?;

        let tables = Self {
            flushes,
            unique5,
            products,
        };

        tables.verify(&repeated)?;

        debug!(
            "Built evaluator tables in {:.3}ms ({} product slots)",
            now.elapsed().as_secs_f64() * 1000.0,
            tables.products.values_len()
        );

        Ok(tables)
    }

    /// Returns the process wide tables, built on first use.
    ///
    /// Panics if the tables cannot be built.
    pub fn shared() -> Arc<Tables> {
        Arc::clone(&SHARED)
    }

    /// Value of a flush given its rank mask.
    #[inline]
    pub(crate) fn flush(&self, rank_mask: usize) -> u16 {
        self.flushes[rank_mask]
    }

    /// Value of five distinct ranks or 0 if the mask has less than 5 bits.
    #[inline]
    pub(crate) fn unique5(&self, rank_mask: usize) -> u16 {
        self.unique5[rank_mask]
    }

    /// Value of a hand with a repeated rank given its primes product.
    #[inline]
    pub(crate) fn product(&self, product: u32) -> u16 {
        self.products.get(product)
    }

    /// Checks every value is assigned once and every product resolves.
    fn verify(&self, repeated: &[(u32, u16)]) -> Result<(), TableError> {
        let mut seen = vec![false; HandValue::COUNT + 1];

        let values = self
            .flushes
            .iter()
            .chain(self.unique5.iter())
            .copied()
            .filter(|&v| v != 0)
            .chain(repeated.iter().map(|&(_, v)| v));

        for value in values {
            let idx = value as usize;
            if idx > HandValue::COUNT || seen[idx] {
                return Err(TableError::Inconsistent(format!(
                    "value {value} out of range or assigned twice"
                )));
            }

            seen[idx] = true;
        }

        if let Some(missing) = (1..=HandValue::COUNT).find(|&v| !seen[v]) {
            return Err(TableError::Inconsistent(format!(
                "value {missing} not assigned"
            )));
        }

        for &(product, value) in repeated {
            let found = self.products.get(product);
            if found != value {
                return Err(TableError::Inconsistent(format!(
                    "product {product} resolves to {found} instead of {value}"
                )));
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Tables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tables")
            .field("flushes", &self.flushes.len())
            .field("unique5", &self.unique5.len())
            .field("product_adjust", &self.products.adjust_len())
            .field("product_values", &self.products.values_len())
            .finish()
    }
}

/// Builds the flushes and unique5 tables.
fn distinct_ranks_tables() -> Result<(Box<[u16]>, Box<[u16]>), TableError> {
    let mut flushes = vec![0u16; RANK_MASKS];
    let mut unique5 = vec![0u16; RANK_MASKS];

    // Straights by descending high card, the wheel last.
    let mut straight_flush = HandRank::StraightFlush.best_value();
    let mut straight = HandRank::Straight.best_value();
    for mask in straight_masks() {
        flushes[mask] = straight_flush;
        unique5[mask] = straight;
        straight_flush += 1;
        straight += 1;
    }

    // All other 5 ranks sets in descending lexicographic order.
    let mut flush = HandRank::Flush.best_value();
    let mut high_card = HandRank::HighCard.best_value();
    for ranks in ranks_by_shape(&[1, 1, 1, 1, 1]) {
        let mask = ranks.iter().fold(0, |mask, &r| mask | (1 << r));
        if is_straight(mask) {
            continue;
        }

        flushes[mask] = flush;
        unique5[mask] = high_card;
        flush += 1;
        high_card += 1;
    }

    check_band(HandRank::StraightFlush, straight_flush)?;
    check_band(HandRank::Straight, straight)?;
    check_band(HandRank::Flush, flush)?;
    check_band(HandRank::HighCard, high_card)?;

    Ok((flushes.into_boxed_slice(), unique5.into_boxed_slice()))
}

/// Returns the `(product, value)` pairs for all hands with a repeated rank.
fn repeated_rank_hands() -> Result<Vec<(u32, u16)>, TableError> {
    let mut hands = Vec::with_capacity(REPEATED_RANK_HANDS);
    let mut products = AHashSet::with_capacity(REPEATED_RANK_HANDS);

    for (rank, shape) in SHAPES {
        let mut value = rank.best_value();
        for ranks in ranks_by_shape(shape) {
            let product = ranks
                .iter()
                .zip(shape)
                .map(|(&r, &count)| PRIMES[r].pow(count))
                .product::<u32>();

            if !products.insert(product) {
                return Err(TableError::Inconsistent(format!(
                    "duplicate product {product} for {ranks:?}"
                )));
            }

            hands.push((product, value));
            value += 1;
        }

        check_band(rank, value)?;
    }

    Ok(hands)
}

/// Checks that a category values end where the classifier expects.
fn check_band(rank: HandRank, next_value: u16) -> Result<(), TableError> {
    if next_value != rank.worst_value() + 1 {
        return Err(TableError::Inconsistent(format!(
            "{rank} values end at {} instead of {}",
            next_value - 1,
            rank.worst_value()
        )));
    }

    Ok(())
}

/// Straights rank masks from ace high to the wheel.
fn straight_masks() -> impl Iterator<Item = usize> {
    (4..=12)
        .rev()
        .map(|top| 0b1_1111 << (top - 4))
        .chain(std::iter::once(WHEEL))
}

fn is_straight(mask: usize) -> bool {
    straight_masks().any(|m| m == mask)
}

/// Returns all the rank assignments for a hand shape from the strongest to the
/// weakest.
///
/// Each position gets a rank distinct from the other positions, positions with
/// the same number of cards as the previous one take a lower rank so that
/// equivalent hands are generated once (two pairs are high pair then low pair,
/// kickers are in descending order).
fn ranks_by_shape(shape: &[u32]) -> Vec<Vec<usize>> {
    fn assign(shape: &[u32], ranks: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        let pos = ranks.len();
        if pos == shape.len() {
            out.push(ranks.clone());
            return;
        }

        let top = if pos > 0 && shape[pos] == shape[pos - 1] {
            ranks[pos - 1]
        } else {
            PRIMES.len()
        };

        for rank in (0..top).rev() {
            if !ranks.contains(&rank) {
                ranks.push(rank);
                assign(shape, ranks, out);
                ranks.pop();
            }
        }
    }

    let mut out = Vec::new();
    assign(shape, &mut Vec::with_capacity(shape.len()), &mut out);
    out
}
