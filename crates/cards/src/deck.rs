// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A deck of cards.
use rand::prelude::*;

use crate::{Card, CardError, Rank, Suit, subsets};

#[cfg(feature = "parallel")]
mod parallel;

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the cards left in the deck.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Result<Card, CardError> {
        self.cards.pop().ok_or(CardError::EmptyDeck)
    }

    /// Deals `n` cards from the deck, fails if there are less than `n` cards.
    pub fn deal_many(&mut self, n: usize) -> Result<Vec<Card>, CardError> {
        if n > self.cards.len() {
            return Err(CardError::EmptyDeck);
        }

        let at = self.cards.len() - n;
        let mut cards = self.cards.split_off(at);
        cards.reverse();
        Ok(cards)
    }

    /// Discards the top card.
    pub fn burn(&mut self) -> Result<(), CardError> {
        self.deal().map(|_| ())
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// The cards left in the deck, the last one is the next to be dealt.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        let n = self.cards.len();
        let mut hand = [Card::new(Rank::Ace, Suit::Hearts); subsets::MAX_K];
        subsets::for_each_ksubset(n, k, 0, subsets::nck(n, k), |positions| {
            for (c, &pos) in hand.iter_mut().zip(positions) {
                *c = self.cards[pos];
            }

            f(&hand[..k]);
        });
    }

    /// Calls the `f` closure with `samples` random k-cards hands.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn sample<F>(&self, samples: usize, k: usize, f: F)
    where
        F: FnMut(&[Card]),
    {
        self.sample_with(&mut rand::rng(), samples, k, f);
    }

    /// Calls the `f` closure with `samples` random k-cards hands drawn with
    /// the given random generator.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn sample_with<R, F>(&self, rng: &mut R, samples: usize, k: usize, mut f: F)
    where
        R: Rng + ?Sized,
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        let mut hand = Vec::with_capacity(k);
        for _ in 0..samples {
            hand.clear();
            hand.extend(self.cards.choose_multiple(rng, k).copied());
            f(&hand);
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
