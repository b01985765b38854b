// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hand iteration.
use rand::prelude::*;
use std::thread;

use super::Deck;
use crate::{Card, Rank, Suit, subsets};

impl Deck {
    /// Parallel for each, calls the `f` closure for each k-cards hand.
    ///
    /// The closure takes an usize that is the task identifier (0..num_task)
    /// and a slice of cards of length k, each task goes through a contiguous
    /// range of hands.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn par_for_each<F>(&self, num_tasks: usize, k: usize, f: F)
    where
        F: Fn(usize, &[Card]) + Send + Sync,
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");
        assert!(num_tasks > 0);

        let n = self.cards.len();
        let num_hands = subsets::nck(n, k);
        let hands_per_task = num_hands.div_ceil(num_tasks);

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let start = task_id * hands_per_task;
                let f = &f;
                s.spawn(move || {
                    let mut hand = [Card::new(Rank::Ace, Suit::Diamonds); subsets::MAX_K];
                    subsets::for_each_ksubset(n, k, start, hands_per_task, |positions| {
                        for (c, &pos) in hand.iter_mut().zip(positions) {
                            *c = self.cards[pos];
                        }

                        f(task_id, &hand[..k]);
                    });
                });
            }
        });
    }

    /// Calls the given closure from `num_tasks` parallel tasks generating
    /// `samples_per_task` samples of size k.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn par_sample<F>(&self, num_tasks: usize, samples_per_task: usize, k: usize, f: F)
    where
        F: Fn(usize, &[Card]) + Send + Sync,
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");
        assert!(num_tasks > 0);

        if k > self.cards.len() {
            return;
        }

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let f = &f;
                s.spawn(move || {
                    let mut hand = Vec::with_capacity(k);
                    let mut rng = SmallRng::from_os_rng();

                    for _ in 0..samples_per_task {
                        hand.clear();
                        hand.extend(self.cards.choose_multiple(&mut rng, k).copied());
                        f(task_id, &hand);
                    }
                });
            }
        });
    }
}
