// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! CLI commands.
use anyhow::{Context, Result, bail};
use log::info;
use rand::prelude::*;
use std::{
    cmp::Ordering,
    sync::atomic::{self, AtomicU64},
    time::Instant,
};

use showdown_eval::{BestHand, Card, Deck, Evaluator, HandRank, format_hand};

/// Parses cards separated by spaces or commas, e.g. "Ts 9s,7s".
pub fn parse_cards(s: &str) -> Result<Vec<Card>> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<Card>()
                .with_context(|| format!("Cannot parse card '{token}'"))
        })
        .collect()
}

/// Parses and evaluates a hand.
fn best_hand(evaluator: &Evaluator, hand: &str) -> Result<BestHand> {
    let cards = parse_cards(hand)?;
    evaluator
        .best_hand(&cards)
        .with_context(|| format!("Cannot evaluate {}", format_hand(&cards)))
}

/// Prints the best hand and value of a hand.
pub fn eval(evaluator: &Evaluator, hand: &str) -> Result<()> {
    let best = best_hand(evaluator, hand)?;
    println!("{best} value={}", best.value.value());
    Ok(())
}

/// Prints which of the two hands wins.
pub fn compare(evaluator: &Evaluator, hand1: &str, hand2: &str) -> Result<()> {
    let best1 = best_hand(evaluator, hand1)?;
    let best2 = best_hand(evaluator, hand2)?;

    println!("Hand 1: {best1} value={}", best1.value.value());
    println!("Hand 2: {best2} value={}", best2.value.value());

    match showdown_eval::compare(best1.value, best2.value) {
        Ordering::Greater => println!("Hand 1 wins"),
        Ordering::Less => println!("Hand 2 wins"),
        Ordering::Equal => println!("Split pot"),
    }

    Ok(())
}

/// Deals hole cards to each player and a board, then shows the winners.
pub fn deal(evaluator: &Evaluator, players: usize, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut deck = Deck::new_and_shuffled(&mut rng);

    let holes = (0..players)
        .map(|_| deck.deal_many(2))
        .collect::<Result<Vec<_>, _>>()?;

    // Flop, turn, and river each with a burned card.
    let mut board = Vec::with_capacity(5);
    for street in [3, 1, 1] {
        deck.burn()?;
        board.extend(deck.deal_many(street)?);
    }

    let hands = holes
        .iter()
        .map(|hole| {
            let mut cards = hole.clone();
            cards.extend_from_slice(&board);
            evaluator.best_hand(&cards)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let Some(winner) = hands.iter().map(|h| h.value).max() else {
        bail!("No players");
    };

    println!("Board: {}", format_hand(&board));
    for (idx, (hole, best)) in holes.iter().zip(&hands).enumerate() {
        let mark = if best.value == winner { '*' } else { ' ' };
        println!("{mark} Player {}: {} {best}", idx + 1, format_hand(hole));
    }

    let winners = hands.iter().filter(|h| h.value == winner).count();
    if winners > 1 {
        println!("Split pot between {winners} players");
    }

    Ok(())
}

/// Evaluates all k-cards hands and prints the number of hands per category.
pub fn stats(evaluator: &Evaluator, k: usize, tasks: usize) -> Result<()> {
    if !(5..=7).contains(&k) {
        bail!("Hands must have 5 to 7 cards, got {k}");
    }

    if tasks == 0 {
        bail!("At least one task is required");
    }

    // Per task counters to avoid contention.
    let counters = (0..tasks)
        .map(|_| HandRank::ALL.map(|_| AtomicU64::new(0)))
        .collect::<Vec<_>>();

    let count = |task_id: usize, hand: &[Card]| {
        let rank = evaluator.eval_hand(hand).rank();
        counters[task_id][rank as usize].fetch_add(1, atomic::Ordering::Relaxed);
    };

    let now = Instant::now();

    let deck = Deck::default();
    if tasks > 1 {
        deck.par_for_each(tasks, k, count);
    } else {
        deck.for_each(k, |hand| count(0, hand));
    }

    let elapsed = now.elapsed().as_secs_f64();

    let totals = HandRank::ALL.map(|rank| {
        counters
            .iter()
            .map(|c| c[rank as usize].load(atomic::Ordering::Relaxed))
            .sum::<u64>()
    });

    let total = totals.iter().sum::<u64>();
    info!("Evaluated {total} hands in {elapsed:.3}s with {tasks} tasks");

    for rank in HandRank::ALL.into_iter().rev() {
        let label = format!("{rank}:");
        println!("{label:<17}{:>10}", totals[rank as usize]);
    }

    println!("{:<17}{total:>10}", "Total:");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cards_separators() {
        let cards = parse_cards("Ts 9s,7s  Js, Ad").unwrap();
        assert_eq!(format_hand(&cards), "(Ts,9s,7s,Js,Ad)");

        assert!(parse_cards("Ts 9x").is_err());
        assert!(parse_cards("").unwrap().is_empty());
    }

    #[test]
    fn commands_run() {
        let evaluator = Evaluator::default();
        eval(&evaluator, "Ts 9s 7s Js Ad 3c 8s").unwrap();
        compare(&evaluator, "Ts Tc 8h 7s Td Kd Kh", "Ts Tc 8h Ks Td Kd Kh").unwrap();
        deal(&evaluator, 6, Some(42)).unwrap();

        assert!(eval(&evaluator, "Ts 9s 7s").is_err());
        assert!(eval(&evaluator, "Ts 9s 7s Ts 8s").is_err());
        assert!(stats(&evaluator, 4, 1).is_err());
        assert!(stats(&evaluator, 5, 0).is_err());
    }
}
