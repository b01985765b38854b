// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI, evaluates and compares Poker hands.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand, value_parser};
use log::error;

use showdown_eval::Evaluator;

pub mod commands;

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    /// Enables debug logging.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluates a hand of 5 to 7 cards, e.g. `eval Ts 9s 7s Js Ad 3c 8s`.
    Eval {
        /// The hand cards.
        #[clap(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Compares two hands of 5 to 7 cards each.
    Compare {
        /// The first hand, e.g. "Ts Tc 8h 7s Td Kd Kh".
        hand1: String,
        /// The second hand.
        hand2: String,
    },
    /// Deals a Texas Hold'em hand and shows the winners.
    Deal {
        /// Number of players.
        #[clap(long, short, default_value_t = 2, value_parser = value_parser!(u8).range(2..=10))]
        players: u8,
        /// Seed for a reproducible shuffle.
        #[clap(long, short)]
        seed: Option<u64>,
    },
    /// Evaluates all hands of a given size and counts them by category.
    Stats {
        /// Number of cards per hand.
        #[clap(long, short, default_value_t = 5, value_parser = value_parser!(u8).range(5..=7))]
        cards: u8,
        /// Number of parallel tasks.
        #[clap(long, short, default_value_t = 1, value_parser = value_parser!(u16).range(1..=64))]
        tasks: u16,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    if let Err(e) = run(cli.command) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    let eval = Evaluator::default();

    match command {
        Command::Eval { cards } => commands::eval(&eval, &cards.join(" ")),
        Command::Compare { hand1, hand2 } => commands::compare(&eval, &hand1, &hand2),
        Command::Deal { players, seed } => commands::deal(&eval, players as usize, seed),
        Command::Stats { cards, tasks } => commands::stats(&eval, cards as usize, tasks as usize),
    }
}
