// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. This evaluator follows
//! [Cactus Kev's][kevlink] design, with its lookup tables generated and
//! verified at startup rather than embedded as constants.
//!
//! To use the evaluator create a hand and use [HandValue] to evaluate the hand
//! and get its rank:
//!
//! ```
//! # use showdown_eval::*;
//! // 2c, 3c, .., Jc
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! let v1 = HandValue::eval(&cards[0..5]).unwrap();
//! let v2 = HandValue::eval(&cards[5..]).unwrap();
//! assert!(v2 > v1);
//! assert_eq!(v2.rank(), HandRank::StraightFlush);
//! ```
//!
//! An [Evaluator] can also be created with explicitly built [Tables] and shared
//! between threads:
//!
//! ```
//! # use std::sync::Arc;
//! # use showdown_eval::*;
//! let eval = Evaluator::new(Arc::new(Tables::build().unwrap()));
//! let hand = ["Ts", "Tc", "8h", "7s", "Td", "Kd", "Kh"].map(|c| c.parse().unwrap());
//! assert_eq!(eval.eval7(&hand).rank(), HandRank::FullHouse);
//! ```
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{BestHand, Evaluator, HandRank, HandValue, compare};

mod error;
pub use error::{EvalError, TableError};

pub mod tables;
pub use tables::Tables;

// Reexport cards types.
pub use showdown_cards::{Card, CardError, Deck, Rank, Suit, format_hand};
