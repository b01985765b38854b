// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluator errors.
use thiserror::Error;

use crate::Card;

/// Errors returned when evaluating a malformed hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A hand must have between 5 and 7 cards.
    #[error("invalid hand size {0}, expected 5 <= size <= 7")]
    InvalidHandSize(usize),
    /// The same card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// A hand value outside 1..=7462.
    #[error("invalid hand value {0}, expected 1 <= value <= 7462")]
    InvalidHandValue(u16),
}

/// Errors returned when the lookup tables cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// No seed and table size gave a perfect hash for the prime products.
    #[error("no perfect hash found for {0} prime products")]
    NoPerfectHash(usize),
    /// The generated tables do not cover the hand values as expected.
    #[error("inconsistent tables: {0}")]
    Inconsistent(String),
}
