// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards and deck errors.
use thiserror::Error;

/// Errors returned when building cards or dealing from a deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// Unknown rank character.
    #[error("invalid rank '{0}', expected one of 23456789TJQKA")]
    InvalidRank(char),
    /// Rank index outside 0..=12.
    #[error("invalid rank index {0}, expected 0 <= index <= 12")]
    InvalidRankIndex(u8),
    /// Unknown suit character.
    #[error("invalid suit '{0}', expected one of cdhs")]
    InvalidSuit(char),
    /// A card string that is not a rank followed by a suit.
    #[error("invalid card '{0}', expected a rank and a suit like Ts")]
    InvalidCard(String),
    /// No more cards to deal.
    #[error("deck is empty")]
    EmptyDeck,
}
