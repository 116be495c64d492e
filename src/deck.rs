//! Deck operations: shuffling, drawing and the discard reshuffle.
//!
//! The top of the deck is the end of the vector, so drawing is a `pop`.

use alloc::vec::Vec;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, full_deck};

/// Builds a freshly shuffled full deck.
#[must_use]
pub fn fresh_deck(rng: &mut ChaCha8Rng) -> Vec<Card> {
    let mut cards = full_deck();
    cards.shuffle(rng);
    cards
}

/// Draws the top card of the deck, or `None` if it is empty.
pub fn draw(deck: &mut Vec<Card>) -> Option<Card> {
    deck.pop()
}

/// Refills an empty deck from the discard pile.
///
/// Does nothing while the deck still has cards or the discard pile holds at
/// most one card. Otherwise every discard except the most recent one is
/// shuffled into a new deck; the most recent discard stays face up.
///
/// Returns whether a reshuffle happened.
pub fn reshuffle_if_empty(
    deck: &mut Vec<Card>,
    discard: &mut Vec<Card>,
    rng: &mut ChaCha8Rng,
) -> bool {
    if !deck.is_empty() || discard.len() <= 1 {
        return false;
    }

    let top = discard.split_off(discard.len() - 1);
    deck.append(discard);
    deck.shuffle(rng);
    *discard = top;
    true
}
