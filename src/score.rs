//! Scoring helpers: round scores, the Flip 7 test, bust odds and winners.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, Modifier};
use crate::player::Player;

/// Bonus awarded for flipping seven distinct numbers.
pub const FLIP7_BONUS: u32 = 15;

/// Cumulative score a player must reach to win the game.
pub const TARGET_SCORE: u32 = 200;

#[cfg(feature = "std")]
fn round_percent(value: f64) -> u8 {
    value.round() as u8
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_percent(value: f64) -> u8 {
    libm::round(value) as u8
}

/// Computes a player's round score.
///
/// The order of application is a rules contract: number cards are summed,
/// doubled if a `×2` modifier is held, the Flip 7 bonus is added, and the
/// additive modifiers come last.
#[must_use]
pub fn round_score(player: &Player, flip7_bonus: u32) -> u32 {
    let mut total: u32 = player
        .number_cards()
        .iter()
        .filter_map(Card::number_value)
        .map(u32::from)
        .sum();

    if player
        .modifier_cards()
        .iter()
        .any(|c| matches!(c, Card::Modifier(Modifier::Times2)))
    {
        total *= 2;
    }

    total += flip7_bonus;

    let additive: u32 = player
        .modifier_cards()
        .iter()
        .filter_map(|c| match c {
            Card::Modifier(Modifier::Plus(value)) => Some(u32::from(*value)),
            _ => None,
        })
        .sum();

    total + additive
}

/// Returns whether a hand qualifies for the Flip 7 bonus: exactly seven
/// number cards, all of distinct values.
#[must_use]
pub fn has_flip7(number_cards: &[Card]) -> bool {
    number_cards.len() == 7
        && number_cards.iter().enumerate().all(|(i, card)| {
            number_cards[..i]
                .iter()
                .all(|other| card.number_value() != other.number_value())
        })
}

/// What a player would have scored had they banked instead of drawing the
/// busting card. Recorded for round-history display, never used in live
/// scoring.
#[must_use]
pub fn bust_forfeit(player: &Player) -> u32 {
    round_score(player, 0)
}

/// Chance (0–100) that the player's next draw busts them.
///
/// 0 if the player holds a Second Chance, has no number cards, or the deck
/// is empty; otherwise the share of deck cards duplicating a held number,
/// rounded to the nearest percent.
#[must_use]
pub fn bust_odds(player: &Player, deck: &[Card]) -> u8 {
    if player.has_second_chance() || player.number_cards().is_empty() || deck.is_empty() {
        return 0;
    }

    let bust_cards = deck
        .iter()
        .filter(|c| c.number_value().is_some_and(|v| player.holds_number(v)))
        .count();

    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for card counts"
    )]
    let ratio = bust_cards as f64 / deck.len() as f64;

    round_percent(ratio * 100.0)
}

/// Names of the players whose score equals the maximum, provided that
/// maximum has reached the target; empty otherwise.
#[must_use]
pub fn winners(players: &[Player], target_score: u32) -> Vec<String> {
    let max = players.iter().map(Player::score).max().unwrap_or(0);
    if max < target_score {
        return Vec::new();
    }
    players
        .iter()
        .filter(|p| p.score() == max)
        .map(|p| String::from(p.name()))
        .collect()
}
