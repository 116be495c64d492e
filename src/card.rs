//! Card types and the full Flip 7 deck composition.

use alloc::vec::Vec;
use core::fmt;

/// A modifier card, applied to a banked hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Modifier {
    /// Adds the inner value to the hand total (`+2`, `+4`, `+6`, `+8`, `+10`).
    Plus(u8),
    /// Doubles the number-card total before additive modifiers.
    Times2,
}

/// An action card, resolved immediately when flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionCard {
    /// Immediately banks a chosen player at their current hand value.
    Freeze,
    /// Forces a chosen player to flip three cards in a row.
    FlipThree,
    /// Held by the drawer; cancels one would-be bust later in the round.
    SecondChance,
}

/// A Flip 7 playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Card {
    /// A number card with face value 0 through 12.
    Number(u8),
    /// A scoring modifier.
    Modifier(Modifier),
    /// An action card.
    Action(ActionCard),
}

impl Card {
    /// The face value of a number card, or `None` for modifiers and actions.
    ///
    /// Note: values outside 0..=12 are never produced by [`full_deck`] but are
    /// accepted; they score like any other number.
    #[must_use]
    pub const fn number_value(&self) -> Option<u8> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Modifier(_) | Self::Action(_) => None,
        }
    }

    /// Whether this card is a number card.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Whether this card is a modifier card.
    #[must_use]
    pub const fn is_modifier(&self) -> bool {
        matches!(self, Self::Modifier(_))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Modifier(Modifier::Plus(value)) => write!(f, "+{value}"),
            Self::Modifier(Modifier::Times2) => f.write_str("×2"),
            Self::Action(ActionCard::Freeze) => f.write_str("Freeze"),
            Self::Action(ActionCard::FlipThree) => f.write_str("Flip 3"),
            Self::Action(ActionCard::SecondChance) => f.write_str("2nd Chance"),
        }
    }
}

/// Number of cards in a full deck.
///
/// 91 number cards (one 0, two 1s, up to thirteen 12s), 6 modifiers
/// (`+2`, `+4`, `+6`, `+8`, `+10`, `×2`) and 9 action cards (three each of
/// Freeze, Flip Three and Second Chance).
pub const DECK_SIZE: usize = 106;

/// Builds the full 106-card deck in a fixed order.
///
/// The order is deterministic (numbers ascending, then modifiers, then
/// actions); callers are expected to shuffle.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for value in 0..=12 {
        for _ in 0..=value {
            cards.push(Card::Number(value));
        }
    }
    for value in [2, 4, 6, 8, 10] {
        cards.push(Card::Modifier(Modifier::Plus(value)));
    }
    cards.push(Card::Modifier(Modifier::Times2));
    for _ in 0..3 {
        cards.push(Card::Action(ActionCard::Freeze));
        cards.push(Card::Action(ActionCard::FlipThree));
        cards.push(Card::Action(ActionCard::SecondChance));
    }
    cards
}
