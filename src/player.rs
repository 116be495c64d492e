//! Per-player state within a round.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{ActionCard, Card};

/// A player's standing in the current round.
///
/// Players are only ever modified by the game engine; the public surface is
/// read-only. `score` persists across rounds, everything else is reset when
/// a new round starts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    /// Display name.
    name: String,
    /// Cumulative banked score across rounds.
    score: u32,
    /// Number cards flipped this round.
    number_cards: Vec<Card>,
    /// Modifier cards flipped this round.
    modifier_cards: Vec<Card>,
    /// Whether the player holds a Second Chance card.
    second_chance: bool,
    /// Whether the player busted this round.
    busted: bool,
    /// Whether the player banked this round.
    banked: bool,
    /// Forced draws still owed to a Flip Three.
    forced_draws: u8,
    /// What the player would have scored had they banked before busting.
    busted_points: u32,
    /// Points banked this round.
    round_points: u32,
}

impl Player {
    /// Creates a fresh player with the given name.
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            name,
            score: 0,
            number_cards: Vec::new(),
            modifier_cards: Vec::new(),
            second_chance: false,
            busted: false,
            banked: false,
            forced_draws: 0,
            busted_points: 0,
            round_points: 0,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cumulative score across rounds.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Returns the number cards flipped this round.
    #[must_use]
    pub fn number_cards(&self) -> &[Card] {
        &self.number_cards
    }

    /// Returns the modifier cards flipped this round.
    #[must_use]
    pub fn modifier_cards(&self) -> &[Card] {
        &self.modifier_cards
    }

    /// Returns whether the player holds a Second Chance.
    #[must_use]
    pub const fn has_second_chance(&self) -> bool {
        self.second_chance
    }

    /// Returns whether the player busted this round.
    #[must_use]
    pub const fn is_busted(&self) -> bool {
        self.busted
    }

    /// Returns whether the player banked this round.
    #[must_use]
    pub const fn is_banked(&self) -> bool {
        self.banked
    }

    /// Returns whether the player is still in the round.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.banked && !self.busted
    }

    /// Returns the forced draws still owed to a Flip Three.
    #[must_use]
    pub const fn forced_draws(&self) -> u8 {
        self.forced_draws
    }

    /// Returns what the player would have scored had they banked before
    /// busting, or 0 if they have not busted.
    #[must_use]
    pub const fn busted_points(&self) -> u32 {
        self.busted_points
    }

    /// Returns the points banked this round.
    #[must_use]
    pub const fn round_points(&self) -> u32 {
        self.round_points
    }

    /// Returns whether a number card of this value is already in hand.
    #[must_use]
    pub fn holds_number(&self, value: u8) -> bool {
        self.number_cards
            .iter()
            .any(|c| c.number_value() == Some(value))
    }

    pub(crate) fn add_number(&mut self, card: Card) {
        self.number_cards.push(card);
    }

    pub(crate) fn add_modifier(&mut self, card: Card) {
        self.modifier_cards.push(card);
    }

    pub(crate) const fn set_second_chance(&mut self, held: bool) {
        self.second_chance = held;
    }

    pub(crate) const fn set_forced_draws(&mut self, draws: u8) {
        self.forced_draws = draws;
    }

    /// Marks the player busted, recording what they would have scored.
    pub(crate) const fn mark_busted(&mut self, potential: u32) {
        self.busted = true;
        self.forced_draws = 0;
        self.busted_points = potential;
    }

    /// Banks the given points into the cumulative score.
    pub(crate) const fn bank(&mut self, points: u32) {
        self.score += points;
        self.round_points = points;
        self.banked = true;
    }

    /// Drains the number cards (used when a bust sends the hand to discard;
    /// modifiers stay with the player until the round ends).
    pub(crate) fn take_number_cards(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.number_cards)
    }

    /// Drains both number and modifier cards.
    pub(crate) fn take_hand(&mut self) -> Vec<Card> {
        let mut cards = core::mem::take(&mut self.number_cards);
        cards.append(&mut self.modifier_cards);
        cards
    }

    /// Gives up the held Second Chance card, if any.
    pub(crate) const fn take_second_chance(&mut self) -> Option<Card> {
        if self.second_chance {
            self.second_chance = false;
            Some(Card::Action(ActionCard::SecondChance))
        } else {
            None
        }
    }

    /// Resets everything but the name and cumulative score for a new round.
    pub(crate) fn reset_for_round(&mut self) {
        self.number_cards.clear();
        self.modifier_cards.clear();
        self.second_chance = false;
        self.busted = false;
        self.banked = false;
        self.forced_draws = 0;
        self.busted_points = 0;
        self.round_points = 0;
    }
}
