//! Round history record types.

extern crate alloc;

use alloc::string::String;

/// One player's outcome for a completed round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundOutcome {
    /// The player's name.
    pub name: String,
    /// Points the player banked this round (0 if they never banked).
    pub banked: u32,
    /// Points the player would have scored but lost, either by busting or by
    /// being caught holding cards when someone hit Flip 7.
    pub lost: u32,
}

/// A player whose hand was forfeited by another player's Flip 7.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Elimination {
    /// The eliminated player's name.
    pub name: String,
    /// What the player would have scored had they banked first.
    pub forfeited: u32,
}
