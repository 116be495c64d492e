//! Status codes and in-flight action contexts.

use crate::card::Card;

/// Status code describing the last transition.
///
/// Every reducer call returns a new state carrying one of these; rejected
/// transitions leave the rest of the state untouched and only report why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// A round has just started and no one has acted yet.
    RoundStart,
    /// A card was flipped; the acting player is not at a free choice.
    Flipped,
    /// The current player may freely flip, bank or pass.
    ChoicePoint,
    /// An action card is waiting for a target to be chosen.
    AwaitingTarget,
    /// A Flip Three sequence has started for the chosen target.
    FlipThreeStarted,
    /// The acting player drew a duplicate and busted.
    Busted,
    /// A player banked their round score.
    Banked,
    /// A Freeze banked its target at their current hand.
    FreezeBanked,
    /// The acting player now holds a Second Chance.
    SecondChanceAcquired,
    /// A Second Chance absorbed a would-be bust.
    SecondChanceSurvived,
    /// A player hit seven distinct numbers and ended the round with the bonus.
    Flip7BonusAwarded,
    /// The current player passed their turn.
    PlayerPassed,
    /// The deck ran dry even after reshuffling the discard pile.
    DeckEmpty,
    /// Rejected: no voluntary draws left this turn.
    NoFlipsRemaining,
    /// Rejected: a busted player cannot bank.
    CannotBankBusted,
    /// Rejected: cannot bank while forced draws remain.
    CannotBankDuringFlipThree,
    /// Rejected: cannot pass while forced draws remain.
    CannotPassDuringFlipThree,
    /// Rejected: passing is disabled by the game options.
    PassingDisabled,
}

/// The two action cards that require a target.
///
/// Second Chance resolves on the drawer immediately, so it never appears
/// here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetedAction {
    /// Bank the target at their current hand.
    Freeze,
    /// Force the target through three consecutive draws.
    FlipThree,
}

/// One in-flight special action.
///
/// The engine keeps these on a stack (most recent last); only the top entry
/// governs whose draw comes next. A pending target selection on top blocks
/// every other transition until a target is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionContext {
    /// An action card waiting for its target.
    AwaitingTarget {
        /// Which action was drawn.
        action: TargetedAction,
        /// The drawn card, kept for display.
        card: Card,
        /// Index of the player who drew it.
        actor: usize,
    },
    /// A running forced-draw sequence.
    ForcedDraws {
        /// Index of the player who must draw.
        target: usize,
        /// Draws left in this sequence.
        remaining: u8,
    },
}

impl ActionContext {
    /// Whether this context is waiting for a target selection.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::AwaitingTarget { .. })
    }
}
