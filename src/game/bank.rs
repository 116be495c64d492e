use crate::score;

use super::{GameState, GameStatus};

impl GameState {
    /// Banks the given player's round score into their cumulative score.
    ///
    /// A hand with no number cards banks 0, even when modifier cards are
    /// held; the modifiers go to the discard pile unscored. A hand of seven
    /// distinct numbers banks through the full Flip 7 cascade. When the
    /// banking player was the current player, the turn advances to the next
    /// active player; when they were the last active player, the round ends.
    ///
    /// No-op while a target selection is pending, after the game is over, or
    /// for an out-of-range or already banked player. Rejected with
    /// [`GameStatus::CannotBankBusted`] for a busted player and
    /// [`GameStatus::CannotBankDuringFlipThree`] while the player still owes
    /// forced draws.
    #[must_use]
    pub fn bank_score(&self, player: usize) -> Self {
        if self.is_game_over() || self.has_pending_action() {
            return self.clone();
        }
        let Some(banker) = self.players.get(player) else {
            return self.clone();
        };
        if banker.is_busted() {
            return self.with_status(GameStatus::CannotBankBusted);
        }
        if banker.forced_draws() > 0 {
            return self.with_status(GameStatus::CannotBankDuringFlipThree);
        }
        if banker.is_banked() {
            return self.clone();
        }

        let mut next = self.clone();
        next.message = None;

        if score::has_flip7(next.players[player].number_cards()) {
            next.award_flip7(player, "Game over!");
            return next;
        }

        if next.players[player].number_cards().is_empty() {
            // Modifiers score nothing without number cards under them.
            let mut hand = next.players[player].take_hand();
            next.discard.append(&mut hand);
            next.players[player].bank(0);
        } else {
            next.bank_player_at(player, 0);
        }
        next.status = GameStatus::Banked;
        if player == next.current_player {
            next.advance_turn();
        }
        next.finish_round_if_over();
        next
    }

    /// Passes the current player's turn without banking.
    ///
    /// No-op while a target selection is pending or after the game is over.
    /// Rejected with [`GameStatus::CannotPassDuringFlipThree`] while the
    /// current player owes forced draws and [`GameStatus::PassingDisabled`]
    /// when the game options forbid passing.
    #[must_use]
    pub fn pass_turn(&self) -> Self {
        if self.is_game_over() || self.has_pending_action() {
            return self.clone();
        }
        if self.players[self.current_player].forced_draws() > 0 {
            return self.with_status(GameStatus::CannotPassDuringFlipThree);
        }
        if !self.options.passing_enabled {
            return self.with_status(GameStatus::PassingDisabled);
        }

        let mut next = self.clone();
        next.message = None;
        next.status = GameStatus::PlayerPassed;
        next.advance_turn();
        next
    }
}
