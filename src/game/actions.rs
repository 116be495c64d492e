use alloc::vec::Vec;

use crate::card::{ActionCard, Card};

use super::{ActionContext, GameState, GameStatus, TargetedAction};

impl GameState {
    /// Resolves a just-drawn action card for the player who drew it.
    ///
    /// Freeze and Flip Three go to discard and leave a target selection
    /// pending on the action stack. Second Chance stays with the drawer: the
    /// held card is represented by the player's flag until it is spent or the
    /// round ends, and a second copy drawn while one is held goes straight to
    /// discard.
    pub(super) fn resolve_action(&mut self, action: ActionCard, actor: usize) {
        match action {
            ActionCard::Freeze => self.push_pending(TargetedAction::Freeze, actor),
            ActionCard::FlipThree => self.push_pending(TargetedAction::FlipThree, actor),
            ActionCard::SecondChance => {
                if self.players[actor].has_second_chance() {
                    self.discard.push(Card::Action(ActionCard::SecondChance));
                } else {
                    self.players[actor].set_second_chance(true);
                }
                self.status = GameStatus::SecondChanceAcquired;
            }
        }
    }

    fn push_pending(&mut self, action: TargetedAction, actor: usize) {
        let card = Card::Action(match action {
            TargetedAction::Freeze => ActionCard::Freeze,
            TargetedAction::FlipThree => ActionCard::FlipThree,
        });
        self.discard.push(card);
        self.action_stack.push(ActionContext::AwaitingTarget {
            action,
            card,
            actor,
        });
        self.status = GameStatus::AwaitingTarget;
    }

    /// Indices of the players the pending action may target.
    ///
    /// Any player who is neither banked nor busted qualifies, the actor
    /// included; the list is empty when no action is pending. It is never
    /// empty while one is, because the drawer always qualifies.
    #[must_use]
    pub fn valid_targets(&self) -> Vec<usize> {
        if !self.has_pending_action() {
            return Vec::new();
        }
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_active())
            .map(|(index, _)| index)
            .collect()
    }

    /// Supplies the target for the pending Freeze or Flip Three.
    ///
    /// Freeze banks the target at their current hand. Flip Three starts a
    /// three-draw forced sequence for the target, stacked on top of whatever
    /// sequence was already running.
    ///
    /// No-op when nothing is pending, or the target is out of range, banked
    /// or busted.
    #[must_use]
    pub fn select_target(&self, target: usize) -> Self {
        if self.is_game_over() {
            return self.clone();
        }
        let Some(&ActionContext::AwaitingTarget { action, .. }) = self.action_stack.last() else {
            return self.clone();
        };
        if target >= self.players.len() || !self.players[target].is_active() {
            return self.clone();
        }

        let mut next = self.clone();
        next.message = None;
        next.action_stack.pop();

        match action {
            TargetedAction::Freeze => {
                next.players[target].set_forced_draws(0);
                next.bank_player_at(target, 0);
                next.status = GameStatus::FreezeBanked;
                next.advance_if_current_inactive();
                next.finish_round_if_over();
            }
            TargetedAction::FlipThree => {
                next.action_stack.push(ActionContext::ForcedDraws {
                    target,
                    remaining: 3,
                });
                let owed = next.players[target].forced_draws();
                next.players[target].set_forced_draws(owed + 3);
                next.status = GameStatus::FlipThreeStarted;
            }
        }
        next
    }
}
