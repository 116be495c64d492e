use alloc::format;
use alloc::string::String;

use crate::card::Card;
use crate::deck;
use crate::result::Elimination;
use crate::score;

use super::{ActionContext, GameState, GameStatus};

impl GameState {
    /// Flips the top card of the deck for the acting player.
    ///
    /// The acting player is the target of the forced-draw sequence on top of
    /// the action stack, or the current player otherwise. A forced draw never
    /// consumes one of the turn's voluntary flips; any other draw, action
    /// cards included, does.
    ///
    /// No-op while a target selection is pending or the game is over.
    /// Rejected with [`GameStatus::NoFlipsRemaining`] when the current player
    /// has no voluntary flips left, and [`GameStatus::DeckEmpty`] when the
    /// deck runs dry even after reshuffling the discard pile.
    #[must_use]
    pub fn flip_card(&self) -> Self {
        if self.is_game_over() || self.has_pending_action() {
            return self.clone();
        }

        let mut next = self.clone();
        next.message = None;
        next.drop_stale_contexts();

        let forced = next.top_forced_target();
        if forced.is_none() && next.flips_remaining == 0 {
            return self.with_status(GameStatus::NoFlipsRemaining);
        }

        deck::reshuffle_if_empty(&mut next.deck, &mut next.discard, &mut next.rng);
        let Some(card) = deck::draw(&mut next.deck) else {
            next.status = GameStatus::DeckEmpty;
            return next;
        };

        let actor = forced.unwrap_or(next.current_player);
        if let Some(ActionContext::ForcedDraws { remaining, .. }) = next.action_stack.last_mut() {
            *remaining -= 1;
            let owed = next.players[actor].forced_draws();
            next.players[actor].set_forced_draws(owed.saturating_sub(1));
        } else {
            next.flips_remaining -= 1;
        }

        match card {
            Card::Number(value) => next.flip_number(actor, card, value, forced.is_some()),
            Card::Modifier(_) => {
                next.players[actor].add_modifier(card);
                next.finish_forced_draw();
                next.status = next.choice_status();
            }
            Card::Action(action) => {
                next.finish_forced_draw();
                next.resolve_action(action, actor);
            }
        }
        next
    }

    /// Pops the top forced-draw context once its last draw has completed,
    /// resuming the context underneath where it left off.
    fn finish_forced_draw(&mut self) {
        if let Some(ActionContext::ForcedDraws { remaining: 0, .. }) = self.action_stack.last() {
            self.action_stack.pop();
        }
    }

    fn flip_number(&mut self, actor: usize, card: Card, value: u8, was_forced: bool) {
        if self.players[actor].holds_number(value) {
            if self.players[actor].has_second_chance() {
                self.survive_second_chance(actor, card, was_forced);
            } else {
                self.bust(actor, card);
            }
            return;
        }

        self.players[actor].add_number(card);
        if score::has_flip7(self.players[actor].number_cards()) {
            self.award_flip7(actor, "Round over!");
            return;
        }

        self.finish_forced_draw();
        self.status = self.choice_status();
    }

    /// A held Second Chance absorbs the duplicate: the drawn card and the
    /// spent marker go to discard, the hand stays as it was, and a forced
    /// draw the duplicate interrupted is owed again.
    fn survive_second_chance(&mut self, actor: usize, card: Card, was_forced: bool) {
        self.discard.push(card);
        if let Some(marker) = self.players[actor].take_second_chance() {
            self.discard.push(marker);
        }

        if was_forced {
            if let Some(ActionContext::ForcedDraws { remaining, .. }) = self.action_stack.last_mut()
            {
                *remaining += 1;
            }
            let owed = self.players[actor].forced_draws();
            self.players[actor].set_forced_draws(owed + 1);
        }

        if self.choice_status() == GameStatus::ChoicePoint {
            self.status = GameStatus::ChoicePoint;
            self.message = Some(String::from(
                "You survived your Second Chance! Choose your next move.",
            ));
        } else {
            self.status = GameStatus::SecondChanceSurvived;
            self.message = Some(String::from(
                "You survived your Second Chance! Continue playing.",
            ));
        }
    }

    /// The duplicate joins the hand, then the whole hand goes to discard.
    /// Busting aborts every forced draw still owed by the player.
    fn bust(&mut self, actor: usize, card: Card) {
        let potential = score::bust_forfeit(&self.players[actor]);
        self.players[actor].add_number(card);
        self.players[actor].mark_busted(potential);
        let mut hand = self.players[actor].take_number_cards();
        self.discard.append(&mut hand);

        self.action_stack.retain(
            |ctx| !matches!(ctx, ActionContext::ForcedDraws { target, .. } if *target == actor),
        );

        self.status = GameStatus::Busted;
        self.advance_if_current_inactive();
        self.finish_round_if_over();
    }

    /// The Flip 7 cascade: the seventh distinct number banks the player with
    /// the bonus, every other active player forfeits their hand, and both the
    /// round and the game end.
    pub(super) fn award_flip7(&mut self, actor: usize, closing: &str) {
        self.eliminated_by_flip7 = self
            .players
            .iter()
            .enumerate()
            .filter(|(i, p)| {
                *i != actor
                    && p.is_active()
                    && (!p.number_cards().is_empty() || !p.modifier_cards().is_empty())
            })
            .map(|(_, p)| Elimination {
                name: String::from(p.name()),
                forfeited: score::round_score(p, 0),
            })
            .collect();

        let name = String::from(self.players[actor].name());
        self.bank_player_at(actor, score::FLIP7_BONUS);

        for index in 0..self.players.len() {
            if self.players[index].is_active() {
                let mut forfeited = self.players[index].take_hand();
                self.discard.append(&mut forfeited);
            }
            if let Some(marker) = self.players[index].take_second_chance() {
                self.discard.push(marker);
            }
        }

        self.action_stack.clear();
        self.record_round();
        self.winners = score::winners(&self.players, score::TARGET_SCORE);
        self.game_over = true;
        self.status = GameStatus::Flip7BonusAwarded;
        self.message = Some(format!("{name} achieved Flip 7! {closing}"));
    }
}
