//! Game engine and state management.

use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck;
use crate::error::NewGameError;
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::{Elimination, RoundOutcome};
use crate::score;

mod actions;
mod bank;
mod flip;
pub mod state;

pub use state::{ActionContext, GameStatus, TargetedAction};

/// A complete Flip 7 game state.
///
/// The state is an immutable snapshot: every entry point ([`flip_card`],
/// [`bank_score`], [`pass_turn`], [`select_target`]) takes `&self` and
/// returns the next state, leaving the input untouched. Rejected transitions
/// come back as an otherwise unchanged state whose [`status`] names the
/// reason; the engine never panics and performs no I/O.
///
/// Shuffling draws on a random number generator owned by the state and
/// seeded at construction, so a whole game is a deterministic function of
/// its seed and the sequence of calls.
///
/// [`flip_card`]: GameState::flip_card
/// [`bank_score`]: GameState::bank_score
/// [`pass_turn`]: GameState::pass_turn
/// [`select_target`]: GameState::select_target
/// [`status`]: GameState::status
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Cards left to draw; the top of the deck is the end of the vector.
    deck: Vec<Card>,
    /// Discarded cards, most recent last.
    discard: Vec<Card>,
    /// All players in seating order.
    players: Vec<Player>,
    /// Index of the player whose turn it is.
    current_player: usize,
    /// Round number, starting at 1.
    round: u32,
    /// Status of the last transition.
    status: GameStatus,
    /// Optional human-readable note accompanying the status.
    message: Option<String>,
    /// In-flight special actions, most recent last.
    action_stack: Vec<ActionContext>,
    /// One row per completed round.
    round_history: Vec<Vec<RoundOutcome>>,
    /// Game options, fixed at creation.
    options: GameOptions,
    /// Voluntary draws the current player has left this turn.
    flips_remaining: u8,
    /// Whether the game has ended.
    game_over: bool,
    /// Winner names once a player reaches the target score.
    winners: Vec<String>,
    /// Players whose hands were forfeited by a Flip 7.
    eliminated_by_flip7: Vec<Elimination>,
    /// Random number generator for shuffles.
    rng: ChaCha8Rng,
}

impl GameState {
    /// Creates a new game with the given players, options and seed.
    ///
    /// The deck is shuffled from the seed; the first player starts round 1.
    ///
    /// # Errors
    ///
    /// Returns an error if `names` is empty or `options.draws_per_turn` is 0.
    ///
    /// # Example
    ///
    /// ```
    /// use flip7rs::{GameOptions, GameState};
    ///
    /// let game = GameState::new(&["Alice", "Bob"], GameOptions::default(), 42)?;
    /// assert_eq!(game.players().len(), 2);
    /// assert_eq!(game.round(), 1);
    /// # Ok::<(), flip7rs::NewGameError>(())
    /// ```
    pub fn new(names: &[&str], options: GameOptions, seed: u64) -> Result<Self, NewGameError> {
        if names.is_empty() {
            return Err(NewGameError::NoPlayers);
        }
        if options.draws_per_turn == 0 {
            return Err(NewGameError::ZeroDrawsPerTurn);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = deck::fresh_deck(&mut rng);

        Ok(Self {
            deck,
            discard: Vec::new(),
            players: names
                .iter()
                .map(|name| Player::new(String::from(*name)))
                .collect(),
            current_player: 0,
            round: 1,
            status: GameStatus::RoundStart,
            message: None,
            action_stack: Vec::new(),
            round_history: Vec::new(),
            options,
            flips_remaining: options.draws_per_turn,
            game_over: false,
            winners: Vec::new(),
            eliminated_by_flip7: Vec::new(),
            rng,
        })
    }

    /// Returns the cards left in the deck.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Returns the discard pile, most recent last.
    #[must_use]
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns all players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player at the given index.
    #[must_use]
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Returns the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the index of the player whose turn it is.
    #[must_use]
    pub const fn current_player(&self) -> usize {
        self.current_player
    }

    /// Returns the round number, starting at 1.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Returns the status of the last transition.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the note accompanying the status, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the stack of in-flight special actions, most recent last.
    #[must_use]
    pub fn action_stack(&self) -> &[ActionContext] {
        &self.action_stack
    }

    /// Returns the action context currently governing play, if any.
    #[must_use]
    pub fn current_action(&self) -> Option<&ActionContext> {
        self.action_stack.last()
    }

    /// Returns the per-player outcomes of every completed round.
    #[must_use]
    pub fn round_history(&self) -> &[Vec<RoundOutcome>] {
        &self.round_history
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> GameOptions {
        self.options
    }

    /// Returns the voluntary draws the current player has left this turn.
    #[must_use]
    pub const fn flips_remaining(&self) -> u8 {
        self.flips_remaining
    }

    /// Returns whether the game has ended.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Returns the winners' names, empty until a player reaches the target
    /// score at the end of a round.
    #[must_use]
    pub fn winners(&self) -> &[String] {
        &self.winners
    }

    /// Returns the players whose hands were forfeited by a Flip 7.
    #[must_use]
    pub fn eliminated_by_flip7(&self) -> &[Elimination] {
        &self.eliminated_by_flip7
    }

    /// Chance (0–100) that the given player's next draw busts them.
    #[must_use]
    pub fn bust_odds(&self, player: usize) -> u8 {
        self.players
            .get(player)
            .map_or(0, |p| score::bust_odds(p, &self.deck))
    }

    /// Replaces the draw pile, for replays and scripted scenarios.
    ///
    /// The cards are used as given, without shuffling; draws come from the
    /// end of the vector. A fresh shuffled deck still replaces this one when
    /// the next round starts.
    ///
    /// # Example
    ///
    /// ```
    /// use flip7rs::{Card, GameOptions, GameState};
    ///
    /// let game = GameState::new(&["Ada"], GameOptions::default(), 7)?
    ///     .with_deck(vec![Card::Number(4), Card::Number(9)]);
    /// let next = game.flip_card();
    /// assert_eq!(next.players()[0].number_cards(), [Card::Number(9)]);
    /// # Ok::<(), flip7rs::NewGameError>(())
    /// ```
    #[must_use]
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = deck;
        self
    }

    /// Returns a copy of this state with only the status replaced.
    fn with_status(&self, status: GameStatus) -> Self {
        let mut next = self.clone();
        next.status = status;
        next
    }

    /// Whether the top of the action stack is waiting for a target.
    fn has_pending_action(&self) -> bool {
        self.action_stack.last().is_some_and(ActionContext::is_pending)
    }

    /// The player owed draws by the top of the action stack, if any.
    fn top_forced_target(&self) -> Option<usize> {
        match self.action_stack.last() {
            Some(ActionContext::ForcedDraws { target, .. }) => Some(*target),
            _ => None,
        }
    }

    /// Drops forced-draw contexts whose target can no longer draw (for
    /// example a player frozen mid-sequence) or that have no draws left.
    fn drop_stale_contexts(&mut self) {
        while let Some(ActionContext::ForcedDraws { target, remaining }) = self.action_stack.last()
        {
            if *remaining > 0 && self.players[*target].is_active() {
                break;
            }
            self.action_stack.pop();
        }
    }

    /// Status after a completed draw: `ChoicePoint` when play is back to an
    /// unconstrained current player, `Flipped` otherwise.
    fn choice_status(&self) -> GameStatus {
        if self.action_stack.is_empty() && self.players[self.current_player].is_active() {
            GameStatus::ChoicePoint
        } else {
            GameStatus::Flipped
        }
    }

    /// Banks a player: their round score (plus any bonus) moves into their
    /// cumulative score and their hand goes to the discard pile.
    fn bank_player_at(&mut self, index: usize, bonus: u32) {
        let points = score::round_score(&self.players[index], bonus);
        let mut hand = self.players[index].take_hand();
        self.discard.append(&mut hand);
        self.players[index].bank(points);
    }

    /// Moves the turn to the next active player, wrapping, and resets their
    /// draw allotment. Leaves the turn in place if no one is active.
    fn advance_turn(&mut self) {
        let count = self.players.len();
        for offset in 1..=count {
            let index = (self.current_player + offset) % count;
            if self.players[index].is_active() {
                self.current_player = index;
                self.flips_remaining = self.options.draws_per_turn;
                return;
            }
        }
    }

    /// Advances the turn only if the current player is out of the round.
    fn advance_if_current_inactive(&mut self) {
        if !self.players[self.current_player].is_active() {
            self.advance_turn();
        }
    }

    /// Whether every player is banked or busted.
    fn round_over(&self) -> bool {
        self.players.iter().all(|p| !p.is_active())
    }

    /// Appends one history row covering every player's round outcome.
    fn record_round(&mut self) {
        let row = self
            .players
            .iter()
            .map(|p| RoundOutcome {
                name: String::from(p.name()),
                banked: p.round_points(),
                lost: if p.is_busted() {
                    p.busted_points()
                } else {
                    self.eliminated_by_flip7
                        .iter()
                        .find(|e| e.name == p.name())
                        .map_or(0, |e| e.forfeited)
                },
            })
            .collect();
        self.round_history.push(row);
    }

    /// Ends the round if every player is banked or busted: leftover cards go
    /// to discard, the round is recorded, and either the game ends with
    /// winners or the next round starts.
    fn finish_round_if_over(&mut self) {
        if !self.round_over() {
            return;
        }

        for player in &mut self.players {
            let mut leftovers = player.take_hand();
            self.discard.append(&mut leftovers);
            if let Some(marker) = player.take_second_chance() {
                self.discard.push(marker);
            }
        }
        self.action_stack.clear();
        self.record_round();

        let winners = score::winners(&self.players, score::TARGET_SCORE);
        if winners.is_empty() {
            self.start_next_round();
        } else {
            self.winners = winners;
            self.game_over = true;
        }
    }

    /// Starts the next round: fresh shuffled deck, hands and contexts reset,
    /// scores and history retained, the starting player rotated by one.
    fn start_next_round(&mut self) {
        self.round += 1;
        for player in &mut self.players {
            player.reset_for_round();
        }
        self.deck = deck::fresh_deck(&mut self.rng);
        self.discard.clear();
        self.action_stack.clear();
        self.current_player = (self.round as usize - 1) % self.players.len();
        self.flips_remaining = self.options.draws_per_turn;
    }
}
