//! Game configuration options.

/// Configuration options for a Flip 7 game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use flip7rs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_passing_enabled(false)
///     .with_draws_per_turn(2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOptions {
    /// Whether players may pass instead of drawing or banking.
    pub passing_enabled: bool,
    /// Number of voluntary draws a player gets per turn.
    pub draws_per_turn: u8,
    /// Whether bust odds should be shown to players.
    pub show_bust_odds: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            passing_enabled: true,
            draws_per_turn: 1,
            show_bust_odds: true,
        }
    }
}

impl GameOptions {
    /// Sets whether passing is allowed.
    ///
    /// # Example
    ///
    /// ```
    /// use flip7rs::GameOptions;
    ///
    /// let options = GameOptions::default().with_passing_enabled(false);
    /// assert_eq!(options.passing_enabled, false);
    /// ```
    #[must_use]
    pub const fn with_passing_enabled(mut self, enabled: bool) -> Self {
        self.passing_enabled = enabled;
        self
    }

    /// Sets the number of voluntary draws per turn.
    ///
    /// Note: this function does not validate the count. A value of 0 is
    /// rejected by [`GameState::new`](crate::GameState::new).
    ///
    /// # Example
    ///
    /// ```
    /// use flip7rs::GameOptions;
    ///
    /// let options = GameOptions::default().with_draws_per_turn(3);
    /// assert_eq!(options.draws_per_turn, 3);
    /// ```
    #[must_use]
    pub const fn with_draws_per_turn(mut self, draws: u8) -> Self {
        self.draws_per_turn = draws;
        self
    }

    /// Sets whether bust odds are shown.
    ///
    /// # Example
    ///
    /// ```
    /// use flip7rs::GameOptions;
    ///
    /// let options = GameOptions::default().with_show_bust_odds(false);
    /// assert_eq!(options.show_bust_odds, false);
    /// ```
    #[must_use]
    pub const fn with_show_bust_odds(mut self, show: bool) -> Self {
        self.show_bust_odds = show;
        self
    }
}
