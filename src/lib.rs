//! A Flip 7 card game rules engine with optional `no_std` support.
//!
//! The crate provides a [`GameState`] value that a driver (CLI, UI, server)
//! threads through the four reducer entry points: [`GameState::flip_card`],
//! [`GameState::bank_score`], [`GameState::pass_turn`] and
//! [`GameState::select_target`]. Each call leaves its input untouched and
//! returns the next state together with a [`GameStatus`] describing what
//! happened; rejected moves come back as an unchanged state with a status
//! naming the reason.
//!
//! # Example
//!
//! ```
//! use flip7rs::{GameOptions, GameState, GameStatus};
//!
//! let game = GameState::new(&["Alice", "Bob"], GameOptions::default(), 42)?;
//! let game = game.flip_card();
//! assert_ne!(game.status(), GameStatus::RoundStart);
//! # Ok::<(), flip7rs::NewGameError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;
pub mod score;

// Re-export main types
pub use card::{ActionCard, Card, DECK_SIZE, Modifier};
pub use error::NewGameError;
pub use game::{ActionContext, GameState, GameStatus, TargetedAction};
pub use options::GameOptions;
pub use player::Player;
pub use result::{Elimination, RoundOutcome};
pub use score::{FLIP7_BONUS, TARGET_SCORE};
