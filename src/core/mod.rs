//! Core engine types: ids, RNG, configuration, guesses, actions, state.
//!
//! These are the building blocks shared by the puzzle validator and the
//! rules engine. None of them perform I/O.

pub mod ids;
pub mod rng;
pub mod config;
pub mod guess;
pub mod action;
pub mod state;

pub use ids::{GroupId, ItemId};
pub use rng::{hash_to_seed, reshuffle_seed, shuffle_stable, Mulberry32};
pub use config::{GameConfig, DEFAULT_CHECK_DELAY, DEFAULT_MISTAKES_ALLOWED};
pub use guess::{Feedback, GuessOutcome, GuessRecord};
pub use action::PlayerAction;
pub use state::{GameState, GameStatus, Selection};
