//! Session configuration.
//!
//! A `GameConfig` carries the parameters chosen when a session starts:
//! - the mistake budget
//! - an optional seed key overriding the puzzle's own key
//!
//! The engine remembers the config inside every `GameState` so that a reset
//! reproduces the same session.

use std::time::Duration;

use serde::Serialize;

use crate::puzzle::Puzzle;

/// Mistakes allowed when nothing else is configured.
pub const DEFAULT_MISTAKES_ALLOWED: u32 = 4;

/// Suggested pause between submitting a guess and showing its result.
///
/// Presentation hint only: `submit_guess` itself is instantaneous.
pub const DEFAULT_CHECK_DELAY: Duration = Duration::from_millis(650);

/// Parameters for starting a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    /// Number of wrong guesses that ends the game (at least 1).
    pub mistakes_allowed: u32,

    /// Seed key override. `None` uses the puzzle's date, then its id.
    pub seed_key: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mistakes_allowed: DEFAULT_MISTAKES_ALLOWED,
            seed_key: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mistake budget.
    #[must_use]
    pub fn with_mistakes_allowed(mut self, mistakes_allowed: u32) -> Self {
        assert!(mistakes_allowed > 0, "Must allow at least 1 mistake");
        self.mistakes_allowed = mistakes_allowed;
        self
    }

    /// Fix the seed key instead of deriving it from the puzzle.
    #[must_use]
    pub fn with_seed_key(mut self, key: impl Into<String>) -> Self {
        self.seed_key = Some(key.into());
        self
    }

    /// Resolve the seed key for a puzzle: override, then date, then id.
    #[must_use]
    pub fn seed_key_for<'a>(&'a self, puzzle: &'a Puzzle) -> &'a str {
        self.seed_key
            .as_deref()
            .or(puzzle.date())
            .unwrap_or_else(|| puzzle.id())
    }
}
