//! # rain-connections
//!
//! Game engine for a daily "connections" puzzle: 16 tiles, 4 hidden groups of
//! 4, a limited number of mistakes.
//!
//! ## Design Principles
//!
//! 1. **Validate Once**: Untrusted documents go through `puzzle::validate`
//!    exactly once. A `Puzzle` is trusted and immutable afterwards.
//!
//! 2. **States Are Values**: Every transition borrows a `GameState` and
//!    returns a new one. Keep old states around for undo or replay.
//!
//! 3. **Deterministic**: The board order and every re-shuffle derive from a
//!    seed key through integer-only hashing and PRNG arithmetic, so the same
//!    key gives the same board on every platform.
//!
//! ## Modules
//!
//! - `core`: Ids, seeded RNG, configuration, guesses, actions, state
//! - `puzzle`: Puzzle types and the document validator
//! - `rules`: The state machine (select, submit, shuffle, reset)
//! - `source`: Puzzle retrieval boundary with fallback key
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use rain_connections::{GameState, GameStatus, Puzzle};
//!
//! let items: Vec<_> = (0..16)
//!     .map(|i| serde_json::json!({ "id": format!("i{i}"), "text": format!("Tile {i}") }))
//!     .collect();
//! let groups: Vec<_> = ["yellow", "green", "blue", "purple"]
//!     .iter()
//!     .enumerate()
//!     .map(|(g, color)| {
//!         let ids: Vec<_> = (0..4).map(|k| format!("i{}", g * 4 + k)).collect();
//!         serde_json::json!({ "id": format!("g{g}"), "label": color, "color": color, "itemIds": ids })
//!     })
//!     .collect();
//! let doc = serde_json::json!({
//!     "version": 1, "id": "demo", "title": "Demo", "items": items, "groups": groups,
//! });
//!
//! let puzzle = Arc::new(rain_connections::puzzle::validate(&doc).unwrap());
//! let mut state = GameState::new(Arc::clone(&puzzle));
//! for raw in ["i0", "i1", "i2", "i3"] {
//!     state = state.toggle_select(&puzzle.item_id(raw).unwrap());
//! }
//! state = state.submit_guess();
//!
//! assert_eq!(state.found_group_ids().len(), 1);
//! assert_eq!(state.status(), GameStatus::Playing);
//! ```

pub mod core;
pub mod puzzle;
pub mod rules;
pub mod source;

// Re-export commonly used types
pub use crate::core::{
    GroupId, ItemId,
    Mulberry32, hash_to_seed, shuffle_stable,
    GameConfig, DEFAULT_MISTAKES_ALLOWED,
    Feedback, GuessOutcome, GuessRecord,
    PlayerAction,
    GameState, GameStatus,
};

pub use crate::puzzle::{GroupColor, Puzzle, PuzzleGroup, PuzzleItem, ValidationError};

pub use crate::source::{load_puzzle, resolve_date_key, LoadError, MemorySource, PuzzleSource};
