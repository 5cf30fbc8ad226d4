//! Puzzle sources: where raw documents come from.
//!
//! The engine never performs I/O. Embedders implement `PuzzleSource` over
//! whatever storage they have; `load_puzzle` adds the fallback policy and
//! validation on top.

pub mod loader;

pub use loader::{
    load_puzzle, resolve_date_key, today_key, LoadError, MemorySource, PuzzleSource,
    DEFAULT_PUZZLE_KEY,
};
