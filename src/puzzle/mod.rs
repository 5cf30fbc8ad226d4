//! Puzzle documents: definitions and validation.
//!
//! Raw documents arrive as untrusted JSON. `validate` checks them once and
//! produces a `Puzzle`, which the rest of the crate treats as trusted and
//! immutable.

pub mod definition;
pub mod validate;

pub use definition::{
    GroupColor, Puzzle, PuzzleGroup, PuzzleItem, GROUP_COUNT, GROUP_SIZE, ITEM_COUNT,
};
pub use validate::{validate, ValidationError};
