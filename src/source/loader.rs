//! Puzzle retrieval with a fallback key.
//!
//! Retrieval itself (HTTP, files, bundles) is the embedder's job: it
//! implements `PuzzleSource`. This module only decides which keys to try and
//! validates what comes back.

use chrono::Local;
use rustc_hash::FxHashMap;
use serde_json::Value;
use thiserror::Error;

use crate::puzzle::{validate, Puzzle};

/// Puzzle key tried when the requested day has no usable puzzle.
pub const DEFAULT_PUZZLE_KEY: &str = "2026-02-17";

/// Supplies raw puzzle documents by key.
pub trait PuzzleSource {
    /// Fetch the document stored under `key`, or `None` if there is none.
    fn fetch(&self, key: &str) -> Option<Value>;
}

impl<F> PuzzleSource for F
where
    F: Fn(&str) -> Option<Value>,
{
    fn fetch(&self, key: &str) -> Option<Value> {
        self(key)
    }
}

/// In-memory key -> document map.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    documents: FxHashMap<String, Value>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a document under a key, replacing any previous one.
    pub fn insert(&mut self, key: impl Into<String>, document: Value) {
        self.documents.insert(key.into(), document);
    }

    /// Builder form of `insert`.
    #[must_use]
    pub fn with_document(mut self, key: impl Into<String>, document: Value) -> Self {
        self.insert(key, document);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl PuzzleSource for MemorySource {
    fn fetch(&self, key: &str) -> Option<Value> {
        self.documents.get(key).cloned()
    }
}

/// No candidate key produced a valid puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("Could not load puzzle for {date_key}.")]
    NotFound { date_key: String },
}

/// Load the puzzle for `date_key`, falling back to [`DEFAULT_PUZZLE_KEY`].
///
/// A candidate that is missing or fails validation is skipped.
pub fn load_puzzle<S>(source: &S, date_key: &str) -> Result<Puzzle, LoadError>
where
    S: PuzzleSource + ?Sized,
{
    for key in candidate_keys(date_key) {
        let Some(raw) = source.fetch(key) else {
            tracing::warn!(key, "no puzzle document");
            continue;
        };

        match validate(&raw) {
            Ok(puzzle) => {
                tracing::debug!(key, puzzle = puzzle.id(), "loaded puzzle");
                return Ok(puzzle);
            }
            Err(err) => tracing::warn!(key, %err, "rejected puzzle document"),
        }
    }

    Err(LoadError::NotFound {
        date_key: date_key.to_owned(),
    })
}

fn candidate_keys(date_key: &str) -> impl Iterator<Item = &str> {
    let fallback = (date_key != DEFAULT_PUZZLE_KEY).then_some(DEFAULT_PUZZLE_KEY);
    std::iter::once(date_key).chain(fallback)
}

/// Today's local calendar day as `YYYY-MM-DD`.
#[must_use]
pub fn today_key() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// The requested key when present and non-blank, otherwise today.
#[must_use]
pub fn resolve_date_key(requested: Option<&str>) -> String {
    match requested.map(str::trim) {
        Some(key) if !key.is_empty() => key.to_owned(),
        _ => today_key(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::tests::fixture_json;

    #[test]
    fn test_primary_key() {
        let source = MemorySource::new()
            .with_document("2026-03-01", fixture_json(Some("2026-03-01")))
            .with_document(DEFAULT_PUZZLE_KEY, fixture_json(Some(DEFAULT_PUZZLE_KEY)));

        let puzzle = load_puzzle(&source, "2026-03-01").unwrap();
        assert_eq!(puzzle.date(), Some("2026-03-01"));
    }

    #[test]
    fn test_missing_falls_back() {
        let source = MemorySource::new()
            .with_document(DEFAULT_PUZZLE_KEY, fixture_json(Some(DEFAULT_PUZZLE_KEY)));

        let puzzle = load_puzzle(&source, "2030-01-01").unwrap();
        assert_eq!(puzzle.date(), Some(DEFAULT_PUZZLE_KEY));
    }

    #[test]
    fn test_invalid_falls_back() {
        let source = MemorySource::new()
            .with_document("2026-03-01", serde_json::json!({ "version": 2 }))
            .with_document(DEFAULT_PUZZLE_KEY, fixture_json(Some(DEFAULT_PUZZLE_KEY)));

        let puzzle = load_puzzle(&source, "2026-03-01").unwrap();
        assert_eq!(puzzle.date(), Some(DEFAULT_PUZZLE_KEY));
    }

    #[test]
    fn test_nothing_usable() {
        let source = MemorySource::new();
        assert!(source.is_empty());

        let err = load_puzzle(&source, "2026-03-01").unwrap_err();
        assert_eq!(err.to_string(), "Could not load puzzle for 2026-03-01.");
    }

    #[test]
    fn test_default_key_tried_once() {
        use std::cell::Cell;

        let calls = Cell::new(0);
        let source = |_: &str| -> Option<Value> {
            calls.set(calls.get() + 1);
            None
        };

        assert!(load_puzzle(&source, DEFAULT_PUZZLE_KEY).is_err());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_closure_source() {
        let source = |key: &str| (key == DEFAULT_PUZZLE_KEY).then(|| fixture_json(None));
        assert!(load_puzzle(&source, "anything").is_ok());
    }

    #[test]
    fn test_resolve_date_key() {
        assert_eq!(resolve_date_key(Some("2026-02-17")), "2026-02-17");

        let today = resolve_date_key(None);
        assert_eq!(today.len(), 10);
        assert_eq!(&today[4..5], "-");
        assert_eq!(&today[7..8], "-");
        assert_eq!(resolve_date_key(Some("  ")), today_key());
    }
}
