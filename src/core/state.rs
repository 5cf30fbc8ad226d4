//! Game state for a single puzzle session.
//!
//! ## GameState
//!
//! Everything the presentation layer needs to render a session:
//! - Board order, current selection, found groups
//! - Mistake counters and status
//! - Guess history and transient feedback
//!
//! States are values. Transitions (see `rules::engine`) borrow a state and
//! return a new one, so any earlier state can be kept for undo or replay.
//! Collections use `im` persistent structures to keep those copies cheap.

use std::sync::Arc;

use im::Vector;
use serde::Serialize;
use smallvec::SmallVec;

use super::config::GameConfig;
use super::guess::{Feedback, GuessRecord};
use super::ids::{GroupId, ItemId};
use crate::puzzle::{Puzzle, PuzzleGroup, GROUP_SIZE};

/// Where a session stands. `Won` and `Lost` are terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// Check whether the session is over.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// Selection buffer; never longer than a group.
pub type Selection = SmallVec<[ItemId; GROUP_SIZE]>;

/// Complete state of one session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub(crate) puzzle: Arc<Puzzle>,

    /// Parameters the session was started with (reused by reset).
    #[serde(skip)]
    pub(crate) config: GameConfig,

    pub(crate) seed: u32,

    /// On-screen order of all 16 items.
    pub(crate) board_item_ids: Vector<ItemId>,

    /// Selected items in click order.
    pub(crate) selected_item_ids: Selection,

    /// Found groups in solve order (all groups, puzzle order, after a loss).
    pub(crate) found_group_ids: Vector<GroupId>,

    pub(crate) mistakes_made: u32,
    pub(crate) mistakes_allowed: u32,
    pub(crate) status: GameStatus,

    /// Manual re-shuffles so far.
    pub(crate) shuffle_count: u32,

    pub(crate) guess_history: Vector<GuessRecord>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) last_message: Option<Feedback>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) last_found_group_id: Option<GroupId>,
}

impl GameState {
    // === Accessors ===

    #[must_use]
    pub fn puzzle(&self) -> &Arc<Puzzle> {
        &self.puzzle
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    #[must_use]
    pub fn board_item_ids(&self) -> &Vector<ItemId> {
        &self.board_item_ids
    }

    #[must_use]
    pub fn selected_item_ids(&self) -> &[ItemId] {
        &self.selected_item_ids
    }

    #[must_use]
    pub fn found_group_ids(&self) -> &Vector<GroupId> {
        &self.found_group_ids
    }

    #[must_use]
    pub fn mistakes_made(&self) -> u32 {
        self.mistakes_made
    }

    #[must_use]
    pub fn mistakes_allowed(&self) -> u32 {
        self.mistakes_allowed
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn shuffle_count(&self) -> u32 {
        self.shuffle_count
    }

    #[must_use]
    pub fn guess_history(&self) -> &Vector<GuessRecord> {
        &self.guess_history
    }

    #[must_use]
    pub fn last_message(&self) -> Option<Feedback> {
        self.last_message
    }

    #[must_use]
    pub fn last_found_group_id(&self) -> Option<&GroupId> {
        self.last_found_group_id.as_ref()
    }

    // === Derived views ===

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Mistakes left before the game is lost.
    #[must_use]
    pub fn remaining_mistakes(&self) -> u32 {
        self.mistakes_allowed.saturating_sub(self.mistakes_made)
    }

    /// Check whether a group has been found.
    #[must_use]
    pub fn is_group_found(&self, group: &str) -> bool {
        self.found_group_ids.iter().any(|id| id.as_str() == group)
    }

    /// Check whether an item is locked in a found group.
    #[must_use]
    pub fn is_item_found(&self, item: &str) -> bool {
        self.puzzle
            .group_of(item)
            .is_some_and(|group| self.is_group_found(group.id.as_str()))
    }

    #[must_use]
    pub fn is_selected(&self, item: &str) -> bool {
        self.selected_item_ids.iter().any(|id| id.as_str() == item)
    }

    /// Tiles still on the grid, in board order.
    pub fn remaining_item_ids(&self) -> impl Iterator<Item = &ItemId> + '_ {
        self.board_item_ids
            .iter()
            .filter(|id| !self.is_item_found(id.as_str()))
    }

    /// Found groups, in the order they were found.
    pub fn found_groups(&self) -> impl Iterator<Item = &PuzzleGroup> + '_ {
        self.found_group_ids
            .iter()
            .filter_map(|id| self.puzzle.group(id.as_str()))
    }

    pub(crate) fn clear_feedback(&mut self) {
        self.last_message = None;
        self.last_found_group_id = None;
    }
}
