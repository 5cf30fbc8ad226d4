//! State transitions for a puzzle session.
//!
//! Every operation borrows a `GameState` and returns a new one:
//! - `with_config` / `new`: start a session
//! - `toggle_select`, `clear_selection`: edit the selection
//! - `submit_guess`: judge four tiles
//! - `shuffle_remaining_tiles`: re-order unfound tiles
//! - `reset`: start over with the same puzzle and config
//!
//! Once a session is `Won` or `Lost` every transition except `reset`
//! returns an unchanged copy.

use std::sync::Arc;

use crate::core::{
    hash_to_seed, reshuffle_seed, shuffle_stable, Feedback, GameConfig, GameState, GameStatus,
    GuessOutcome, GuessRecord, ItemId, Mulberry32, PlayerAction, Selection,
};
use crate::puzzle::{Puzzle, GROUP_SIZE};

impl GameState {
    /// Start a session with the default config.
    #[must_use]
    pub fn new(puzzle: Arc<Puzzle>) -> Self {
        Self::with_config(puzzle, GameConfig::default())
    }

    /// Start a session.
    ///
    /// The board is the puzzle's items, in declaration order, shuffled by the
    /// seed derived from the config's seed key (or the puzzle date, or id).
    #[must_use]
    pub fn with_config(puzzle: Arc<Puzzle>, config: GameConfig) -> Self {
        let seed_key = config.seed_key_for(&puzzle);
        let seed = hash_to_seed(seed_key);

        let declared: Vec<ItemId> = puzzle.item_ids().cloned().collect();
        let board = shuffle_stable(&declared, &mut Mulberry32::new(seed));

        tracing::debug!(puzzle = puzzle.id(), seed_key, seed, "started session");

        Self {
            seed,
            board_item_ids: board.into_iter().collect(),
            selected_item_ids: Selection::new(),
            found_group_ids: im::Vector::new(),
            mistakes_made: 0,
            mistakes_allowed: config.mistakes_allowed,
            status: GameStatus::Playing,
            shuffle_count: 0,
            guess_history: im::Vector::new(),
            last_message: None,
            last_found_group_id: None,
            puzzle,
            config,
        }
    }

    /// Start over with the same puzzle and config.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self::with_config(Arc::clone(&self.puzzle), self.config.clone())
    }

    /// Select a tile, or deselect it if already selected.
    ///
    /// No-op when the game is over, the tile is in a found group, or four
    /// tiles are already selected.
    #[must_use]
    pub fn toggle_select(&self, item: &ItemId) -> Self {
        debug_assert!(
            self.puzzle.contains_item(item.as_str()),
            "item {item} is not part of puzzle {}",
            self.puzzle.id()
        );

        if !self.is_playing() || self.is_item_found(item.as_str()) {
            return self.clone();
        }

        let position = self.selected_item_ids.iter().position(|id| id == item);
        if position.is_none() && self.selected_item_ids.len() >= GROUP_SIZE {
            return self.clone();
        }

        let mut next = self.clone();
        match position {
            Some(index) => {
                next.selected_item_ids.remove(index);
            }
            None => next.selected_item_ids.push(item.clone()),
        }
        next.clear_feedback();
        next
    }

    /// Deselect everything.
    #[must_use]
    pub fn clear_selection(&self) -> Self {
        let mut next = self.clone();
        if self.is_playing() {
            next.selected_item_ids.clear();
            next.clear_feedback();
        }
        next
    }

    /// Judge the current selection.
    ///
    /// Outcomes, in order of precedence:
    /// 1. fewer or more than four selected: message only
    /// 2. an already-found group: selection cleared, nothing counted
    /// 3. an unfound group: group found, won after the last one
    /// 4. anything else: one mistake, `OneAway` when an unfound group shares
    ///    exactly three tiles, lost (with the full solution revealed) when
    ///    the budget runs out
    #[must_use]
    pub fn submit_guess(&self) -> Self {
        let mut next = self.clone();
        if !self.is_playing() {
            return next;
        }

        let selection: [ItemId; GROUP_SIZE] = match self.selected_item_ids.as_slice() {
            [a, b, c, d] => [a.clone(), b.clone(), c.clone(), d.clone()],
            _ => {
                next.last_message = Some(Feedback::SelectFour);
                return next;
            }
        };
        let groups = self.puzzle.groups();

        let duplicate = groups
            .iter()
            .any(|group| self.is_group_found(group.id.as_str()) && group.matches(&selection));
        if duplicate {
            next.selected_item_ids.clear();
            next.last_message = Some(Feedback::AlreadyFound);
            return next;
        }

        let turn = self.guess_history.len() as u32 + 1;
        next.selected_item_ids.clear();

        let found = groups
            .iter()
            .find(|group| !self.is_group_found(group.id.as_str()) && group.matches(&selection));

        if let Some(group) = found {
            next.found_group_ids.push_back(group.id.clone());
            next.guess_history
                .push_back(GuessRecord::correct(turn, selection, group.id.clone()));
            next.last_found_group_id = Some(group.id.clone());

            if next.found_group_ids.len() == groups.len() {
                next.status = GameStatus::Won;
                next.last_message = Some(Feedback::Solved);
                tracing::info!(puzzle = self.puzzle.id(), turn, mistakes = self.mistakes_made, "puzzle solved");
            } else {
                next.last_message = Some(Feedback::Correct);
                tracing::debug!(group = %group.id, turn, "group found");
            }
            return next;
        }

        let max_overlap = groups
            .iter()
            .filter(|group| !self.is_group_found(group.id.as_str()))
            .map(|group| group.overlap(&selection))
            .max()
            .unwrap_or(0);
        let outcome = GuessOutcome::from_max_overlap(max_overlap);

        next.mistakes_made += 1;
        next.guess_history
            .push_back(GuessRecord::miss(turn, selection, outcome));
        next.last_found_group_id = None;

        if next.mistakes_made >= next.mistakes_allowed {
            next.status = GameStatus::Lost;
            next.last_message = Some(Feedback::OutOfGuesses);
            next.found_group_ids = self.puzzle.group_ids().cloned().collect();
            tracing::info!(puzzle = self.puzzle.id(), turn, "out of guesses");
        } else {
            next.last_message = match outcome {
                GuessOutcome::OneAway => Some(Feedback::OneAway),
                _ => None,
            };
            tracing::debug!(?outcome, turn, mistakes = next.mistakes_made, "wrong guess");
        }
        next
    }

    /// Re-order the tiles that are not in found groups.
    ///
    /// Found tiles keep their board positions. The `n`-th shuffle of a
    /// session always produces the same order.
    #[must_use]
    pub fn shuffle_remaining_tiles(&self) -> Self {
        let mut next = self.clone();
        if !self.is_playing() {
            return next;
        }

        let ordinal = self.shuffle_count + 1;
        let slots: Vec<usize> = self
            .board_item_ids
            .iter()
            .enumerate()
            .filter(|(_, id)| !self.is_item_found(id.as_str()))
            .map(|(slot, _)| slot)
            .collect();
        let remaining: Vec<ItemId> = slots
            .iter()
            .map(|&slot| self.board_item_ids[slot].clone())
            .collect();

        let mut rng = Mulberry32::new(reshuffle_seed(self.seed, ordinal));
        for (slot, id) in slots.into_iter().zip(shuffle_stable(&remaining, &mut rng)) {
            next.board_item_ids.set(slot, id);
        }

        next.shuffle_count = ordinal;
        next.clear_feedback();
        tracing::debug!(ordinal, tiles = remaining.len(), "shuffled remaining tiles");
        next
    }

    /// Apply a single player action.
    #[must_use]
    pub fn apply(&self, action: &PlayerAction) -> Self {
        match action {
            PlayerAction::ToggleSelect { item_id } => self.toggle_select(item_id),
            PlayerAction::ClearSelection => self.clear_selection(),
            PlayerAction::SubmitGuess => self.submit_guess(),
            PlayerAction::ShuffleRemaining => self.shuffle_remaining_tiles(),
        }
    }

    /// Apply a sequence of actions in order.
    #[must_use]
    pub fn replay<'a, I>(&self, actions: I) -> Self
    where
        I: IntoIterator<Item = &'a PlayerAction>,
    {
        actions
            .into_iter()
            .fold(self.clone(), |state, action| state.apply(action))
    }
}
