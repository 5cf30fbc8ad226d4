//! Guess records and player feedback.
//!
//! Every submitted 4-tile guess is appended to the session's history as a
//! `GuessRecord`. The most recent transition may also leave a `Feedback`
//! message for the presentation layer.

use std::fmt;

use serde::{Serialize, Serializer};

use super::ids::{GroupId, ItemId};

/// How a submitted guess was judged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessOutcome {
    /// The four tiles form an unfound group.
    Correct,
    /// No unfound group shares more than two tiles with the guess.
    Wrong,
    /// Some unfound group shares exactly three tiles with the guess.
    OneAway,
}

impl GuessOutcome {
    /// Classify a wrong guess by its best overlap with any unfound group.
    #[must_use]
    pub fn from_max_overlap(max_overlap: usize) -> Self {
        if max_overlap == 3 {
            GuessOutcome::OneAway
        } else {
            GuessOutcome::Wrong
        }
    }

    /// Whether this guess cost a mistake.
    #[must_use]
    pub fn is_mistake(self) -> bool {
        !matches!(self, GuessOutcome::Correct)
    }
}

/// A submitted guess, as recorded in the history log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessRecord {
    /// 1-based position in the history.
    pub turn: u32,

    /// The four tiles in the order they were selected.
    pub item_ids: [ItemId; 4],

    /// How the guess was judged.
    pub outcome: GuessOutcome,

    /// The group found. Present only for correct guesses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
}

impl GuessRecord {
    /// Record a correct guess.
    #[must_use]
    pub fn correct(turn: u32, item_ids: [ItemId; 4], group_id: GroupId) -> Self {
        Self {
            turn,
            item_ids,
            outcome: GuessOutcome::Correct,
            group_id: Some(group_id),
        }
    }

    /// Record a wrong or one-away guess.
    #[must_use]
    pub fn miss(turn: u32, item_ids: [ItemId; 4], outcome: GuessOutcome) -> Self {
        debug_assert!(outcome.is_mistake());
        Self {
            turn,
            item_ids,
            outcome,
            group_id: None,
        }
    }
}

/// Short-lived feedback about the last transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Submit pressed without exactly four tiles selected.
    SelectFour,
    /// The selection is a group that was already found.
    AlreadyFound,
    /// A group was found and the game continues.
    Correct,
    /// The last group was found.
    Solved,
    /// Wrong guess, three of four tiles share a group.
    OneAway,
    /// The mistake budget ran out.
    OutOfGuesses,
}

impl Feedback {
    /// The message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Feedback::SelectFour => "Select 4 tiles.",
            Feedback::AlreadyFound => "Already found.",
            Feedback::Correct => "Correct.",
            Feedback::Solved => "Solved!",
            Feedback::OneAway => "One away…",
            Feedback::OutOfGuesses => "Out of guesses.",
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for Feedback {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}
