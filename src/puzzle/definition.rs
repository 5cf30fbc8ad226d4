//! Validated puzzle types.
//!
//! A `Puzzle` only ever comes out of the validator, so everything here may
//! rely on the partition invariant: 16 unique items, 4 groups of 4, every
//! item in exactly one group.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::core::{GroupId, ItemId};

/// Tiles on a board.
pub const ITEM_COUNT: usize = 16;

/// Groups in a puzzle.
pub const GROUP_COUNT: usize = 4;

/// Tiles in a group (and in a guess).
pub const GROUP_SIZE: usize = 4;

/// Display color of a group, in ascending difficulty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupColor {
    Yellow,
    Green,
    Blue,
    Purple,
}

impl GroupColor {
    /// The full palette.
    pub const ALL: [GroupColor; 4] = [
        GroupColor::Yellow,
        GroupColor::Green,
        GroupColor::Blue,
        GroupColor::Purple,
    ];

    /// Parse a wire color name.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }

    /// Wire name of the color.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GroupColor::Yellow => "yellow",
            GroupColor::Green => "green",
            GroupColor::Blue => "blue",
            GroupColor::Purple => "purple",
        }
    }
}

/// A single tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PuzzleItem {
    /// Unique within the puzzle.
    pub id: ItemId,
    /// Text shown on the tile.
    pub text: String,
}

/// A category of four tiles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleGroup {
    /// Unique within the puzzle.
    pub id: GroupId,
    /// Category name, hidden until the group is found.
    pub label: String,
    pub color: GroupColor,
    pub item_ids: [ItemId; GROUP_SIZE],
}

impl PuzzleGroup {
    /// Check whether an item belongs to this group.
    #[must_use]
    pub fn contains(&self, item: &str) -> bool {
        self.item_ids.iter().any(|id| id.as_str() == item)
    }

    /// Number of this group's items present in `selection`.
    #[must_use]
    pub fn overlap(&self, selection: &[ItemId]) -> usize {
        self.item_ids
            .iter()
            .filter(|id| selection.contains(id))
            .count()
    }

    /// Order-independent set equality with a selection of distinct ids.
    #[must_use]
    pub fn matches(&self, selection: &[ItemId]) -> bool {
        selection.len() == GROUP_SIZE && self.overlap(selection) == GROUP_SIZE
    }
}

/// A validated, immutable puzzle.
///
/// Shared by reference (`Arc<Puzzle>`) between every state of a session.
#[derive(Clone, Debug, Serialize)]
pub struct Puzzle {
    version: u8,
    id: String,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    items: Vec<PuzzleItem>,
    groups: Vec<PuzzleGroup>,
    /// Item id -> index of its owning group.
    #[serde(skip)]
    group_index: FxHashMap<ItemId, usize>,
}

impl PartialEq for Puzzle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.title == other.title
            && self.date == other.date
            && self.items == other.items
            && self.groups == other.groups
    }
}

impl Eq for Puzzle {}

impl Puzzle {
    /// The only document version understood.
    pub const VERSION: u8 = 1;

    /// Assemble a puzzle from parts the validator has already checked.
    pub(crate) fn from_validated(
        id: String,
        title: String,
        date: Option<String>,
        items: Vec<PuzzleItem>,
        groups: Vec<PuzzleGroup>,
    ) -> Self {
        let group_index = groups
            .iter()
            .enumerate()
            .flat_map(|(index, group)| group.item_ids.iter().map(move |id| (id.clone(), index)))
            .collect();

        Self {
            version: Self::VERSION,
            id,
            title,
            date,
            items,
            groups,
            group_index,
        }
    }

    #[must_use]
    pub fn version(&self) -> u8 {
        self.version
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Daily date key (`YYYY-MM-DD`), if the puzzle has one.
    #[must_use]
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// Items in declaration order.
    #[must_use]
    pub fn items(&self) -> &[PuzzleItem] {
        &self.items
    }

    /// Groups in declaration order.
    #[must_use]
    pub fn groups(&self) -> &[PuzzleGroup] {
        &self.groups
    }

    /// Item ids in declaration order.
    pub fn item_ids(&self) -> impl Iterator<Item = &ItemId> + '_ {
        self.items.iter().map(|item| &item.id)
    }

    /// Group ids in declaration order.
    pub fn group_ids(&self) -> impl Iterator<Item = &GroupId> + '_ {
        self.groups.iter().map(|group| &group.id)
    }

    /// Look up an item by raw id.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&PuzzleItem> {
        self.items.iter().find(|item| item.id.as_str() == id)
    }

    /// Resolve a raw id to an `ItemId` of this puzzle.
    #[must_use]
    pub fn item_id(&self, id: &str) -> Option<ItemId> {
        self.group_index.get_key_value(id).map(|(key, _)| key.clone())
    }

    /// Look up a group by raw id.
    #[must_use]
    pub fn group(&self, id: &str) -> Option<&PuzzleGroup> {
        self.groups.iter().find(|group| group.id.as_str() == id)
    }

    /// Resolve a raw id to a `GroupId` of this puzzle.
    #[must_use]
    pub fn group_id(&self, id: &str) -> Option<GroupId> {
        self.group(id).map(|group| group.id.clone())
    }

    /// The group an item belongs to.
    #[must_use]
    pub fn group_of(&self, item: &str) -> Option<&PuzzleGroup> {
        self.group_index.get(item).map(|&index| &self.groups[index])
    }

    /// Check whether an id names an item of this puzzle.
    #[must_use]
    pub fn contains_item(&self, item: &str) -> bool {
        self.group_index.contains_key(item)
    }
}
