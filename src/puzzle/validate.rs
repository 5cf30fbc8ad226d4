//! Puzzle document validation.
//!
//! Turns an untrusted JSON document into a trusted [`Puzzle`]. Checks run in
//! a fixed order and stop at the first violation:
//!
//! 1. top level is an object
//! 2. `version` is the number 1
//! 3. `id` and `title` are non-empty strings
//! 4. `items` is an array of `{id, text}` objects, exactly 16, unique ids
//! 5. `groups` is an array of objects (checked `itemIds`, `color`, `id`,
//!    `label`), exactly 4, unique ids
//! 6. every group item id names a known item, and no item is in two groups
//! 7. the groups cover all 16 items
//!
//! Nothing downstream re-checks these invariants.

use rustc_hash::FxHashSet;
use serde_json::{Map, Value};
use thiserror::Error;

use super::definition::{
    GroupColor, Puzzle, PuzzleGroup, PuzzleItem, GROUP_COUNT, GROUP_SIZE, ITEM_COUNT,
};
use crate::core::{GroupId, ItemId};

/// First invariant violation found in a puzzle document.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid puzzle JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid {path}: expected object")]
    NotAnObject { path: String },

    #[error("Invalid puzzle.version: expected 1")]
    UnsupportedVersion,

    #[error("Invalid {path}: expected non-empty string")]
    EmptyString { path: String },

    #[error("Invalid {path}: expected array")]
    NotAnArray { path: String },

    #[error("Invalid {path}: expected string[4]")]
    GroupItemIds { path: String },

    #[error("Invalid {path}: expected yellow|green|blue|purple")]
    UnknownColor { path: String },

    #[error("Invalid puzzle.items: expected length 16, found {found}")]
    ItemCount { found: usize },

    #[error("Invalid puzzle.groups: expected length 4, found {found}")]
    GroupCount { found: usize },

    #[error("Duplicate item id: {id}")]
    DuplicateItem { id: String },

    #[error("Duplicate group id: {id}")]
    DuplicateGroup { id: String },

    #[error("Group references unknown item id: {id}")]
    UnknownItem { id: String },

    #[error("Item id used in multiple groups: {id}")]
    SharedItem { id: String },

    #[error("Invalid groups: expected groups to cover all 16 items exactly once")]
    IncompleteCover { covered: usize },
}

impl ValidationError {
    /// Path or id of the offending field, when the error names one.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        match self {
            ValidationError::NotAnObject { path }
            | ValidationError::EmptyString { path }
            | ValidationError::NotAnArray { path }
            | ValidationError::GroupItemIds { path }
            | ValidationError::UnknownColor { path } => Some(path),
            ValidationError::DuplicateItem { id }
            | ValidationError::DuplicateGroup { id }
            | ValidationError::UnknownItem { id }
            | ValidationError::SharedItem { id } => Some(id),
            ValidationError::UnsupportedVersion => Some("puzzle.version"),
            ValidationError::ItemCount { .. } => Some("puzzle.items"),
            ValidationError::GroupCount { .. } => Some("puzzle.groups"),
            ValidationError::Json(_) | ValidationError::IncompleteCover { .. } => None,
        }
    }
}

impl Puzzle {
    /// Parse and validate a JSON puzzle document.
    pub fn from_json_str(json: &str) -> Result<Self, ValidationError> {
        let raw: Value = serde_json::from_str(json)?;
        validate(&raw)
    }
}

/// Validate an untrusted document into a `Puzzle`.
pub fn validate(raw: &Value) -> Result<Puzzle, ValidationError> {
    let root = as_object(raw, "puzzle")?;

    // 1.0 is the same JSON number as 1
    if root.get("version").and_then(Value::as_f64) != Some(f64::from(Puzzle::VERSION)) {
        return Err(ValidationError::UnsupportedVersion);
    }

    let id = non_empty_string(root.get("id"), "puzzle.id")?.to_owned();
    let title = non_empty_string(root.get("title"), "puzzle.title")?.to_owned();
    let date = root.get("date").and_then(Value::as_str).map(str::to_owned);

    let items = parse_items(root.get("items"))?;
    let item_ids: FxHashSet<&str> = items.iter().map(|item| item.id.as_str()).collect();

    let groups = parse_groups(root.get("groups"))?;
    check_partition(&groups, &item_ids)?;

    Ok(Puzzle::from_validated(id, title, date, items, groups))
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, ValidationError> {
    value.as_object().ok_or_else(|| ValidationError::NotAnObject {
        path: path.to_owned(),
    })
}

fn as_array<'a>(value: Option<&'a Value>, path: &str) -> Result<&'a [Value], ValidationError> {
    value
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| ValidationError::NotAnArray {
            path: path.to_owned(),
        })
}

fn non_empty_string<'a>(value: Option<&'a Value>, path: &str) -> Result<&'a str, ValidationError> {
    match value.and_then(Value::as_str) {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(ValidationError::EmptyString {
            path: path.to_owned(),
        }),
    }
}

fn parse_items(value: Option<&Value>) -> Result<Vec<PuzzleItem>, ValidationError> {
    let entries = as_array(value, "items")?;

    let items = entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| -> Result<PuzzleItem, ValidationError> {
            let obj = as_object(entry, &format!("items[{idx}]"))?;
            Ok(PuzzleItem {
                id: ItemId::new(non_empty_string(obj.get("id"), &format!("items[{idx}].id"))?),
                text: non_empty_string(obj.get("text"), &format!("items[{idx}].text"))?.to_owned(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if items.len() != ITEM_COUNT {
        return Err(ValidationError::ItemCount { found: items.len() });
    }

    let mut seen = FxHashSet::default();
    for item in &items {
        if !seen.insert(item.id.as_str()) {
            return Err(ValidationError::DuplicateItem {
                id: item.id.to_string(),
            });
        }
    }

    Ok(items)
}

fn parse_group(entry: &Value, idx: usize) -> Result<PuzzleGroup, ValidationError> {
    let obj = as_object(entry, &format!("groups[{idx}]"))?;

    let bad_item_ids = || ValidationError::GroupItemIds {
        path: format!("groups[{idx}].itemIds"),
    };
    let raw_ids = obj
        .get("itemIds")
        .and_then(Value::as_array)
        .filter(|ids| ids.len() == GROUP_SIZE)
        .ok_or_else(bad_item_ids)?;
    let strings: Vec<&str> = raw_ids
        .iter()
        .map(Value::as_str)
        .collect::<Option<_>>()
        .ok_or_else(bad_item_ids)?;
    let item_ids = [
        ItemId::new(strings[0]),
        ItemId::new(strings[1]),
        ItemId::new(strings[2]),
        ItemId::new(strings[3]),
    ];

    let color_path = format!("groups[{idx}].color");
    let color = GroupColor::parse(non_empty_string(obj.get("color"), &color_path)?)
        .ok_or(ValidationError::UnknownColor { path: color_path })?;

    let id = GroupId::new(non_empty_string(obj.get("id"), &format!("groups[{idx}].id"))?);
    let label = non_empty_string(obj.get("label"), &format!("groups[{idx}].label"))?.to_owned();

    Ok(PuzzleGroup {
        id,
        label,
        color,
        item_ids,
    })
}

fn parse_groups(value: Option<&Value>) -> Result<Vec<PuzzleGroup>, ValidationError> {
    let groups = as_array(value, "groups")?
        .iter()
        .enumerate()
        .map(|(idx, entry)| parse_group(entry, idx))
        .collect::<Result<Vec<_>, _>>()?;

    if groups.len() != GROUP_COUNT {
        return Err(ValidationError::GroupCount {
            found: groups.len(),
        });
    }

    let mut seen = FxHashSet::default();
    for group in &groups {
        if !seen.insert(group.id.as_str()) {
            return Err(ValidationError::DuplicateGroup {
                id: group.id.to_string(),
            });
        }
    }

    Ok(groups)
}

fn check_partition(
    groups: &[PuzzleGroup],
    item_ids: &FxHashSet<&str>,
) -> Result<(), ValidationError> {
    let mut covered = FxHashSet::default();

    for id in groups.iter().flat_map(|group| group.item_ids.iter()) {
        if !item_ids.contains(id.as_str()) {
            return Err(ValidationError::UnknownItem { id: id.to_string() });
        }
        if !covered.insert(id.as_str()) {
            return Err(ValidationError::SharedItem { id: id.to_string() });
        }
    }

    if covered.len() != ITEM_COUNT {
        return Err(ValidationError::IncompleteCover {
            covered: covered.len(),
        });
    }

    Ok(())
}
