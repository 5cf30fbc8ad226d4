//! Player actions.
//!
//! Every transition a frontend can drive is also available as a
//! `PlayerAction` value. A recorded list of actions, applied in order to the
//! same initial state, reproduces a session exactly (see
//! `GameState::replay`).

use serde::Serialize;

use super::ids::ItemId;

/// One input from the player.
///
/// ```
/// use rain_connections::core::PlayerAction;
///
/// let submit = PlayerAction::SubmitGuess;
/// let json = serde_json::to_value(&submit).unwrap();
/// assert_eq!(json, serde_json::json!({ "type": "submit_guess" }));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlayerAction {
    /// Select or deselect a tile.
    ToggleSelect {
        #[serde(rename = "itemId")]
        item_id: ItemId,
    },
    /// Drop the whole selection.
    ClearSelection,
    /// Submit the four selected tiles.
    SubmitGuess,
    /// Re-shuffle tiles that are not yet found.
    ShuffleRemaining,
}

impl PlayerAction {
    /// Shorthand for a toggle.
    #[must_use]
    pub fn toggle(item_id: &ItemId) -> Self {
        PlayerAction::ToggleSelect {
            item_id: item_id.clone(),
        }
    }
}
