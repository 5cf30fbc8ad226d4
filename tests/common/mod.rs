//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use rain_connections::{GameConfig, GameState, ItemId, Puzzle};
use serde_json::{json, Value};

/// Groups g1..g4 = a-d, e-h, i-l, m-p.
pub fn fixture_json() -> Value {
    let items: Vec<Value> = "abcdefghijklmnop"
        .chars()
        .map(|c| json!({ "id": c.to_string(), "text": c.to_ascii_uppercase().to_string() }))
        .collect();

    json!({
        "version": 1,
        "id": "fixture",
        "title": "Fixture",
        "items": items,
        "groups": [
            { "id": "g1", "label": "G1", "color": "yellow", "itemIds": ["a", "b", "c", "d"] },
            { "id": "g2", "label": "G2", "color": "green", "itemIds": ["e", "f", "g", "h"] },
            { "id": "g3", "label": "G3", "color": "blue", "itemIds": ["i", "j", "k", "l"] },
            { "id": "g4", "label": "G4", "color": "purple", "itemIds": ["m", "n", "o", "p"] },
        ],
    })
}

pub fn fixture_puzzle() -> Arc<Puzzle> {
    Arc::new(rain_connections::puzzle::validate(&fixture_json()).unwrap())
}

pub fn start(seed_key: &str, mistakes_allowed: u32) -> GameState {
    GameState::with_config(
        fixture_puzzle(),
        GameConfig::new()
            .with_seed_key(seed_key)
            .with_mistakes_allowed(mistakes_allowed),
    )
}

pub fn item(state: &GameState, raw: &str) -> ItemId {
    state.puzzle().item_id(raw).unwrap()
}

/// Toggle each single-letter item id in `ids`, in order.
pub fn select(state: &GameState, ids: &str) -> GameState {
    ids.chars()
        .fold(state.clone(), |s, c| s.toggle_select(&item(&s, &c.to_string())))
}

pub fn guess(state: &GameState, ids: &str) -> GameState {
    select(state, ids).submit_guess()
}

pub fn found(state: &GameState) -> Vec<&str> {
    state.found_group_ids().iter().map(|g| g.as_str()).collect()
}
