use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::game::GameState;

/// Index entry describing one named save slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSlotInfo {
    pub name: String,
    pub saved_at: DateTime<Utc>,
    /// Rounds played in the saved game.
    pub rounds: usize,
    pub points: [i32; 2],
}

impl SaveSlotInfo {
    pub fn describe(name: &str, state: &GameState, saved_at: DateTime<Utc>) -> Self {
        Self {
            name: name.to_string(),
            saved_at,
            rounds: state.round_history().len(),
            points: state.points(),
        }
    }
}

/// Serialize a game snapshot.
pub fn encode_state(state: &GameState) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(state)?)
}

/// Deserialize a game snapshot.
///
/// Standings are re-derived from the history; snapshots written by older
/// versions may carry totals that disagree with it.
pub fn decode_state(bytes: &[u8]) -> Result<GameState> {
    let mut state: GameState = serde_json::from_slice(bytes)?;
    if state.recompute() {
        warn!(
            "Snapshot standings disagreed with its history, using recomputed {:?}",
            state.points()
        );
    }
    Ok(state)
}

pub fn encode_index(index: &[SaveSlotInfo]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(index)?)
}

pub fn decode_index(bytes: &[u8]) -> Result<Vec<SaveSlotInfo>> {
    Ok(serde_json::from_slice(bytes)?)
}
