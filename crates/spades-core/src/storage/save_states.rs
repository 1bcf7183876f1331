use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::config::storage::{LAST_GAME_STATE_KEY, SAVE_INDEX_KEY, SAVE_STATE_PREFIX};
use crate::error::{Error, Result};
use crate::game::GameState;
use crate::storage::format::{decode_index, decode_state, encode_index, encode_state};
use crate::storage::{KeyValueStore, SaveSlotInfo};

/// Named game snapshots plus the autosaved last state, on top of a
/// key-value store.
///
/// Slot data lives under `saveState:<name>`; `saveStates` holds the index
/// in save order.
#[derive(Debug, Clone)]
pub struct SaveStateStore<S> {
    store: S,
}

impl<S: KeyValueStore> SaveStateStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// All named slots, oldest save first.
    pub fn list(&self) -> Result<Vec<SaveSlotInfo>> {
        match self.store.get(SAVE_INDEX_KEY)? {
            Some(bytes) => decode_index(&bytes),
            None => Ok(Vec::new()),
        }
    }

    /// The index, or `None` if it cannot be read.
    fn readable_index(&self) -> Option<Vec<SaveSlotInfo>> {
        match self.list() {
            Ok(index) => Some(index),
            Err(e) => {
                warn!("Save state index unreadable, ignoring it: {}", e);
                None
            }
        }
    }

    /// Write `state` under `name`, replacing any slot with that name.
    pub fn save(&mut self, name: &str, state: &GameState) -> Result<SaveSlotInfo> {
        self.save_at(name, state, Utc::now())
    }

    pub fn save_at(
        &mut self,
        name: &str,
        state: &GameState,
        saved_at: DateTime<Utc>,
    ) -> Result<SaveSlotInfo> {
        // Data first so the index never points at a missing slot.
        self.store.set(&slot_key(name), &encode_state(state)?)?;

        let info = SaveSlotInfo::describe(name, state, saved_at);
        let mut index = self.readable_index().unwrap_or_default();
        let replaced = remove_named(&mut index, name);
        index.push(info.clone());
        self.store.set(SAVE_INDEX_KEY, &encode_index(&index)?)?;

        info!(
            "{} save state {:?} ({} rounds)",
            if replaced { "Overwrote" } else { "Created" },
            name,
            info.rounds
        );
        Ok(info)
    }

    pub fn load(&self, name: &str) -> Result<GameState> {
        let bytes = self
            .store
            .get(&slot_key(name))?
            .ok_or_else(|| Error::NotFound(name.to_string()))?;
        let state = decode_state(&bytes)?;
        debug!("Loaded save state {:?}", name);
        Ok(state)
    }

    /// Remove a slot. Returns `false` if no such slot existed.
    ///
    /// An unreadable index is left untouched; the slot data is still removed.
    pub fn delete(&mut self, name: &str) -> Result<bool> {
        let listed = match self.readable_index() {
            Some(mut index) => {
                let listed = remove_named(&mut index, name);
                if listed {
                    self.store.set(SAVE_INDEX_KEY, &encode_index(&index)?)?;
                }
                listed
            }
            None => false,
        };

        let key = slot_key(name);
        let stored = self.store.get(&key)?.is_some();
        self.store.remove(&key)?;

        if listed || stored {
            info!("Deleted save state {:?}", name);
        } else {
            debug!("Save state {:?} not present, nothing to delete", name);
        }
        Ok(listed || stored)
    }

    /// Autosaved state of the running game, if any.
    pub fn load_last(&self) -> Result<Option<GameState>> {
        self.store
            .get(LAST_GAME_STATE_KEY)?
            .map(|bytes| decode_state(&bytes))
            .transpose()
    }

    pub fn save_last(&mut self, state: &GameState) -> Result<()> {
        self.store.set(LAST_GAME_STATE_KEY, &encode_state(state)?)
    }

    pub fn clear_last(&mut self) -> Result<()> {
        self.store.remove(LAST_GAME_STATE_KEY)
    }
}

fn slot_key(name: &str) -> String {
    format!("{}{}", SAVE_STATE_PREFIX, name)
}

fn remove_named(index: &mut Vec<SaveSlotInfo>, name: &str) -> bool {
    let before = index.len();
    index.retain(|slot| slot.name != name);
    index.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Bid;
    use crate::storage::MemoryStore;

    fn create_store() -> SaveStateStore<MemoryStore> {
        SaveStateStore::new(MemoryStore::new())
    }

    fn play(state: &mut GameState, bids: [&str; 4], tricks: [u8; 4]) {
        let bids: [Option<Bid>; 4] = bids.map(|s| Some(s.parse().unwrap()));
        state.apply_round(&bids, &tricks.map(Some)).unwrap();
    }

    #[test]
    fn test_empty_store() {
        let store = create_store();
        assert!(store.list().unwrap().is_empty());
        assert!(store.load_last().unwrap().is_none());
        assert!(matches!(store.load("nope"), Err(Error::NotFound(name)) if name == "nope"));
    }

    #[test]
    fn test_save_then_load_survives_later_mutation() {
        let mut store = create_store();
        let mut state = GameState::new();
        play(&mut state, ["0", "3", "3", "7"], [0, 4, 3, 6]);

        store.save("friday", &state).unwrap();
        let saved = state.clone();
        play(&mut state, ["2", "3", "3", "1"], [4, 3, 3, 3]);
        state.rename_player(0, "Changed").unwrap();

        assert_eq!(store.load("friday").unwrap(), saved);
    }

    #[test]
    fn test_save_overwrites_and_moves_to_end() {
        let mut store = create_store();
        let mut state = GameState::new();
        store.save("a", &state).unwrap();
        store.save("b", &state).unwrap();

        play(&mut state, ["0", "3", "3", "7"], [0, 4, 3, 6]);
        store.save("a", &state).unwrap();

        let names: Vec<_> = store.list().unwrap().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(store.load("a").unwrap(), state);
        assert_eq!(store.list().unwrap()[1].rounds, 1);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut store = create_store();
        let state = GameState::new();
        store.save("keep", &state).unwrap();

        assert!(!store.delete("ghost").unwrap());
        assert_eq!(store.list().unwrap().len(), 1);
        assert_eq!(store.load("keep").unwrap(), state);
    }

    #[test]
    fn test_delete_removes_slot() {
        let mut store = create_store();
        store.save("gone", &GameState::new()).unwrap();

        assert!(store.delete("gone").unwrap());
        assert!(store.list().unwrap().is_empty());
        assert!(matches!(store.load("gone"), Err(Error::NotFound(_))));
        assert!(store.store().get("saveState:gone").unwrap().is_none());
    }

    #[test]
    fn test_corrupt_index_does_not_block_save_or_delete() {
        let mut store = create_store();
        store.store.set(SAVE_INDEX_KEY, b"{ broken").unwrap();
        let state = GameState::new();

        assert!(!store.delete("ghost").unwrap());

        let info = store.save("a", &state).unwrap();
        assert_eq!(info.name, "a");
        let names: Vec<_> = store.list().unwrap().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["a"]);
        assert_eq!(store.load("a").unwrap(), state);
    }

    #[test]
    fn test_delete_with_corrupt_index_removes_slot_data() {
        let mut store = create_store();
        store.save("gone", &GameState::new()).unwrap();
        store.store.set(SAVE_INDEX_KEY, b"[1, 2").unwrap();

        assert!(store.delete("gone").unwrap());
        assert!(matches!(store.load("gone"), Err(Error::NotFound(_))));
        assert!(store.delete("gone").is_ok());
    }

    #[test]
    fn test_last_state_is_separate_from_slots() {
        let mut store = create_store();
        let mut state = GameState::new();
        play(&mut state, ["0", "3", "3", "7"], [0, 4, 3, 6]);

        store.save_last(&state).unwrap();
        assert!(store.list().unwrap().is_empty());
        assert_eq!(store.load_last().unwrap(), Some(state));

        store.clear_last().unwrap();
        assert!(store.load_last().unwrap().is_none());
    }
}
