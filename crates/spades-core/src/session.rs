//! The running game and its autosave.
//!
//! `GameSession` owns the live `GameState` and the save store. Every
//! mutation runs the pure transition on the state first and then writes the
//! snapshot to the last-state key before returning. Autosave failures are
//! logged and never undo or block the in-memory change.

use chrono::Local;
use tracing::{debug, info, warn};

use crate::config::rules::SEATS;
use crate::error::{Result, ValidationError};
use crate::export::default_slot_name;
use crate::game::{GameState, Round};
use crate::rules::Bid;
use crate::storage::{KeyValueStore, SaveSlotInfo, SaveStateStore};

pub struct GameSession<S: KeyValueStore> {
    state: GameState,
    saves: SaveStateStore<S>,
}

impl<S: KeyValueStore> GameSession<S> {
    /// Restore the last autosaved game, or start a default one.
    pub fn open(store: S) -> Self {
        let saves = SaveStateStore::new(store);
        let state = match saves.load_last() {
            Ok(Some(state)) => {
                info!(
                    "Restored last game ({} rounds, points {:?})",
                    state.round_history().len(),
                    state.points()
                );
                state
            }
            Ok(None) => {
                debug!("No saved game found, starting a new one");
                GameState::new()
            }
            Err(e) => {
                warn!("Failed to restore last game: {}, starting a new one", e);
                GameState::new()
            }
        };
        Self { state, saves }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn saves(&self) -> &SaveStateStore<S> {
        &self.saves
    }

    /// Score a round and autosave.
    pub fn apply_round(
        &mut self,
        bids: &[Option<Bid>; SEATS],
        tricks: &[Option<u8>; SEATS],
    ) -> std::result::Result<Round, ValidationError> {
        let round = *self.state.apply_round(bids, tricks)?;
        debug!(
            "Round {} scored {:?}",
            self.state.round_history().len(),
            round.deltas().scores()
        );
        self.autosave();
        Ok(round)
    }

    /// Delete the rounds selected by `mask` and autosave.
    pub fn delete_rounds(&mut self, mask: &[bool]) {
        self.state.delete_rounds(mask);
        self.autosave();
    }

    pub fn rename_player(&mut self, seat: usize, name: impl Into<String>) -> Result<()> {
        self.state.rename_player(seat, name)?;
        self.autosave();
        Ok(())
    }

    /// Reset to a fresh game.
    ///
    /// Keeping the players autosaves the empty game so the names survive a
    /// restart; a full reset drops the autosaved state instead.
    pub fn new_game(&mut self, keep_players: bool) {
        self.state.reset(keep_players);
        if keep_players {
            self.autosave();
        } else if let Err(e) = self.saves.clear_last() {
            warn!("Failed to clear last game state: {}", e);
        }
        info!("Started a new game");
    }

    /// Snapshot the current game under `name`, or today's date if `name` is
    /// missing or blank.
    pub fn save_as(&mut self, name: Option<&str>) -> Result<SaveSlotInfo> {
        let name = match name.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => default_slot_name(Local::now().date_naive()),
        };
        self.saves.save(&name, &self.state)
    }

    /// Replace the current game with a saved one.
    pub fn load(&mut self, name: &str) -> Result<()> {
        self.state = self.saves.load(name)?;
        self.autosave();
        Ok(())
    }

    pub fn list_saves(&self) -> Result<Vec<SaveSlotInfo>> {
        self.saves.list()
    }

    pub fn delete_save(&mut self, name: &str) -> Result<bool> {
        self.saves.delete(name)
    }

    /// Final autosave; returns the underlying store.
    pub fn close(mut self) -> S {
        self.autosave();
        self.saves.into_inner()
    }

    fn autosave(&mut self) {
        if let Err(e) = self.saves.save_last(&self.state) {
            warn!("Autosave failed: {}", e);
        }
    }
}
