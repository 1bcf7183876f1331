//! # spades-core
//!
//! Core library for the Spades score keeper.
//!
//! This crate provides:
//! - Round scoring rules (bids, tricks, nil bonuses, bags)
//! - The game state aggregate with its score history
//! - Named save slots and autosave over a key-value store
//! - Text rendering of the score board

pub mod config;
pub mod error;
pub mod export;
pub mod game;
pub mod rules;
pub mod session;
pub mod storage;

// Re-export from error module
pub use error::{Error, Result, ValidationError};

// Re-export from rules module
pub use rules::{
    BagWrap, Bid, RoundDeltas, Team, ValidRound, apply_bag_wrap, compute_round_deltas,
    team_for_seat, validate_round,
};

// Re-export from game module
pub use game::{GameState, Round, ScoreLine, Standings};

// Re-export from storage module
pub use storage::{FileStore, KeyValueStore, MemoryStore, SaveSlotInfo, SaveStateStore};

// Re-export from session module
pub use session::GameSession;

// Re-export from export module
pub use export::{default_slot_name, format_score_board, format_standings};
