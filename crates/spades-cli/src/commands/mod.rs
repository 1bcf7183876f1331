//! CLI command implementations.
//!
//! Each command opens the stored game, runs one operation and lets the
//! session autosave.

pub mod game;
pub mod round;
pub mod saves;
