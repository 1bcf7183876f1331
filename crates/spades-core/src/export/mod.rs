//! Text output for the score board and save names.

mod board;

pub use board::*;
