//! Spades scoring rules.
//!
//! Pure functions only: nothing in here touches storage or the live game.

mod bid;
mod scoring;
mod team;

pub use bid::*;
pub use scoring::*;
pub use team::*;
