//! Game state and score history.

mod round;
mod state;

pub use round::Round;
pub use state::{GameState, ScoreLine, Standings};
