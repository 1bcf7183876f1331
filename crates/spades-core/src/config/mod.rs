//! Game and storage constants.
//!
//! This module groups the fixed numbers of the scoring rules, the key layout
//! used on top of the key-value store, and score board layout settings.

/// Scoring rule constants.
pub mod rules {
    /// Number of seats at the table.
    pub const SEATS: usize = 4;

    /// Tricks dealt out in every round (52 cards / 4 players).
    pub const TRICKS_PER_ROUND: u32 = 13;

    /// Points per bid trick when a team makes its contract.
    pub const POINTS_PER_TRICK: i32 = 10;

    /// Bonus (or penalty) for a nil bid.
    pub const NIL_BONUS: i32 = 100;

    /// Bonus (or penalty) for a blind nil bid.
    pub const BLIND_NIL_BONUS: i32 = 200;

    /// Accumulated bags that trigger a penalty.
    pub const BAG_LIMIT: u32 = 10;

    /// Points deducted each time a team reaches `BAG_LIMIT` bags.
    pub const BAG_PENALTY: i32 = 100;
}

/// Key layout on the key-value store.
pub mod storage {
    /// Autosaved state of the running game.
    pub const LAST_GAME_STATE_KEY: &str = "lastGameState";

    /// Prefix for named save slots (`saveState:<name>`).
    pub const SAVE_STATE_PREFIX: &str = "saveState:";

    /// Index of all named save slots.
    pub const SAVE_INDEX_KEY: &str = "saveStates";
}

/// Score board layout.
pub mod board {
    /// Player names are cut to this many characters in the header.
    pub const NAME_WIDTH: usize = 8;

    /// Seat order of the player columns, team-mates side by side.
    pub const COLUMN_ORDER: [usize; 4] = [0, 3, 1, 2];
}
