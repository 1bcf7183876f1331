use thiserror::Error;

/// Reasons a round cannot be applied.
///
/// Both are recoverable: the caller shows the message and the game state is
/// left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Fill in all bids and tricks before finishing the round.")]
    Incomplete,

    #[error("Tricks have to add up to 13 (got {total}).")]
    TrickSum { total: u32 },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Save state not found: {0}")]
    NotFound(String),

    #[error("Invalid seat: {0} (expected 0..=3)")]
    InvalidSeat(usize),

    #[error("Invalid bid: {0:?}")]
    InvalidBid(String),

    #[error("Invalid tricks: {0:?}")]
    InvalidTricks(String),

    #[error("Invalid score row: {0}")]
    InvalidRow(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
