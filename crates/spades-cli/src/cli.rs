//! CLI argument definitions for spades.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "spades")]
#[command(about = "Spades score keeper", version)]
pub struct Args {
    /// Directory holding the saved games
    #[arg(long, value_name = "DIR", env = "SPADES_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show points and bags per team
    Show,
    /// Finish a round
    Round {
        /// Bids in seat order: "0" nil, "00" blind nil, "-" unset
        #[arg(long, required = true, value_delimiter = ',', allow_hyphen_values = true)]
        bids: Vec<String>,
        /// Tricks taken in seat order, "-" unset
        #[arg(long, required = true, value_delimiter = ',', allow_hyphen_values = true)]
        tricks: Vec<String>,
    },
    /// Print the score board
    Board,
    /// Delete rounds from the score board
    Delete {
        /// Round numbers as shown on the board (1-based)
        #[arg(required = true)]
        rounds: Vec<usize>,
    },
    /// Start a new game (the current one is lost if unsaved)
    New {
        /// Keep the player names
        #[arg(long)]
        keep_players: bool,
    },
    /// Rename a player
    Rename {
        /// Seat number (1-4)
        seat: usize,
        /// New name
        name: String,
    },
    /// Save the current game (default name: today's date)
    Save {
        /// Save state name
        name: Option<String>,
    },
    /// Load a saved game, replacing the current one
    Load {
        /// Save state name
        name: String,
    },
    /// List saved games
    Saves,
    /// Delete a saved game
    RemoveSave {
        /// Save state name
        name: String,
    },
}
