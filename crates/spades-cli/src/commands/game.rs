//! Commands acting on the running game.

use std::path::Path;

use anyhow::{Result, bail};
use spades_core::{format_score_board, format_standings};
use tracing::info;

use crate::cli_utils::open_session;

/// Show points and bags per team
pub fn show(data_dir: Option<&Path>) -> Result<()> {
    let session = open_session(data_dir)?;
    print!("{}", format_standings(session.state()));
    Ok(())
}

/// Print the score board
pub fn board(data_dir: Option<&Path>) -> Result<()> {
    let session = open_session(data_dir)?;
    print!("{}", format_score_board(session.state()));
    Ok(())
}

/// Build a deletion mask from 1-based round numbers.
pub fn selection_mask(rounds: &[usize], history_len: usize) -> Result<Vec<bool>> {
    let mut mask = vec![false; history_len];
    for &number in rounds {
        if number == 0 || number > history_len {
            bail!("No round {} (the board has {} rounds)", number, history_len);
        }
        mask[number - 1] = true;
    }
    Ok(mask)
}

/// Delete rounds by number
pub fn delete(data_dir: Option<&Path>, rounds: &[usize]) -> Result<()> {
    let mut session = open_session(data_dir)?;
    let mask = selection_mask(rounds, session.state().round_history().len())?;
    let count = mask.iter().filter(|&&selected| selected).count();

    session.delete_rounds(&mask);
    info!("Deleted {} rounds", count);
    println!("Deleted {} round(s).", count);
    print!("{}", format_standings(session.state()));
    session.close();
    Ok(())
}

/// Start a new game
pub fn new_game(data_dir: Option<&Path>, keep_players: bool) -> Result<()> {
    let mut session = open_session(data_dir)?;
    session.new_game(keep_players);
    println!("Game was reset.");
    Ok(())
}

/// Rename the player in a 1-based seat
pub fn rename(data_dir: Option<&Path>, seat: usize, name: &str) -> Result<()> {
    if !(1..=4).contains(&seat) {
        bail!("Seat must be between 1 and 4, got {}", seat);
    }
    let name = name.trim();
    if name.is_empty() {
        bail!("Player name must not be empty");
    }

    let mut session = open_session(data_dir)?;
    session.rename_player(seat - 1, name)?;
    println!("Seat {} is now {}.", seat, name);
    session.close();
    Ok(())
}
