//! Save state commands.

use std::path::Path;

use anyhow::Result;
use chrono::Local;
use spades_core::format_standings;

use crate::cli_utils::open_session;

/// Save the current game
pub fn save(data_dir: Option<&Path>, name: Option<&str>) -> Result<()> {
    let mut session = open_session(data_dir)?;
    let info = session.save_as(name)?;
    println!("Saved {:?} ({} rounds).", info.name, info.rounds);
    Ok(())
}

/// Replace the current game with a saved one
pub fn load(data_dir: Option<&Path>, name: &str) -> Result<()> {
    let mut session = open_session(data_dir)?;
    session.load(name)?;
    println!("Loaded {:?}.", name);
    print!("{}", format_standings(session.state()));
    session.close();
    Ok(())
}

/// List saved games, oldest first
pub fn list(data_dir: Option<&Path>) -> Result<()> {
    let session = open_session(data_dir)?;
    let saves = session.list_saves()?;
    if saves.is_empty() {
        println!("No save states yet.");
        return Ok(());
    }

    for slot in saves {
        println!(
            "{:<20} {}  {:>3} rounds  T1 {:>5}  T2 {:>5}",
            slot.name,
            slot.saved_at.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
            slot.rounds,
            slot.points[0],
            slot.points[1]
        );
    }
    Ok(())
}

/// Delete a saved game
pub fn remove(data_dir: Option<&Path>, name: &str) -> Result<()> {
    let mut session = open_session(data_dir)?;
    if session.delete_save(name)? {
        println!("Deleted {:?}.", name);
    } else {
        println!("No save state named {:?}.", name);
    }
    Ok(())
}
