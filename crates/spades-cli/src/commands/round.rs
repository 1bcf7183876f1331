//! Round command implementation.

use std::path::Path;

use anyhow::{Result, bail};
use spades_core::rules::{parse_bid_entry, parse_tricks_entry};
use spades_core::{Bid, format_standings};

use crate::cli_utils::open_session;

/// Parse the four picker entries of a round.
pub fn parse_entries(
    bids: &[String],
    tricks: &[String],
) -> Result<([Option<Bid>; 4], [Option<u8>; 4])> {
    if bids.len() != 4 || tricks.len() != 4 {
        bail!(
            "Expected 4 bids and 4 tricks in seat order, got {} and {}",
            bids.len(),
            tricks.len()
        );
    }

    let mut parsed_bids = [None; 4];
    let mut parsed_tricks = [None; 4];
    for (slot, entry) in parsed_bids.iter_mut().zip(bids) {
        *slot = parse_bid_entry(entry)?;
    }
    for (slot, entry) in parsed_tricks.iter_mut().zip(tricks) {
        *slot = parse_tricks_entry(entry)?;
    }
    Ok((parsed_bids, parsed_tricks))
}

/// Run the round command
pub fn run(data_dir: Option<&Path>, bids: &[String], tricks: &[String]) -> Result<()> {
    let (bids, tricks) = parse_entries(bids, tricks)?;
    let mut session = open_session(data_dir)?;

    let round = session.apply_round(&bids, &tricks)?;

    let [t1, t2] = round.deltas().scores();
    println!(
        "Round {}: T1 {:+}, T2 {:+}",
        session.state().round_history().len(),
        t1,
        t2
    );
    print!("{}", format_standings(session.state()));
    session.close();
    Ok(())
}
