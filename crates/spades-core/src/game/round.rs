use serde::{Deserialize, Serialize};

use crate::config::rules::SEATS;
use crate::error::Error;
use crate::rules::{
    Bid, RoundDeltas, Team, ValidRound, compute_round_deltas, parse_tricks_entry, validate_round,
};

/// One line of the score history.
///
/// Rounds are built from a validated entry and never change afterwards.
/// Serialized as the flat 10-element score sheet row
/// `[bid0, tricks0, bid1, tricks1, bid2, tricks2, bid3, tricks3, t1, t2]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RoundRow", into = "RoundRow")]
pub struct Round {
    entry: ValidRound,
    deltas: RoundDeltas,
}

impl Round {
    pub fn new(entry: ValidRound) -> Self {
        Self {
            deltas: compute_round_deltas(&entry),
            entry,
        }
    }

    pub fn entry(&self) -> &ValidRound {
        &self.entry
    }

    pub fn bid(&self, seat: usize) -> Option<Bid> {
        self.entry.bids().get(seat).copied()
    }

    pub fn tricks(&self, seat: usize) -> Option<u8> {
        self.entry.tricks().get(seat).copied()
    }

    pub fn deltas(&self) -> &RoundDeltas {
        &self.deltas
    }

    /// Team score written on the sheet for this round (bags included, no bag penalty).
    pub fn score(&self, team: Team) -> i32 {
        self.deltas.score(team)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
enum Cell {
    Text(String),
    Number(i64),
}

impl Cell {
    fn as_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RoundRow(Cell, Cell, Cell, Cell, Cell, Cell, Cell, Cell, i32, i32);

impl From<Round> for RoundRow {
    fn from(round: Round) -> Self {
        let bids = round.entry.bids().map(|b| Cell::Text(b.to_string()));
        let tricks = round.entry.tricks().map(|t| Cell::Text(t.to_string()));
        let [b0, b1, b2, b3] = bids;
        let [t0, t1, t2, t3] = tricks;
        let [s1, s2] = round.deltas.scores();
        RoundRow(b0, t0, b1, t1, b2, t2, b3, t3, s1, s2)
    }
}

impl TryFrom<RoundRow> for Round {
    type Error = Error;

    fn try_from(row: RoundRow) -> Result<Self, Self::Error> {
        let RoundRow(b0, t0, b1, t1, b2, t2, b3, t3, s1, s2) = row;

        let mut bids: [Option<Bid>; SEATS] = [None; SEATS];
        let mut tricks: [Option<u8>; SEATS] = [None; SEATS];
        for (seat, (bid, trick)) in [(b0, t0), (b1, t1), (b2, t2), (b3, t3)]
            .iter()
            .enumerate()
        {
            bids[seat] = Some(bid.as_text().parse()?);
            tricks[seat] = parse_tricks_entry(&trick.as_text())?;
        }

        let entry =
            validate_round(&bids, &tricks).map_err(|e| Error::InvalidRow(e.to_string()))?;
        let round = Round::new(entry);

        if round.deltas.scores() != [s1, s2] {
            return Err(Error::InvalidRow(format!(
                "stored scores [{}, {}] do not match computed {:?}",
                s1,
                s2,
                round.deltas.scores()
            )));
        }

        Ok(round)
    }
}
