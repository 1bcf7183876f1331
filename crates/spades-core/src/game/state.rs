use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::config::rules::{BAG_PENALTY, SEATS};
use crate::error::{Error, Result, ValidationError};
use crate::game::Round;
use crate::rules::{Bid, Team, apply_bag_wrap, validate_round};

/// Cumulative points and running bag counts, indexed by `Team::index()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Standings {
    pub points: [i32; 2],
    pub bags: [u32; 2],
}

impl Standings {
    /// Fold the whole history from zero.
    pub fn from_history<'a>(rounds: impl IntoIterator<Item = &'a Round>) -> Self {
        let mut standings = Self::default();
        for round in rounds {
            standings.apply(round);
        }
        standings
    }

    /// Add one round, returning the bag penalties it triggered per team.
    pub fn apply(&mut self, round: &Round) -> [u32; 2] {
        let mut penalties = [0; 2];
        for team in Team::iter() {
            let t = team.index();
            let wrap = apply_bag_wrap(self.bags[t], round.deltas().bags[t]);
            self.points[t] += round.score(team) - wrap.penalties as i32 * BAG_PENALTY;
            self.bags[t] = wrap.bags;
            penalties[t] = wrap.penalties;
        }
        penalties
    }
}

/// A row of the score board: a round with its effective deltas and totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreLine<'a> {
    /// 1-based round number.
    pub number: usize,
    pub round: &'a Round,
    /// Bag penalties triggered by this round.
    pub penalties: [u32; 2],
    /// Round score minus bag penalties.
    pub delta: [i32; 2],
    /// Points after this round.
    pub totals: [i32; 2],
}

/// The game being scored: players, standings and score history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    #[serde(rename = "roundHistory", alias = "roundData", default)]
    round_history: Vec<Round>,
    players: [String; SEATS],
    points: [i32; 2],
    bags: [u32; 2],
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game with placeholder names "Player 1".."Player 4".
    pub fn new() -> Self {
        Self::with_players(default_players())
    }

    pub fn with_players(players: [String; SEATS]) -> Self {
        Self {
            round_history: Vec::new(),
            players,
            points: [0; 2],
            bags: [0; 2],
        }
    }

    pub fn players(&self) -> &[String; SEATS] {
        &self.players
    }

    pub fn points(&self) -> [i32; 2] {
        self.points
    }

    pub fn bags(&self) -> [u32; 2] {
        self.bags
    }

    pub fn round_history(&self) -> &[Round] {
        &self.round_history
    }

    pub fn standings(&self) -> Standings {
        Standings {
            points: self.points,
            bags: self.bags,
        }
    }

    /// Validate and score a round, then append it to the history.
    ///
    /// On error the state is left unchanged.
    pub fn apply_round(
        &mut self,
        bids: &[Option<Bid>; SEATS],
        tricks: &[Option<u8>; SEATS],
    ) -> std::result::Result<&Round, ValidationError> {
        let entry = validate_round(bids, tricks)?;
        self.round_history.push(Round::new(entry));
        self.recompute();
        Ok(&self.round_history[self.round_history.len() - 1])
    }

    /// Remove every round whose mask entry is `true`.
    ///
    /// Entries past the end of the mask count as `false`.
    pub fn delete_rounds(&mut self, mask: &[bool]) {
        let mut index = 0;
        self.round_history.retain(|_| {
            let delete = mask.get(index).copied().unwrap_or(false);
            index += 1;
            !delete
        });
        self.recompute();
    }

    /// Start over: empty history and zero scores.
    pub fn reset(&mut self, keep_players: bool) {
        self.round_history.clear();
        self.points = [0; 2];
        self.bags = [0; 2];
        if !keep_players {
            self.players = default_players();
        }
    }

    pub fn rename_player(&mut self, seat: usize, name: impl Into<String>) -> Result<()> {
        let slot = self.players.get_mut(seat).ok_or(Error::InvalidSeat(seat))?;
        *slot = name.into();
        Ok(())
    }

    /// Re-derive points and bags from the history.
    ///
    /// Returns `true` if the stored standings were out of date.
    pub fn recompute(&mut self) -> bool {
        let standings = Standings::from_history(&self.round_history);
        let changed = standings != self.standings();
        self.points = standings.points;
        self.bags = standings.bags;
        changed
    }

    /// Score board rows in history order.
    pub fn score_lines(&self) -> Vec<ScoreLine<'_>> {
        let mut standings = Standings::default();
        self.round_history
            .iter()
            .enumerate()
            .map(|(i, round)| {
                let before = standings.points;
                let penalties = standings.apply(round);
                ScoreLine {
                    number: i + 1,
                    round,
                    penalties,
                    delta: [
                        standings.points[0] - before[0],
                        standings.points[1] - before[1],
                    ],
                    totals: standings.points,
                }
            })
            .collect()
    }
}

fn default_players() -> [String; SEATS] {
    std::array::from_fn(|i| format!("Player {}", i + 1))
}
