use serde::{Deserialize, Serialize};
use strum::{EnumIter, FromRepr, IntoStaticStr};

/// One of the two fixed partnerships.
///
/// Seats 0 and 3 play for `One`, seats 1 and 2 for `Two`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    EnumIter,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum Team {
    #[strum(serialize = "T1")]
    One = 0,
    #[strum(serialize = "T2")]
    Two = 1,
}

impl Team {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    /// Position of this team in `[team1, team2]` pairs.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The two seats of this team.
    pub fn seats(self) -> [usize; 2] {
        match self {
            Self::One => [0, 3],
            Self::Two => [1, 2],
        }
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Team playing in `seat`, or `None` for a seat outside the table.
pub fn team_for_seat(seat: usize) -> Option<Team> {
    match seat {
        0 | 3 => Some(Team::One),
        1 | 2 => Some(Team::Two),
        _ => None,
    }
}
