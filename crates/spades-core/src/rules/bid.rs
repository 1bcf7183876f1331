use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::rules::TRICKS_PER_ROUND;
use crate::error::Error;

/// A player's bid for one round.
///
/// Text form matches the bid picker: `"0"` is nil, `"00"` is blind nil and
/// `"1"`..`"13"` are ordinary bids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Bid {
    Nil,
    BlindNil,
    Tricks(u8),
}

impl Bid {
    /// Tricks this bid contributes to the team contract.
    ///
    /// Nil and blind nil count as zero.
    pub fn value(self) -> u32 {
        match self {
            Self::Nil | Self::BlindNil => 0,
            Self::Tricks(n) => u32::from(n),
        }
    }

    pub fn is_nil(self) -> bool {
        matches!(self, Self::Nil | Self::BlindNil)
    }
}

impl FromStr for Bid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(Self::Nil),
            "00" => Ok(Self::BlindNil),
            other => match other.parse::<u8>() {
                Ok(n) if n >= 1 && u32::from(n) <= TRICKS_PER_ROUND => Ok(Self::Tricks(n)),
                _ => Err(Error::InvalidBid(s.to_string())),
            },
        }
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "0"),
            Self::BlindNil => write!(f, "00"),
            Self::Tricks(n) => write!(f, "{}", n),
        }
    }
}

impl TryFrom<String> for Bid {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Bid> for String {
    fn from(bid: Bid) -> Self {
        bid.to_string()
    }
}

/// Parse a bid picker entry, where `"-"` (or an empty string) means unset.
pub fn parse_bid_entry(s: &str) -> Result<Option<Bid>, Error> {
    match s.trim() {
        "" | "-" => Ok(None),
        other => other.parse().map(Some),
    }
}

/// Parse a tricks picker entry, where `"-"` (or an empty string) means unset.
pub fn parse_tricks_entry(s: &str) -> Result<Option<u8>, Error> {
    match s.trim() {
        "" | "-" => Ok(None),
        other => match other.parse::<u8>() {
            Ok(n) if u32::from(n) <= TRICKS_PER_ROUND => Ok(Some(n)),
            _ => Err(Error::InvalidTricks(s.to_string())),
        },
    }
}
