use strum::IntoEnumIterator;

use crate::config::rules::{
    BAG_LIMIT, BLIND_NIL_BONUS, NIL_BONUS, POINTS_PER_TRICK, SEATS, TRICKS_PER_ROUND,
};
use crate::error::ValidationError;
use crate::rules::{Bid, Team};

/// Bids and tricks of one round that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidRound {
    bids: [Bid; SEATS],
    tricks: [u8; SEATS],
}

impl ValidRound {
    pub fn bids(&self) -> &[Bid; SEATS] {
        &self.bids
    }

    pub fn tricks(&self) -> &[u8; SEATS] {
        &self.tricks
    }
}

/// Check that a round is complete and its tricks add up to 13.
///
/// Missing entries are reported before a bad trick total.
pub fn validate_round(
    bids: &[Option<Bid>; SEATS],
    tricks: &[Option<u8>; SEATS],
) -> Result<ValidRound, ValidationError> {
    let (Some(bids), Some(tricks)) = (collect_all(bids), collect_all(tricks)) else {
        return Err(ValidationError::Incomplete);
    };

    let total: u32 = tricks.iter().map(|&t| u32::from(t)).sum();
    if total != TRICKS_PER_ROUND {
        return Err(ValidationError::TrickSum { total });
    }

    Ok(ValidRound { bids, tricks })
}

fn collect_all<T: Copy>(entries: &[Option<T>; SEATS]) -> Option<[T; SEATS]> {
    let mut out = [entries[0]?; SEATS];
    for (slot, entry) in out.iter_mut().zip(entries) {
        *slot = (*entry)?;
    }
    Some(out)
}

/// Point and bag changes of a single round, indexed by `Team::index()`.
///
/// Bag penalties are not included; they depend on earlier rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundDeltas {
    pub points: [i32; 2],
    pub bags: [u32; 2],
}

impl RoundDeltas {
    /// Round score of a team as written on the score sheet: one point per bag.
    pub fn score(&self, team: Team) -> i32 {
        let t = team.index();
        self.points[t] + self.bags[t] as i32
    }

    pub fn scores(&self) -> [i32; 2] {
        [self.score(Team::One), self.score(Team::Two)]
    }
}

/// Score one validated round for both teams.
pub fn compute_round_deltas(round: &ValidRound) -> RoundDeltas {
    let mut deltas = RoundDeltas::default();

    for team in Team::iter() {
        let t = team.index();
        let [a, b] = team.seats();

        for seat in [a, b] {
            deltas.points[t] += nil_adjustment(round.bids[seat], round.tricks[seat]);
        }

        let team_bid = round.bids[a].value() + round.bids[b].value();
        let team_tricks = u32::from(round.tricks[a]) + u32::from(round.tricks[b]);
        let contract = team_bid as i32 * POINTS_PER_TRICK;

        if team_tricks >= team_bid {
            deltas.points[t] += contract;
            deltas.bags[t] += team_tricks - team_bid;
        } else {
            deltas.points[t] -= contract;
        }
    }

    deltas
}

fn nil_adjustment(bid: Bid, tricks: u8) -> i32 {
    let bonus = match bid {
        Bid::Nil => NIL_BONUS,
        Bid::BlindNil => BLIND_NIL_BONUS,
        Bid::Tricks(_) => return 0,
    };
    if tricks == 0 { bonus } else { -bonus }
}

/// Result of adding a round's bags to a team's running bag count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BagWrap {
    /// Number of times the bag limit was reached.
    pub penalties: u32,
    /// Running bag count after wrapping, always below the limit.
    pub bags: u32,
}

impl BagWrap {
    pub fn penalty_applied(&self) -> bool {
        self.penalties > 0
    }
}

/// Add `new_bags` to `prior_bags`, wrapping at the bag limit.
///
/// `prior_bags` is taken modulo the limit, so wraps it already went through
/// are not counted again. Every full ten of the sum costs one penalty, so a
/// single round of ten or more bags triggers one even with no prior bags,
/// unlike a plain `prior % 10 + new % 10 >= 10` check.
pub fn apply_bag_wrap(prior_bags: u32, new_bags: u32) -> BagWrap {
    let total = prior_bags % BAG_LIMIT + new_bags;
    BagWrap {
        penalties: total / BAG_LIMIT,
        bags: total % BAG_LIMIT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bids(text: [&str; 4]) -> [Option<Bid>; 4] {
        text.map(|s| Some(s.parse().unwrap()))
    }

    fn round(bid_text: [&str; 4], tricks: [u8; 4]) -> ValidRound {
        validate_round(&bids(bid_text), &tricks.map(Some)).unwrap()
    }

    #[test]
    fn test_validate_incomplete() {
        let mut b = bids(["1", "2", "3", "4"]);
        b[2] = None;
        let result = validate_round(&b, &[Some(3), Some(3), Some(3), Some(4)]);
        assert_eq!(result, Err(ValidationError::Incomplete));

        let result = validate_round(&bids(["1", "2", "3", "4"]), &[Some(3), None, Some(3), Some(4)]);
        assert_eq!(result, Err(ValidationError::Incomplete));
    }

    #[test]
    fn test_validate_incomplete_checked_before_sum() {
        let result = validate_round(&[None; 4], &[Some(9), Some(9), None, Some(9)]);
        assert_eq!(result, Err(ValidationError::Incomplete));
    }

    #[test]
    fn test_validate_trick_sum() {
        let result = validate_round(&bids(["1", "2", "3", "4"]), &[3, 3, 3, 3].map(Some));
        assert_eq!(result, Err(ValidationError::TrickSum { total: 12 }));

        let result = validate_round(&bids(["0", "0", "0", "0"]), &[13, 1, 0, 0].map(Some));
        assert_eq!(result, Err(ValidationError::TrickSum { total: 14 }));
    }

    #[test]
    fn test_validate_ignores_bid_values() {
        // Overbidding is legal; only the tricks total matters.
        let valid = round(["13", "13", "13", "13"], [13, 0, 0, 0]);
        assert_eq!(valid.tricks(), &[13, 0, 0, 0]);
    }

    #[test]
    fn test_nil_made_with_partner_set() {
        let deltas = compute_round_deltas(&round(["0", "3", "3", "7"], [0, 4, 3, 6]));
        assert_eq!(deltas.points, [30, 60]);
        assert_eq!(deltas.bags, [0, 1]);
        assert_eq!(deltas.scores(), [30, 61]);
    }

    #[test]
    fn test_nil_failed() {
        // Seat 0 bids nil but takes 2; those tricks still count for the team.
        let deltas = compute_round_deltas(&round(["0", "4", "4", "3"], [2, 4, 4, 3]));
        assert_eq!(deltas.points[Team::One.index()], -100 + 30);
        assert_eq!(deltas.bags[Team::One.index()], 2);
        assert_eq!(deltas.score(Team::Two), 80);
    }

    #[test]
    fn test_blind_nil() {
        let made = compute_round_deltas(&round(["00", "4", "4", "5"], [0, 4, 4, 5]));
        assert_eq!(made.score(Team::One), 200 + 50);

        let failed = compute_round_deltas(&round(["00", "4", "4", "5"], [1, 4, 4, 4]));
        assert_eq!(failed.points[0], -200 + 50);
        assert_eq!(failed.bags[0], 0);
    }

    #[test]
    fn test_both_partners_nil() {
        let deltas = compute_round_deltas(&round(["0", "6", "6", "00"], [1, 6, 6, 0]));
        // Team bid is zero, so the stray trick is a bag.
        assert_eq!(deltas.points[0], -100 + 200);
        assert_eq!(deltas.bags[0], 1);
    }

    #[test]
    fn test_team_set() {
        let deltas = compute_round_deltas(&round(["5", "2", "2", "4"], [4, 2, 2, 5]));
        assert_eq!(deltas.points, [90, 40]);

        let deltas = compute_round_deltas(&round(["6", "2", "2", "4"], [3, 4, 4, 2]));
        assert_eq!(deltas.points, [-100, 40]);
        assert_eq!(deltas.bags, [0, 4]);
    }

    #[test]
    fn test_bag_wrap() {
        assert_eq!(apply_bag_wrap(3, 4), BagWrap { penalties: 0, bags: 7 });
        assert_eq!(apply_bag_wrap(8, 2), BagWrap { penalties: 1, bags: 0 });
        assert_eq!(apply_bag_wrap(9, 4), BagWrap { penalties: 1, bags: 3 });
        assert_eq!(apply_bag_wrap(9, 13), BagWrap { penalties: 2, bags: 2 });
        assert!(!apply_bag_wrap(0, 9).penalty_applied());
        assert_eq!(apply_bag_wrap(0, 10), BagWrap { penalties: 1, bags: 0 });
    }

    #[test]
    fn test_bag_wrap_ignores_prior_wraps() {
        assert_eq!(apply_bag_wrap(12, 3), apply_bag_wrap(2, 3));
    }
}
