//! Score board text output with colored team columns

use std::fmt::Write as _;

use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;
use strum::IntoEnumIterator;

use crate::config::board::{COLUMN_ORDER, NAME_WIDTH};
use crate::game::GameState;
use crate::rules::{Team, team_for_seat};

const NUMBER_WIDTH: usize = 3;
const PLAYER_WIDTH: usize = NAME_WIDTH + 1;
const POINTS_WIDTH: usize = 10;

/// Render the score board: one row per round, bid/tricks per player and the
/// team deltas, followed by the totals.
pub fn format_score_board(state: &GameState) -> String {
    let mut output = String::new();
    let players = state.players();

    let mut header = format!("{:>NUMBER_WIDTH$}", "#");
    for seat in COLUMN_ORDER {
        let name: String = players[seat].chars().take(NAME_WIDTH).collect();
        header.push_str(&team_cell(seat_team(seat), &format!("{:>PLAYER_WIDTH$}", name)));
    }
    header.push_str(" |");
    for team in Team::iter() {
        let title = format!("{} Points", team);
        header.push_str(&team_cell(team, &format!("{:>POINTS_WIDTH$}", title)));
    }

    let border = "━".repeat(NUMBER_WIDTH + PLAYER_WIDTH * 4 + 2 + POINTS_WIDTH * 2);
    let _ = writeln!(output, "{}", border.dimmed());
    let _ = writeln!(output, "{}", header.bold());
    let _ = writeln!(output, "{}", border.dimmed());

    let lines = state.score_lines();
    if lines.is_empty() {
        let _ = writeln!(output, "{}", "Finish a round to see results here.".dimmed());
    }

    for line in &lines {
        let mut row = format!("{:>NUMBER_WIDTH$}", line.number);
        for seat in COLUMN_ORDER {
            let cell = match (line.round.bid(seat), line.round.tricks(seat)) {
                (Some(bid), Some(tricks)) => format!("{}/{}", bid, tricks),
                _ => "-".to_string(),
            };
            row.push_str(&team_cell(seat_team(seat), &format!("{:>PLAYER_WIDTH$}", cell)));
        }
        row.push_str(" |");
        for team in Team::iter() {
            let t = team.index();
            let mut cell = line.delta[t].to_string();
            if line.penalties[t] > 0 {
                cell.push('*');
            }
            row.push_str(&team_cell(team, &format!("{:>POINTS_WIDTH$}", cell)));
        }
        let _ = writeln!(output, "{}", row);
    }

    let _ = writeln!(output, "{}", border.dimmed());
    let mut footer = format!("{:<w$} |", "Total", w = NUMBER_WIDTH + PLAYER_WIDTH * 4);
    for team in Team::iter() {
        let points = format!("{:>POINTS_WIDTH$}", state.points()[team.index()]);
        footer.push_str(&team_cell(team, &points).bold().to_string());
    }
    let _ = writeln!(output, "{}", footer);

    if lines.iter().any(|l| l.penalties.iter().any(|&p| p > 0)) {
        let _ = writeln!(output, "{}", "* includes bag penalty".dimmed());
    }

    output
}

/// One line per team with its players, points and bags.
pub fn format_standings(state: &GameState) -> String {
    let mut output = String::new();
    let players = state.players();
    for team in Team::iter() {
        let [a, b] = team.seats();
        let t = team.index();
        let label = format!("{} ({} & {})", team, players[a], players[b]);
        let _ = writeln!(
            output,
            "{}: {} points, {} bags",
            team_cell(team, &label),
            state.points()[t],
            state.bags()[t]
        );
    }
    output
}

/// Default save name for a date, e.g. `2024/5/1`.
pub fn default_slot_name(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.year(), date.month(), date.day())
}

fn seat_team(seat: usize) -> Team {
    team_for_seat(seat).unwrap_or(Team::One)
}

fn team_cell(team: Team, text: &str) -> String {
    match team {
        Team::One => text.cyan().to_string(),
        Team::Two => text.yellow().to_string(),
    }
}
