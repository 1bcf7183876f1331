//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without touching any saved games.

use std::path::PathBuf;

use clap::Parser;

// Re-create Args structure for testing since it's not publicly exported
#[derive(Parser)]
#[command(name = "spades")]
struct Args {
    #[arg(long, value_name = "DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Subcommand)]
enum Command {
    Show,
    Round {
        #[arg(long, required = true, value_delimiter = ',', allow_hyphen_values = true)]
        bids: Vec<String>,
        #[arg(long, required = true, value_delimiter = ',', allow_hyphen_values = true)]
        tricks: Vec<String>,
    },
    Board,
    Delete {
        #[arg(required = true)]
        rounds: Vec<usize>,
    },
    New {
        #[arg(long)]
        keep_players: bool,
    },
    Rename {
        seat: usize,
        name: String,
    },
    Save {
        name: Option<String>,
    },
    Load {
        name: String,
    },
    Saves,
    RemoveSave {
        name: String,
    },
}

#[test]
fn test_parse_no_args() {
    let args = Args::try_parse_from(["spades"]).unwrap();
    assert!(args.command.is_none());
    assert!(args.data_dir.is_none());
}

#[test]
fn test_parse_round() {
    let args =
        Args::try_parse_from(["spades", "round", "--bids", "0,3,00,7", "--tricks", "0,4,3,6"])
            .unwrap();
    match args.command {
        Some(Command::Round { bids, tricks }) => {
            assert_eq!(bids, vec!["0", "3", "00", "7"]);
            assert_eq!(tricks, vec!["0", "4", "3", "6"]);
        }
        _ => panic!("Expected Round command"),
    }
}

#[test]
fn test_parse_round_with_unset_entries() {
    let args =
        Args::try_parse_from(["spades", "round", "--bids", "-,3,-,7", "--tricks", "-,-,-,-"])
            .unwrap();
    match args.command {
        Some(Command::Round { bids, tricks }) => {
            assert_eq!(bids, vec!["-", "3", "-", "7"]);
            assert_eq!(tricks.len(), 4);
        }
        _ => panic!("Expected Round command"),
    }
}

#[test]
fn test_parse_round_requires_tricks() {
    assert!(Args::try_parse_from(["spades", "round", "--bids", "1,2,3,4"]).is_err());
}

#[test]
fn test_parse_delete() {
    let args = Args::try_parse_from(["spades", "delete", "1", "3"]).unwrap();
    match args.command {
        Some(Command::Delete { rounds }) => assert_eq!(rounds, vec![1, 3]),
        _ => panic!("Expected Delete command"),
    }
    assert!(Args::try_parse_from(["spades", "delete"]).is_err());
    assert!(Args::try_parse_from(["spades", "delete", "first"]).is_err());
}

#[test]
fn test_parse_new() {
    let args = Args::try_parse_from(["spades", "new", "--keep-players"]).unwrap();
    match args.command {
        Some(Command::New { keep_players }) => assert!(keep_players),
        _ => panic!("Expected New command"),
    }
}

#[test]
fn test_parse_rename() {
    let args = Args::try_parse_from(["spades", "rename", "2", "Ada Lovelace"]).unwrap();
    match args.command {
        Some(Command::Rename { seat, name }) => {
            assert_eq!(seat, 2);
            assert_eq!(name, "Ada Lovelace");
        }
        _ => panic!("Expected Rename command"),
    }
}

#[test]
fn test_parse_save_default_name() {
    let args = Args::try_parse_from(["spades", "save"]).unwrap();
    match args.command {
        Some(Command::Save { name }) => assert!(name.is_none()),
        _ => panic!("Expected Save command"),
    }
}

#[test]
fn test_parse_save_states() {
    let args = Args::try_parse_from(["spades", "load", "friday"]).unwrap();
    assert!(matches!(args.command, Some(Command::Load { name }) if name == "friday"));

    let args = Args::try_parse_from(["spades", "remove-save", "friday"]).unwrap();
    assert!(matches!(args.command, Some(Command::RemoveSave { name }) if name == "friday"));

    let args = Args::try_parse_from(["spades", "saves"]).unwrap();
    assert!(matches!(args.command, Some(Command::Saves)));
}

#[test]
fn test_parse_global_data_dir() {
    let args = Args::try_parse_from(["spades", "board", "--data-dir", "/tmp/games"]).unwrap();
    assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/games")));
    assert!(matches!(args.command, Some(Command::Board)));

    let args = Args::try_parse_from(["spades", "--data-dir", "/tmp/games", "show"]).unwrap();
    assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/games")));
    assert!(matches!(args.command, Some(Command::Show)));
}
