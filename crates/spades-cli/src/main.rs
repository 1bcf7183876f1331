mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG overrides the default of warnings only
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("spades=warn,spades_core=warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let data_dir = args.data_dir.as_deref();

    match args.command {
        None | Some(Command::Show) => commands::game::show(data_dir),
        Some(Command::Round { bids, tricks }) => commands::round::run(data_dir, &bids, &tricks),
        Some(Command::Board) => commands::game::board(data_dir),
        Some(Command::Delete { rounds }) => commands::game::delete(data_dir, &rounds),
        Some(Command::New { keep_players }) => commands::game::new_game(data_dir, keep_players),
        Some(Command::Rename { seat, name }) => commands::game::rename(data_dir, seat, &name),
        Some(Command::Save { name }) => commands::saves::save(data_dir, name.as_deref()),
        Some(Command::Load { name }) => commands::saves::load(data_dir, &name),
        Some(Command::Saves) => commands::saves::list(data_dir),
        Some(Command::RemoveSave { name }) => commands::saves::remove(data_dir, &name),
    }
}
