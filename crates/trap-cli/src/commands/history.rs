//! History listing command.

use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use trap_core::history::{format_game_date, format_score, newest_first};
use trap_core::Game;

use crate::cli_utils;

/// List stored games, newest first
pub fn run(store: Option<&Path>, json: bool) -> Result<()> {
    let app = cli_utils::open_app(store)?;
    let games = app.load_history();

    if json {
        let records: Vec<_> = newest_first(&games).map(Game::to_record).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if games.is_empty() {
        println!("{}", "No games recorded yet".dimmed());
        return Ok(());
    }

    for game in newest_first(&games) {
        println!(
            "{:>5}  {:<22} {}",
            format_score(game).bold(),
            format_game_date(game.start_time()),
            game.start_time().dimmed()
        );
    }
    println!("\n{} Total: {} games", "✓".green(), games.len());

    Ok(())
}
