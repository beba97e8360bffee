//! Game summary command.

use std::path::Path;

use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use trap_core::Game;
use trap_core::history::{find_game, format_game_summary};

use crate::cli_utils;

/// Show one game round by round
pub fn run(store: Option<&Path>, start_time: &str) -> Result<()> {
    let app = cli_utils::open_app(store)?;
    let games = app.load_history();
    let Some(game) = find_game(&games, start_time) else {
        bail!("No game started at {}", start_time);
    };

    println!("{}", render(game));
    Ok(())
}

fn render(game: &Game) -> String {
    let border = "━".repeat(40);
    format!(
        "{}\n{}\n{}",
        border.dimmed(),
        format_game_summary(game),
        border.dimmed()
    )
}
