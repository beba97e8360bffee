//! Reset command.

use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::cli_utils;

/// Delete every stored game
pub fn run(store: Option<&Path>, yes: bool) -> Result<()> {
    if !yes && !cli_utils::confirm("Delete all recorded games? This cannot be undone.") {
        println!("Reset cancelled");
        return Ok(());
    }

    let mut app = cli_utils::open_app(store)?;
    app.reset_all()?;
    println!("{} All games deleted", "✓".green());
    Ok(())
}
