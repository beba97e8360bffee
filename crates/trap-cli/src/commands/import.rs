//! Import command for merging games from CSV.

use std::path::Path;

use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use trap_core::ImportOutcome;

use crate::cli_utils;

/// Import a CSV file, replacing stored games that share a start time
pub fn run(store: Option<&Path>, file: &Path, yes: bool) -> Result<()> {
    if !yes
        && !cli_utils::confirm(
            "Importing replaces stored games that have the same start time. Continue?",
        )
    {
        println!("Import cancelled");
        return Ok(());
    }

    let mut app = cli_utils::open_app(store)?;
    match app.import_csv_file(file) {
        ImportOutcome::Imported(count) => {
            println!(
                "{} Imported {} game{}",
                "✓".green(),
                count,
                if count == 1 { "" } else { "s" }
            );
            Ok(())
        }
        ImportOutcome::NoGamesFound => {
            println!("{}", "No games found in file".yellow());
            Ok(())
        }
        ImportOutcome::Failed => bail!(
            "Import from {} failed: the file is blank or unreadable, or the store could not be updated",
            file.display()
        ),
    }
}
