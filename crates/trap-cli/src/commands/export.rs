//! Export command for writing all games as CSV.

use std::path::Path;

use anyhow::{Result, bail};
use chrono::Local;
use trap_core::{ExportFileOutcome, ExportOutcome, export_file_name};

use crate::cli_utils;

/// Export all games to a file, a directory (dated file name) or stdout
pub fn run(store: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let app = cli_utils::open_app(store)?;

    let Some(output) = output else {
        match app.export_csv() {
            ExportOutcome::Csv(csv) => print!("{}", csv),
            ExportOutcome::NoGames => eprintln!("No games to export"),
        }
        return Ok(());
    };

    let path = if output.is_dir() {
        output.join(export_file_name(Local::now().date_naive()))
    } else {
        output.to_path_buf()
    };

    match app.export_csv_to(&path) {
        ExportFileOutcome::Written { path, games } => {
            eprintln!("Exported {} games to: {}", games, path.display());
            Ok(())
        }
        ExportFileOutcome::NoGames => {
            eprintln!("No games to export");
            Ok(())
        }
        ExportFileOutcome::Failed => bail!("Export failed: could not write {}", path.display()),
    }
}
