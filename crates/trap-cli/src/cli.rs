//! CLI argument definitions for trapmaster.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "trapmaster")]
#[command(about = "Trap shooting score keeper", version)]
pub struct Args {
    /// Game store file (defaults to the user data directory)
    #[arg(long, value_name = "FILE", env = "TRAPMASTER_STORE", global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Score a game interactively
    Play {
        /// Record every shot, or one hit count per round
        #[arg(long, short, value_enum, default_value = "shot")]
        mode: PlayMode,
    },
    /// Record a complete game from five round hit counts
    Record {
        /// Hits in each round (0-5), e.g. `record 5 4 5 3 5`
        #[arg(num_args = 5, required = true, value_parser = clap::value_parser!(u8).range(0..=5))]
        hits: Vec<u8>,
    },
    /// List recorded games, newest first
    History {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the round-by-round summary of one game
    Show {
        /// Start time of the game, as listed by `history`
        start_time: String,
    },
    /// Export all games as CSV
    Export {
        /// Output file or directory (defaults to stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Import games from a CSV file, replacing games with the same start time
    Import {
        /// CSV file to import
        file: PathBuf,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Delete all recorded games
    Reset {
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Check whether a stream link is a supported RTSP URI
    CheckUri {
        /// URI to check, e.g. rtsp://camera.local/live
        uri: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum PlayMode {
    Shot,
    Round,
}
