//! Interactive scoring of one game.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Result, bail};
use trap_core::history::format_game_summary;
use trap_core::{Error, GameSession, KeyValueStore, Progress, Shot, Trapmaster};

use crate::cli::PlayMode;
use crate::cli_utils;

/// Parsed line of play input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayInput {
    Shot(Shot),
    Round(u8),
    Quit,
}

fn parse_input(line: &str, mode: PlayMode) -> Option<PlayInput> {
    let line = line.trim().to_lowercase();
    if matches!(line.as_str(), "q" | "quit") {
        return Some(PlayInput::Quit);
    }
    match mode {
        PlayMode::Shot => match line.as_str() {
            "h" | "hit" | "1" | "x" => Some(PlayInput::Shot(Shot::Hit)),
            "m" | "miss" | "0" | "o" => Some(PlayInput::Shot(Shot::Miss)),
            _ => None,
        },
        PlayMode::Round => line
            .parse::<u8>()
            .ok()
            .filter(|hits| *hits <= 5)
            .map(PlayInput::Round),
    }
}

fn prompt_for(session: &GameSession, mode: PlayMode) -> String {
    let position = session.position();
    match mode {
        PlayMode::Shot => format!("{} (h/m, q to quit): ", position),
        PlayMode::Round => format!(
            "Round {} hits (0-5, q to quit): ",
            position.round_number()
        ),
    }
}

/// Run an interactive game on stdin/stdout
pub fn run(store: Option<&Path>, mode: PlayMode) -> Result<()> {
    let mut app = cli_utils::open_app(store)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(&mut app, mode, stdin.lock(), stdout.lock())
}

/// Drive one session from `input`, writing prompts to `output`.
///
/// Ending input or quitting before the last round abandons the session
/// without saving anything.
pub fn run_with<S, R, W>(
    app: &mut Trapmaster<S>,
    mode: PlayMode,
    mut input: R,
    mut output: W,
) -> Result<()>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    let mut session = app.new_session();
    writeln!(output, "New game started at {}", session.start_time())?;

    loop {
        write!(output, "{}", prompt_for(&session, mode))?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            writeln!(output, "Game abandoned, nothing saved.")?;
            return Ok(());
        }

        let recorded = match parse_input(&line, mode) {
            Some(PlayInput::Quit) => {
                writeln!(output, "Game abandoned, nothing saved.")?;
                return Ok(());
            }
            Some(PlayInput::Shot(shot)) => app.record_shot(&mut session, shot),
            Some(PlayInput::Round(hits)) => app.record_round(&mut session, hits),
            None => {
                writeln!(output, "Unrecognized input: {}", line.trim())?;
                continue;
            }
        };
        let progress = match recorded {
            Ok(progress) => progress,
            Err(Error::Unsaved { game, source }) => {
                writeln!(output, "{}", format_game_summary(&game))?;
                bail!("Game could not be saved: {}", source);
            }
            Err(e) => return Err(e.into()),
        };

        match progress {
            Progress::Advanced(_) => {
                if mode == PlayMode::Round || session.position().shot == 0 {
                    writeln!(output, "Running score: {}", session.recorded_hits())?;
                }
            }
            Progress::Completed(game) => {
                writeln!(output, "Game complete!")?;
                writeln!(output, "{}", format_game_summary(&game))?;
                return Ok(());
            }
            Progress::Incomplete => {
                writeln!(output, "Game ended with missing shots, nothing saved.")?;
                return Ok(());
            }
        }
    }
}
