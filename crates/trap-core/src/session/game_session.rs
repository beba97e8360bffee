use chrono::Utc;
use tracing::{debug, warn};

use crate::config::game::{ROUNDS_PER_GAME, SHOTS_PER_ROUND};
use crate::config::time::START_TIME_FORMAT;
use crate::error::{Error, Result};
use crate::game::{Game, Round, Shot};
use crate::session::{Position, Progress};

type Grid = [[Option<Shot>; SHOTS_PER_ROUND]; ROUNDS_PER_GAME];

/// Current UTC instant in the start-time format, e.g. `2024-06-01T12:34:56.789Z`.
pub fn current_start_time() -> String {
    Utc::now().format(START_TIME_FORMAT).to_string()
}

/// A game being recorded.
///
/// Cells before the cursor (round-major, shot-minor) are set and cells at
/// or after it are unset, except that `record_round` fills the whole
/// current round at once. Past cells cannot be edited. Dropping a session
/// before it completes discards it.
#[derive(Debug, Clone)]
pub struct GameSession {
    cells: Grid,
    round: usize,
    shot: usize,
    start_time: String,
    finished: bool,
}

impl GameSession {
    /// Start a session stamped with the current UTC time
    pub fn new() -> Self {
        Self::with_start_time(current_start_time())
    }

    pub fn with_start_time(start_time: impl Into<String>) -> Self {
        Self {
            cells: [[None; SHOTS_PER_ROUND]; ROUNDS_PER_GAME],
            round: 0,
            shot: 0,
            start_time: start_time.into(),
            finished: false,
        }
    }

    pub fn start_time(&self) -> &str {
        &self.start_time
    }

    pub fn position(&self) -> Position {
        Position::new(self.round, self.shot)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn cell(&self, round: usize, shot: usize) -> Option<Shot> {
        self.cells.get(round)?.get(shot).copied().flatten()
    }

    /// Hits recorded so far
    pub fn recorded_hits(&self) -> u32 {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| matches!(cell, Some(Shot::Hit)))
            .count() as u32
    }

    /// Record the shot at the cursor and advance.
    pub fn record_shot(&mut self, result: Shot) -> Result<Progress> {
        self.ensure_recording()?;
        self.cells[self.round][self.shot] = Some(result);
        Ok(self.advance_shot())
    }

    /// Fill the current round from a hit count (hits first) and advance to
    /// the next round.
    pub fn record_round(&mut self, hits: u8) -> Result<Progress> {
        self.ensure_recording()?;
        let round = Round::from_hits(hits)?;
        for (cell, &shot) in self.cells[self.round].iter_mut().zip(round.shots()) {
            *cell = Some(shot);
        }
        Ok(self.advance_round())
    }

    fn ensure_recording(&self) -> Result<()> {
        if self.finished {
            return Err(Error::SessionFinished);
        }
        Ok(())
    }

    fn advance_shot(&mut self) -> Progress {
        if self.shot < SHOTS_PER_ROUND - 1 {
            self.shot += 1;
            Progress::Advanced(self.position())
        } else {
            self.advance_round()
        }
    }

    fn advance_round(&mut self) -> Progress {
        if self.round < ROUNDS_PER_GAME - 1 {
            self.round += 1;
            self.shot = 0;
            debug!("Session {} moved to {}", self.start_time, self.position());
            Progress::Advanced(self.position())
        } else {
            self.finalize()
        }
    }

    fn finalize(&mut self) -> Progress {
        self.finished = true;
        match self.to_game() {
            Some(game) => Progress::Completed(game),
            None => {
                warn!(
                    "Session {} ended with unset cells, no game recorded",
                    self.start_time
                );
                Progress::Incomplete
            }
        }
    }

    fn to_game(&self) -> Option<Game> {
        let mut rounds = [Round::default(); ROUNDS_PER_GAME];
        for (round, cells) in rounds.iter_mut().zip(&self.cells) {
            let mut shots = [Shot::Miss; SHOTS_PER_ROUND];
            for (shot, cell) in shots.iter_mut().zip(cells) {
                *shot = (*cell)?;
            }
            *round = Round::new(shots);
        }
        Some(Game::new(rounds, self.start_time.clone()))
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
