use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::exchange::{
    ExportFileOutcome, ExportOutcome, ImportOutcome, export_csv, merge_games, parse_games_from_csv,
};
use crate::game::{Game, Shot};
use crate::session::{GameSession, Progress};
use crate::storage::{GameStore, KeyValueStore};

/// Entry point for a UI layer: sessions, history, CSV exchange and reset
/// over one injected store.
pub struct Trapmaster<S: KeyValueStore> {
    games: GameStore<S>,
}

impl<S: KeyValueStore> Trapmaster<S> {
    pub fn new(store: S) -> Self {
        Self {
            games: GameStore::new(store),
        }
    }

    pub fn game_store(&self) -> &GameStore<S> {
        &self.games
    }

    /// Begin a new game stamped with the current time
    pub fn new_session(&self) -> GameSession {
        GameSession::new()
    }

    /// Record one shot; a completed game is appended to the store.
    pub fn record_shot(&mut self, session: &mut GameSession, result: Shot) -> Result<Progress> {
        let progress = session.record_shot(result)?;
        self.save_completed(progress)
    }

    /// Record a whole round by hit count; a completed game is appended to
    /// the store.
    pub fn record_round(&mut self, session: &mut GameSession, hits: u8) -> Result<Progress> {
        let progress = session.record_round(hits)?;
        self.save_completed(progress)
    }

    fn save_completed(&mut self, progress: Progress) -> Result<Progress> {
        if let Progress::Completed(game) = &progress {
            if let Err(e) = self.save_game(game) {
                warn!("Completed game {} was not saved: {}", game.start_time(), e);
                return Err(Error::Unsaved {
                    game: Box::new(game.clone()),
                    source: Box::new(e),
                });
            }
        }
        Ok(progress)
    }

    /// Append a completed game to the store. Used to retry a game carried
    /// by [`Error::Unsaved`].
    pub fn save_game(&mut self, game: &Game) -> Result<()> {
        self.games.save_append(game.clone())?;
        info!(
            "Saved game {} ({} hits)",
            game.start_time(),
            game.total_hits()
        );
        Ok(())
    }

    /// Stored games in save order
    pub fn load_history(&self) -> Vec<Game> {
        self.games.load()
    }

    pub fn export_csv(&self) -> ExportOutcome {
        match export_csv(&self.games.load()) {
            Some(csv) => ExportOutcome::Csv(csv),
            None => ExportOutcome::NoGames,
        }
    }

    /// Export all games to `path`.
    pub fn export_csv_to<P: AsRef<Path>>(&self, path: P) -> ExportFileOutcome {
        let games = self.games.load();
        let Some(csv) = export_csv(&games) else {
            return ExportFileOutcome::NoGames;
        };
        let path = path.as_ref();
        match fs::write(path, csv) {
            Ok(()) => {
                info!("Exported {} games to {}", games.len(), path.display());
                ExportFileOutcome::Written {
                    path: path.to_path_buf(),
                    games: games.len(),
                }
            }
            Err(e) => {
                warn!("Failed to write export {}: {}", path.display(), e);
                ExportFileOutcome::Failed
            }
        }
    }

    /// Import CSV text, merging by start time (imported games win) and
    /// replacing the stored collection with the sorted result.
    pub fn import_csv(&mut self, text: &str) -> ImportOutcome {
        if text.trim().is_empty() {
            warn!("Import input is blank");
            return ImportOutcome::Failed;
        }
        let imported = parse_games_from_csv(text);
        if imported.is_empty() {
            return ImportOutcome::NoGamesFound;
        }

        let merged = merge_games(self.games.load(), &imported);
        if let Err(e) = self.games.save_all(&merged) {
            warn!("Failed to save imported games: {}", e);
            return ImportOutcome::Failed;
        }
        info!(
            "Imported {} games ({} stored after merge)",
            imported.len(),
            merged.len()
        );
        ImportOutcome::Imported(imported.len())
    }

    /// Import the CSV file at `path`.
    pub fn import_csv_file<P: AsRef<Path>>(&mut self, path: P) -> ImportOutcome {
        let path = path.as_ref();
        match fs::read(path) {
            Ok(bytes) => self.import_csv(&String::from_utf8_lossy(&bytes)),
            Err(e) => {
                warn!("Failed to read import {}: {}", path.display(), e);
                ImportOutcome::Failed
            }
        }
    }

    /// Remove every stored game.
    pub fn reset_all(&mut self) -> Result<()> {
        self.games.clear()
    }
}
