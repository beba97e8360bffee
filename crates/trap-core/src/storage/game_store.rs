use serde_json::Value as JsonValue;
use tracing::{debug, info, warn};

use crate::config::storage::KEY_GAMES;
use crate::error::Result;
use crate::game::{Game, GameRecord, deserialize_game};
use crate::storage::KeyValueStore;

/// Completed games stored as one JSON array under a single key.
///
/// Reads never fail: a missing key or a corrupt value loads as an empty
/// list, and malformed elements are skipped. Every write re-serializes the
/// full collection.
#[derive(Debug, Clone)]
pub struct GameStore<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> GameStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, KEY_GAMES)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Load all games in save order.
    pub fn load(&self) -> Vec<Game> {
        let Some(stored) = self.store.get(&self.key) else {
            return Vec::new();
        };
        let elements: Vec<JsonValue> = match serde_json::from_str(&stored) {
            Ok(elements) => elements,
            Err(e) => {
                warn!("Stored games are unreadable, treating as empty: {}", e);
                return Vec::new();
            }
        };

        let total = elements.len();
        let games: Vec<Game> = elements.iter().filter_map(deserialize_game).collect();
        if games.len() != total {
            debug!("Skipped {} malformed stored games", total - games.len());
        }
        games
    }

    /// Append one game to the end of the stored collection.
    pub fn save_append(&mut self, game: Game) -> Result<()> {
        let mut games = self.load();
        games.push(game);
        self.persist(&games)
    }

    /// Replace the stored collection.
    pub fn save_all(&mut self, games: &[Game]) -> Result<()> {
        self.persist(games)
    }

    /// Remove all stored games.
    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(&self.key)?;
        info!("Cleared stored games");
        Ok(())
    }

    fn persist(&mut self, games: &[Game]) -> Result<()> {
        let records: Vec<GameRecord> = games.iter().map(Game::to_record).collect();
        let encoded = serde_json::to_string(&records)?;
        self.store.set(&self.key, encoded)?;
        info!("Saved {} games", games.len());
        Ok(())
    }
}
