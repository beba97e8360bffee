pub mod config;
pub mod error;
pub mod exchange;
pub mod game;
pub mod history;
pub mod session;
pub mod storage;
pub mod stream;
mod trapmaster;

pub use error::{Error, Result};
pub use exchange::{
    ExportFileOutcome, ExportOutcome, ImportOutcome, ShotEntry, export_csv, export_file_name,
    merge_games, parse_games_from_csv,
};
pub use game::{Game, GameRecord, Round, RoundRecord, Shot, deserialize_game, serialize_game};
pub use session::{GameSession, Position, Progress};
pub use storage::{FileStore, GameStore, KeyValueStore, MemoryStore};
pub use stream::{StreamUri, is_supported_uri};
pub use trapmaster::Trapmaster;
