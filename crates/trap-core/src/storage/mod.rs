//! Persistence of the completed-game collection.
//!
//! - `KeyValueStore` - flat string store consumed by the codec
//! - `MemoryStore`, `FileStore` - store implementations
//! - `GameStore` - the game list codec over any store

mod file_store;
mod game_store;
mod kv;

pub use file_store::*;
pub use game_store::*;
pub use kv::*;
