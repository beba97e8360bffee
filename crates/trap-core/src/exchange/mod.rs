//! CSV exchange of the game collection.
//!
//! - `export_csv` - flat 25-rows-per-game CSV
//! - `parse_games_from_csv` - strict group-then-validate import
//! - `merge_games` - start-time keyed merge, import wins
//! - `ImportOutcome`, `ExportOutcome`, `ExportFileOutcome` - reported results

mod csv_export;
mod csv_import;
mod merge;
mod outcome;

pub use csv_export::*;
pub use csv_import::*;
pub use merge::*;
pub use outcome::*;
