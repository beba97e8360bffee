use std::collections::BTreeMap;

use crate::game::Game;

/// Merge imported games into existing ones by start time.
///
/// Imported games replace existing games with the same start time (a later
/// imported game replaces an earlier one). Existing games not in the import
/// are kept. The result is sorted by start-time string, which is
/// chronological for the fixed ISO-8601 UTC format.
pub fn merge_games(existing: Vec<Game>, imported: &[Game]) -> Vec<Game> {
    let mut merged: BTreeMap<String, Game> = BTreeMap::new();
    for game in existing.into_iter().chain(imported.iter().cloned()) {
        merged.insert(game.start_time().to_string(), game);
    }
    merged.into_values().collect()
}
