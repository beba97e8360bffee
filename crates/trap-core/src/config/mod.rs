//! Fixed game structure and storage/exchange constants.
//!
//! - `game` - rounds per game, shots per round
//! - `storage` - store name and key used for the game collection
//! - `csv` - CSV header and line terminator
//! - `time` - start-time and display formats

/// Shape of a trap game.
pub mod game {
    /// Number of rounds in a complete game.
    pub const ROUNDS_PER_GAME: usize = 5;

    /// Number of shots in a round.
    pub const SHOTS_PER_ROUND: usize = 5;

    /// Highest possible score for a game.
    pub const MAX_TOTAL_HITS: u32 = (ROUNDS_PER_GAME * SHOTS_PER_ROUND) as u32;
}

/// Key-value store layout.
pub mod storage {
    /// Name of the store holding the game collection.
    pub const STORE_NAME: &str = "trap_coach_prefs";

    /// Key under which the JSON array of games is stored.
    pub const KEY_GAMES: &str = "trapCoachGames";
}

/// CSV exchange format.
pub mod csv {
    /// Column names, in order.
    pub const COLUMNS: [&str; 4] = ["game_start_time", "round_number", "shot_number", "result"];

    /// Line terminator written after every row, header included.
    pub const LINE_ENDING: &str = "\r\n";

    /// Field separator.
    pub const SEPARATOR: char = ',';
}

/// Timestamp formats.
pub mod time {
    /// ISO-8601 UTC with millisecond precision, e.g. `2024-06-01T12:34:56.789Z`.
    pub const START_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

    /// History display format (local time).
    pub const HISTORY_FORMAT: &str = "%b %-d, %Y \u{2022} %H:%M";

    /// Date part of the default export file name (local time).
    pub const EXPORT_DATE_FORMAT: &str = "%Y-%m-%d";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_constants() {
        assert_eq!(game::ROUNDS_PER_GAME, 5);
        assert_eq!(game::SHOTS_PER_ROUND, 5);
        assert_eq!(game::MAX_TOTAL_HITS, 25);
    }

    #[test]
    fn test_csv_header_columns() {
        assert_eq!(
            csv::COLUMNS.join(","),
            "game_start_time,round_number,shot_number,result"
        );
        assert_eq!(csv::LINE_ENDING, "\r\n");
    }
}
