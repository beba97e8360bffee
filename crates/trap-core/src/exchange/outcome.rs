use std::path::PathBuf;

/// Result of importing CSV text into the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// Number of games parsed from the input, before merging.
    Imported(usize),
    /// The input was readable and non-blank but held no complete game.
    NoGamesFound,
    /// The input could not be read, was blank, or the merge could not be saved.
    Failed,
}

/// Result of exporting the stored games as CSV text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Csv(String),
    NoGames,
}

/// Result of exporting the stored games to a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportFileOutcome {
    Written { path: PathBuf, games: usize },
    NoGames,
    Failed,
}
