use crate::game::Game;

/// Cursor inside a session grid (zero-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub round: usize,
    pub shot: usize,
}

impl Position {
    pub fn new(round: usize, shot: usize) -> Self {
        Self { round, shot }
    }

    /// One-based round number for display
    pub fn round_number(&self) -> usize {
        self.round + 1
    }

    /// One-based shot number for display
    pub fn shot_number(&self) -> usize {
        self.shot + 1
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Round {} \u{2022} Shot {}",
            self.round_number(),
            self.shot_number()
        )
    }
}

/// Result of feeding a shot or a round into a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// Cursor moved; the session expects more input at this position.
    Advanced(Position),
    /// All 25 cells are filled and the session produced its game.
    Completed(Game),
    /// The session reached its end but some cell was unset, so no game
    /// was produced.
    Incomplete,
}

impl Progress {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Advanced(_))
    }

    pub fn completed_game(&self) -> Option<&Game> {
        match self {
            Self::Completed(game) => Some(game),
            _ => None,
        }
    }
}
