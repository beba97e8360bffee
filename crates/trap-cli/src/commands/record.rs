//! Non-interactive recording of a full game.

use std::path::Path;

use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use trap_core::history::format_score;
use trap_core::{KeyValueStore, Progress, Trapmaster};

use crate::cli_utils;

/// Record a game from five round hit counts
pub fn run(store: Option<&Path>, hits: &[u8]) -> Result<()> {
    let mut app = cli_utils::open_app(store)?;
    let progress = record_game(&mut app, hits)?;

    match progress {
        Progress::Completed(game) => {
            println!(
                "{} Saved game {} ({})",
                "✓".green(),
                game.start_time(),
                format_score(&game).bold()
            );
            Ok(())
        }
        _ => bail!("Game did not complete, nothing saved"),
    }
}

fn record_game<S: KeyValueStore>(
    app: &mut Trapmaster<S>,
    hits: &[u8],
) -> Result<Progress> {
    if hits.len() != 5 {
        bail!("Expected 5 round hit counts, got {}", hits.len());
    }
    let mut session = app.new_session();
    let mut progress = None;
    for &round_hits in hits {
        progress = Some(app.record_round(&mut session, round_hits)?);
    }
    progress.ok_or_else(|| anyhow::anyhow!("No rounds recorded"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use trap_core::MemoryStore;

    #[test]
    fn test_record_game() {
        let mut app = Trapmaster::new(MemoryStore::new());
        let progress = record_game(&mut app, &[5, 5, 4, 5, 3]).unwrap();
        assert_eq!(progress.completed_game().unwrap().total_hits(), 22);
        assert_eq!(app.load_history().len(), 1);
    }

    #[test]
    fn test_record_game_rejects_wrong_count() {
        let mut app = Trapmaster::new(MemoryStore::new());
        assert!(record_game(&mut app, &[5, 5]).is_err());
        assert!(app.load_history().is_empty());
    }
}
