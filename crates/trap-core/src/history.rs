//! History listing and display formatting.

use chrono::{DateTime, Local, TimeZone};

use crate::config::game::MAX_TOTAL_HITS;
use crate::config::time::HISTORY_FORMAT;
use crate::game::{Game, Round, Shot};

/// Games newest first (reverse save order).
pub fn newest_first(games: &[Game]) -> impl Iterator<Item = &Game> {
    games.iter().rev()
}

/// Find a stored game by its start time.
pub fn find_game<'a>(games: &'a [Game], start_time: &str) -> Option<&'a Game> {
    games.iter().find(|game| game.start_time() == start_time)
}

/// Format a start time for display in the local time zone.
pub fn format_game_date(start_time: &str) -> String {
    format_game_date_in(start_time, &Local)
}

/// Format a start time for display in `tz`. Unparseable start times are
/// returned unchanged.
pub fn format_game_date_in<Tz>(start_time: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match DateTime::parse_from_rfc3339(start_time) {
        Ok(parsed) => parsed
            .with_timezone(tz)
            .format(HISTORY_FORMAT)
            .to_string(),
        Err(_) => start_time.to_string(),
    }
}

/// "17/25"
pub fn format_score(game: &Game) -> String {
    format!("{}/{}", game.total_hits(), MAX_TOTAL_HITS)
}

pub fn shot_mark(shot: Shot) -> char {
    match shot {
        Shot::Hit => '\u{2713}',
        Shot::Miss => '\u{2717}',
    }
}

/// "Round 2: 3/5  ✓ ✓ ✗ ✓ ✗"
pub fn format_round_line(index: usize, round: &Round) -> String {
    let marks: Vec<String> = round
        .shots()
        .iter()
        .map(|&shot| shot_mark(shot).to_string())
        .collect();
    format!(
        "Round {}: {}/{}  {}",
        index + 1,
        round.hits_count(),
        round.shots().len(),
        marks.join(" ")
    )
}

/// Multi-line summary of one game with aligned columns.
pub fn format_game_summary(game: &Game) -> String {
    let mut lines = vec![
        format!("{:>10}: {}", "Started", format_game_date(game.start_time())),
        format!("{:>10}: {}", "Score", format_score(game)),
    ];
    lines.extend(
        game.rounds()
            .iter()
            .enumerate()
            .map(|(index, round)| format!("  {}", format_round_line(index, round))),
    );
    lines.join("\n")
}
