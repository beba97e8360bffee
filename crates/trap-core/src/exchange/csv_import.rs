use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::config::csv::{COLUMNS, SEPARATOR};
use crate::config::game::{ROUNDS_PER_GAME, SHOTS_PER_ROUND};
use crate::game::{Game, Round, Shot};

/// One parsed CSV row, without its start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotEntry {
    /// 1-based round number
    pub round: u8,
    /// 1-based shot number
    pub shot: u8,
    pub result: Shot,
}

/// Parse one data line into its start time and entry.
///
/// Returns `None` for lines with fewer than four fields, non-integer
/// numbers, out-of-range values, or an empty start time.
pub fn parse_csv_line(line: &str) -> Option<(&str, ShotEntry)> {
    let parts: Vec<&str> = line.split(SEPARATOR).collect();
    if parts.len() < COLUMNS.len() {
        return None;
    }
    let start_time = parts[0].trim();
    let round: i64 = parts[1].trim().parse().ok()?;
    let shot: i64 = parts[2].trim().parse().ok()?;
    let result: i64 = parts[3].trim().parse().ok()?;

    if start_time.is_empty()
        || !(1..=ROUNDS_PER_GAME as i64).contains(&round)
        || !(1..=SHOTS_PER_ROUND as i64).contains(&shot)
    {
        return None;
    }
    let result = Shot::from_value(result)?;

    Some((
        start_time,
        ShotEntry {
            round: round as u8,
            shot: shot as u8,
            result,
        },
    ))
}

/// Parse all complete games from CSV text.
///
/// Rows are grouped by start time first and each group is then validated
/// as a whole; a group that does not form exactly 5 rounds of 5 distinct
/// shot positions is dropped entirely. Games come back in the order their
/// start times first appear.
pub fn parse_games_from_csv(csv: &str) -> Vec<Game> {
    let lines: Vec<&str> = csv
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let Some(first) = lines.first() else {
        return Vec::new();
    };
    let data_lines = if first.to_lowercase().starts_with(COLUMNS[0]) {
        &lines[1..]
    } else {
        &lines[..]
    };

    let mut order: Vec<&str> = Vec::new();
    let mut grouped: HashMap<&str, Vec<ShotEntry>> = HashMap::new();
    for line in data_lines {
        let Some((start_time, entry)) = parse_csv_line(line) else {
            debug!("Skipping CSV line: {}", line);
            continue;
        };
        grouped
            .entry(start_time)
            .or_insert_with(|| {
                order.push(start_time);
                Vec::new()
            })
            .push(entry);
    }

    order
        .into_iter()
        .filter_map(|start_time| {
            let entries = grouped.get(start_time)?;
            let game = build_game_from_shots(start_time, entries);
            if game.is_none() {
                debug!(
                    "Dropping incomplete game {} ({} rows)",
                    start_time,
                    entries.len()
                );
            }
            game
        })
        .collect()
}

/// Rebuild one game from the entries sharing a start time.
pub fn build_game_from_shots(start_time: &str, entries: &[ShotEntry]) -> Option<Game> {
    if entries.len() != ROUNDS_PER_GAME * SHOTS_PER_ROUND {
        return None;
    }
    let mut by_round: BTreeMap<u8, Vec<&ShotEntry>> = BTreeMap::new();
    for entry in entries {
        by_round.entry(entry.round).or_default().push(entry);
    }
    if by_round.len() != ROUNDS_PER_GAME {
        return None;
    }

    let mut rounds = Vec::with_capacity(ROUNDS_PER_GAME);
    for round_number in 1..=ROUNDS_PER_GAME as u8 {
        let round_entries = by_round.get(&round_number)?;
        if round_entries.len() != SHOTS_PER_ROUND {
            return None;
        }
        let mut slots: [Option<Shot>; SHOTS_PER_ROUND] = [None; SHOTS_PER_ROUND];
        for entry in round_entries {
            let slot = slots.get_mut(usize::from(entry.shot).checked_sub(1)?)?;
            if slot.is_some() {
                return None;
            }
            *slot = Some(entry.result);
        }
        let mut shots = [Shot::Miss; SHOTS_PER_ROUND];
        for (shot, slot) in shots.iter_mut().zip(slots) {
            *shot = slot?;
        }
        rounds.push(Round::new(shots));
    }

    Game::from_rounds(rounds, start_time).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "2024-06-01T12:34:56.789Z";

    fn rows(start: &str, hits_per_round: [u8; 5]) -> Vec<String> {
        let mut rows = Vec::new();
        for (r, hits) in hits_per_round.iter().enumerate() {
            for s in 0..5u8 {
                let result = u8::from(s < *hits);
                rows.push(format!("{},{},{},{}", start, r + 1, s + 1, result));
            }
        }
        rows
    }

    #[test]
    fn test_parse_line() {
        let (start, entry) = parse_csv_line(" 2024-06-01T12:34:56.789Z , 2 , 3 , 1 ").unwrap();
        assert_eq!(start, START);
        assert_eq!(
            entry,
            ShotEntry {
                round: 2,
                shot: 3,
                result: Shot::Hit
            }
        );
    }

    #[test]
    fn test_parse_line_rejects() {
        assert!(parse_csv_line("2024,1,1").is_none());
        assert!(parse_csv_line("2024,x,1,1").is_none());
        assert!(parse_csv_line("2024,0,1,1").is_none());
        assert!(parse_csv_line("2024,6,1,1").is_none());
        assert!(parse_csv_line("2024,1,6,1").is_none());
        assert!(parse_csv_line("2024,1,1,2").is_none());
        assert!(parse_csv_line("2024,1,1,-1").is_none());
        assert!(parse_csv_line(" ,1,1,1").is_none());
    }

    #[test]
    fn test_parse_line_ignores_extra_fields() {
        assert!(parse_csv_line("2024,1,1,1,extra").is_some());
    }

    #[test]
    fn test_parse_with_header() {
        let mut lines = vec!["GAME_START_TIME,round_number,shot_number,result".to_string()];
        lines.extend(rows(START, [5, 4, 3, 2, 1]));
        let games = parse_games_from_csv(&lines.join("\r\n"));

        assert_eq!(games.len(), 1);
        assert_eq!(games[0].round_hits(), [5, 4, 3, 2, 1]);
        assert_eq!(games[0].start_time(), START);
    }

    #[test]
    fn test_parse_without_header_and_blank_lines() {
        let text = rows(START, [1, 1, 1, 1, 1]).join("\n\n  \n");
        assert_eq!(parse_games_from_csv(&text).len(), 1);
    }

    #[test]
    fn test_short_group_is_dropped() {
        let mut lines = rows("2024-01-01T00:00:00.000Z", [5, 5, 5, 5, 5]);
        lines.pop();
        lines.extend(rows(START, [2, 2, 2, 2, 2]));

        let games = parse_games_from_csv(&lines.join("\n"));
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].start_time(), START);
    }

    #[test]
    fn test_duplicate_shot_position_drops_game() {
        let mut lines = rows(START, [3, 3, 3, 3, 3]);
        // Round 2 claims shot 3 twice and never shot 4
        lines[8] = format!("{},2,3,0", START);
        assert!(parse_games_from_csv(&lines.join("\n")).is_empty());
    }

    #[test]
    fn test_interleaved_rows_are_grouped() {
        let a = rows("2024-01-01T00:00:00.000Z", [1, 2, 3, 4, 5]);
        let b = rows(START, [5, 4, 3, 2, 1]);
        let mut lines = Vec::new();
        for (x, y) in a.iter().zip(b.iter()).rev() {
            lines.push(y.clone());
            lines.push(x.clone());
        }

        let games = parse_games_from_csv(&lines.join("\n"));
        assert_eq!(games.len(), 2);
        // Encounter order: the last row of `b` came first
        assert_eq!(games[0].start_time(), START);
        assert_eq!(games[0].round_hits(), [5, 4, 3, 2, 1]);
        assert_eq!(games[1].round_hits(), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_invalid_rows_do_not_count_toward_group() {
        let mut lines = rows(START, [5, 5, 5, 5, 5]);
        lines.push(format!("{},9,1,1", START));
        lines.push(format!("{},1,1,maybe", START));
        assert_eq!(parse_games_from_csv(&lines.join("\n")).len(), 1);
    }

    #[test]
    fn test_build_game_wrong_round_spread() {
        // 25 entries but round 1 has six and round 5 has four
        let mut entries: Vec<ShotEntry> = (1..=5u8)
            .flat_map(|round| {
                (1..=5u8).map(move |shot| ShotEntry {
                    round,
                    shot,
                    result: Shot::Hit,
                })
            })
            .collect();
        entries[24].round = 1;
        assert!(build_game_from_shots(START, &entries).is_none());
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_games_from_csv("").is_empty());
        assert!(parse_games_from_csv("game_start_time,round_number,shot_number,result\r\n").is_empty());
    }
}
