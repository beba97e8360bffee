use chrono::NaiveDate;

use crate::config::csv::{COLUMNS, LINE_ENDING, SEPARATOR};
use crate::config::time::EXPORT_DATE_FORMAT;
use crate::game::Game;

pub fn format_csv_header() -> String {
    COLUMNS.join(&SEPARATOR.to_string())
}

/// One row per shot, round-major then shot-minor, with 1-based numbers.
pub fn format_csv_rows(game: &Game) -> Vec<String> {
    let mut rows = Vec::with_capacity(25);
    for (round_index, round) in game.rounds().iter().enumerate() {
        for (shot_index, shot) in round.shots().iter().enumerate() {
            rows.push(format!(
                "{start}{sep}{round}{sep}{shot}{sep}{result}",
                start = game.start_time(),
                round = round_index + 1,
                shot = shot_index + 1,
                result = shot.value(),
                sep = SEPARATOR,
            ));
        }
    }
    rows
}

/// Export games in storage order. Returns `None` when there is nothing to
/// export.
pub fn export_csv(games: &[Game]) -> Option<String> {
    if games.is_empty() {
        return None;
    }
    let mut csv = format_csv_header();
    csv.push_str(LINE_ENDING);
    for game in games {
        for row in format_csv_rows(game) {
            csv.push_str(&row);
            csv.push_str(LINE_ENDING);
        }
    }
    Some(csv)
}

/// Suggested file name for an export made on `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("trapmaster-{}.csv", date.format(EXPORT_DATE_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Round;

    fn game() -> Game {
        Game::new(
            [
                Round::from_values(&[1, 0, 1, 1, 0]).unwrap(),
                Round::from_hits(5).unwrap(),
                Round::from_hits(0).unwrap(),
                Round::from_hits(1).unwrap(),
                Round::from_hits(4).unwrap(),
            ],
            "2024-06-01T12:34:56.789Z",
        )
    }

    #[test]
    fn test_header() {
        assert_eq!(
            format_csv_header(),
            "game_start_time,round_number,shot_number,result"
        );
    }

    #[test]
    fn test_rows() {
        let rows = format_csv_rows(&game());
        assert_eq!(rows.len(), 25);
        assert_eq!(rows[0], "2024-06-01T12:34:56.789Z,1,1,1");
        assert_eq!(rows[1], "2024-06-01T12:34:56.789Z,1,2,0");
        assert_eq!(rows[5], "2024-06-01T12:34:56.789Z,2,1,1");
        assert_eq!(rows[24], "2024-06-01T12:34:56.789Z,5,5,0");
    }

    #[test]
    fn test_export_uses_crlf() {
        let csv = export_csv(&[game()]).unwrap();
        assert!(csv.starts_with("game_start_time,round_number,shot_number,result\r\n"));
        assert!(csv.ends_with("2024-06-01T12:34:56.789Z,5,5,0\r\n"));
        assert_eq!(csv.matches("\r\n").count(), 26);
    }

    #[test]
    fn test_export_empty() {
        assert!(export_csv(&[]).is_none());
    }

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(export_file_name(date), "trapmaster-2024-06-01.csv");
    }
}
