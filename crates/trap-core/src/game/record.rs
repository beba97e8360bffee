use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::config::game::ROUNDS_PER_GAME;
use crate::error::{Error, Result};
use crate::game::Round;

/// A completed game: five rounds and the start time that identifies it.
///
/// Two games are the same game iff their start-time strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Game {
    rounds: [Round; ROUNDS_PER_GAME],
    start_time: String,
}

impl Game {
    pub fn new(rounds: [Round; ROUNDS_PER_GAME], start_time: impl Into<String>) -> Self {
        Self {
            rounds,
            start_time: start_time.into(),
        }
    }

    /// Build a game from a list of rounds, checking the round count and
    /// that the start time is present.
    pub fn from_rounds(rounds: Vec<Round>, start_time: impl Into<String>) -> Result<Self> {
        let start_time = start_time.into();
        if start_time.is_empty() {
            return Err(Error::MissingStartTime);
        }
        let actual = rounds.len();
        let rounds: [Round; ROUNDS_PER_GAME] =
            rounds.try_into().map_err(|_| Error::InvalidGameLength {
                expected: ROUNDS_PER_GAME,
                actual,
            })?;
        Ok(Self { rounds, start_time })
    }

    pub fn rounds(&self) -> &[Round; ROUNDS_PER_GAME] {
        &self.rounds
    }

    pub fn start_time(&self) -> &str {
        &self.start_time
    }

    /// Sum of hits over all rounds (0..=25)
    pub fn total_hits(&self) -> u32 {
        self.rounds.iter().map(Round::hits_count).sum()
    }

    /// Hit count of each round, in order
    pub fn round_hits(&self) -> [u32; ROUNDS_PER_GAME] {
        self.rounds.map(|round| round.hits_count())
    }

    pub fn to_record(&self) -> GameRecord {
        GameRecord {
            rounds: self
                .rounds
                .iter()
                .map(|round| RoundRecord {
                    shots: round.values().iter().map(|&v| i64::from(v)).collect(),
                })
                .collect(),
            start_time: self.start_time.clone(),
        }
    }
}

/// Stored shape of a round: `{"shots": [0, 1, 1, 0, 1]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub shots: Vec<i64>,
}

/// Stored shape of a game: `{"rounds": [...], "startTime": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub rounds: Vec<RoundRecord>,
    #[serde(rename = "startTime")]
    pub start_time: String,
}

impl TryFrom<GameRecord> for Game {
    type Error = Error;

    fn try_from(record: GameRecord) -> Result<Self> {
        if record.start_time.is_empty() {
            return Err(Error::MissingStartTime);
        }
        if record.rounds.len() != ROUNDS_PER_GAME {
            return Err(Error::InvalidGameLength {
                expected: ROUNDS_PER_GAME,
                actual: record.rounds.len(),
            });
        }
        let rounds = record
            .rounds
            .iter()
            .map(|round| Round::from_values(&round.shots))
            .collect::<Result<Vec<_>>>()?;
        Game::from_rounds(rounds, record.start_time)
    }
}

/// Encode a game as its stored JSON shape.
pub fn serialize_game(game: &Game) -> Result<JsonValue> {
    Ok(serde_json::to_value(game.to_record())?)
}

/// Decode one stored game. Any structural deviation yields `None` so the
/// caller can skip this element and keep going with its siblings.
pub fn deserialize_game(value: &JsonValue) -> Option<Game> {
    let record = match GameRecord::deserialize(value) {
        Ok(record) => record,
        Err(e) => {
            debug!("Skipping malformed game record: {}", e);
            return None;
        }
    };
    match Game::try_from(record) {
        Ok(game) => Some(game),
        Err(e) => {
            debug!("Skipping invalid game record: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_game() -> Game {
        Game::new(
            [
                Round::from_hits(5).unwrap(),
                Round::from_values(&[1, 0, 1, 0, 1]).unwrap(),
                Round::from_hits(0).unwrap(),
                Round::from_hits(2).unwrap(),
                Round::from_values(&[0, 0, 0, 0, 1]).unwrap(),
            ],
            "2024-06-01T12:34:56.789Z",
        )
    }

    #[test]
    fn test_total_hits() {
        let game = sample_game();
        assert_eq!(game.round_hits(), [5, 3, 0, 2, 1]);
        assert_eq!(game.total_hits(), 11);
    }

    #[test]
    fn test_serialize_shape() {
        let value = serialize_game(&sample_game()).unwrap();
        assert_eq!(value["startTime"], "2024-06-01T12:34:56.789Z");
        assert_eq!(value["rounds"].as_array().unwrap().len(), 5);
        assert_eq!(value["rounds"][1]["shots"], json!([1, 0, 1, 0, 1]));
    }

    #[test]
    fn test_round_trip() {
        let game = sample_game();
        let value = serialize_game(&game).unwrap();
        assert_eq!(deserialize_game(&value), Some(game));
    }

    #[test]
    fn test_deserialize_rejects_missing_start_time() {
        let mut value = serialize_game(&sample_game()).unwrap();
        value.as_object_mut().unwrap().remove("startTime");
        assert!(deserialize_game(&value).is_none());

        value["startTime"] = json!("");
        assert!(deserialize_game(&value).is_none());
    }

    #[test]
    fn test_deserialize_rejects_missing_rounds() {
        let value = json!({ "startTime": "2024-06-01T12:34:56.789Z" });
        assert!(deserialize_game(&value).is_none());
    }

    #[test]
    fn test_deserialize_rejects_bad_round() {
        let mut value = serialize_game(&sample_game()).unwrap();
        value["rounds"][2]["shots"] = json!([1, 1, 1, 1]);
        assert!(deserialize_game(&value).is_none());

        let mut value = serialize_game(&sample_game()).unwrap();
        value["rounds"][2]["shots"] = json!([1, 1, 2, 1, 1]);
        assert!(deserialize_game(&value).is_none());

        let mut value = serialize_game(&sample_game()).unwrap();
        value["rounds"][2] = json!({ "hits": 3 });
        assert!(deserialize_game(&value).is_none());
    }

    #[test]
    fn test_deserialize_rejects_wrong_round_count() {
        let mut value = serialize_game(&sample_game()).unwrap();
        value["rounds"].as_array_mut().unwrap().pop();
        assert!(deserialize_game(&value).is_none());
    }

    #[test]
    fn test_from_rounds_checks_count() {
        let rounds = vec![Round::default(); 4];
        assert!(matches!(
            Game::from_rounds(rounds, "2024-06-01T12:34:56.789Z"),
            Err(Error::InvalidGameLength { actual: 4, .. })
        ));
    }
}
