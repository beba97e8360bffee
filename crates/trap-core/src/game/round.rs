use crate::config::game::SHOTS_PER_ROUND;
use crate::error::{Error, Result};
use crate::game::Shot;

/// Five consecutive shots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Round {
    shots: [Shot; SHOTS_PER_ROUND],
}

impl Round {
    pub fn new(shots: [Shot; SHOTS_PER_ROUND]) -> Self {
        Self { shots }
    }

    /// Build a round from a hit count, hits first then misses.
    pub fn from_hits(hits: u8) -> Result<Self> {
        if usize::from(hits) > SHOTS_PER_ROUND {
            return Err(Error::InvalidHitCount(hits));
        }
        let mut shots = [Shot::Miss; SHOTS_PER_ROUND];
        shots
            .iter_mut()
            .take(usize::from(hits))
            .for_each(|shot| *shot = Shot::Hit);
        Ok(Self { shots })
    }

    /// Build a round from raw wire values. Requires exactly five values,
    /// each 0 or 1.
    pub fn from_values(values: &[i64]) -> Result<Self> {
        if values.len() != SHOTS_PER_ROUND {
            return Err(Error::InvalidRoundLength {
                expected: SHOTS_PER_ROUND,
                actual: values.len(),
            });
        }
        let mut shots = [Shot::Miss; SHOTS_PER_ROUND];
        for (slot, &value) in shots.iter_mut().zip(values) {
            *slot = Shot::from_value(value).ok_or(Error::InvalidShotValue(value))?;
        }
        Ok(Self { shots })
    }

    pub fn shots(&self) -> &[Shot; SHOTS_PER_ROUND] {
        &self.shots
    }

    pub fn values(&self) -> [u8; SHOTS_PER_ROUND] {
        self.shots.map(Shot::value)
    }

    /// Number of hits in the round (0..=5)
    pub fn hits_count(&self) -> u32 {
        self.shots.iter().filter(|shot| shot.is_hit()).count() as u32
    }
}
