use crate::error::ConfigError;

/// Running score. It only ever goes up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEngine {
    score: u32,
    increment: u32,
}

impl ScoreEngine {
    pub fn new(increment: u32) -> Result<Self, ConfigError> {
        if increment == 0 {
            return Err(ConfigError::ZeroScoreIncrement);
        }
        Ok(Self {
            score: 0,
            increment,
        })
    }

    /// Adds one pass worth of points and returns the new total.
    pub fn increment(&mut self) -> u32 {
        self.score = self.score.saturating_add(self.increment);
        self.score
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn increment_value(&self) -> u32 {
        self.increment
    }
}
