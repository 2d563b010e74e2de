use crate::entity::Screen;
use crate::error::ConfigError;
use std::time::Duration;

/// Startup parameters for a game session. Nothing here is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Seconds slept at the end of every tick.
    pub tick_interval: f64,
    pub score_increment: u32,

    pub flap_lift: i32,
    pub fall_rate: i32,
    pub pipe_speed: i32,
    /// Ticks the spawn countdown counts before firing. A pipe spawns on the
    /// tick after the countdown reaches this value, so spawns are
    /// `spawn_cadence + 1` ticks apart.
    pub spawn_cadence: u32,
    /// Columns between the previous pipe's right edge and a new pipe.
    pub spawn_spacing: i32,
    pub pipe_width: i32,
    /// Inclusive offsets from mid-screen for a spawned gap's top row.
    pub gap_top_band: (i32, i32),
    /// Inclusive offsets from mid-screen for a spawned gap's bottom row.
    pub gap_bottom_band: (i32, i32),

    pub bird_height: i32,
    pub bird_width: i32,
    pub bird_row: i32,
    pub bird_col: i32,
    pub bird_glyph: char,

    pub initial_pipe_left: i32,
    pub initial_gap_top: i32,
    pub initial_gap_bottom: i32,
    pub pipe_glyph: char,

    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::for_screen(Screen::new(30, 100))
    }
}

impl GameConfig {
    /// Default layout for a screen: the bird starts a third of the way
    /// down near the left edge and the first pipe sits two thirds across.
    pub fn for_screen(screen: Screen) -> Self {
        let mid = screen.mid_row();
        Self {
            tick_interval: 0.1,
            score_increment: 1,
            flap_lift: 3,
            fall_rate: 2,
            pipe_speed: 3,
            spawn_cadence: 10,
            spawn_spacing: 10,
            pipe_width: 10,
            gap_top_band: (-8, -3),
            gap_bottom_band: (3, 8),
            bird_height: 2,
            bird_width: 3,
            bird_row: screen.rows / 3,
            bird_col: 10,
            bird_glyph: '#',
            initial_pipe_left: screen.cols * 2 / 3,
            initial_gap_top: mid - 5,
            initial_gap_bottom: mid + 5,
            pipe_glyph: '&',
            seed: None,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tick_interval.is_finite() {
            return Err(ConfigError::NonFiniteTickInterval(self.tick_interval));
        }
        if self.tick_interval < 0.0 {
            return Err(ConfigError::NegativeTickInterval(self.tick_interval));
        }
        if self.score_increment == 0 {
            return Err(ConfigError::ZeroScoreIncrement);
        }
        if self.spawn_cadence == 0 {
            return Err(ConfigError::ZeroSpawnCadence);
        }
        if self.pipe_width <= 0 {
            return Err(ConfigError::PipeWidth(self.pipe_width));
        }

        for (name, value) in [
            ("flap lift", self.flap_lift),
            ("fall rate", self.fall_rate),
            ("pipe speed", self.pipe_speed),
            ("spawn spacing", self.spawn_spacing),
        ] {
            if value < 0 {
                return Err(ConfigError::Negative { name, value });
            }
        }

        for (name, (low, high)) in [
            ("gap top", self.gap_top_band),
            ("gap bottom", self.gap_bottom_band),
        ] {
            if low > high {
                return Err(ConfigError::EmptyBand { name, low, high });
            }
        }
        if self.gap_top_band.1 >= self.gap_bottom_band.0 {
            return Err(ConfigError::OverlappingBands {
                top: self.gap_top_band,
                bottom: self.gap_bottom_band,
            });
        }

        Ok(())
    }

    /// [`GameConfig::validate`] plus checks against the session's screen.
    pub fn validate_on(&self, screen: Screen) -> Result<(), ConfigError> {
        self.validate()?;

        // Non-positive sizes are reported when the bird is built
        if self.bird_height <= 0 || self.bird_width <= 0 {
            return Ok(());
        }
        let (row, col) = (i64::from(self.bird_row), i64::from(self.bird_col));
        let bottom = row + i64::from(self.bird_height);
        let right = col + i64::from(self.bird_width);
        if row < 0 || col < 0 || bottom > i64::from(screen.rows) || right > i64::from(screen.cols) {
            return Err(ConfigError::BirdOffScreen {
                row: self.bird_row,
                col: self.bird_col,
                height: self.bird_height,
                width: self.bird_width,
                rows: screen.rows,
                cols: screen.cols,
            });
        }
        Ok(())
    }

    pub fn tick_duration(&self) -> Result<Duration, ConfigError> {
        self.validate()?;
        Ok(Duration::from_secs_f64(self.tick_interval))
    }
}
