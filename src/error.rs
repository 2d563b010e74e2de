use std::io;
use thiserror::Error;

/// Rejected startup configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("tick interval must be a finite number of seconds, got {0}")]
    NonFiniteTickInterval(f64),
    #[error("tick interval must be >= 0, got {0}")]
    NegativeTickInterval(f64),
    #[error("score increment must be positive")]
    ZeroScoreIncrement,
    #[error("spawn cadence must be at least one tick")]
    ZeroSpawnCadence,
    #[error("{name} must be >= 0, got {value}")]
    Negative { name: &'static str, value: i32 },
    #[error("pipe width must be positive, got {0}")]
    PipeWidth(i32),
    #[error("{name} band is empty: {low}..={high}")]
    EmptyBand {
        name: &'static str,
        low: i32,
        high: i32,
    },
    #[error("a {height}x{width} bird at ({row}, {col}) does not fit a {rows}x{cols} screen")]
    BirdOffScreen {
        row: i32,
        col: i32,
        height: i32,
        width: i32,
        rows: i32,
        cols: i32,
    },
    #[error("gap top band {top:?} must lie above gap bottom band {bottom:?}")]
    OverlappingBands { top: (i32, i32), bottom: (i32, i32) },
}

/// Everything that can go wrong in the game. Collisions are not errors;
/// they end the game through [`crate::TickOutcome::GameOver`].
#[derive(Debug, Error)]
pub enum GameError {
    #[error("bird dimensions must be positive, got {height}x{width}")]
    InvalidBirdSize { height: i32, width: i32 },
    #[error("a {height}x{width} bird at ({row}, {col}) does not fit the coordinate space")]
    BirdOutOfRange {
        row: i32,
        col: i32,
        height: i32,
        width: i32,
    },
    #[error("the minimum x coordinate of the screen is 0 and the pipe starts at {left}")]
    PipeLeftEdge { left: i32 },
    #[error("the screen is {cols} columns wide and the pipe ends at {right}")]
    PipeRightEdge { right: i32, cols: i32 },
    #[error("the top of the pipe opening must be >= 0, got {top}")]
    GapTop { top: i32 },
    #[error("the screen has {rows} rows and the bottom of the pipe opening is {bottom}")]
    GapBottom { bottom: i32, rows: i32 },
    #[error("overlapping ends of the pipe opening: top {top}, bottom {bottom}")]
    GapInverted { top: i32, bottom: i32 },
    #[error("trim columns must start at 0, be contiguous and fit the pipe width {width}: {columns:?}")]
    InvalidTrimRange { columns: Vec<i32>, width: i32 },
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
