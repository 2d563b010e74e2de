pub mod entity;
pub mod error;
pub mod config;
pub mod bird;
pub mod pipe;
pub mod score;
pub mod collision;
pub mod game;
pub mod renderer;
pub mod cli_renderer;
pub mod buffer_renderer;

pub use entity::{Cell, Screen, Shape};
pub use error::{ConfigError, GameError};
pub use config::GameConfig;
pub use bird::{Bird, MotionState};
pub use pipe::Pipe;
pub use score::ScoreEngine;
pub use collision::Collision;
pub use game::{Ending, Game, GameState, GameSummary, TickOutcome};
pub use renderer::{Input, Renderer};
pub use cli_renderer::CliRenderer;
pub use buffer_renderer::BufferRenderer;
