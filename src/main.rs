use anyhow::{Context, Result};
use clap::Parser;
use glappy::{cli_renderer, CliRenderer, Collision, Ending, Game, GameConfig, GameSummary, Renderer};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Glappy Gird: fly through the pipes with the up arrow or W, Escape quits.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seconds between two ticks.
    #[arg(long, value_name = "SECONDS", default_value_t = 0.1)]
    tick_interval: f64,
    /// Points awarded for every tick spent inside a pipe opening.
    #[arg(long, value_name = "POINTS", default_value_t = 1,
          value_parser = clap::value_parser!(u32).range(1..))]
    score_increment: u32,
    /// Bird height in rows.
    #[arg(long)]
    bird_height: Option<i32>,
    /// Bird width in columns.
    #[arg(long)]
    bird_width: Option<i32>,
    /// Starting row of the bird's top edge.
    #[arg(long)]
    bird_row: Option<i32>,
    /// Starting column of the bird's left edge.
    #[arg(long)]
    bird_col: Option<i32>,
    /// Top row of the first pipe's opening.
    #[arg(long)]
    gap_top: Option<i32>,
    /// Row below the first pipe's opening.
    #[arg(long)]
    gap_bottom: Option<i32>,
    /// Seed for pipe openings, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
    /// Write logs to this file (filtered with RUST_LOG, default `info`).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Args {
    fn into_config(self, mut config: GameConfig) -> GameConfig {
        config.tick_interval = self.tick_interval;
        config.score_increment = self.score_increment;
        config.bird_height = self.bird_height.unwrap_or(config.bird_height);
        config.bird_width = self.bird_width.unwrap_or(config.bird_width);
        config.bird_row = self.bird_row.unwrap_or(config.bird_row);
        config.bird_col = self.bird_col.unwrap_or(config.bird_col);
        config.initial_gap_top = self.gap_top.unwrap_or(config.initial_gap_top);
        config.initial_gap_bottom = self.gap_bottom.unwrap_or(config.initial_gap_bottom);
        config.seed = self.seed;
        config
    }
}

// Logging goes to a file only; stderr belongs to the raw-mode screen.
fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(anyhow::Error::msg)
        .context("failed to install the log subscriber")
}

// A game error is reported ahead of a failure to restore the terminal.
fn end_session(
    result: glappy::error::Result<GameSummary>,
    restored: io::Result<()>,
) -> Result<GameSummary> {
    let summary = result?;
    restored.context("failed to restore terminal")?;
    Ok(summary)
}

fn main() -> Result<()> {
    let mut args = Args::parse();
    if let Some(path) = args.log_file.take() {
        init_tracing(&path)?;
    }

    // Restore the terminal before the panic message is printed
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = cli_renderer::restore_terminal();
        default_hook(info);
    }));

    let screen = CliRenderer::detect_screen().context("failed to read terminal size")?;
    let config = args.into_config(GameConfig::for_screen(screen));
    let mut game = Game::new(screen, config)
        .with_context(|| format!("cannot start a game on a {}x{} terminal", screen.cols, screen.rows))?;

    let mut renderer = CliRenderer::new(screen);
    renderer.init().context("failed to enter raw mode")?;
    let result = game.run(&mut renderer);
    let restored = renderer.cleanup();
    let summary = end_session(result, restored)?;
    match summary.ending {
        Ending::Collided(Collision::Border) => println!("You flew off the screen!"),
        Ending::Collided(Collision::Pipe) => println!("You hit a pipe!"),
        Ending::Quit => {}
    }
    println!("Game over! Final score: {}", summary.score);
    Ok(())
}
