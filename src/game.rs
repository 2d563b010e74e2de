use crate::bird::Bird;
use crate::collision::{self, Collision};
use crate::config::GameConfig;
use crate::entity::{Cell, Screen};
use crate::error::Result;
use crate::pipe::Pipe;
use crate::renderer::{Input, Renderer};
use crate::score::ScoreEngine;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::thread;
use tracing::{debug, info, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    Collided(Collision),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Over(Ending),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue { passed: bool },
    GameOver { score: u32, ending: Ending },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub score: u32,
    pub ticks: u64,
    pub ending: Ending,
}

pub struct Game {
    pub screen: Screen,
    pub config: GameConfig,
    pub bird: Bird,
    pub pipes: Vec<Pipe>,
    pub score: ScoreEngine,
    pub state: GameState,
    pub spawn_countdown: u32,
    pub ticks: u64,
    rng: StdRng,
}

impl Game {
    pub fn new(screen: Screen, config: GameConfig) -> Result<Self> {
        config.validate_on(screen)?;

        let score = ScoreEngine::new(config.score_increment)?;
        let bird = Bird::build(
            config.bird_glyph,
            config.bird_height,
            config.bird_width,
            Cell::new(config.bird_row, config.bird_col),
        )?;
        let first_pipe = Pipe::build(
            screen,
            config.pipe_glyph,
            (config.initial_pipe_left, config.initial_pipe_left + config.pipe_width),
            config.initial_gap_top,
            config.initial_gap_bottom,
            true,
        )?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            screen,
            config,
            bird,
            pipes: vec![first_pipe],
            score,
            state: GameState::Playing,
            spawn_countdown: 0,
            ticks: 0,
            rng,
        })
    }

    /// Draws every sprite at its current position.
    pub fn draw(&self, renderer: &mut dyn Renderer) -> Result<()> {
        for pipe in &self.pipes {
            renderer.draw_cells(pipe.cells(), pipe.glyph)?;
        }
        renderer.draw_cells(self.bird.cells(), self.bird.glyph)?;
        renderer.refresh()?;
        Ok(())
    }

    /// Polls the renderer for input and advances one tick.
    pub fn tick(&mut self, renderer: &mut dyn Renderer) -> Result<TickOutcome> {
        let input = renderer.poll_input()?;
        self.step(input, renderer)
    }

    /// Advances the world by one tick given the key pressed during it.
    pub fn step(&mut self, input: Option<Input>, renderer: &mut dyn Renderer) -> Result<TickOutcome> {
        if let GameState::Over(ending) = self.state {
            return Ok(self.game_over(ending));
        }
        if input == Some(Input::Quit) {
            return Ok(self.finish(Ending::Quit));
        }

        self.ticks += 1;
        trace!(tick = self.ticks, score = self.score.score(), "tick");

        self.update_pipes(renderer)?;
        self.maybe_spawn_pipe()?;

        let flap = input == Some(Input::Flap);
        if let Some(vacated) = self
            .bird
            .step(flap, self.config.flap_lift, self.config.fall_rate)?
        {
            // A pipe may already have scrolled onto the cells the bird left
            let uncovered: Vec<Cell> = vacated
                .into_iter()
                .filter(|cell| !self.pipes.iter().any(|pipe| pipe.cells().contains(cell)))
                .collect();
            renderer.erase_cells(&uncovered)?;
        }

        // Fixed order: borders, pipes, then scoring
        let collision = collision::border_collision(&self.bird, self.screen)
            .or_else(|| collision::pipe_collision(&self.bird, &self.pipes));
        if let Some(collision) = collision {
            self.bird.mark_collided();
            return Ok(self.finish(Ending::Collided(collision)));
        }
        let passed = collision::gap_pass(&mut self.score, &self.bird, &self.pipes);
        if passed {
            debug!(score = self.score.score(), "passed through a gap");
        }

        renderer.draw_cells(self.bird.cells(), self.bird.glyph)?;
        renderer.refresh()?;

        Ok(TickOutcome::Continue { passed })
    }

    /// Runs ticks separated by the configured interval until the game ends.
    pub fn run(&mut self, renderer: &mut dyn Renderer) -> Result<GameSummary> {
        let interval = self.config.tick_duration()?;
        info!(
            rows = self.screen.rows,
            cols = self.screen.cols,
            tick_interval = self.config.tick_interval,
            "game started"
        );
        self.draw(renderer)?;

        loop {
            if let TickOutcome::GameOver { score, ending } = self.tick(renderer)? {
                return Ok(GameSummary {
                    score,
                    ticks: self.ticks,
                    ending,
                });
            }
            thread::sleep(interval);
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state, GameState::Over(_))
    }

    fn update_pipes(&mut self, renderer: &mut dyn Renderer) -> Result<()> {
        for pipe in &mut self.pipes {
            let vacated = pipe.shift(self.config.pipe_speed);
            renderer.erase_cells(&vacated)?;

            // Columns left of the screen can never be drawn again
            if pipe.left() < 0 {
                let hidden = (-pipe.left()).min(pipe.width());
                let columns: Vec<i32> = (0..hidden).collect();
                pipe.trim_leading_columns(&columns)?;
            }

            renderer.draw_cells(pipe.cells(), pipe.glyph)?;
        }

        let before = self.pipes.len();
        self.pipes.retain(|pipe| !pipe.is_fully_offscreen());
        if self.pipes.len() < before {
            debug!(removed = before - self.pipes.len(), active = self.pipes.len(), "pipes despawned");
        }
        Ok(())
    }

    fn maybe_spawn_pipe(&mut self) -> Result<()> {
        if self.spawn_countdown < self.config.spawn_cadence {
            self.spawn_countdown += 1;
            return Ok(());
        }
        self.spawn_countdown = 0;

        let left = match self.pipes.last() {
            Some(previous) => previous.right() + self.config.spawn_spacing,
            None => self.screen.cols,
        };
        let mid = self.screen.mid_row();
        let (top_low, top_high) = self.config.gap_top_band;
        let (bottom_low, bottom_high) = self.config.gap_bottom_band;
        let gap_top = mid + self.rng.gen_range(top_low..=top_high);
        let gap_bottom = mid + self.rng.gen_range(bottom_low..=bottom_high);

        let pipe = Pipe::build(
            self.screen,
            self.config.pipe_glyph,
            (left, left + self.config.pipe_width),
            gap_top,
            gap_bottom,
            false,
        )?;
        debug!(left, gap_top, gap_bottom, active = self.pipes.len() + 1, "pipe spawned");
        self.pipes.push(pipe);
        Ok(())
    }

    fn finish(&mut self, ending: Ending) -> TickOutcome {
        self.state = GameState::Over(ending);
        info!(score = self.score.score(), ticks = self.ticks, ?ending, "game over");
        self.game_over(ending)
    }

    fn game_over(&self, ending: Ending) -> TickOutcome {
        TickOutcome::GameOver {
            score: self.score.score(),
            ending,
        }
    }
}
