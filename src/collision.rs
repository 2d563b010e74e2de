//! Collision and scoring rules. Every rule is a pure function of the state
//! it is handed; nothing here keeps state between ticks.

use crate::bird::Bird;
use crate::entity::{Cell, Screen};
use crate::pipe::Pipe;
use crate::score::ScoreEngine;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Border,
    Pipe,
}

/// Top border is row 0 and the bottom border is `screen.rows`, so the bird
/// may use rows `1..rows` but row `rows - 1` is still safe.
pub fn border_collision(bird: &Bird, screen: Screen) -> Option<Collision> {
    bird.cells()
        .iter()
        .any(|cell| cell.row <= 0 || cell.row >= screen.rows)
        .then_some(Collision::Border)
}

pub fn pipe_collision(bird: &Bird, pipes: &[Pipe]) -> Option<Collision> {
    let body: HashSet<Cell> = bird.cells().iter().copied().collect();

    pipes
        .iter()
        .flat_map(|pipe| pipe.cells())
        .any(|cell| body.contains(cell))
        .then_some(Collision::Pipe)
}

/// Awards one pass when the bird sits inside a pipe opening.
///
/// Only the first and last occupied cells are sampled, as stand-ins for the
/// top-left and bottom-right corners. Both bounds are exclusive. The first
/// qualifying pipe wins and at most one increment happens per call.
pub fn gap_pass(score: &mut ScoreEngine, bird: &Bird, pipes: &[Pipe]) -> bool {
    let corners = match (bird.cells().first(), bird.cells().last()) {
        (Some(&top_left), Some(&bottom_right)) => [top_left, bottom_right],
        _ => return false,
    };

    let passed = pipes
        .iter()
        .any(|pipe| corners.iter().any(|&corner| in_opening(pipe, corner)));
    if passed {
        score.increment();
    }
    passed
}

fn in_opening(pipe: &Pipe, cell: Cell) -> bool {
    let inside_rows = pipe.gap_top() < cell.row && cell.row < pipe.gap_bottom();
    let inside_cols = pipe.left() < cell.col && cell.col < pipe.right();
    inside_rows && inside_cols
}
