use crate::entity::Cell;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Flap,
    Quit,
}

/// Trait that abstracts the screen and keyboard the game runs on.
/// This allows for different backends (terminal, in-memory, etc.)
///
/// Draws and erases outside the visible screen must be ignored rather than
/// reported, since pipes and the bird routinely hang over the edges.
pub trait Renderer {
    /// Initialize the renderer
    fn init(&mut self) -> io::Result<()>;

    /// Draw a single glyph at `cell`
    fn draw_char(&mut self, cell: Cell, glyph: char) -> io::Result<()>;

    /// Overwrite every cell with a blank
    fn erase_cells(&mut self, cells: &[Cell]) -> io::Result<()>;

    /// Flush pending draws to the display
    fn refresh(&mut self) -> io::Result<()>;

    /// Clean up and restore terminal/display state
    fn cleanup(&mut self) -> io::Result<()>;

    /// Most recent key press, without blocking
    fn poll_input(&mut self) -> io::Result<Option<Input>>;

    fn draw_cells(&mut self, cells: &[Cell], glyph: char) -> io::Result<()> {
        for &cell in cells {
            self.draw_char(cell, glyph)?;
        }
        Ok(())
    }
}
