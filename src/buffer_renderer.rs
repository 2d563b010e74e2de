use crate::entity::{Cell, Screen};
use crate::renderer::{Input, Renderer};
use std::collections::VecDeque;
use std::io;

/// In-memory character grid. Runs the game without a terminal: inputs are
/// scripted up front and the screen can be inspected after every tick.
#[derive(Debug, Clone)]
pub struct BufferRenderer {
    screen: Screen,
    glyphs: Vec<char>,
    inputs: VecDeque<Option<Input>>,
    refreshes: usize,
}

impl BufferRenderer {
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            glyphs: vec![' '; (screen.rows.max(0) * screen.cols.max(0)) as usize],
            inputs: VecDeque::new(),
            refreshes: 0,
        }
    }

    /// Queues one poll result per tick; `None` means no key was pressed.
    pub fn push_input(&mut self, input: Option<Input>) {
        self.inputs.push_back(input);
    }

    pub fn glyph_at(&self, cell: Cell) -> Option<char> {
        self.index(cell).map(|i| self.glyphs[i])
    }

    pub fn count(&self, glyph: char) -> usize {
        self.glyphs.iter().filter(|&&g| g == glyph).count()
    }

    pub fn refreshes(&self) -> usize {
        self.refreshes
    }

    /// Screen contents, one line per row.
    pub fn snapshot(&self) -> String {
        self.glyphs
            .chunks(self.screen.cols.max(1) as usize)
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        self.screen
            .contains(cell)
            .then(|| (cell.row * self.screen.cols + cell.col) as usize)
    }
}

impl Renderer for BufferRenderer {
    fn init(&mut self) -> io::Result<()> {
        self.glyphs.fill(' ');
        Ok(())
    }

    fn draw_char(&mut self, cell: Cell, glyph: char) -> io::Result<()> {
        if let Some(i) = self.index(cell) {
            self.glyphs[i] = glyph;
        }
        Ok(())
    }

    fn erase_cells(&mut self, cells: &[Cell]) -> io::Result<()> {
        for &cell in cells {
            self.draw_char(cell, ' ')?;
        }
        Ok(())
    }

    fn refresh(&mut self) -> io::Result<()> {
        self.refreshes += 1;
        Ok(())
    }

    fn cleanup(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn poll_input(&mut self) -> io::Result<Option<Input>> {
        Ok(self.inputs.pop_front().flatten())
    }
}
