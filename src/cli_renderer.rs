use crate::entity::{Cell, Screen};
use crate::renderer::{Input, Renderer};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Print, ResetColor},
    terminal::{self, ClearType},
};
use std::io::{self, Write};
use std::time::Duration;

/// Draws straight onto the terminal with crossterm. Holding one of these
/// means the terminal is in raw mode; dropping it restores cooked mode.
pub struct CliRenderer {
    screen: Screen,
    stdout: io::Stdout,
    active: bool,
}

impl CliRenderer {
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            stdout: io::stdout(),
            active: false,
        }
    }

    /// Current terminal size as game geometry.
    pub fn detect_screen() -> io::Result<Screen> {
        let (cols, rows) = terminal::size()?;
        Ok(Screen::new(rows as i32, cols as i32))
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    fn enter(&mut self) -> io::Result<()> {
        execute!(
            self.stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide
        )
    }
}

/// Puts the terminal back into cooked mode. Safe to call when it already is.
pub fn restore_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    let shown = execute!(
        stdout,
        ResetColor,
        cursor::Show,
        terminal::LeaveAlternateScreen
    );
    terminal::disable_raw_mode()?;
    shown
}

/// Maps a key press to game input: up arrow or `w` flaps, Escape or
/// Ctrl-C quits. Releases and repeats are ignored.
pub fn input_for_key(key: KeyEvent) -> Option<Input> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Esc => Some(Input::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Input::Quit),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Input::Flap),
        _ => None,
    }
}

impl Renderer for CliRenderer {
    fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;

        if let Err(err) = self.enter() {
            // Undo the partial setup before surfacing the failure
            if let Err(cleanup_err) = self.cleanup() {
                tracing::warn!(?cleanup_err, "failed to restore terminal after setup error");
            }
            return Err(err);
        }
        tracing::debug!(rows = self.screen.rows, cols = self.screen.cols, "terminal session started");
        Ok(())
    }

    fn draw_char(&mut self, cell: Cell, glyph: char) -> io::Result<()> {
        if !self.screen.contains(cell) {
            return Ok(());
        }
        queue!(
            self.stdout,
            cursor::MoveTo(cell.col as u16, cell.row as u16),
            Print(glyph)
        )
    }

    fn erase_cells(&mut self, cells: &[Cell]) -> io::Result<()> {
        for &cell in cells {
            self.draw_char(cell, ' ')?;
        }
        Ok(())
    }

    fn refresh(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }

    fn cleanup(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        restore_terminal()
    }

    fn poll_input(&mut self) -> io::Result<Option<Input>> {
        let mut latest = None;

        // Drain everything pending so a held key never lags behind the game
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                match input_for_key(key) {
                    Some(Input::Quit) => return Ok(Some(Input::Quit)),
                    Some(input) => latest = Some(input),
                    None => {}
                }
            }
        }
        Ok(latest)
    }
}

impl Drop for CliRenderer {
    fn drop(&mut self) {
        if let Err(err) = self.cleanup() {
            tracing::warn!(?err, "failed to restore terminal");
        }
    }
}
