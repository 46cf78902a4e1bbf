//! Terminal backend
//!
//! Owns raw mode and the alternate screen. The guard restores the terminal
//! on drop, so every normal exit path (including `?` returns) hands a usable
//! shell back. A hard kill skips teardown; that gap is accepted.

use std::io::{Stdout, Write, stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::Print,
    terminal,
};

use crate::sim::{Ball, Impulse, Viewport};

/// One decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Quit,
    Impulse(Impulse),
}

/// Raw-mode terminal with a frame queue on stdout.
pub struct Terminal {
    out: Stdout,
    viewport: Viewport,
}

impl Terminal {
    /// Capture the dimensions, enter raw mode and switch to the alternate
    /// screen with the cursor hidden.
    pub fn new() -> Result<Self> {
        let (cols, rows) =
            terminal::size().context("querying terminal size (is stdout a terminal?)")?;
        terminal::enable_raw_mode().context("entering raw mode")?;
        let mut out = stdout();
        if let Err(err) = execute!(out, terminal::EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(err).context("switching to the alternate screen");
        }
        Ok(Self {
            out,
            viewport: Viewport::new(cols, rows),
        })
    }

    /// Dimensions captured at startup; fixed for the run.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Queue a full-screen clear; visible after [`flush`](Self::flush).
    pub fn clear(&mut self) -> Result<()> {
        queue!(self.out, terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    /// Queue the 3x3 asterisk cluster centered on the ball's rounded cell.
    /// Cells falling outside the viewport are skipped.
    pub fn draw_ball(&mut self, ball: &Ball) -> Result<()> {
        let cx = ball.pos.x.round() as i32;
        let cy = ball.pos.y.round() as i32;
        for (col, row) in glyph_cells(cx, cy, &self.viewport) {
            queue!(self.out, cursor::MoveTo(col, row), Print('*'))?;
        }
        Ok(())
    }

    /// Push the queued frame to the terminal.
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Non-blocking read of at most one buffered key event.
    ///
    /// Returns immediately with `None` when nothing is buffered, so the
    /// frame cadence never stalls on input.
    pub fn poll_key(&mut self) -> Result<Option<KeyPress>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        let Event::Key(key) = event::read()? else {
            return Ok(None);
        };
        Ok(decode_key(key))
    }
}

/// Map a key event to a command. Only presses count; some terminals also
/// deliver repeat and release events for a single physical keypress.
fn decode_key(key: KeyEvent) -> Option<KeyPress> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('q') => Some(KeyPress::Quit),
        KeyCode::Char(' ') => Some(KeyPress::Impulse(Impulse::Jump)),
        KeyCode::Char('w') => Some(KeyPress::Impulse(Impulse::Left)),
        KeyCode::Char('r') => Some(KeyPress::Impulse(Impulse::Right)),
        _ => None,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        // Best effort; there is nowhere to report a teardown failure.
        let _ = execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// The nine cells of the ball glyph, clipped to the viewport.
fn glyph_cells(cx: i32, cy: i32, vp: &Viewport) -> Vec<(u16, u16)> {
    let width = vp.width as i32;
    let height = vp.height as i32;
    let mut cells = Vec::with_capacity(9);
    for dy in -1..=1 {
        for dx in -1..=1 {
            let (x, y) = (cx + dx, cy + dy);
            if (0..width).contains(&x) && (0..height).contains(&y) {
                cells.push((x as u16, y as u16));
            }
        }
    }
    cells
}
