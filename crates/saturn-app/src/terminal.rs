//! Interactive terminal presenter drawing the framebuffer with braille cells.

use std::io::{self, Stdout, Write, stdout};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use saturn_render::Framebuffer;

use crate::error::AppError;
use crate::present::Present;

/// Pixels covered by one braille cell.
pub const CELL_WIDTH: u32 = 2;
pub const CELL_HEIGHT: u32 = 4;

// Each terminal cell represents 2x4 pixels.
fn braille_bit(dx: u32, dy: u32) -> u8 {
    match (dx, dy) {
        (0, 0) => 0x01, // dot 1
        (0, 1) => 0x02, // dot 2
        (0, 2) => 0x04, // dot 3
        (1, 0) => 0x08, // dot 4
        (1, 1) => 0x10, // dot 5
        (1, 2) => 0x20, // dot 6
        (0, 3) => 0x40, // dot 7
        (1, 3) => 0x80, // dot 8
        _ => 0,
    }
}

fn braille_char(mask: u8) -> char {
    char::from_u32(0x2800 + u32::from(mask)).unwrap_or(' ')
}

/// Render the framebuffer as lines of braille characters, one line per four
/// pixel rows.
pub fn braille_rows(framebuffer: &Framebuffer) -> Vec<String> {
    let columns = framebuffer.width().div_ceil(CELL_WIDTH);
    let rows = framebuffer.height().div_ceil(CELL_HEIGHT);
    (0..rows)
        .map(|row| {
            (0..columns)
                .map(|column| {
                    let mut mask = 0;
                    for dy in 0..CELL_HEIGHT {
                        for dx in 0..CELL_WIDTH {
                            let x = (column * CELL_WIDTH + dx) as i32;
                            let y = (row * CELL_HEIGHT + dy) as i32;
                            if framebuffer.get_pixel(x, y) {
                                mask |= braille_bit(dx, dy);
                            }
                        }
                    }
                    braille_char(mask)
                })
                .collect()
        })
        .collect()
}

/// Whether a key press should end the run: `q`, `Esc` or `Ctrl-C`.
pub fn is_quit_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Draws frames on the alternate screen in raw mode. Console logging is
/// suspended while the presenter is active and the terminal is restored when
/// it is dropped.
pub struct TerminalPresenter {
    out: Stdout,
    active: bool,
}

impl TerminalPresenter {
    pub fn new() -> Result<Self, AppError> {
        // Constructed first so a failed setup step is undone by `Drop`.
        let mut presenter = Self {
            out: stdout(),
            active: true,
        };
        saturn_log::set_console_suspended(true);
        execute!(
            presenter.out,
            EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide
        )
        .map_err(AppError::Terminal)?;
        terminal::enable_raw_mode().map_err(AppError::Terminal)?;
        Ok(presenter)
    }

    /// Leave the alternate screen and raw mode, then resume console logging.
    /// Safe to call more than once.
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        let screen = execute!(self.out, cursor::Show, LeaveAlternateScreen);
        let raw_mode = terminal::disable_raw_mode();
        saturn_log::set_console_suspended(false);
        screen.and(raw_mode)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Present for TerminalPresenter {
    fn present(&mut self, framebuffer: &Framebuffer) -> Result<(), AppError> {
        for (row, line) in braille_rows(framebuffer).iter().enumerate() {
            queue!(self.out, cursor::MoveTo(0, row as u16), Print(line))
                .map_err(AppError::Terminal)?;
        }
        self.out.flush().map_err(AppError::Terminal)
    }

    fn quit_requested(&mut self) -> Result<bool, AppError> {
        while event::poll(Duration::ZERO).map_err(AppError::Terminal)? {
            if let Event::Key(key) = event::read().map_err(AppError::Terminal)?
                && is_quit_key(&key)
            {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl Drop for TerminalPresenter {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::error!("Failed to restore terminal: {e}");
        }
    }
}
