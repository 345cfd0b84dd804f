//! Terminal backend abstraction and crossterm implementation.

use std::io::{self, Read, Stdout, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::Print,
    terminal::{
        disable_raw_mode, enable_raw_mode, size, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use tracing::debug;

use tessera_tui_core::Result;

/// Trait for terminal backend implementations.
///
/// The render loop only requires that [`size`](TerminalBackend::size)
/// return positive integers and that writes are ordered and unbuffered from
/// the caller's perspective once [`flush`](TerminalBackend::flush) returns.
pub trait TerminalBackend {
    /// Enters raw mode: no echo, no canonical line buffering.
    fn enter_raw_mode(&mut self) -> Result<()>;

    /// Exits raw mode, restoring normal terminal behavior.
    fn exit_raw_mode(&mut self) -> Result<()>;

    /// Enters the alternate screen buffer.
    fn enter_alternate_screen(&mut self) -> Result<()>;

    /// Leaves the alternate screen buffer.
    fn leave_alternate_screen(&mut self) -> Result<()>;

    /// Hides the terminal cursor.
    fn hide_cursor(&mut self) -> Result<()>;

    /// Shows the terminal cursor.
    fn show_cursor(&mut self) -> Result<()>;

    /// Gets the current terminal size as (columns, rows).
    fn size(&self) -> Result<(u16, u16)>;

    /// Clears the entire screen and homes the cursor.
    fn clear(&mut self) -> Result<()>;

    /// Writes one serialized frame: homes the cursor, then writes the text.
    fn write_frame(&mut self, frame: &str) -> Result<()>;

    /// Flushes buffered output to the terminal.
    fn flush(&mut self) -> Result<()>;

    /// Blocking read of a single input byte.
    fn read_byte(&mut self) -> Result<u8>;

    /// Puts the terminal into rendering state: raw mode, hidden cursor,
    /// cleared alternate screen.
    fn setup(&mut self) -> Result<()> {
        self.enter_raw_mode()?;
        self.hide_cursor()?;
        self.enter_alternate_screen()?;
        self.clear()
    }

    /// Restores the terminal to its pre-rendering state.
    fn restore(&mut self) -> Result<()> {
        self.leave_alternate_screen()?;
        self.show_cursor()?;
        self.exit_raw_mode()
    }
}

/// Production backend writing to stdout through crossterm.
pub struct CrosstermBackend {
    stdout: Stdout,
}

impl CrosstermBackend {
    /// Creates a backend over the process's stdout.
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalBackend for CrosstermBackend {
    fn enter_raw_mode(&mut self) -> Result<()> {
        debug!("entering raw mode");
        enable_raw_mode()?;
        Ok(())
    }

    fn exit_raw_mode(&mut self) -> Result<()> {
        debug!("exiting raw mode");
        disable_raw_mode()?;
        Ok(())
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        execute!(self.stdout, LeaveAlternateScreen)?;
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        execute!(self.stdout, Hide)?;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        execute!(self.stdout, Show)?;
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16)> {
        let dims = size()?;
        Ok(dims)
    }

    fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    fn write_frame(&mut self, frame: &str) -> Result<()> {
        queue!(self.stdout, MoveTo(0, 0), Print(frame))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }

    fn read_byte(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        io::stdin().read_exact(&mut buf)?;
        Ok(buf[0])
    }
}
