//! TerminalRenderer: flushes a rendered frame to a real terminal.
//!
//! The drawing API is deliberately tiny: the frame is always drawn whole,
//! anchored at the origin. At 40x20 cells a full redraw is well under a
//! kilobyte of escape codes and glyphs per frame, so no diffing is needed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use tui_donut_core::Frame;
use tui_donut_types::AnsiColor;

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    /// Prepare the terminal for animation.
    ///
    /// Raw mode lets Ctrl-C arrive as a key event instead of killing the
    /// process before the cursor is restored.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Restore everything `enter` changed.
    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw one frame: cursor home, then each row as
    /// color-on / glyphs / color-off.
    ///
    /// Everything is queued and flushed once so a frame reaches the terminal
    /// as a single write.
    pub fn draw(&mut self, frame: &Frame, color: AnsiColor) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(0, 0))?;

        let fg = to_crossterm(color);
        for row in frame.rows() {
            self.stdout.queue(SetForegroundColor(fg))?;
            for &g in row {
                self.stdout.queue(Print(g as char))?;
            }
            self.stdout.queue(ResetColor)?;
            self.stdout.queue(Print("\r\n"))?;
        }

        self.stdout.flush()?;
        Ok(())
    }
}

/// Map a palette color to its crossterm equivalent.
///
/// The `Dark*` variants correspond to the classic SGR 31-36 foreground
/// codes the original palette used.
fn to_crossterm(color: AnsiColor) -> Color {
    match color {
        AnsiColor::Red => Color::DarkRed,
        AnsiColor::Yellow => Color::DarkYellow,
        AnsiColor::Green => Color::DarkGreen,
        AnsiColor::Cyan => Color::DarkCyan,
        AnsiColor::Blue => Color::DarkBlue,
        AnsiColor::Magenta => Color::DarkMagenta,
    }
}
