/// Plain colored output for after the game, once the alternate screen is gone
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use crossterm::QueueableCommand;
use std::io::{self, Stdout, Write};

pub struct TerminalContext<W: Write> {
    out: W,
}

impl TerminalContext<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalContext<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn print_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    /// Print colored text with automatic reset
    pub fn print_colored(&mut self, text: &str, color: TerminalColor) -> io::Result<()> {
        self.out.queue(SetForegroundColor(color.into()))?;
        write!(self.out, "{}", text)?;
        self.out.queue(ResetColor)?;
        Ok(())
    }

    pub fn empty_line(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Flush all output at once - call this when done printing
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminalColor {
    Green,
    Yellow,
    DarkGrey,
    Default,
}

impl From<TerminalColor> for Color {
    fn from(color: TerminalColor) -> Self {
        match color {
            TerminalColor::Green => Color::Green,
            TerminalColor::Yellow => Color::Yellow,
            TerminalColor::DarkGrey => Color::DarkGrey,
            TerminalColor::Default => Color::Reset,
        }
    }
}
