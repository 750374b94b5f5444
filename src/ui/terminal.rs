//! Terminal display surface
//!
//! Renders the engine's display text verbatim, one line per render. The
//! core pushes a string after every operation and this surface shows it
//! without interpretation; sentinel error strings are ordinary text here.

use std::io::{self, Write};

/// Key reference shown once at session start
pub const KEY_REFERENCE: &str = "\
keys: 0-9 .   digits        + - * /  operators
      =/Enter equals        %        percent
      s       square root   c/Esc    clear
      Backspace delete      m/n/r/x  memory +/-/recall/clear
      q       quit";

/// Writes display text to any output sink
#[derive(Debug)]
pub struct TerminalDisplay<W: Write> {
    out: W,
}

impl<W: Write> TerminalDisplay<W> {
    /// Creates a display surface over the given writer
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Renders the current display text verbatim on its own line
    pub fn render(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_text_verbatim() {
        let mut display = TerminalDisplay::new(Vec::new());
        display.render("0.3").unwrap();
        display.render("Cannot divide by zero").unwrap();
        assert_eq!(
            String::from_utf8(display.out).unwrap(),
            "0.3\nCannot divide by zero\n"
        );
    }
}
