//! Match output.
//!
//! Format:
//! ```text
//! <line>                 stdin / single file
//! <path>:<line>          several files or -r
//! ```

use std::path::Path;

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::color::scheme;
use crate::search::FileOutcome;

/// Writes matched lines, optionally labelled with their origin path.
pub struct Reporter<W> {
    out: W,
    labelled: bool,
    lines_written: usize,
}

impl Reporter<StandardStream> {
    /// Reporter writing to stdout.
    pub fn stdout(color: ColorChoice, labelled: bool) -> Self {
        Self::new(StandardStream::stdout(color), labelled)
    }
}

impl<W: WriteColor> Reporter<W> {
    pub fn new(out: W, labelled: bool) -> Self {
        Self {
            out,
            labelled,
            lines_written: 0,
        }
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Write one matched line from `origin`.
    pub fn write_line(&mut self, origin: &Path, line: &str) -> std::io::Result<()> {
        if self.labelled {
            self.out.set_color(&scheme::path())?;
            write!(self.out, "{}", origin.display())?;
            self.out.set_color(&scheme::separator())?;
            write!(self.out, ":")?;
            self.out.reset()?;
        }
        writeln!(self.out, "{line}")?;
        self.lines_written += 1;
        Ok(())
    }

    /// Write every line of a stream's matches.
    pub fn write_lines(&mut self, origin: &Path, lines: &[String]) -> std::io::Result<()> {
        for line in lines {
            self.write_line(origin, line)?;
        }
        Ok(())
    }

    /// Write the matches of a file outcome. Failed outcomes write nothing.
    pub fn write_outcome(&mut self, outcome: &FileOutcome) -> std::io::Result<()> {
        match &outcome.matches {
            Ok(lines) => self.write_lines(&outcome.path, lines),
            Err(_) => Ok(()),
        }
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
