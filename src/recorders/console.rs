//! Console recorder implementation

use crate::core::{LogEvent, Recorder, Result};
#[cfg(feature = "console")]
use colored::Colorize;
use std::io::Write;

/// Stream a [`ConsoleRecorder`] writes to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConsoleStream {
    #[default]
    Stdout,
    Stderr,
}

/// Writes each rendered line to the console.
///
/// The stream lock is held for the whole line, so lines written from
/// different threads never interleave.
#[derive(Debug, Clone, Default)]
pub struct ConsoleRecorder {
    use_colors: bool,
    stream: ConsoleStream,
}

impl ConsoleRecorder {
    pub fn new() -> Self {
        Self {
            use_colors: false,
            stream: ConsoleStream::Stdout,
        }
    }

    /// Write to standard error instead of standard output
    pub fn stderr() -> Self {
        Self {
            use_colors: false,
            stream: ConsoleStream::Stderr,
        }
    }

    /// Color the whole line by level
    ///
    /// # Example
    ///
    /// ```
    /// use segment_logger::recorders::ConsoleRecorder;
    ///
    /// let recorder = ConsoleRecorder::new().with_colors(true);
    /// ```
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn stream(&self) -> ConsoleStream {
        self.stream
    }

    #[cfg(feature = "console")]
    fn decorate(&self, log: &str, event: &LogEvent) -> String {
        if self.use_colors {
            log.color(event.level().color_code()).to_string()
        } else {
            log.to_string()
        }
    }

    #[cfg(not(feature = "console"))]
    fn decorate(&self, log: &str, _event: &LogEvent) -> String {
        log.to_string()
    }
}

impl Recorder for ConsoleRecorder {
    fn write(&self, log: &str, event: &LogEvent) -> Result<()> {
        let line = self.decorate(log, event);
        match self.stream {
            ConsoleStream::Stdout => writeln!(std::io::stdout().lock(), "{}", line)?,
            ConsoleStream::Stderr => writeln!(std::io::stderr().lock(), "{}", line)?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        match self.stream {
            ConsoleStream::Stdout => std::io::stdout().flush()?,
            ConsoleStream::Stderr => std::io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
