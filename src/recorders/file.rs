//! File recorder implementation

use crate::core::{LogEvent, LoggerError, Recorder, Result};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends each rendered line to a file.
///
/// Writes are unbuffered: a line is on disk once `write` returns, so a
/// fault halt right after it loses nothing.
pub struct FileRecorder {
    file: Mutex<File>,
    path: PathBuf,
}

impl FileRecorder {
    /// Open `path` for appending, creating it if missing
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use segment_logger::recorders::FileRecorder;
    ///
    /// let recorder = FileRecorder::new("/var/log/app.log").unwrap();
    /// ```
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation("opening log file", path.display().to_string(), e)
            })?;

        Ok(Self {
            file: Mutex::new(file),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Recorder for FileRecorder {
    fn write(&self, log: &str, _event: &LogEvent) -> Result<()> {
        let mut line = String::with_capacity(log.len() + 1);
        line.push_str(log);
        line.push('\n');

        self.file.lock().write_all(line.as_bytes()).map_err(|e| {
            LoggerError::io_operation("writing log file", self.path.display().to_string(), e)
        })
    }

    fn flush(&self) -> Result<()> {
        self.file.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use tempfile::TempDir;

    #[test]
    fn test_lines_are_appended() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        let recorder = FileRecorder::new(&path).unwrap();
        let event = LogEvent::new(LogLevel::Info, "x");

        recorder.write("first line", &event).unwrap();
        recorder.write("second line", &event).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first line\nsecond line\n");
        assert_eq!(recorder.path(), path.as_path());
    }

    #[test]
    fn test_reopen_keeps_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        let event = LogEvent::new(LogLevel::Info, "x");

        FileRecorder::new(&path).unwrap().write("old", &event).unwrap();
        FileRecorder::new(&path).unwrap().write("new", &event).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "old\nnew\n");
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = FileRecorder::new(dir.path().join("missing").join("app.log"));
        assert!(matches!(result, Err(LoggerError::IoOperation { .. })));
    }
}
