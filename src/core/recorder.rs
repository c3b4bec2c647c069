//! Recorder trait for log output destinations

use super::{error::Result, log_event::LogEvent};

/// A sink for rendered log lines.
///
/// `write` receives the fully rendered line plus a read-only view of the
/// event it was rendered from. Recorders are shared between a logger and the
/// loggers derived from it, so writes take `&self`; implementations that need
/// mutable state keep it behind a lock.
pub trait Recorder: Send + Sync {
    fn write(&self, log: &str, event: &LogEvent) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}
