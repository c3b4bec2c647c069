//! Fan-out recorder
//!
//! Every write goes to each inner recorder in order. A failing or panicking
//! recorder does not stop the ones after it.

use crate::core::error::panic_message;
use crate::core::{LogEvent, LoggerError, Recorder, Result};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

pub struct CombineRecorder {
    recorders: Vec<Arc<dyn Recorder>>,
}

impl CombineRecorder {
    pub fn new(recorders: Vec<Arc<dyn Recorder>>) -> Self {
        Self { recorders }
    }

    /// Append a recorder, builder style
    #[must_use]
    pub fn with<R: Recorder + 'static>(mut self, recorder: R) -> Self {
        self.recorders.push(Arc::new(recorder));
        self
    }

    /// Append an already shared recorder
    pub fn push(&mut self, recorder: Arc<dyn Recorder>) {
        self.recorders.push(recorder);
    }

    pub fn len(&self) -> usize {
        self.recorders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recorders.is_empty()
    }

    /// Run `op` on every recorder, isolating errors and panics per recorder
    fn for_each_isolated<F>(&self, action: &str, op: F) -> Result<()>
    where
        F: Fn(&dyn Recorder) -> Result<()>,
    {
        let mut failed = 0;

        for (idx, recorder) in self.recorders.iter().enumerate() {
            let result = catch_unwind(AssertUnwindSafe(|| op(recorder.as_ref())));

            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!(
                        "[LOGGER ERROR] Recorder #{} ({}) {} failed: {}",
                        idx,
                        recorder.name(),
                        action,
                        e
                    );
                    failed += 1;
                }
                Err(panic_info) => {
                    let e = LoggerError::recorder_panicked(
                        recorder.name(),
                        panic_message(panic_info.as_ref()),
                    );
                    eprintln!(
                        "[LOGGER CRITICAL] {} (recorder #{}, {}). \
                         Other recorders continue to function.",
                        e, idx, action
                    );
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            Err(LoggerError::fan_out(failed, self.recorders.len()))
        } else {
            Ok(())
        }
    }
}

impl Recorder for CombineRecorder {
    fn write(&self, log: &str, event: &LogEvent) -> Result<()> {
        self.for_each_isolated("write", |recorder| recorder.write(log, event))
    }

    fn flush(&self) -> Result<()> {
        self.for_each_isolated("flush", |recorder| recorder.flush())
    }

    fn name(&self) -> &str {
        "combine"
    }
}

impl FromIterator<Arc<dyn Recorder>> for CombineRecorder {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Recorder>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use crate::recorders::MemoryRecorder;

    struct FailingRecorder;

    impl Recorder for FailingRecorder {
        fn write(&self, _log: &str, _event: &LogEvent) -> Result<()> {
            Err(LoggerError::recorder("failing", "Simulated failure"))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    struct PanickingRecorder;

    impl Recorder for PanickingRecorder {
        fn write(&self, _log: &str, _event: &LogEvent) -> Result<()> {
            panic!("sink exploded");
        }

        fn name(&self) -> &str {
            "panicking"
        }
    }

    #[test]
    fn test_each_recorder_receives_write() {
        let first = MemoryRecorder::new();
        let second = MemoryRecorder::new();
        let recorders: Vec<Arc<dyn Recorder>> =
            vec![Arc::new(first.clone()), Arc::new(second.clone())];
        let combined = CombineRecorder::new(recorders);

        let event = LogEvent::new(LogLevel::Info, "x");
        combined.write("line", &event).unwrap();

        assert_eq!(first.lines(), vec!["line"]);
        assert_eq!(second.lines(), vec!["line"]);
    }

    #[test]
    fn test_failure_is_isolated() {
        let after = MemoryRecorder::new();
        let combined = CombineRecorder::new(Vec::new())
            .with(FailingRecorder)
            .with(PanickingRecorder)
            .with(after.clone());

        let event = LogEvent::new(LogLevel::Error, "x");
        let result = combined.write("still delivered", &event);

        assert!(matches!(
            result,
            Err(LoggerError::FanOut {
                failed: 2,
                total: 3
            })
        ));
        assert_eq!(after.lines(), vec!["still delivered"]);
    }

    #[test]
    fn test_empty_combine_is_ok() {
        let combined = CombineRecorder::new(Vec::new());
        assert!(combined.is_empty());
        assert!(combined
            .write("nothing", &LogEvent::new(LogLevel::Info, "x"))
            .is_ok());
        assert!(combined.flush().is_ok());
    }
}
