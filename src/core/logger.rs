//! Main logger implementation

use super::{
    error::{panic_message, LoggerError, Result},
    log_event::{IntoMessages, Location, LogEvent},
    log_level::LogLevel,
    metrics::LoggerMetrics,
    recorder::Recorder,
    segment::{Pipeline, Segment},
    user_info::UserInfo,
};
use crate::recorders::ConsoleRecorder;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// Filters events by level, renders them through a [`Pipeline`] and hands
/// the line to a [`Recorder`].
///
/// Logging never returns an error. A failing or panicking recorder is
/// reported on stderr and counted in [`LoggerMetrics`]; the call site
/// carries on.
pub struct Logger {
    labels: Vec<String>,
    level: LogLevel,
    pipeline: Pipeline,
    recorder: Arc<dyn Recorder>,
    halt_on_fault: bool,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// A logger with no labels, threshold `Debug`, the standard pipeline,
    /// a console recorder and halt-on-fault enabled
    #[must_use]
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            level: LogLevel::default(),
            pipeline: Pipeline::standard(),
            recorder: Arc::new(ConsoleRecorder::new()),
            halt_on_fault: true,
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    /// Default logger carrying one label
    #[must_use]
    pub fn with_label(label: impl Into<String>) -> Self {
        let mut logger = Self::new();
        logger.labels.push(label.into());
        logger
    }

    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn set_pipeline(&mut self, pipeline: impl Into<Pipeline>) {
        self.pipeline = pipeline.into();
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub fn set_recorder<R: Recorder + 'static>(&mut self, recorder: R) {
        self.recorder = Arc::new(recorder);
    }

    /// Install a recorder that is already shared with other loggers
    pub fn set_shared_recorder(&mut self, recorder: Arc<dyn Recorder>) {
        self.recorder = recorder;
    }

    pub fn recorder(&self) -> &Arc<dyn Recorder> {
        &self.recorder
    }

    pub fn set_labels(&mut self, labels: Vec<String>) {
        self.labels = labels;
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn set_halt_on_fault(&mut self, halt: bool) {
        self.halt_on_fault = halt;
    }

    pub fn halt_on_fault(&self) -> bool {
        self.halt_on_fault
    }

    /// Whether an event at `level` would be recorded
    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    /// Get the logger metrics for detailed observability
    ///
    /// # Example
    ///
    /// ```
    /// use segment_logger::{Logger, LogLevel};
    /// use segment_logger::recorders::NullRecorder;
    ///
    /// let logger = Logger::builder().recorder(NullRecorder).build();
    /// logger.info(|| "ready");
    /// logger.trace(|| "filtered");
    ///
    /// let metrics = logger.metrics();
    /// assert_eq!(metrics.total_logged(), 1);
    /// assert_eq!(metrics.dropped_count(), 0);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// A new logger with this logger's labels plus `label`.
    ///
    /// Level, pipeline, recorder handle and halt flag are copied; later
    /// changes to either logger do not affect the other. The child starts
    /// with its own metrics.
    #[must_use]
    pub fn derive_logger_with(&self, label: impl Into<String>) -> Logger {
        let mut labels = self.labels.clone();
        labels.push(label.into());

        Logger {
            labels,
            level: self.level,
            pipeline: self.pipeline.clone(),
            recorder: Arc::clone(&self.recorder),
            halt_on_fault: self.halt_on_fault,
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    /// Record one event.
    ///
    /// `message` runs only when `level` passes the threshold. What it returns
    /// becomes the event's message list: a sequence is used as-is, a single
    /// value is wrapped.
    ///
    /// # Aborts
    ///
    /// At `LogLevel::Fault` with halt-on-fault enabled the process is aborted
    /// after the line has been written and the recorder flushed. This holds
    /// on any thread and is not caught by `catch_unwind`.
    pub fn record<M, F>(&self, level: LogLevel, message: F, user_info: UserInfo, location: Location)
    where
        M: IntoMessages,
        F: FnOnce() -> M,
    {
        if !self.is_enabled(level) {
            return;
        }

        let event = LogEvent::new(level, message())
            .with_labels(self.labels.clone())
            .with_user_info(user_info)
            .with_location(location);

        let line = self.pipeline.render(&event);
        self.write_isolated(&line, &event);

        if level == LogLevel::Fault {
            self.metrics.record_fault();
            if self.halt_on_fault {
                self.halt(&event);
            }
        }
    }

    /// Flush the recorder and abort the process
    fn halt(&self, event: &LogEvent) -> ! {
        if let Err(e) = self.recorder.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush before fault halt: {}", e);
        }
        eprintln!("[LOGGER CRITICAL] fault: {}", event.joined_messages());
        std::process::abort()
    }

    /// Hand one rendered line to the recorder, containing errors and panics
    fn write_isolated(&self, line: &str, event: &LogEvent) {
        let result = catch_unwind(AssertUnwindSafe(|| self.recorder.write(line, event)));

        match result {
            Ok(Ok(())) => {
                self.metrics.record_logged();
            }
            Ok(Err(e)) => {
                eprintln!(
                    "[LOGGER ERROR] Recorder ({}) failed: {}",
                    self.recorder.name(),
                    e
                );
                self.metrics.record_dropped();
            }
            Err(panic_info) => {
                let e = LoggerError::recorder_panicked(
                    self.recorder.name(),
                    panic_message(panic_info.as_ref()),
                );
                eprintln!("[LOGGER CRITICAL] {}. Logging continues.", e);
                self.metrics.record_dropped();
            }
        }
    }

    /// Record at `level`, located at the caller
    #[track_caller]
    pub fn log<M, F>(&self, level: LogLevel, message: F)
    where
        M: IntoMessages,
        F: FnOnce() -> M,
    {
        self.record(level, message, UserInfo::new(), Location::caller());
    }

    /// Record at `level` with structured fields attached to the event
    #[track_caller]
    pub fn log_with_info<M, F>(&self, level: LogLevel, message: F, user_info: UserInfo)
    where
        M: IntoMessages,
        F: FnOnce() -> M,
    {
        self.record(level, message, user_info, Location::caller());
    }

    #[inline]
    #[track_caller]
    pub fn trace<M: IntoMessages>(&self, message: impl FnOnce() -> M) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    #[track_caller]
    pub fn debug<M: IntoMessages>(&self, message: impl FnOnce() -> M) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info<M: IntoMessages>(&self, message: impl FnOnce() -> M) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn notice<M: IntoMessages>(&self, message: impl FnOnce() -> M) {
        self.log(LogLevel::Notice, message);
    }

    #[inline]
    #[track_caller]
    pub fn warning<M: IntoMessages>(&self, message: impl FnOnce() -> M) {
        self.log(LogLevel::Warning, message);
    }

    #[inline]
    #[track_caller]
    pub fn error<M: IntoMessages>(&self, message: impl FnOnce() -> M) {
        self.log(LogLevel::Error, message);
    }

    /// Record at the fault level.
    ///
    /// # Aborts
    ///
    /// When halt-on-fault is enabled, after the line has been written.
    #[inline]
    #[track_caller]
    pub fn fault<M: IntoMessages>(&self, message: impl FnOnce() -> M) {
        self.log(LogLevel::Fault, message);
    }

    pub fn flush(&self) -> Result<()> {
        self.recorder.flush()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("labels", &self.labels)
            .field("level", &self.level)
            .field("segments", &self.pipeline.segments().len())
            .field("recorder", &self.recorder.name())
            .field("halt_on_fault", &self.halt_on_fault)
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use segment_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .label("net")
///     .level(LogLevel::Info)
///     .segments(vec![
///         Segment::literal("> "),
///         Segment::field(|event| event.messages(), StringConverter::default_messages()),
///     ])
///     .recorder(MemoryRecorder::new())
///     .halt_on_fault(false)
///     .build();
///
/// assert_eq!(logger.labels(), ["net".to_string()]);
/// ```
pub struct LoggerBuilder {
    labels: Vec<String>,
    level: LogLevel,
    pipeline: Pipeline,
    recorder: Option<Arc<dyn Recorder>>,
    halt_on_fault: bool,
}

impl LoggerBuilder {
    /// Create a new builder with the same defaults as [`Logger::new`]
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            level: LogLevel::default(),
            pipeline: Pipeline::standard(),
            recorder: None,
            halt_on_fault: true,
        }
    }

    /// Append a label
    #[must_use = "builder methods return a new value"]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    /// Replace all labels
    #[must_use = "builder methods return a new value"]
    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn pipeline(mut self, pipeline: Pipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Replace the pipeline's segments, keeping its timestamp mode
    #[must_use = "builder methods return a new value"]
    pub fn segments(mut self, segments: Vec<Segment>) -> Self {
        self.pipeline = Pipeline::new(segments).with_timestamp_mode(self.pipeline.timestamp_mode());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn recorder<R: Recorder + 'static>(mut self, recorder: R) -> Self {
        self.recorder = Some(Arc::new(recorder));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn shared_recorder(mut self, recorder: Arc<dyn Recorder>) -> Self {
        self.recorder = Some(recorder);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn halt_on_fault(mut self, halt: bool) -> Self {
        self.halt_on_fault = halt;
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let recorder = self
            .recorder
            .unwrap_or_else(|| Arc::new(ConsoleRecorder::new()));

        Logger {
            labels: self.labels,
            level: self.level,
            pipeline: self.pipeline,
            recorder,
            halt_on_fault: self.halt_on_fault,
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
