//! # Segment Logger
//!
//! A small synchronous logging facility built from composable parts.
//!
//! ## Features
//!
//! - **Composable formatting**: a log line is an ordered [`Pipeline`] of
//!   [`Segment`]s, each either fixed text, a timestamp, or a
//!   [`StringConverter`] over the event
//! - **Lazy messages**: message closures only run when the level passes the
//!   logger's threshold
//! - **Pluggable recorders**: console, file, in-memory and fan-out
//! - **Derived loggers**: child loggers that add a label and copy the rest
//!
//! ## Example
//!
//! ```
//! use segment_logger::prelude::*;
//! use segment_logger::info;
//!
//! let recorder = MemoryRecorder::new();
//! let logger = Logger::builder()
//!     .level(LogLevel::Info)
//!     .segments(vec![
//!         Segment::value(|event| event.level(), StringConverter::level_name()),
//!         Segment::literal(": "),
//!         Segment::field(|event| event.messages(), StringConverter::default_messages()),
//!     ])
//!     .recorder(recorder.clone())
//!     .build();
//!
//! info!(logger, "listening on", 8080);
//! logger.debug(|| "not recorded");
//!
//! assert_eq!(recorder.lines(), vec!["INFO: listening on 8080"]);
//! ```

pub mod core;
pub mod macros;
pub mod recorders;

pub mod prelude {
    pub use crate::core::{
        FieldValue, IntoMessages, Location, LogEvent, LogLevel, Logger, LoggerBuilder,
        LoggerError, LoggerMetrics, Message, Pipeline, Recorder, Result, Segment,
        StringConverter, TimestampFormat, TimestampMode, UserInfo,
    };
    pub use crate::recorders::{
        CombineRecorder, ConsoleRecorder, FileRecorder, MemoryRecorder, NullRecorder,
    };
}

pub use crate::core::{
    configure_shared, replace_shared, shared, FieldValue, IntoMessages, Location, LogEvent,
    LogLevel, Logger, LoggerBuilder, LoggerError, LoggerMetrics, Message, Pipeline, Recorder,
    Result, Segment, StringConverter, TimestampFormat, TimestampMode, UserInfo,
};
pub use recorders::{CombineRecorder, ConsoleRecorder, FileRecorder, MemoryRecorder, NullRecorder};
