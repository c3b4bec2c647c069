//! Core logger types and traits

pub mod error;
pub mod log_event;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod recorder;
pub mod segment;
pub mod shared;
pub mod string_converter;
pub mod timestamp;
pub mod user_info;

pub use error::{LoggerError, Result};
pub use log_event::{IntoMessages, Location, LogEvent, Message};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use recorder::Recorder;
pub use segment::{Pipeline, Segment};
pub use shared::{configure_shared, replace_shared, shared};
pub use string_converter::StringConverter;
pub use timestamp::{TimestampFormat, TimestampMode};
pub use user_info::{FieldValue, UserInfo};
