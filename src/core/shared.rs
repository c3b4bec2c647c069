//! Process-wide default logger
//!
//! Explicit [`Logger`] values are the main API. The shared logger is the one
//! conventional instance for code that has nowhere to keep its own: it is
//! created with [`Logger::new`] on first use and lives for the whole process.

use super::{
    log_event::{IntoMessages, Location},
    log_level::LogLevel,
    logger::Logger,
    user_info::UserInfo,
};
use parking_lot::RwLock;
use std::sync::OnceLock;

static SHARED_LOGGER: OnceLock<RwLock<Logger>> = OnceLock::new();

/// The shared logger, created on first access
pub fn shared() -> &'static RwLock<Logger> {
    SHARED_LOGGER.get_or_init(|| RwLock::new(Logger::new()))
}

/// Install `logger` as the shared logger, returning the previous one
pub fn replace_shared(logger: Logger) -> Logger {
    std::mem::replace(&mut *shared().write(), logger)
}

/// Reconfigure the shared logger in place
///
/// Must not be called from inside a message closure or recorder of the
/// shared logger; that thread already holds the read lock.
///
/// # Example
///
/// ```
/// use segment_logger::{configure_shared, LogLevel};
///
/// configure_shared(|logger| logger.set_level(LogLevel::Warning));
/// ```
pub fn configure_shared<F: FnOnce(&mut Logger)>(configure: F) {
    configure(&mut shared().write());
}

/// The read lock is taken recursively: a message or recorder that logs
/// through the shared logger again must not queue behind a waiting writer.
#[track_caller]
fn record_shared<M: IntoMessages>(level: LogLevel, message: impl FnOnce() -> M) {
    let location = Location::caller();
    shared()
        .read_recursive()
        .record(level, message, UserInfo::new(), location);
}

#[track_caller]
pub fn trace<M: IntoMessages>(message: impl FnOnce() -> M) {
    record_shared(LogLevel::Trace, message);
}

#[track_caller]
pub fn debug<M: IntoMessages>(message: impl FnOnce() -> M) {
    record_shared(LogLevel::Debug, message);
}

#[track_caller]
pub fn info<M: IntoMessages>(message: impl FnOnce() -> M) {
    record_shared(LogLevel::Info, message);
}

#[track_caller]
pub fn notice<M: IntoMessages>(message: impl FnOnce() -> M) {
    record_shared(LogLevel::Notice, message);
}

#[track_caller]
pub fn warning<M: IntoMessages>(message: impl FnOnce() -> M) {
    record_shared(LogLevel::Warning, message);
}

#[track_caller]
pub fn error<M: IntoMessages>(message: impl FnOnce() -> M) {
    record_shared(LogLevel::Error, message);
}

/// Fault through the shared logger; aborts the process if it is configured to halt
#[track_caller]
pub fn fault<M: IntoMessages>(message: impl FnOnce() -> M) {
    record_shared(LogLevel::Fault, message);
}
