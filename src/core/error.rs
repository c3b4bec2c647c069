//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// A recorder rejected a write
    #[error("Recorder '{recorder}' failed: {message}")]
    RecorderFailed { recorder: String, message: String },

    /// A recorder panicked while writing
    #[error("Recorder '{recorder}' panicked: {message}")]
    RecorderPanicked { recorder: String, message: String },

    /// Some sinks of a fan-out recorder failed; the others still received the write
    #[error("{failed} of {total} combined recorders failed")]
    FanOut { failed: usize, total: usize },

    /// Unknown level name
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a recorder failure error
    pub fn recorder(recorder: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::RecorderFailed {
            recorder: recorder.into(),
            message: message.into(),
        }
    }

    /// Create a recorder panic error
    pub fn recorder_panicked(recorder: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::RecorderPanicked {
            recorder: recorder.into(),
            message: message.into(),
        }
    }

    pub fn fan_out(failed: usize, total: usize) -> Self {
        LoggerError::FanOut { failed, total }
    }
}

/// Extract a readable message from a panic payload
pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::fan_out(1, 3);
        assert!(matches!(err, LoggerError::FanOut { .. }));

        let err = LoggerError::recorder("file", "Permission denied");
        assert!(matches!(err, LoggerError::RecorderFailed { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::fan_out(2, 3);
        assert_eq!(err.to_string(), "2 of 3 combined recorders failed");

        let err = LoggerError::recorder_panicked("memory", "boom");
        assert_eq!(err.to_string(), "Recorder 'memory' panicked: boom");

        let err = LoggerError::InvalidLevel("loud".to_string());
        assert_eq!(err.to_string(), "Invalid log level: 'loud'");
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("writing log file", "cannot write to file", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("writing log file"));
        assert!(err.to_string().contains("cannot write to file"));
    }

    #[test]
    fn test_panic_message_extraction() {
        let payload: Box<dyn std::any::Any + Send> = Box::new("static str");
        assert_eq!(panic_message(payload.as_ref()), "static str");

        let payload: Box<dyn std::any::Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(payload.as_ref()), "owned");

        let payload: Box<dyn std::any::Any + Send> = Box::new(42u8);
        assert_eq!(panic_message(payload.as_ref()), "Unknown panic");
    }
}
