//! Logging macros that capture the call site.
//!
//! Every macro takes a logger, then one or more message expressions. The
//! messages are evaluated inside a closure, so nothing is computed when the
//! level is filtered out. A single expression is used as the message list
//! (a `Vec` or array logs several messages); several expressions are each
//! rendered with `Display`.
//!
//! # Examples
//!
//! ```
//! use segment_logger::prelude::*;
//! use segment_logger::{info, warning};
//!
//! let logger = Logger::builder().recorder(NullRecorder).build();
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port", port);
//!
//! warning!(logger, vec!["disk", "almost", "full"]);
//! ```

/// Name of the enclosing function, without its module path
///
/// ```
/// fn handle_request() -> &'static str {
///     segment_logger::function_name!()
/// }
///
/// assert_eq!(handle_request(), "handle_request");
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = &name[..name.len() - 3];
        let name = name.trim_end_matches("::{{closure}}");
        match name.rfind("::") {
            Some(pos) => &name[pos + 2..],
            None => name,
        }
    }};
}

/// [`Location`](crate::Location) of the macro call site
#[macro_export]
macro_rules! location {
    () => {
        $crate::Location::new(file!(), line!(), $crate::function_name!())
    };
}

/// Log one or more messages at the given level.
///
/// A single argument must implement [`IntoMessages`](crate::IntoMessages):
/// strings, chars, bools, numbers, [`Message`](crate::Message), or a `Vec`,
/// array or slice of those. Wrap any other `Display` type in
/// [`Message::new`](crate::Message::new). With two or more arguments each one
/// only needs `Display`.
///
/// ```
/// # use segment_logger::prelude::*;
/// # let logger = Logger::builder().recorder(NullRecorder).build();
/// use segment_logger::log;
/// use std::net::Ipv4Addr;
///
/// let addr = Ipv4Addr::LOCALHOST;
/// log!(logger, LogLevel::Info, Message::new(addr));
/// log!(logger, LogLevel::Info, "bound to", addr);
/// ```
///
/// # Examples
///
/// ```
/// # use segment_logger::prelude::*;
/// # let logger = Logger::builder().recorder(NullRecorder).build();
/// use segment_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code:", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $message:expr $(,)?) => {
        $logger.record(
            $level,
            || $message,
            $crate::UserInfo::new(),
            $crate::location!(),
        )
    };
    ($logger:expr, $level:expr, $first:expr, $($rest:expr),+ $(,)?) => {
        $logger.record(
            $level,
            || {
                ::std::vec![
                    $crate::Message::text(&$first),
                    $($crate::Message::text(&$rest)),+
                ]
            },
            $crate::UserInfo::new(),
            $crate::location!(),
        )
    };
}

/// Log at trace level.
///
/// ```
/// # use segment_logger::prelude::*;
/// # let logger = Logger::builder().level(LogLevel::Trace).recorder(NullRecorder).build();
/// use segment_logger::trace;
/// trace!(logger, "Entering function: calculate()");
/// trace!(logger, "Variable value:", 42);
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log at debug level.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log at info level.
///
/// ```
/// # use segment_logger::prelude::*;
/// # let logger = Logger::builder().recorder(NullRecorder).build();
/// use segment_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing", 100, "items");
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log at notice level.
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Notice, $($arg)+)
    };
}

/// Log at warning level.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log at error level.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log at fault level. Aborts the process if the logger halts on fault.
///
/// ```
/// # use segment_logger::prelude::*;
/// # let logger = Logger::builder().recorder(NullRecorder).halt_on_fault(false).build();
/// use segment_logger::fault;
/// fault!(logger, "Unrecoverable state");
/// ```
#[macro_export]
macro_rules! fault {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fault, $($arg)+)
    };
}
