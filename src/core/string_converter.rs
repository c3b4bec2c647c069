//! Composable value-to-string converters
//!
//! A [`StringConverter<T>`] wraps a pure `&T -> String` function. Converters
//! chain with [`StringConverter::connect`] and the padding helpers, and never
//! mutate their operands: composing returns a new converter.

use super::log_event::{LogEvent, Message};
use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

/// Default width of [`StringConverter::file`]
pub const DEFAULT_FILE_WIDTH: usize = 30;
/// Default width of [`StringConverter::line`]
pub const DEFAULT_LINE_WIDTH: usize = 4;
/// Default width of [`StringConverter::file_and_line`]
pub const DEFAULT_FILE_AND_LINE_WIDTH: usize = 35;
/// Fill character of the file converters
pub const FILE_PAD: char = '·';

/// Converts a `T` into a `String`
///
/// # Example
///
/// ```
/// use segment_logger::StringConverter;
///
/// let shout = StringConverter::<str>::new(|s| s.to_uppercase());
/// let framed = shout.connect(StringConverter::new(|s| format!("<{}>", s)));
/// assert_eq!(framed.convert("hi"), "<HI>");
/// assert_eq!(shout.convert("hi"), "HI");
/// ```
pub struct StringConverter<T: ?Sized> {
    convert: Arc<dyn Fn(&T) -> String + Send + Sync>,
}

impl<T: ?Sized> Clone for StringConverter<T> {
    fn clone(&self) -> Self {
        Self {
            convert: Arc::clone(&self.convert),
        }
    }
}

impl<T: ?Sized> fmt::Debug for StringConverter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StringConverter")
    }
}

impl<T: ?Sized + 'static> StringConverter<T> {
    pub fn new<F>(convert: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self {
            convert: Arc::new(convert),
        }
    }

    #[inline]
    pub fn convert(&self, value: &T) -> String {
        (self.convert)(value)
    }

    /// Apply `self`, then feed the result through `next`
    #[must_use]
    pub fn connect(&self, next: StringConverter<str>) -> StringConverter<T> {
        let this = self.clone();
        StringConverter::new(move |value| next.convert(&this.convert(value)))
    }

    /// Pad the output on the left with `fill` up to `width` characters.
    ///
    /// Output already `width` characters long (or longer) is left untouched,
    /// as is everything when `width` is 0.
    #[must_use]
    pub fn left_pad(&self, width: usize, fill: char) -> StringConverter<T> {
        self.connect(StringConverter::new(move |s: &str| {
            pad(s, width, fill, Side::Left)
        }))
    }

    /// Pad the output on the right with `fill` up to `width` characters.
    #[must_use]
    pub fn right_pad(&self, width: usize, fill: char) -> StringConverter<T> {
        self.connect(StringConverter::new(move |s: &str| {
            pad(s, width, fill, Side::Right)
        }))
    }

    /// Convert one field of `T`, selected by `accessor`, with `converter`
    ///
    /// ```
    /// use segment_logger::{LogEvent, LogLevel, StringConverter};
    ///
    /// let labels = StringConverter::<LogEvent>::project(
    ///     |event| event.labels(),
    ///     StringConverter::labels(),
    /// );
    /// let event = LogEvent::new(LogLevel::Info, "ready").with_labels(vec!["net".into()]);
    /// assert_eq!(labels.convert(&event), "[net] ");
    /// ```
    pub fn project<S, F>(accessor: F, converter: StringConverter<S>) -> StringConverter<T>
    where
        S: ?Sized + 'static,
        F: Fn(&T) -> &S + Send + Sync + 'static,
    {
        StringConverter::new(move |value| converter.convert(accessor(value)))
    }

    /// Like [`project`](Self::project) for fields read by value, such as the level
    pub fn project_value<S, F>(accessor: F, converter: StringConverter<S>) -> StringConverter<T>
    where
        S: 'static,
        F: Fn(&T) -> S + Send + Sync + 'static,
    {
        StringConverter::new(move |value| converter.convert(&accessor(value)))
    }
}

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// Widths are measured in characters, not bytes.
fn pad(value: &str, width: usize, fill: char, side: Side) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }
    let padding: String = std::iter::repeat(fill).take(width - len).collect();
    match side {
        Side::Left => padding + value,
        Side::Right => format!("{}{}", value, padding),
    }
}

/// Substring after the last `/` or `\`, or the whole path when there is none
pub fn last_path_component(path: &str) -> &str {
    path.rsplit(|c| c == '/' || c == '\\').next().unwrap_or(path)
}

impl StringConverter<LogLevel> {
    /// Fixed-width marker per level; the trailing spaces are part of the marker.
    pub fn level_marker() -> Self {
        StringConverter::new(|level: &LogLevel| {
            let marker = match level {
                LogLevel::Trace => "🐾 Trace  ",
                LogLevel::Debug => "🔍 Debug  ",
                LogLevel::Info => "📗 Info   ",
                LogLevel::Notice => "📣 Notice ",
                LogLevel::Warning => "⚠️ Warning",
                LogLevel::Error => "‼️ Error  ",
                LogLevel::Fault => "🚫 Fault  ",
            };
            marker.to_string()
        })
    }

    /// Upper-case level name, e.g. `WARNING`
    pub fn level_name() -> Self {
        StringConverter::new(|level: &LogLevel| level.to_str().to_string())
    }
}

impl StringConverter<[Message]> {
    /// Join the `Display` form of every message with `separator`
    pub fn messages(separator: impl Into<String>) -> Self {
        let separator = separator.into();
        StringConverter::new(move |messages: &[Message]| {
            messages
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(separator.as_str())
        })
    }

    /// Messages joined by a single space
    pub fn default_messages() -> Self {
        Self::messages(" ")
    }
}

impl StringConverter<[String]> {
    /// `[a][b] ` for labels `a`, `b`; empty when there are no labels
    pub fn labels() -> Self {
        StringConverter::new(|labels: &[String]| {
            if labels.is_empty() {
                return String::new();
            }
            let mut out: String = labels.iter().map(|label| format!("[{}]", label)).collect();
            out.push(' ');
            out
        })
    }
}

impl StringConverter<str> {
    /// Pass-through converter, the neutral element of `connect`
    pub fn identity() -> Self {
        StringConverter::new(|s: &str| s.to_string())
    }

    /// Last path component of a source file, right-padded with `·` to `fix_length`
    pub fn file(fix_length: usize) -> Self {
        StringConverter::new(|file: &str| last_path_component(file).to_string())
            .right_pad(fix_length, FILE_PAD)
    }

    /// `.` followed by the function name
    pub fn method() -> Self {
        StringConverter::new(|function: &str| format!(".{}", function))
    }
}

impl StringConverter<u32> {
    /// Decimal line number, left-padded with spaces to `min_length`
    pub fn line(min_length: usize) -> Self {
        StringConverter::new(|line: &u32| line.to_string()).left_pad(min_length, ' ')
    }
}

impl StringConverter<LogEvent> {
    /// `File.rs(42).function` from the event's call site
    pub fn location() -> Self {
        StringConverter::new(|event: &LogEvent| {
            format!(
                "{}({}).{}",
                last_path_component(event.file()),
                event.line(),
                event.function()
            )
        })
    }

    /// `File.rs(42)` right-padded with `·` to `fix_length`
    pub fn file_and_line(fix_length: usize) -> Self {
        StringConverter::new(|event: &LogEvent| {
            format!("{}({})", last_path_component(event.file()), event.line())
        })
        .right_pad(fix_length, FILE_PAD)
    }
}

impl StringConverter<DateTime<Utc>> {
    /// Format an instant, typically the event's own timestamp
    pub fn timestamp(format: TimestampFormat) -> Self {
        StringConverter::new(move |instant: &DateTime<Utc>| format.format(instant))
    }
}
