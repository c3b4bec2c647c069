//! Log event structure
//!
//! A [`LogEvent`] is built once per emitted log call and is read-only from
//! then on: converters and recorders only ever see `&LogEvent`.

use super::log_level::LogLevel;
use super::user_info::UserInfo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// One caller-supplied message value
///
/// The value stays opaque to the logger; rendering uses its `Display` form.
#[derive(Clone)]
pub struct Message(Arc<dyn fmt::Display + Send + Sync>);

impl Message {
    /// Keep `value` as-is and render it lazily
    pub fn new<T>(value: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        Message(Arc::new(value))
    }

    /// Stringify a borrowed value now
    pub fn text<T: fmt::Display + ?Sized>(value: &T) -> Self {
        Message::new(value.to_string())
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Message({:?})", self.0.to_string())
    }
}

impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

/// Normalizes what a log call produced into the event's message list.
///
/// A single value becomes a one-element list; a sequence is used as the list itself.
pub trait IntoMessages {
    fn into_messages(self) -> Vec<Message>;
}

macro_rules! impl_single_message {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Message {
                fn from(value: $t) -> Self {
                    Message::new(value)
                }
            }

            impl IntoMessages for $t {
                fn into_messages(self) -> Vec<Message> {
                    vec![Message::from(self)]
                }
            }
        )*
    };
}

impl_single_message!(
    String, char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl From<&str> for Message {
    fn from(value: &str) -> Self {
        Message::new(value.to_string())
    }
}

impl From<&String> for Message {
    fn from(value: &String) -> Self {
        Message::new(value.clone())
    }
}

impl IntoMessages for &str {
    fn into_messages(self) -> Vec<Message> {
        vec![Message::from(self)]
    }
}

impl IntoMessages for &String {
    fn into_messages(self) -> Vec<Message> {
        vec![Message::from(self)]
    }
}

impl IntoMessages for Message {
    fn into_messages(self) -> Vec<Message> {
        vec![self]
    }
}

impl<T: Into<Message>> IntoMessages for Vec<T> {
    fn into_messages(self) -> Vec<Message> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<Message>, const N: usize> IntoMessages for [T; N] {
    fn into_messages(self) -> Vec<Message> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<Message> + Clone> IntoMessages for &[T] {
    fn into_messages(self) -> Vec<Message> {
        self.iter().cloned().map(Into::into).collect()
    }
}

/// Call-site identity of a log call
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    pub line: u32,
    pub function: String,
}

impl Location {
    pub fn new(file: impl Into<String>, line: u32, function: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            function: function.into(),
        }
    }

    /// Location of the caller. The function name is not available this way
    /// and is left empty; the logging macros fill it in.
    #[track_caller]
    pub fn caller() -> Self {
        let location = std::panic::Location::caller();
        Self {
            file: location.file().to_string(),
            line: location.line(),
            function: String::new(),
        }
    }
}

/// Immutable record passed through the segment pipeline and to the recorder
#[derive(Debug, Clone)]
pub struct LogEvent {
    level: LogLevel,
    labels: Vec<String>,
    messages: Vec<Message>,
    user_info: UserInfo,
    location: Location,
    timestamp: DateTime<Utc>,
}

impl LogEvent {
    /// Create an event with no labels, no user info and an empty location.
    /// The timestamp is captured now.
    pub fn new(level: LogLevel, messages: impl IntoMessages) -> Self {
        Self {
            level,
            labels: Vec::new(),
            messages: messages.into_messages(),
            user_info: UserInfo::new(),
            location: Location::default(),
            timestamp: Utc::now(),
        }
    }

    #[must_use]
    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn with_user_info(mut self, user_info: UserInfo) -> Self {
        self.user_info = user_info;
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn user_info(&self) -> &UserInfo {
        &self.user_info
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn file(&self) -> &str {
        &self.location.file
    }

    pub fn line(&self) -> u32 {
        self.location.line
    }

    pub fn function(&self) -> &str {
        &self.location.function
    }

    /// Construction time of the event
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Messages joined with single spaces
    pub fn joined_messages(&self) -> String {
        self.messages
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Point {
        x: i32,
        y: i32,
    }

    impl fmt::Display for Point {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "({}, {})", self.x, self.y)
        }
    }

    #[test]
    fn test_single_value_is_wrapped() {
        let messages = "hello".into_messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].to_string(), "hello");

        let messages = 42i32.into_messages();
        assert_eq!(messages[0].to_string(), "42");
    }

    #[test]
    fn test_sequence_becomes_message_list() {
        let messages = vec!["a", "b", "c"].into_messages();
        assert_eq!(messages.len(), 3);

        let messages = [1u8, 2].into_messages();
        assert_eq!(messages.len(), 2);

        let slice: &[&str] = &["x", "y"];
        assert_eq!(slice.into_messages().len(), 2);
    }

    #[test]
    fn test_opaque_values_render_with_display() {
        let messages = vec![Message::new(Point { x: 1, y: 2 }), Message::from("done")];
        let event = LogEvent::new(LogLevel::Info, messages);
        assert_eq!(event.joined_messages(), "(1, 2) done");
    }

    #[test]
    fn test_message_text_stringifies_borrowed_values() {
        let name = String::from("borrowed");
        let message = Message::text(&name);
        assert_eq!(message, Message::from("borrowed"));
    }

    #[test]
    fn test_event_builder_fields() {
        let event = LogEvent::new(LogLevel::Warning, "disk low")
            .with_labels(vec!["storage".to_string()])
            .with_user_info(UserInfo::new().with_field("free_mb", 12))
            .with_location(Location::new("/src/disk.rs", 42, "check"));

        assert_eq!(event.level(), LogLevel::Warning);
        assert_eq!(event.labels(), ["storage".to_string()]);
        assert_eq!(event.file(), "/src/disk.rs");
        assert_eq!(event.line(), 42);
        assert_eq!(event.function(), "check");
        assert_eq!(event.user_info().len(), 1);
    }

    #[test]
    fn test_caller_location_points_here() {
        let location = Location::caller();
        assert!(location.file.ends_with("log_event.rs"));
        assert!(location.line > 0);
        assert!(location.function.is_empty());
    }
}
