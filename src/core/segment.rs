//! Segment pipeline
//!
//! A [`Pipeline`] is an ordered list of [`Segment`]s. Rendering an event
//! concatenates the output of every segment in order.

use super::log_event::LogEvent;
use super::string_converter::StringConverter;
use super::timestamp::{TimestampFormat, TimestampMode};
use chrono::{DateTime, Utc};

/// One renderable unit of a log line
#[derive(Debug, Clone)]
pub enum Segment {
    /// Fixed text
    Literal(String),
    /// Text derived from the event
    Derived(StringConverter<LogEvent>),
    /// A formatted instant; which instant depends on the pipeline's [`TimestampMode`]
    Timestamp(TimestampFormat),
}

impl Segment {
    pub fn literal(text: impl Into<String>) -> Self {
        Segment::Literal(text.into())
    }

    pub fn derived(converter: StringConverter<LogEvent>) -> Self {
        Segment::Derived(converter)
    }

    /// Derived segment over one field of the event
    ///
    /// ```
    /// use segment_logger::{Segment, StringConverter};
    ///
    /// let messages = Segment::field(|event| event.messages(), StringConverter::default_messages());
    /// ```
    pub fn field<S, F>(accessor: F, converter: StringConverter<S>) -> Self
    where
        S: ?Sized + 'static,
        F: Fn(&LogEvent) -> &S + Send + Sync + 'static,
    {
        Segment::Derived(StringConverter::project(accessor, converter))
    }

    /// Derived segment over a field of the event read by value
    pub fn value<S, F>(accessor: F, converter: StringConverter<S>) -> Self
    where
        S: 'static,
        F: Fn(&LogEvent) -> S + Send + Sync + 'static,
    {
        Segment::Derived(StringConverter::project_value(accessor, converter))
    }

    pub fn timestamp(format: TimestampFormat) -> Self {
        Segment::Timestamp(format)
    }

    fn render_into(&self, out: &mut String, event: &LogEvent, instant: &DateTime<Utc>) {
        match self {
            Segment::Literal(text) => out.push_str(text),
            Segment::Derived(converter) => out.push_str(&converter.convert(event)),
            Segment::Timestamp(format) => out.push_str(&format.format(instant)),
        }
    }
}

/// Ordered segments defining the complete output format
#[derive(Debug, Clone)]
pub struct Pipeline {
    segments: Vec<Segment>,
    timestamp_mode: TimestampMode,
}

impl Pipeline {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self {
            segments,
            timestamp_mode: TimestampMode::default(),
        }
    }

    /// The standard line:
    /// `timestamp [level] File.rs(line).function ↔️ [labels] messages`
    pub fn standard() -> Self {
        Self::new(vec![
            Segment::timestamp(TimestampFormat::Standard),
            Segment::literal(" ["),
            Segment::value(|event| event.level(), StringConverter::level_marker()),
            Segment::literal("] "),
            Segment::derived(StringConverter::location()),
            Segment::literal(" ↔️ "),
            Segment::field(|event| event.labels(), StringConverter::labels()),
            Segment::field(|event| event.messages(), StringConverter::default_messages()),
        ])
    }

    #[must_use]
    pub fn with_timestamp_mode(mut self, mode: TimestampMode) -> Self {
        self.timestamp_mode = mode;
        self
    }

    #[must_use]
    pub fn with_segment(mut self, segment: Segment) -> Self {
        self.segments.push(segment);
        self
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn timestamp_mode(&self) -> TimestampMode {
        self.timestamp_mode
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn has_timestamp(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, Segment::Timestamp(_)))
    }

    /// Render `event` into one line
    pub fn render(&self, event: &LogEvent) -> String {
        let instant = match self.timestamp_mode {
            TimestampMode::EventTime => event.timestamp(),
            // Skip the clock read when nothing formats it
            TimestampMode::RenderTime if self.has_timestamp() => Utc::now(),
            TimestampMode::RenderTime => event.timestamp(),
        };
        self.render_at(event, instant)
    }

    /// Render `event`, formatting `instant` in every timestamp segment
    pub fn render_at(&self, event: &LogEvent, instant: DateTime<Utc>) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            segment.render_into(&mut out, event, &instant);
        }
        out
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::standard()
    }
}

impl From<Vec<Segment>> for Pipeline {
    fn from(segments: Vec<Segment>) -> Self {
        Self::new(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::log_event::Location;
    use crate::core::log_level::LogLevel;
    use chrono::TimeZone;

    fn sample_event() -> LogEvent {
        LogEvent::new(LogLevel::Warning, vec!["disk", "low"])
            .with_labels(vec!["storage".to_string(), "ssd".to_string()])
            .with_location(Location::new("/srv/app/src/disk.rs", 88, "check_space"))
            .with_timestamp(Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap())
    }

    #[test]
    fn test_literal_then_derived() {
        let upper = StringConverter::<LogEvent>::new(|e| e.joined_messages().to_uppercase());
        let pipeline = Pipeline::new(vec![Segment::literal("A"), Segment::derived(upper.clone())]);
        let event = sample_event();

        assert_eq!(pipeline.render(&event), format!("A{}", upper.convert(&event)));
    }

    #[test]
    fn test_empty_pipeline_renders_empty_line() {
        assert_eq!(Pipeline::new(Vec::new()).render(&sample_event()), "");
    }

    #[test]
    fn test_standard_pipeline_after_timestamp() {
        let event = sample_event();
        let line = Pipeline::standard().render_at(&event, event.timestamp());
        let stamp = TimestampFormat::Standard.format(&event.timestamp());

        assert_eq!(
            line,
            format!(
                "{} [⚠️ Warning] disk.rs(88).check_space ↔️ [storage][ssd] disk low",
                stamp
            )
        );
    }

    #[test]
    fn test_event_time_mode_is_stable() {
        let pipeline = Pipeline::new(vec![
            Segment::timestamp(TimestampFormat::Iso8601),
            Segment::literal(" "),
            Segment::timestamp(TimestampFormat::Unix),
        ])
        .with_timestamp_mode(TimestampMode::EventTime);

        let event = sample_event();
        assert_eq!(pipeline.render(&event), "2025-01-08T10:30:45.000Z 1736332245");
        assert_eq!(pipeline.render(&event), pipeline.render(&event));
    }

    #[test]
    fn test_render_time_mode_reads_clock() {
        let pipeline = Pipeline::new(vec![Segment::timestamp(TimestampFormat::Unix)]);
        let before = Utc::now().timestamp();
        let rendered: i64 = pipeline.render(&sample_event()).parse().unwrap();
        let after = Utc::now().timestamp();

        // The sample event is stamped in 2025; render time is now.
        assert!(rendered >= before && rendered <= after);
    }

    #[test]
    fn test_push_and_with_segment() {
        let mut pipeline = Pipeline::new(Vec::new()).with_segment(Segment::literal("x"));
        pipeline.push(Segment::literal("y"));
        assert_eq!(pipeline.segments().len(), 2);
        assert_eq!(pipeline.render(&sample_event()), "xy");
    }
}
