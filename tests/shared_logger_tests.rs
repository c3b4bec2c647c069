//! Process-wide default logger
//!
//! Kept to a single test: the shared logger is global state, and tests in one
//! binary run in parallel.

use segment_logger::core::shared;
use segment_logger::prelude::*;

#[test]
fn test_shared_logger_lifecycle() {
    // Lazily created with the same defaults as Logger::new
    {
        let logger = shared::shared().read();
        assert_eq!(logger.level(), LogLevel::Debug);
        assert!(logger.halt_on_fault());
        assert_eq!(logger.recorder().name(), "console");
    }

    let recorder = MemoryRecorder::new();
    let previous = shared::replace_shared(
        Logger::builder()
            .label("global")
            .level(LogLevel::Info)
            .segments(vec![
                Segment::field(|event| event.labels(), StringConverter::labels()),
                Segment::field(|event| event.messages(), StringConverter::default_messages()),
            ])
            .recorder(recorder.clone())
            .build(),
    );
    assert_eq!(previous.recorder().name(), "console");

    shared::debug(|| "filtered");
    shared::info(|| "hello");
    shared::warning(|| vec!["two", "parts"]);

    assert_eq!(recorder.lines(), vec!["[global] hello", "[global] two parts"]);
    let event = &recorder.events()[0];
    assert!(event.file().ends_with("shared_logger_tests.rs"));

    shared::configure_shared(|logger| logger.set_level(LogLevel::Trace));
    shared::trace(|| "now visible");
    shared::notice(|| "notice");
    shared::error(|| "error");
    assert_eq!(recorder.len(), 5);

    // Halting would abort the test process
    shared::configure_shared(|logger| logger.set_halt_on_fault(false));
    shared::fault(|| "survivable");
    assert_eq!(recorder.last_line().as_deref(), Some("[global] survivable"));
    assert_eq!(recorder.len(), 6);
    assert_eq!(shared::shared().read().metrics().fault_count(), 1);
}
