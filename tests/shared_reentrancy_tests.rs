//! Logging through the shared logger from inside a shared log call
//!
//! Its own test binary: it reconfigures the process-wide logger.

use segment_logger::core::shared;
use segment_logger::prelude::*;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

#[test]
fn test_nested_shared_log_with_waiting_writer() {
    let recorder = MemoryRecorder::new();
    shared::replace_shared(
        Logger::builder()
            .segments(vec![Segment::field(
                |event| event.messages(),
                StringConverter::default_messages(),
            )])
            .recorder(recorder.clone())
            .halt_on_fault(false)
            .build(),
    );

    let (done_tx, done_rx) = mpsc::channel();
    let logging = thread::spawn(move || {
        let mut writer = None;

        shared::info(|| {
            // Queue a writer behind the read lock this call holds
            writer = Some(thread::spawn(|| {
                shared::configure_shared(|logger| logger.set_level(LogLevel::Warning));
            }));
            thread::sleep(Duration::from_millis(200));

            shared::info(|| "nested");
            "outer"
        });

        if let Some(writer) = writer {
            writer.join().expect("writer thread panicked");
        }
        done_tx.send(()).expect("test thread gone");
    });

    done_rx
        .recv_timeout(Duration::from_secs(10))
        .expect("nested shared log did not complete");
    logging.join().expect("logging thread panicked");

    assert_eq!(recorder.lines(), vec!["nested", "outer"]);
    assert_eq!(shared::shared().read().level(), LogLevel::Warning);
}
