//! Basic logger usage example
//!
//! Demonstrates the standard line format, level filtering, derived loggers,
//! custom segment pipelines and fan-out to several recorders.
//!
//! Run with: cargo run --example basic_usage

use segment_logger::prelude::*;
use segment_logger::{info, warning};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Segment Logger - Basic Usage Example ===\n");

    // Console recorder, standard pipeline, threshold Debug
    let mut logger = Logger::new();
    logger.set_halt_on_fault(false);

    println!("1. Logging at different levels:");
    logger.set_level(LogLevel::Trace);
    logger.trace(|| "This is a trace message");
    logger.debug(|| "This is a debug message");
    logger.info(|| "This is an info message");
    logger.notice(|| "This is a notice message");
    logger.warning(|| "This is a warning message");
    logger.error(|| "This is an error message");
    logger.fault(|| "This is a fault message (halt disabled)");

    println!("\n2. Logging with a higher threshold:");
    logger.set_level(LogLevel::Info);
    println!("   Threshold set to INFO - trace and debug won't show:");
    logger.trace(|| "Trace message (hidden)");
    logger.debug(|| "Debug message (hidden)");
    logger.info(|| "Info message (visible)");

    println!("\n3. Macros capture the function name:");
    let port = 8080;
    info!(logger, "Server listening on port", port);
    warning!(logger, vec!["several", "messages", "joined"]);

    println!("\n4. Derived loggers add a label:");
    let db = logger.derive_logger_with("db");
    let pool = db.derive_logger_with("pool");
    db.info(|| "connected");
    pool.info(|| "4 connections ready");

    println!("\n5. Custom pipeline:");
    let compact = Logger::builder()
        .segments(vec![
            Segment::timestamp(TimestampFormat::Iso8601),
            Segment::literal(" "),
            Segment::value(|event| event.level(), StringConverter::level_name()),
            Segment::literal(" "),
            Segment::derived(StringConverter::file_and_line(24)),
            Segment::literal(" "),
            Segment::field(|event| event.messages(), StringConverter::default_messages()),
        ])
        .recorder(ConsoleRecorder::new().with_colors(true))
        .build();
    compact.info(|| "compact and colored");

    println!("\n6. Fan-out to console and memory:");
    let memory = MemoryRecorder::new();
    let recorders: Vec<Arc<dyn Recorder>> =
        vec![Arc::new(ConsoleRecorder::new()), Arc::new(memory.clone())];
    let fan_out = Logger::builder()
        .recorder(CombineRecorder::new(recorders))
        .build();
    fan_out.info(|| "delivered twice");
    println!("   memory recorder holds {} line(s)", memory.len());

    logger.flush()?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
