//! Recorder implementations

pub mod combine;
pub mod console;
pub mod file;
pub mod memory;

pub use combine::CombineRecorder;
pub use console::{ConsoleRecorder, ConsoleStream};
pub use file::FileRecorder;
pub use memory::{MemoryRecorder, NullRecorder};
