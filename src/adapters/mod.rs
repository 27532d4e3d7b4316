// Adapters layer: concrete implementations of the domain ports (serial numbers, reporting).

pub mod report;
pub mod serial;

pub use report::{ConsoleReporter, MemoryReporter};
pub use serial::{RandomSerialGenerator, SequentialSerialGenerator};
