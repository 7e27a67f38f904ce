mod log;

pub use self::log::{Log, LogEntry, LogLevel};
