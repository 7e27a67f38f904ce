use crate::infra::DocprintBug;
use std::collections::VecDeque;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, MutexGuard, OnceLock};

/// How many entries are kept in memory. Older entries are dropped first.
const MAX_ENTRIES: usize = 1000;

static LOG: OnceLock<Mutex<Log>> = OnceLock::new();
static LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Warn as u8);

/// The process-wide log. Entries are recorded with the [`log!`] macro.
pub struct Log {
    entries: VecDeque<LogEntry>,
    log_file: Option<fs::File>,
}

pub struct LogEntry {
    level: LogLevel,
    message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl LogLevel {
    fn from_u8(level: u8) -> LogLevel {
        match level {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }
}

impl Log {
    fn new() -> Log {
        Log {
            entries: VecDeque::new(),
            log_file: None,
        }
    }

    /// Only record entries at `level` or above. The default is `Warn`.
    pub fn set_level(level: LogLevel) {
        LEVEL.store(level as u8, Ordering::Relaxed);
    }

    pub fn level() -> LogLevel {
        LogLevel::from_u8(LEVEL.load(Ordering::Relaxed))
    }

    /// Whether an entry at `level` would be recorded. Checked before the
    /// message is formatted.
    pub fn enabled(level: LogLevel) -> bool {
        level >= Log::level()
    }

    /// Also append every recorded entry to the file at `path`.
    pub fn set_file(path: impl AsRef<Path>) -> Result<(), io::Error> {
        let log_file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        Log::with_log(|log| log.log_file = Some(log_file));
        Ok(())
    }

    #[doc(hidden)]
    pub fn with_log<R>(callback: impl FnOnce(&mut Log) -> R) -> R {
        let log_mutex: &'static Mutex<Log> = LOG.get_or_init(|| Mutex::new(Log::new()));
        let mut log_guard: MutexGuard<Log> = log_mutex.lock().bug();
        callback(&mut log_guard)
    }

    #[doc(hidden)]
    pub fn push(&mut self, entry: LogEntry) {
        use std::io::Write;

        if let Some(log_file) = &mut self.log_file {
            let _ = writeln!(log_file, "{}", entry);
        }
        if self.entries.len() == MAX_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// All entries currently held in memory, one per line.
    pub fn contents() -> String {
        Log::with_log(|log| log.to_string())
    }
}

impl LogEntry {
    pub fn new(level: LogLevel, message: String) -> LogEntry {
        LogEntry { level, message }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let level = format!("[{}]", self.level);
        let msg = &self.message;
        write!(f, "{level:<7} {msg}")
    }
}

impl fmt::Display for Log {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}

#[macro_export]
macro_rules! log {
    ($level:ident, $message:literal) => {
        $crate::log!($level, $message,)
    };
    ($level:ident, $message:literal, $( $arg:expr ),*) => {
        {
            let level = $crate::LogLevel::$level;
            if $crate::Log::enabled(level) {
                let message = format!($message, $( $arg ),*);
                let entry = $crate::LogEntry::new(level, message);
                $crate::Log::with_log(|log| log.push(entry));
            }
        }
    };
}
