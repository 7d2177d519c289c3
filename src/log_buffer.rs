//! Log buffer with levels and timestamps.
//!
//! Screens and the host record events into a fixed ring of entries reachable
//! through the [`Context`](crate::screen::Context). The firmware drains the ring
//! to `defmt` every loop iteration; the simulator prints it to stdout. The
//! library itself never talks to a logging backend, so it stays host-testable.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui_info;
//!
//! ui_info!(ctx, "{} -> {}", from, to);
//! ui_warn!(ctx, "timer rejected: {}", err);
//! ```

use core::fmt::{self, Write};

use heapless::String;

/// Maximum number of log entries to keep.
pub const LOG_ENTRIES: usize = 16;

/// Maximum characters per log message.
pub const LOG_MSG_LEN: usize = 48;

/// Log severity level.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
#[repr(u8)]
pub enum LogLevel {
    /// Verbose debugging
    Trace = 0,
    /// Debug information (button presses, list moves)
    Debug = 1,
    /// Normal operation (transitions, selections)
    #[default]
    Info = 2,
    /// Recoverable problems (rejected timers, unreadable folders)
    Warn = 3,
    /// Errors
    Error = 4,
}

impl LogLevel {
    /// Get the single-character prefix for this level.
    pub const fn prefix(self) -> char {
        match self {
            Self::Trace => 'T',
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warn => 'W',
            Self::Error => 'E',
        }
    }
}

/// A single log entry with level, message, and timestamp.
#[derive(Clone, Debug, Default)]
pub struct LogEntry {
    /// Log severity level.
    pub level: LogLevel,
    /// Log message (truncated to LOG_MSG_LEN).
    pub message: String<LOG_MSG_LEN>,
    /// Milliseconds since boot when the entry was recorded.
    pub timestamp_ms: u32,
}

impl LogEntry {
    /// Create a new log entry, truncating `message` to fit.
    pub fn new(
        level: LogLevel,
        message: &str,
        timestamp_ms: u32,
    ) -> Self {
        let mut msg = String::new();
        Truncating(&mut msg).write_str(message).ok();
        Self {
            level,
            message: msg,
            timestamp_ms,
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "[{:>6}] {} {}", self.timestamp_ms, self.level.prefix(), self.message)
    }
}

/// Writer that keeps as many characters as fit and silently drops the rest.
struct Truncating<'a>(&'a mut String<LOG_MSG_LEN>);

impl Write for Truncating<'_> {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Circular buffer of log entries. The oldest entry is overwritten when full.
pub struct LogBuffer {
    entries: [LogEntry; LOG_ENTRIES],
    head: usize, // Next write position
    count: usize,
}

impl LogBuffer {
    /// Create a new empty log buffer.
    pub const fn new() -> Self {
        Self {
            entries: [const {
                LogEntry {
                    level: LogLevel::Info,
                    message: String::new(),
                    timestamp_ms: 0,
                }
            }; LOG_ENTRIES],
            head: 0,
            count: 0,
        }
    }

    /// Push a new log entry. Oldest entry is dropped if buffer is full.
    pub fn push(
        &mut self,
        entry: LogEntry,
    ) {
        self.entries[self.head] = entry;
        self.head = (self.head + 1) % LOG_ENTRIES;
        if self.count < LOG_ENTRIES {
            self.count += 1;
        }
    }

    /// Format and push an entry. Used by the `ui_*!` macros.
    pub fn push_fmt(
        &mut self,
        level: LogLevel,
        timestamp_ms: u32,
        args: fmt::Arguments<'_>,
    ) {
        let mut message = String::new();
        Truncating(&mut message).write_fmt(args).ok();
        self.push(LogEntry {
            level,
            message,
            timestamp_ms,
        });
    }

    /// Remove and return the oldest entry.
    pub fn pop_oldest(&mut self) -> Option<LogEntry> {
        if self.count == 0 {
            return None;
        }
        let tail = (self.head + LOG_ENTRIES - self.count) % LOG_ENTRIES;
        self.count -= 1;
        Some(core::mem::take(&mut self.entries[tail]))
    }

    /// Get the number of entries in the buffer.
    #[inline]
    pub const fn len(&self) -> usize { self.count }

    /// Check if buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool { self.count == 0 }

    /// Iterate over entries from oldest to newest.
    pub fn iter(&self) -> LogBufferIter<'_> {
        LogBufferIter {
            buffer: self,
            pos: (self.head + LOG_ENTRIES - self.count) % LOG_ENTRIES,
            remaining: self.count,
        }
    }
}

impl Default for LogBuffer {
    fn default() -> Self { Self::new() }
}

/// Iterator over log buffer entries (oldest to newest).
pub struct LogBufferIter<'a> {
    buffer: &'a LogBuffer,
    pos: usize,
    remaining: usize,
}

impl<'a> Iterator for LogBufferIter<'a> {
    type Item = &'a LogEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = &self.buffer.entries[self.pos];
        self.pos = (self.pos + 1) % LOG_ENTRIES;
        self.remaining -= 1;
        Some(entry)
    }
}

/// Shared body of the `ui_*!` macros: timestamps with the context clock.
#[doc(hidden)]
#[macro_export]
macro_rules! ui_log {
    ($level:expr, $ctx:expr, $($arg:tt)*) => {{
        let now = $ctx.clock.uptime_ms();
        $ctx.log.push_fmt($level, now, format_args!($($arg)*));
    }};
}

/// Log a message at Debug level.
#[macro_export]
macro_rules! ui_debug {
    ($ctx:expr, $($arg:tt)*) => {
        $crate::ui_log!($crate::log_buffer::LogLevel::Debug, $ctx, $($arg)*)
    };
}

/// Log a message at Info level.
#[macro_export]
macro_rules! ui_info {
    ($ctx:expr, $($arg:tt)*) => {
        $crate::ui_log!($crate::log_buffer::LogLevel::Info, $ctx, $($arg)*)
    };
}

/// Log a message at Warn level.
#[macro_export]
macro_rules! ui_warn {
    ($ctx:expr, $($arg:tt)*) => {
        $crate::ui_log!($crate::log_buffer::LogLevel::Warn, $ctx, $($arg)*)
    };
}

/// Log a message at Error level.
#[macro_export]
macro_rules! ui_error {
    ($ctx:expr, $($arg:tt)*) => {
        $crate::ui_log!($crate::log_buffer::LogLevel::Error, $ctx, $($arg)*)
    };
}
