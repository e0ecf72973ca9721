//! Injectable diagnostics handle.
//!
//! Messages go to whatever [`log`] implementation the application
//! installed. The handle decides which of them are emitted, so two
//! scans in one process may log at different verbosity.

use std::fmt;

use log::{Level, LevelFilter};

/// Message severity, from most verbose to fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Severity {
    fn level(self) -> Level {
        match self {
            Severity::Trace => Level::Trace,
            Severity::Debug => Level::Debug,
            Severity::Info => Level::Info,
            Severity::Warn => Level::Warn,
            Severity::Error | Severity::Fatal => Level::Error,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        };
        f.write_str(s)
    }
}

/// A level-gated handle onto the [`log`] sink.
///
/// `Fatal` messages are never filtered. Handles are cheap to copy and
/// pass around; call [`Logger::shutdown`] once when the application
/// is done logging.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    min: Option<Severity>,
    target: &'static str,
}

impl Logger {
    /// Handle emitting messages at `min` severity and above.
    pub fn new(min: Severity) -> Self {
        Logger {
            min: Some(min),
            target: module_path!(),
        }
    }

    /// Handle that emits only `Fatal` messages.
    pub fn silent() -> Self {
        Logger {
            min: None,
            target: module_path!(),
        }
    }

    /// Handle following the global [`log::max_level`].
    pub fn from_max_level() -> Self {
        let min = match log::max_level() {
            LevelFilter::Off => None,
            LevelFilter::Error => Some(Severity::Error),
            LevelFilter::Warn => Some(Severity::Warn),
            LevelFilter::Info => Some(Severity::Info),
            LevelFilter::Debug => Some(Severity::Debug),
            LevelFilter::Trace => Some(Severity::Trace),
        };
        Logger {
            min,
            target: module_path!(),
        }
    }

    /// Use `target` for emitted records.
    pub fn with_target(mut self, target: &'static str) -> Self {
        self.target = target;
        self
    }

    #[inline]
    pub fn enabled(&self, severity: Severity) -> bool {
        severity == Severity::Fatal || self.min.map_or(false, |min| severity >= min)
    }

    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        if !self.enabled(severity) {
            return;
        }
        if severity == Severity::Fatal {
            log::log!(target: self.target, severity.level(), "{}: {}", severity, args);
        } else {
            log::log!(target: self.target, severity.level(), "{}", args);
        }
    }

    #[inline]
    pub fn trace(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Trace, args)
    }

    #[inline]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Debug, args)
    }

    #[inline]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Info, args)
    }

    #[inline]
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Warn, args)
    }

    #[inline]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Error, args)
    }

    #[inline]
    pub fn fatal(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Fatal, args)
    }

    /// Flush the sink. The handle is consumed, but copies of it stay
    /// usable.
    pub fn shutdown(self) {
        log::logger().flush();
    }
}

impl Default for Logger {
    fn default() -> Self {
        Logger::new(Severity::Info)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub fn init_log() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_level_gating() {
        let logger = Logger::new(Severity::Warn);
        assert!(!logger.enabled(Severity::Trace));
        assert!(!logger.enabled(Severity::Info));
        assert!(logger.enabled(Severity::Warn));
        assert!(logger.enabled(Severity::Error));
        assert!(logger.enabled(Severity::Fatal));
    }

    #[test]
    fn test_silent_keeps_fatal() {
        let logger = Logger::silent();
        assert!(!logger.enabled(Severity::Error));
        assert!(logger.enabled(Severity::Fatal));
    }

    #[test]
    fn test_no_flush_on_drop() {
        // Scans copy the handle freely; dropping a copy must not touch
        // the sink.
        assert!(!std::mem::needs_drop::<Logger>());

        let logger = Logger::new(Severity::Debug);
        let copy = logger;
        copy.shutdown();
        assert!(logger.enabled(Severity::Debug));
    }

    #[test]
    fn test_emit() {
        init_log();
        let logger = Logger::new(Severity::Trace).with_target("ring_sweep::test");
        logger.trace(format_args!("trace {}", 1));
        logger.info(format_args!("info {}", 2));
        logger.fatal(format_args!("fatal {}", 3));
        assert_eq!(Severity::Fatal.to_string(), "FATAL");
    }
}
