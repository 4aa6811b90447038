// SPDX-License-Identifier: MIT OR Apache-2.0

//! The logger.

use crate::backend::RenderBackend;
use crate::error::Result;
use crate::level::Verbosity;
use crate::log_record::FormattedMessage;
use std::sync::Arc;

/**
A leveled logger with an optional source label.

A `Logger` holds a verbosity threshold, an optional source and a transient subsource, and the
backend it writes to.  A message is written if and only if its rank is at most the threshold's
rank; otherwise the call returns immediately, before any formatting.

```
use minlog::{InMemoryBackend, Logger, Verbosity};
use std::sync::Arc;

let backend = Arc::new(InMemoryBackend::new());
let mut logger = Logger::new(Verbosity::Info, backend.clone());

logger.warn("x").unwrap();
logger.debug("y").unwrap();
assert_eq!(backend.drain_logs(), "[wrn] x\n");

logger.be_debug();
logger.debug("y").unwrap();
assert_eq!(backend.drain_logs(), "[dbg] y\n");
```

# Derivation

[`Logger::logger_for`] creates a named child that starts at the parent's threshold.  After that
the two are independent; they only share the backend.

# Errors

Every method that writes returns the backend's I/O failure as [`Error::Write`](crate::Error::Write).
A message below the threshold is not an error.
*/
#[derive(Debug, Clone)]
pub struct Logger {
    threshold: Verbosity,
    source: Option<String>,
    pub(crate) subsource: Option<String>,
    backend: Arc<dyn RenderBackend>,
}

impl Logger {
    /// Creates a logger with no source.
    pub fn new(threshold: Verbosity, backend: Arc<dyn RenderBackend>) -> Self {
        Logger {
            threshold,
            source: None,
            subsource: None,
            backend,
        }
    }

    /// Creates a logger with a source label.
    pub fn with_source(
        threshold: Verbosity,
        source: impl Into<String>,
        backend: Arc<dyn RenderBackend>,
    ) -> Self {
        Logger {
            source: Some(source.into()),
            ..Logger::new(threshold, backend)
        }
    }

    /// Creates a logger at [`Verbosity::Info`] writing to stdout.
    pub fn stdout() -> Self {
        Logger::new(Verbosity::Info, Arc::new(crate::ConsoleBackend::stdout()))
    }

    /// Returns a new logger with this logger's threshold, the given source, and no subsource.
    ///
    /// The threshold is copied: changing it on either logger afterwards does not affect the other.
    pub fn logger_for(&self, source: impl Into<String>) -> Logger {
        Logger {
            threshold: self.threshold,
            source: Some(source.into()),
            subsource: None,
            backend: self.backend.clone(),
        }
    }

    /// The current threshold.
    #[inline]
    pub fn verbosity(&self) -> Verbosity {
        self.threshold
    }

    /// Sets the threshold.
    #[inline]
    pub fn set_verbosity(&mut self, threshold: Verbosity) {
        self.threshold = threshold;
    }

    /// The source label, if any.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// The subsource label of the innermost active [`scoped_subsource`](Logger::scoped_subsource).
    pub fn subsource(&self) -> Option<&str> {
        self.subsource.as_deref()
    }

    /// The backend this logger writes to.
    pub fn backend(&self) -> &Arc<dyn RenderBackend> {
        &self.backend
    }

    /// Whether a message at `level` would be written.
    #[inline]
    pub fn enabled(&self, level: Verbosity) -> bool {
        level.rank() <= self.threshold.rank()
    }

    /// Splits `message` into its escaped, independently styled pieces.
    pub fn format_message<'a>(&self, message: &'a str, level: Verbosity) -> FormattedMessage<'a> {
        FormattedMessage::new(
            self.backend.as_ref(),
            level,
            self.source.as_deref(),
            self.subsource.as_deref(),
            message,
        )
    }

    /// Writes `message` at `level` if the threshold allows it.
    pub fn log(&self, message: &str, level: Verbosity) -> Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }
        self.format_message(message, level)
            .write_to(self.backend.as_ref())?;
        Ok(())
    }

    /// Logs `message` at [`Verbosity::Critical`].
    pub fn crit(&self, message: &str) -> Result<()> {
        self.log(message, Verbosity::Critical)
    }

    /// Logs `message` at [`Verbosity::Error`].
    pub fn error(&self, message: &str) -> Result<()> {
        self.log(message, Verbosity::Error)
    }

    /// Logs `message` at [`Verbosity::Warn`].
    pub fn warn(&self, message: &str) -> Result<()> {
        self.log(message, Verbosity::Warn)
    }

    /// Logs `message` at [`Verbosity::Info`].
    pub fn info(&self, message: &str) -> Result<()> {
        self.log(message, Verbosity::Info)
    }

    /// Logs `message` at [`Verbosity::Trace`].
    pub fn trace(&self, message: &str) -> Result<()> {
        self.log(message, Verbosity::Trace)
    }

    /// Logs `message` at [`Verbosity::Debug`].
    pub fn debug(&self, message: &str) -> Result<()> {
        self.log(message, Verbosity::Debug)
    }

    /// Logs at [`Verbosity::Critical`], which every threshold shows.
    pub fn force_log(&self, message: &str) -> Result<()> {
        self.crit(message)
    }

    /**
    Writes `message` unstyled when the threshold's rank is at most `compare`'s rank.

    Note the direction: this is the opposite of [`Logger::log`].  A quiet logger (threshold
    [`Verbosity::Error`]) writes a message compared against [`Verbosity::Debug`], and a debug
    logger does not write one compared against [`Verbosity::Info`].  The text goes through
    [`RenderBackend::write_plain`], so it is neither escaped nor styled.

    ```
    use minlog::{InMemoryBackend, Logger, Verbosity};
    use std::sync::Arc;

    let backend = Arc::new(InMemoryBackend::new());
    let mut logger = Logger::new(Verbosity::Info, backend.clone());
    logger.be_quiet();
    logger.log_only_when_quieter_than("[shown]", Verbosity::Debug).unwrap();
    assert_eq!(backend.drain_logs(), "[shown]\n");
    ```
    */
    pub fn log_only_when_quieter_than(&self, message: &str, compare: Verbosity) -> Result<()> {
        if self.threshold.rank() <= compare.rank() {
            self.backend.write_plain(&format!("{message}\n"))?;
        }
        Ok(())
    }

    /// Whether the threshold is [`Verbosity::Error`].
    pub fn is_quiet(&self) -> bool {
        self.threshold == Verbosity::Error
    }

    /// Whether the threshold is [`Verbosity::Trace`].
    pub fn is_verbose(&self) -> bool {
        self.threshold == Verbosity::Trace
    }

    /// Whether the threshold is [`Verbosity::Debug`].
    pub fn is_debug(&self) -> bool {
        self.threshold == Verbosity::Debug
    }

    /// Whether the threshold permits at least `level`, i.e. its rank is at least `level`'s.
    pub fn is_verbosity_above(&self, level: Verbosity) -> bool {
        self.threshold.rank() >= level.rank()
    }

    /// Shows only errors and critical messages.
    pub fn be_quiet(&mut self) {
        self.threshold = Verbosity::Error;
    }

    /// Shows everything up to [`Verbosity::Trace`].
    pub fn be_verbose(&mut self) {
        self.threshold = Verbosity::Trace;
    }

    /// Shows everything.
    pub fn be_debug(&mut self) {
        self.threshold = Verbosity::Debug;
    }

    /// Flushes the backend.
    pub fn flush(&self) -> Result<()> {
        self.backend.flush()?;
        Ok(())
    }
}

/*
Boilerplate notes.

# Logger

Clone copies threshold, source and subsource and shares the backend, which is the same thing
logger_for does minus the rename.
PartialEq is unclear (do two loggers on different backends compare equal?), so it's left out.
Default would have to pick a backend; Logger::stdout() is explicit about it instead.
Send/Sync follow from RenderBackend: Send + Sync.
*/
