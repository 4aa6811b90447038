// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide default logger.
//!
//! Most programs want one logger configured at startup (from a `--quiet` flag, say) that every
//! subsystem derives its own named logger from.  This module holds that logger.
//!
//! # Installing
//!
//! Call [`install_default_logger`] once, early in `main`.  If nothing is installed, the first
//! access creates a logger at [`Verbosity::Info`](crate::Verbosity::Info) on
//! [`ConsoleBackend::stdout`](crate::ConsoleBackend::stdout).
//!
//! ```rust,standalone_crate
//! use minlog::global_logger::{default_logger_for, install_default_logger};
//! use minlog::{InMemoryBackend, Logger, Verbosity};
//! use std::sync::Arc;
//!
//! let backend = Arc::new(InMemoryBackend::new());
//! install_default_logger(Logger::new(Verbosity::Trace, backend.clone())).unwrap();
//!
//! let net = default_logger_for("net");
//! net.trace("connecting").unwrap();
//! assert_eq!(backend.drain_logs(), "[trc] [net] connecting\n");
//! ```
//!
//! # Changing verbosity
//!
//! Mutation goes through [`with_default_logger_mut`], so it is always an explicit call:
//!
//! ```rust,standalone_crate
//! use minlog::global_logger::{with_default_logger, with_default_logger_mut};
//!
//! with_default_logger_mut(|logger| logger.be_quiet());
//! assert!(with_default_logger(|logger| logger.is_quiet()));
//! ```
//!
//! Loggers already derived from the default keep the threshold they were created with.
//!
//! # Locking
//!
//! The default logger sits behind a reader/writer spinlock, which works on the wasm main thread
//! where blocking is not allowed.  The closures passed to [`with_default_logger`] and
//! [`with_default_logger_mut`] run with the lock held; don't call back into this module from
//! inside them.

use crate::error::{Error, Result};
use crate::logger::Logger;
use crate::spinlock::Spinlock;
use std::sync::OnceLock;

static DEFAULT_LOGGER: OnceLock<Spinlock<Logger>> = OnceLock::new();

fn default_cell() -> &'static Spinlock<Logger> {
    DEFAULT_LOGGER.get_or_init(|| Spinlock::new(Logger::stdout()))
}

/// Installs `logger` as the process-wide default.
///
/// # Errors
///
/// [`Error::AlreadyInstalled`] if a default logger exists already, either from an earlier call
/// or because it was used before this call and created itself.
pub fn install_default_logger(logger: Logger) -> Result<()> {
    DEFAULT_LOGGER
        .set(Spinlock::new(logger))
        .map_err(|_| Error::AlreadyInstalled)
}

/// Runs `f` with shared access to the default logger.
pub fn with_default_logger<R>(f: impl FnOnce(&Logger) -> R) -> R {
    default_cell().with(f)
}

/// Runs `f` with exclusive access to the default logger.
pub fn with_default_logger_mut<R>(f: impl FnOnce(&mut Logger) -> R) -> R {
    default_cell().with_mut(f)
}

/// A copy of the default logger.  Later changes to either do not affect the other.
pub fn default_logger() -> Logger {
    with_default_logger(Logger::clone)
}

/// Derives a named logger from the default, as [`Logger::logger_for`] does.
pub fn default_logger_for(source: impl Into<String>) -> Logger {
    let source = source.into();
    with_default_logger(|logger| logger.logger_for(source))
}
