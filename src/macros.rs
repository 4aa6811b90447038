// SPDX-License-Identifier: MIT OR Apache-2.0

//! Formatting macros.
//!
//! The per-level methods on [`Logger`](crate::Logger) take a finished `&str`, so a caller who
//! writes `logger.debug(&format!(...))` pays for the formatting even when debug output is off.
//! These macros check [`Logger::enabled`](crate::Logger::enabled) first and only format when the
//! message will actually be written.
//!
//! Each macro takes a logger (anything that dereferences to one, including scope guards), then
//! `format!`-style arguments, and evaluates to [`Result<()>`](crate::Result).
//!
//! ```rust
//! use minlog::{InMemoryBackend, Logger, Verbosity};
//! use std::sync::Arc;
//!
//! let backend = Arc::new(InMemoryBackend::new());
//! let logger = Logger::with_source(Verbosity::Info, "jobs", backend.clone());
//!
//! let n = 3;
//! minlog::info!(logger, "finished {n} jobs").unwrap();
//! minlog::debug!(logger, "{:?}", expensive()).unwrap();
//!
//! fn expensive() -> Vec<u8> { unreachable!("debug is gated at Info") }
//!
//! assert_eq!(backend.drain_logs(), "[inf] [jobs] finished 3 jobs\n");
//! ```

/// Logs a formatted message at `level` if the logger's threshold allows it.
///
/// The per-level macros are shorthands for this one.
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger: &$crate::Logger = &$logger;
        let level: $crate::Verbosity = $level;
        if logger.enabled(level) {
            logger.log(&::std::format!($($arg)+), level)
        } else {
            ::core::result::Result::<(), $crate::Error>::Ok(())
        }
    }};
}

/// Logs a formatted message at [`Verbosity::Critical`](crate::Verbosity::Critical).
#[macro_export]
macro_rules! crit {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Verbosity::Critical, $($arg)+)
    };
}

/// Logs a formatted message at [`Verbosity::Error`](crate::Verbosity::Error).
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Verbosity::Error, $($arg)+)
    };
}

/// Logs a formatted message at [`Verbosity::Warn`](crate::Verbosity::Warn).
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Verbosity::Warn, $($arg)+)
    };
}

/// Logs a formatted message at [`Verbosity::Info`](crate::Verbosity::Info).
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Verbosity::Info, $($arg)+)
    };
}

/// Logs a formatted message at [`Verbosity::Trace`](crate::Verbosity::Trace).
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Verbosity::Trace, $($arg)+)
    };
}

/// Logs a formatted message at [`Verbosity::Debug`](crate::Verbosity::Debug).
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Verbosity::Debug, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::{InMemoryBackend, Logger, Verbosity};
    use std::cell::Cell;
    use std::sync::Arc;

    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::*;

    fn logger(threshold: Verbosity) -> (Logger, Arc<InMemoryBackend>) {
        let backend = Arc::new(InMemoryBackend::new());
        (Logger::new(threshold, backend.clone()), backend)
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn formats_and_tags() {
        let (logger, backend) = logger(Verbosity::Debug);
        crate::crit!(logger, "c{}", 1).unwrap();
        crate::error!(logger, "e{}", 2).unwrap();
        crate::warn!(logger, "w{}", 3).unwrap();
        crate::info!(logger, "i{}", 4).unwrap();
        crate::trace!(logger, "t{}", 5).unwrap();
        crate::debug!(logger, "d{}", 6).unwrap();
        assert_eq!(
            backend.drain_logs(),
            "[crt] c1\n[err] e2\n[wrn] w3\n[inf] i4\n[trc] t5\n[dbg] d6\n"
        );
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn suppressed_messages_are_not_formatted() {
        let (logger, backend) = logger(Verbosity::Warn);
        let calls = Cell::new(0);
        let count = || {
            calls.set(calls.get() + 1);
            "x"
        };
        crate::info!(logger, "{}", count()).unwrap();
        crate::debug!(logger, "{}", count()).unwrap();
        assert_eq!(calls.get(), 0);
        crate::warn!(logger, "{}", count()).unwrap();
        assert_eq!(calls.get(), 1);
        assert_eq!(backend.drain_logs(), "[wrn] x\n");
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn accepts_scope_guards() {
        let (mut logger, backend) = logger(Verbosity::Info);
        {
            let scoped = logger.scoped_verbosity(Verbosity::Debug);
            crate::debug!(scoped, "inside").unwrap();
        }
        crate::debug!(logger, "outside").unwrap();
        assert_eq!(backend.drain_logs(), "[dbg] inside\n");
    }

    #[test]
    fn generic_form_takes_a_runtime_level() {
        let (logger, backend) = logger(Verbosity::Info);
        for level in Verbosity::ALL {
            crate::log!(logger, level, "{}", level.code()).unwrap();
        }
        assert_eq!(
            backend.drain_logs(),
            "[crt] crt\n[err] err\n[wrn] wrn\n[inf] inf\n"
        );
    }
}
