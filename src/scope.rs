// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scoped overrides of a logger's verbosity and subsource.
//!
//! Both overrides follow the same pattern: acquiring one saves the current value and applies the
//! new one, and dropping the returned guard puts the saved value back.  Drop runs on every exit
//! path, including early `?` returns and panics, so the logger is always restored.
//!
//! A guard borrows its logger mutably and dereferences to it, so logging inside the scope and
//! nesting further scopes both go through the guard:
//!
//! ```rust
//! use minlog::{InMemoryBackend, Logger, Verbosity};
//! use std::sync::Arc;
//!
//! let backend = Arc::new(InMemoryBackend::new());
//! let mut logger = Logger::with_source(Verbosity::Info, "app", backend.clone());
//! {
//!     let mut outer = logger.scoped_subsource("a");
//!     {
//!         let inner = outer.scoped_subsource("b");
//!         inner.info("inside b").unwrap();
//!     }
//!     assert_eq!(outer.subsource(), Some("a"));
//! }
//! assert_eq!(logger.subsource(), None);
//! assert_eq!(backend.drain_logs(), "[inf] [app:b] inside b\n");
//! ```
//!
//! Because the guard holds the only mutable borrow, scopes can only be exited in the reverse
//! order they were entered, and a logger in a scope can't be mutated from anywhere else.

use crate::level::Verbosity;
use crate::logger::Logger;
use std::ops::{Deref, DerefMut};

/// Restores a logger's threshold when dropped.
///
/// Created by [`Logger::scoped_verbosity`].
#[must_use = "the previous verbosity is restored as soon as the guard is dropped"]
#[derive(Debug)]
pub struct VerbosityGuard<'l> {
    logger: &'l mut Logger,
    prior: Verbosity,
}

/// Restores a logger's subsource when dropped.
///
/// Created by [`Logger::scoped_subsource`].
#[must_use = "the previous subsource is restored as soon as the guard is dropped"]
#[derive(Debug)]
pub struct SubsourceGuard<'l> {
    logger: &'l mut Logger,
    prior: Option<String>,
}

impl Logger {
    /// Sets the threshold to `level` until the returned guard is dropped.
    ///
    /// ```
    /// use minlog::{InMemoryBackend, Logger, Verbosity};
    /// use std::sync::Arc;
    ///
    /// let mut logger = Logger::new(Verbosity::Info, Arc::new(InMemoryBackend::new()));
    /// {
    ///     let scoped = logger.scoped_verbosity(Verbosity::Debug);
    ///     assert_eq!(scoped.verbosity(), Verbosity::Debug);
    /// }
    /// assert_eq!(logger.verbosity(), Verbosity::Info);
    /// ```
    pub fn scoped_verbosity(&mut self, level: Verbosity) -> VerbosityGuard<'_> {
        let prior = self.verbosity();
        self.set_verbosity(level);
        VerbosityGuard {
            logger: self,
            prior,
        }
    }

    /// Sets the subsource to `label` until the returned guard is dropped.
    pub fn scoped_subsource(&mut self, label: impl Into<String>) -> SubsourceGuard<'_> {
        let prior = self.subsource.replace(label.into());
        SubsourceGuard {
            logger: self,
            prior,
        }
    }

    /// Runs `f` with the threshold set to `level`, then restores it.
    ///
    /// The threshold is restored even if `f` panics.
    pub fn with_verbosity<R>(&mut self, level: Verbosity, f: impl FnOnce(&mut Logger) -> R) -> R {
        let mut guard = self.scoped_verbosity(level);
        f(&mut guard)
    }

    /// Runs `f` with the subsource set to `label`, then restores it.
    ///
    /// ```
    /// use minlog::{InMemoryBackend, Logger, Verbosity};
    /// use std::sync::Arc;
    ///
    /// let backend = Arc::new(InMemoryBackend::new());
    /// let mut logger = Logger::with_source(Verbosity::Info, "db", backend.clone());
    /// let result: Result<(), minlog::Error> = logger.with_subsource("migrate", |logger| {
    ///     logger.info("step 1")?;
    ///     Ok(())
    /// });
    /// result.unwrap();
    /// assert_eq!(backend.drain_logs(), "[inf] [db:migrate] step 1\n");
    /// ```
    pub fn with_subsource<R>(
        &mut self,
        label: impl Into<String>,
        f: impl FnOnce(&mut Logger) -> R,
    ) -> R {
        let mut guard = self.scoped_subsource(label);
        f(&mut guard)
    }
}

impl Deref for VerbosityGuard<'_> {
    type Target = Logger;
    fn deref(&self) -> &Logger {
        &*self.logger
    }
}

impl DerefMut for VerbosityGuard<'_> {
    fn deref_mut(&mut self) -> &mut Logger {
        &mut *self.logger
    }
}

impl Drop for VerbosityGuard<'_> {
    fn drop(&mut self) {
        self.logger.set_verbosity(self.prior);
    }
}

impl Deref for SubsourceGuard<'_> {
    type Target = Logger;
    fn deref(&self) -> &Logger {
        &*self.logger
    }
}

impl DerefMut for SubsourceGuard<'_> {
    fn deref_mut(&mut self) -> &mut Logger {
        &mut *self.logger
    }
}

impl Drop for SubsourceGuard<'_> {
    fn drop(&mut self) {
        self.logger.subsource = self.prior.take();
    }
}

/*
Boilerplate notes.

Guards are neither Clone nor Copy: two guards restoring the same logger would break the LIFO order.
No PartialEq/Hash/Default; a guard only exists as the result of acquiring a scope.
*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryBackend;
    use std::panic::{AssertUnwindSafe, catch_unwind};
    use std::sync::Arc;

    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::*;

    fn logger() -> (Logger, Arc<InMemoryBackend>) {
        let backend = Arc::new(InMemoryBackend::new());
        (Logger::new(Verbosity::Info, backend.clone()), backend)
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn verbosity_scope_applies_and_restores() {
        let (mut logger, backend) = logger();
        {
            let scoped = logger.scoped_verbosity(Verbosity::Debug);
            scoped.debug("inside").unwrap();
        }
        logger.debug("outside").unwrap();
        assert_eq!(logger.verbosity(), Verbosity::Info);
        assert_eq!(backend.drain_logs(), "[dbg] inside\n");
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn verbosity_restored_after_error_return() {
        let (mut logger, _) = logger();
        fn step() -> Result<(), &'static str> {
            Err("boom")
        }
        fn fails(logger: &mut Logger) -> Result<(), &'static str> {
            let scoped = logger.scoped_verbosity(Verbosity::Critical);
            assert_eq!(scoped.verbosity(), Verbosity::Critical);
            step()?;
            Ok(())
        }
        assert_eq!(fails(&mut logger), Err("boom"));
        assert_eq!(logger.verbosity(), Verbosity::Info);
    }

    #[test]
    fn verbosity_restored_after_panic() {
        let (mut logger, _) = logger();
        let result = catch_unwind(AssertUnwindSafe(|| {
            logger.with_verbosity(Verbosity::Trace, |_| panic!("inside scope"));
        }));
        assert!(result.is_err());
        assert_eq!(logger.verbosity(), Verbosity::Info);
    }

    #[test]
    fn subsource_restored_after_panic() {
        let (mut logger, _) = logger();
        let result = catch_unwind(AssertUnwindSafe(|| {
            logger.with_subsource("job", |_| panic!("inside scope"));
        }));
        assert!(result.is_err());
        assert_eq!(logger.subsource(), None);
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn nested_subsources_unwind_in_order() {
        let (mut logger, _) = logger();
        let mut a = logger.scoped_subsource("a");
        assert_eq!(a.subsource(), Some("a"));
        {
            let b = a.scoped_subsource("b");
            assert_eq!(b.subsource(), Some("b"));
        }
        assert_eq!(a.subsource(), Some("a"));
        drop(a);
        assert_eq!(logger.subsource(), None);
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn mixed_nesting_restores_both() {
        let (mut logger, backend) = logger();
        logger.with_subsource("outer", |logger| {
            logger.with_verbosity(Verbosity::Debug, |logger| {
                logger.with_subsource("inner", |logger| logger.debug("deep").unwrap());
                assert_eq!(logger.subsource(), Some("outer"));
            });
            assert_eq!(logger.verbosity(), Verbosity::Info);
        });
        assert_eq!(logger.subsource(), None);
        assert_eq!(backend.drain_logs(), "[dbg] [inner] deep\n");
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    fn permanent_changes_inside_a_scope_are_undone() {
        let (mut logger, _) = logger();
        {
            let mut scoped = logger.scoped_verbosity(Verbosity::Trace);
            scoped.be_quiet();
            assert!(scoped.is_quiet());
        }
        assert_eq!(logger.verbosity(), Verbosity::Info);
    }
}
