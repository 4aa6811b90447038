// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Backend
//!
//! This module provides a [`RenderBackend`] that captures output in memory instead of writing it
//! to a terminal.  It is intended for:
//!
//! - Unit testing code that logs through minlog
//! - Asserting on the styles a message was rendered with
//! - Capturing output where stdout is unavailable
//!
//! ## Architecture
//!
//! The backend stores a `Mutex<Vec<Fragment>>`.  Styled writes are parsed with the same markup
//! rules as [`ConsoleBackend`](crate::ConsoleBackend), so the captured text is exactly what a
//! viewer would see, and each span keeps its resolved style.

use crate::backend::RenderBackend;
use crate::markup::{self, Span};
use anstyle::Style;
use std::io;
use std::sync::{Mutex, PoisonError};

/// One call to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// A [`RenderBackend::write_styled`] call, after markup interpretation.
    Styled(Vec<Span>),
    /// A [`RenderBackend::write_plain`] call.
    Plain(String),
}

impl Fragment {
    /// The text a viewer would see.
    pub fn text(&self) -> String {
        match self {
            Fragment::Styled(spans) => markup::plain_text(spans),
            Fragment::Plain(text) => text.clone(),
        }
    }
}

/// A backend that keeps everything written to it.
///
/// # Example
///
/// ```rust
/// use minlog::{InMemoryBackend, Logger, Verbosity};
/// use std::sync::Arc;
///
/// let backend = Arc::new(InMemoryBackend::new());
/// let logger = Logger::new(Verbosity::Info, backend.clone()).logger_for("db");
///
/// logger.warn("slow query [took 3s]").unwrap();
/// logger.debug("not shown").unwrap();
///
/// assert_eq!(backend.drain_logs(), "[wrn] [db] slow query [took 3s]\n");
/// ```
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    fragments: Mutex<Vec<Fragment>>,
}

impl InMemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self {
            fragments: Mutex::new(Vec::new()),
        }
    }

    /// Returns the visible text of everything written so far, and clears the buffer.
    ///
    /// Each log line ends with `"\n"`, so the result is the console transcript.
    pub fn drain_logs(&self) -> String {
        self.drain_fragments().iter().map(Fragment::text).collect()
    }

    /// Returns every fragment written so far, and clears the buffer.
    pub fn drain_fragments(&self) -> Vec<Fragment> {
        let mut fragments = self.fragments.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *fragments)
    }

    /// Whether nothing has been written since the last drain.
    pub fn is_empty(&self) -> bool {
        self.fragments
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    fn push(&self, fragment: Fragment) {
        self.fragments
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(fragment);
    }
}

impl RenderBackend for InMemoryBackend {
    fn write_styled(&self, text: &str, style: Style) -> io::Result<()> {
        self.push(Fragment::Styled(markup::parse(text, style)));
        Ok(())
    }

    fn write_plain(&self, text: &str) -> io::Result<()> {
        self.push(Fragment::Plain(text.to_string()));
        Ok(())
    }

    fn write_line(&self, fragments: &[(&str, Style)]) -> io::Result<()> {
        let parsed = fragments
            .iter()
            .map(|(text, style)| Fragment::Styled(markup::parse(text, *style)));
        self.fragments
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend(parsed);
        Ok(())
    }
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug: Derived, required by RenderBackend
// - Default: Derived, an empty buffer
// - Clone: NOT implemented - share through Arc so the test and the logger see one buffer
// - PartialEq/Eq/Hash: NOT implemented - comparing mutex contents is not meaningful
// - Send/Sync: Automatically implemented through Mutex
