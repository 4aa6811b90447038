// SPDX-License-Identifier: MIT OR Apache-2.0

//! The formatted pieces of one log line.
//!
//! [`Logger::format_message`](crate::Logger::format_message) produces a [`FormattedMessage`], which
//! holds three independently styled pieces, each already escaped for the backend:
//!
//! 1. the level tag, e.g. `[inf]`
//! 2. the optional source tag, e.g. `[db]` or `[db:migrations]`
//! 3. the message body
//!
//! [`FormattedMessage::write_to`] lays them out on one line.

use crate::Verbosity;
use crate::backend::RenderBackend;
use anstyle::{AnsiColor, Color, Style};
use std::borrow::Cow;
use std::io;

/// The style of the source tag.
pub const SOURCE_STYLE: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlack)));

/// A log line, split into its escaped pieces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormattedMessage<'a> {
    level: Verbosity,
    /// Escaped level tag.
    pub tag: String,
    /// Escaped source tag, if the logger has a source or subsource.
    pub source: Option<String>,
    /// Escaped body.
    pub body: Cow<'a, str>,
}

impl<'a> FormattedMessage<'a> {
    pub(crate) fn new(
        backend: &dyn RenderBackend,
        level: Verbosity,
        source: Option<&str>,
        subsource: Option<&str>,
        message: &'a str,
    ) -> Self {
        let tag = backend.escape(&format!("[{}]", level.code())).into_owned();
        let source = source.filter(|s| !s.is_empty());
        let subsource = subsource.filter(|s| !s.is_empty());
        let label = match (source, subsource) {
            (Some(source), Some(subsource)) => Some(format!("[{source}:{subsource}]")),
            (Some(only), None) | (None, Some(only)) => Some(format!("[{only}]")),
            (None, None) => None,
        };
        let source = label.map(|l| backend.escape(&l).into_owned());
        FormattedMessage {
            level,
            tag,
            source,
            body: backend.escape(message),
        }
    }

    /// The level this message was formatted for.
    pub fn level(&self) -> Verbosity {
        self.level
    }

    /// Writes the line: level tag, a space, the source tag and a space if present, the body,
    /// and a newline.
    pub fn write_to(&self, backend: &dyn RenderBackend) -> io::Result<()> {
        let mut fragments = Vec::with_capacity(6);
        fragments.push((self.tag.as_str(), self.level.style()));
        fragments.push((" ", Style::new()));
        if let Some(source) = &self.source {
            fragments.push((source.as_str(), SOURCE_STYLE));
            fragments.push((" ", Style::new()));
        }
        fragments.push((&*self.body, Style::new()));
        fragments.push(("\n", Style::new()));
        backend.write_line(&fragments)
    }
}

/*
Boilerplate notes for FormattedMessage:

- Debug/Clone/PartialEq/Eq/Hash: derived, it is plain data.
- Display: NOT implemented.  The pieces are escaped for a backend, so displaying them
  would show the escapes rather than what a viewer sees.
- Default: NOT implemented, a message always has a level.
*/
