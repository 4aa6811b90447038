// SPDX-License-Identifier: MIT OR Apache-2.0

//! The terminal backend.

use crate::backend::RenderBackend;
use crate::markup;
use anstyle::Style;
use std::fmt::Debug;
use std::io::{self, IsTerminal, Write};
use std::sync::{Mutex, PoisonError};

/// Whether [`ConsoleBackend`] emits ANSI escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorChoice {
    /// Color when the target is a terminal and `NO_COLOR` is not set.
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color.  Markup is still interpreted, and removed from the output.
    Never,
}

enum Target {
    Stdout,
    Stderr,
    Writer(Mutex<Box<dyn Write + Send>>),
}

impl Debug for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Stdout => f.write_str("Stdout"),
            Target::Stderr => f.write_str("Stderr"),
            Target::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

/**
A backend that writes to stdout, stderr, or any [`Write`].

Styles are rendered with ANSI escapes when color is enabled; otherwise only the text is written.

```
use minlog::{ColorChoice, ConsoleBackend, Logger, Verbosity};
use std::sync::Arc;

let backend = ConsoleBackend::stderr().color(ColorChoice::Never);
let logger = Logger::new(Verbosity::Info, Arc::new(backend));
logger.info("hello").unwrap();
```
*/
#[derive(Debug)]
pub struct ConsoleBackend {
    target: Target,
    color: bool,
    #[cfg(target_arch = "wasm32")]
    line: Mutex<String>,
}

impl ConsoleBackend {
    fn with_target(target: Target) -> Self {
        let mut backend = ConsoleBackend {
            target,
            color: false,
            #[cfg(target_arch = "wasm32")]
            line: Mutex::new(String::new()),
        };
        backend.color = backend.resolve(ColorChoice::Auto);
        backend
    }

    /// Writes to stdout.
    pub fn stdout() -> Self {
        Self::with_target(Target::Stdout)
    }

    /// Writes to stderr.
    pub fn stderr() -> Self {
        Self::with_target(Target::Stderr)
    }

    /// Writes to `writer`.  [`ColorChoice::Auto`] never colors a writer.
    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self::with_target(Target::Writer(Mutex::new(Box::new(writer))))
    }

    /// Sets the color policy.
    pub fn color(mut self, choice: ColorChoice) -> Self {
        self.color = self.resolve(choice);
        self
    }

    /// Whether ANSI styling is currently emitted.
    pub fn is_colored(&self) -> bool {
        self.color
    }

    fn resolve(&self, choice: ColorChoice) -> bool {
        match choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
                let terminal = match self.target {
                    Target::Stdout => io::stdout().is_terminal(),
                    Target::Stderr => io::stderr().is_terminal(),
                    Target::Writer(_) => false,
                };
                terminal && !no_color && cfg!(not(target_arch = "wasm32"))
            }
        }
    }

    fn render_into(&self, rendered: &mut String, text: &str, style: Style) {
        for span in markup::parse(text, style) {
            if self.color && !span.style.is_plain() {
                use std::fmt::Write as _;
                //writing to a String can't fail
                let _ = write!(
                    rendered,
                    "{}{}{}",
                    span.style.render(),
                    span.text,
                    span.style.render_reset()
                );
            } else {
                rendered.push_str(&span.text);
            }
        }
    }

    fn write_str(&self, text: &str) -> io::Result<()> {
        match &self.target {
            #[cfg(not(target_arch = "wasm32"))]
            Target::Stdout => io::stdout().lock().write_all(text.as_bytes()),
            #[cfg(not(target_arch = "wasm32"))]
            Target::Stderr => io::stderr().lock().write_all(text.as_bytes()),
            #[cfg(target_arch = "wasm32")]
            Target::Stdout | Target::Stderr => {
                self.push_console_line(text);
                Ok(())
            }
            Target::Writer(writer) => writer
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .write_all(text.as_bytes()),
        }
    }

    //the browser console is line-oriented, so hold fragments until the newline arrives
    #[cfg(target_arch = "wasm32")]
    fn push_console_line(&self, text: &str) {
        let mut line = self.line.lock().unwrap_or_else(PoisonError::into_inner);
        line.push_str(text);
        while let Some(end) = line.find('\n') {
            let complete: String = line.drain(..=end).collect();
            let msg = complete.trim_end_matches('\n');
            match self.target {
                Target::Stderr => web_sys::console::error_1(&msg.into()),
                _ => web_sys::console::log_1(&msg.into()),
            }
        }
    }
}

impl Default for ConsoleBackend {
    fn default() -> Self {
        Self::stdout()
    }
}

impl RenderBackend for ConsoleBackend {
    fn write_styled(&self, text: &str, style: Style) -> io::Result<()> {
        let mut rendered = String::with_capacity(text.len());
        self.render_into(&mut rendered, text, style);
        self.write_str(&rendered)
    }

    //the whole line goes out in one write
    fn write_line(&self, fragments: &[(&str, Style)]) -> io::Result<()> {
        let mut rendered = String::new();
        for (text, style) in fragments {
            self.render_into(&mut rendered, text, *style);
        }
        self.write_str(&rendered)
    }

    fn write_plain(&self, text: &str) -> io::Result<()> {
        self.write_str(text)
    }

    fn flush(&self) -> io::Result<()> {
        match &self.target {
            Target::Stdout => io::stdout().flush(),
            Target::Stderr => io::stderr().flush(),
            Target::Writer(writer) => writer
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .flush(),
        }
    }
}

/*
Boilerplate notes.

Clone: no, a writer target can't be cloned, and stdout/stderr backends are cheap to make again.
PartialEq/Hash: there's no meaningful equality between output streams.
Default: stdout with automatic color, which is what the default logger uses.
*/
