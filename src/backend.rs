// SPDX-License-Identifier: MIT OR Apache-2.0
use anstyle::Style;
use std::borrow::Cow;
use std::fmt::Debug;
use std::io;

/**
Where a [`Logger`](crate::Logger) sends its output.

A backend receives already-escaped text fragments in the order the logger produces them and
writes them to some process-visible stream.  The logger hands over each line in one
[`Self::write_line`] call, fragments first and a final `"\n"` fragment last.
*/
pub trait RenderBackend: Debug + Send + Sync {
    /**
    Writes `text`, interpreting any markup it contains, on top of `style`.

    Text reaching this method has been passed through [`Self::escape`] wherever it came from
    outside the logger.
    */
    fn write_styled(&self, text: &str, style: Style) -> io::Result<()>;

    /**
    Writes `text` exactly as given, with no styling and no markup interpretation.
    */
    fn write_plain(&self, text: &str) -> io::Result<()>;

    /**
    Writes one complete line, given as styled fragments.

    Loggers shared between threads call this concurrently, so a backend writing to a shared
    stream should override it to emit the whole line at once.  The default calls
    [`Self::write_styled`] for each fragment.
    */
    fn write_line(&self, fragments: &[(&str, Style)]) -> io::Result<()> {
        for (text, style) in fragments {
            self.write_styled(text, *style)?;
        }
        Ok(())
    }

    /**
    Escapes characters that have special meaning to [`Self::write_styled`].

    The default escapes the opening bracket of [`crate::markup`].
    */
    fn escape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        crate::markup::escape(text)
    }

    /**
    Flushes any buffered output.
    */
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

/*
Boilerplate notes.

# RenderBackend

Send + Sync is required so that a Logger, which holds an Arc to its backend, can be shared with
threads that only read from it.
Clone doesn't make sense on the trait; backends are shared through Arc instead.
*/
