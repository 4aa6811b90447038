// SPDX-License-Identifier: MIT OR Apache-2.0

//! Verbosity levels.
//!
//! A [`Verbosity`] is used both as the level of an individual message and as the
//! threshold a [`Logger`](crate::Logger) is configured with.  Lower ranks are more severe.

use anstyle::{AnsiColor, Color, Style};
use std::fmt::Display;
use std::str::FromStr;

/// Logging verbosity, from most severe to most detailed.
///
/// The ordering follows the rank, so `Verbosity::Critical < Verbosity::Debug`.
///
/// ```
/// use minlog::Verbosity;
/// assert!(Verbosity::Warn < Verbosity::Info);
/// assert_eq!(Verbosity::Trace.rank(), 4);
/// assert_eq!(Verbosity::Debug.code(), "dbg");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Verbosity {
    /// Always shown.  Used by [`Logger::force_log`](crate::Logger::force_log).
    Critical = 0,
    /// A runtime error.
    Error = 1,
    /// Suspicious condition.
    Warn = 2,
    /// Normal progress output.
    #[default]
    Info = 3,
    /// Detailed progress output, shown in verbose mode.
    Trace = 4,
    /// Print-style debugging, shown in debug mode only.
    Debug = 5,
}

impl Verbosity {
    /// Every level, in rank order.
    pub const ALL: [Verbosity; 6] = [
        Verbosity::Critical,
        Verbosity::Error,
        Verbosity::Warn,
        Verbosity::Info,
        Verbosity::Trace,
        Verbosity::Debug,
    ];

    /// The integer rank.  Lower is more severe.
    #[inline]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// The three-letter code written in front of each message.
    pub const fn code(self) -> &'static str {
        match self {
            Verbosity::Critical => "crt",
            Verbosity::Error => "err",
            Verbosity::Warn => "wrn",
            Verbosity::Info => "inf",
            Verbosity::Trace => "trc",
            Verbosity::Debug => "dbg",
        }
    }

    /// The style the level tag is rendered with.
    pub const fn style(self) -> Style {
        let fg = match self {
            Verbosity::Critical => AnsiColor::BrightRed,
            Verbosity::Error => AnsiColor::Red,
            Verbosity::Warn => AnsiColor::Yellow,
            Verbosity::Info => AnsiColor::Green,
            Verbosity::Trace => AnsiColor::White,
            Verbosity::Debug => AnsiColor::BrightBlack,
        };
        Style::new()
            .fg_color(Some(Color::Ansi(fg)))
            .bg_color(Some(Color::Ansi(AnsiColor::Black)))
    }

    /// The lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Verbosity::Critical => "critical",
            Verbosity::Error => "error",
            Verbosity::Warn => "warn",
            Verbosity::Info => "info",
            Verbosity::Trace => "trace",
            Verbosity::Debug => "debug",
        }
    }
}

impl Display for Verbosity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string or rank does not name a [`Verbosity`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown verbosity `{input}`; expected one of critical, error, warn, info, trace, debug or 0-5")]
pub struct ParseVerbosityError {
    input: String,
}

impl ParseVerbosityError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl TryFrom<u8> for Verbosity {
    type Error = ParseVerbosityError;

    fn try_from(rank: u8) -> Result<Self, ParseVerbosityError> {
        Verbosity::ALL
            .get(usize::from(rank))
            .copied()
            .ok_or_else(|| ParseVerbosityError {
                input: rank.to_string(),
            })
    }
}

impl FromStr for Verbosity {
    type Err = ParseVerbosityError;

    /// Accepts the name in any case, the three-letter code, a couple of common
    /// aliases, or the rank as a single digit.
    ///
    /// ```
    /// use minlog::Verbosity;
    /// assert_eq!("DEBUG".parse::<Verbosity>().unwrap(), Verbosity::Debug);
    /// assert_eq!("wrn".parse::<Verbosity>().unwrap(), Verbosity::Warn);
    /// assert_eq!("1".parse::<Verbosity>().unwrap(), Verbosity::Error);
    /// assert!("loud".parse::<Verbosity>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(rank) = trimmed.parse::<u8>() {
            return Verbosity::try_from(rank).map_err(|_| ParseVerbosityError {
                input: s.to_string(),
            });
        }
        let lower = trimmed.to_ascii_lowercase();
        Verbosity::ALL
            .into_iter()
            .find(|v| v.name() == lower || v.code() == lower)
            .or(match lower.as_str() {
                "crit" => Some(Verbosity::Critical),
                "warning" => Some(Verbosity::Warn),
                _ => None,
            })
            .ok_or_else(|| ParseVerbosityError {
                input: s.to_string(),
            })
    }
}

/*
Boilerplate notes.

Copy/Clone/Eq/Ord/Hash all make sense for a fieldless enum.  Ord is by rank.
Default is Info, which is what a fresh Logger starts at.
Display writes the name so that `v.to_string().parse()` round-trips.
No From<u8>, since not every u8 is a level; TryFrom instead.
*/
