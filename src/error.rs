// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error type for minlog.
//!
//! Suppressed log calls are not errors.  The only failures are a backend that can't write,
//! installing the default logger twice, and parsing a verbosity that doesn't exist.

use crate::level::ParseVerbosityError;
use std::io;

/// Errors returned by minlog.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The render backend failed to write.
    #[error("failed to write log output: {0}")]
    Write(#[from] io::Error),

    /// [`install_default_logger`](crate::global_logger::install_default_logger) was called
    /// after the default logger already existed.
    #[error("the default logger is already installed")]
    AlreadyInstalled,

    /// A verbosity could not be parsed.
    #[error(transparent)]
    ParseVerbosity(#[from] ParseVerbosityError),
}

/// Result alias used throughout minlog.
pub type Result<T, E = Error> = std::result::Result<T, E>;
