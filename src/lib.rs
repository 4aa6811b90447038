//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# minlog

minlog is a small leveled console logger for command-line programs.

# The levels

| Name     | Tag     | Usecase                                     |
|----------|---------|---------------------------------------------|
| crit     | `[crt]` | The program can't continue                  |
| error    | `[err]` | An operation failed                         |
| warn     | `[wrn]` | Suspicious condition                        |
| info     | `[inf]` | Normal progress.  The default threshold     |
| trace    | `[trc]` | What `--verbose` shows                      |
| debug    | `[dbg]` | Print-style debugging                       |

A [`Logger`] has a threshold.  A message is written if its level is at least as severe as the
threshold, and dropped otherwise.  There are no other filters.

```rust
use minlog::{InMemoryBackend, Logger, Verbosity};
use std::sync::Arc;

let backend = Arc::new(InMemoryBackend::new());
let mut logger = Logger::new(Verbosity::Info, backend.clone());

logger.warn("disk almost full").unwrap();
logger.debug("not shown").unwrap();
logger.be_debug();
logger.debug("shown").unwrap();

assert_eq!(backend.drain_logs(), "[wrn] disk almost full\n[dbg] shown\n");
```

# Output

Each line is the level tag, then the source tag if there is one, then the message.  Tags are
styled with [`anstyle`] and rendered by a [`RenderBackend`]:

* [`ConsoleBackend`] writes to stdout, stderr or any writer, with ANSI colors when the output is
  a terminal.  On wasm it writes to the browser console.
* [`InMemoryBackend`] keeps the output for tests.

Backends understand inline markup such as `[bold]` or `[red]...[/]` (see [`markup`]).  The
logger escapes every tag and message with [`RenderBackend::escape`] before writing, so brackets
in a message always appear literally.

# Sources

Subsystems log under a name.  [`Logger::logger_for`] derives a named logger that starts at the
parent's threshold and is independent afterwards:

```rust
# use minlog::{InMemoryBackend, Logger, Verbosity};
# use std::sync::Arc;
# let backend = Arc::new(InMemoryBackend::new());
let root = Logger::new(Verbosity::Info, backend.clone());
let db = root.logger_for("db");
db.info("connected").unwrap();
assert_eq!(backend.drain_logs(), "[inf] [db] connected\n");
```

For types that own a logger, a [`Binder`] (or the `#[logged]` attribute) picks the name and
hands each new instance its logger.

# Scopes

[`Logger::scoped_verbosity`] and [`Logger::scoped_subsource`] change a logger until the returned
guard is dropped.  See the [`scope`] module.

# The default logger

A process-wide default logger lives in [`global_logger`].  Configure it once at startup and
derive from it everywhere else.

# Errors

Every call that writes returns [`Result`], carrying the backend's I/O failure.  A message
dropped by the threshold is not an error.
*/

mod backend;
pub mod binder;
mod console_backend;
mod error;
pub mod global_logger;
mod inmemory_backend;
mod level;
mod log_record;
mod logger;
mod macros;
pub mod markup;
pub mod scope;
mod spinlock;

pub use backend::RenderBackend;
pub use binder::{Binder, Logged, SourcePolicy, bind};
pub use console_backend::{ColorChoice, ConsoleBackend};
pub use error::{Error, Result};
pub use inmemory_backend::{Fragment, InMemoryBackend};
pub use level::{ParseVerbosityError, Verbosity};
pub use log_record::{FormattedMessage, SOURCE_STYLE};
pub use logger::Logger;
pub use scope::{SubsourceGuard, VerbosityGuard};

pub use anstyle;
pub use minlog_proc::logged;

extern crate self as minlog;
