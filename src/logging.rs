//! Logger setup
//!
//! The TUI owns the terminal, so interactive sessions log to a file under the
//! cache directory. Command-line invocations log to stderr.

use std::fs::{File, OpenOptions};
use std::path::PathBuf;

use env_logger::{Builder, Env, Target};

/// Where log records go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// Append to the log file (interactive mode)
    File,
    /// Standard error (command mode)
    Stderr,
}

/// Log file path (<cache dir>/filmwise/filmwise.log)
pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join("filmwise").join("filmwise.log"))
}

fn open_log_file() -> Option<File> {
    let path = log_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "warn,filmwise=debug";

fn builder(env: Env) -> Builder {
    Builder::from_env(env.default_filter_or(DEFAULT_FILTER))
}

/// Install the global logger. Safe to call more than once.
pub fn init(sink: LogSink) {
    let mut builder = builder(Env::default());

    match sink {
        LogSink::File => match open_log_file() {
            Some(file) => {
                builder.target(Target::Pipe(Box::new(file)));
            }
            // Nowhere to write without corrupting the screen
            None => return,
        },
        LogSink::Stderr => {
            builder.target(Target::Stderr);
        }
    }

    if builder.try_init().is_err() {
        log::debug!("logger already initialised");
    }
}
