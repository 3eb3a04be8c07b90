//! Logger setup for both binaries.

use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::io;
use std::path::Path;

/// Whether the user asked for logs via `RUST_LOG`.
pub fn requested() -> bool {
    std::env::var_os("RUST_LOG").is_some()
}

/// Log to stderr, `default_level` unless `RUST_LOG` says otherwise.
pub fn init_stderr(default_level: &str) {
    let _ = Builder::from_env(Env::default().default_filter_or(default_level))
        .target(Target::Stderr)
        .try_init();
}

/// Append to `path`. The terminal app owns the screen, so its logs go to a
/// file instead.
pub fn init_file(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
