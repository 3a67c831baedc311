//! Logging setup
//!
//! Logs go to the configured log file, or to stderr when none is set.
//! `RUST_LOG` overrides the level chosen from the command line.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use bookshelf_core::Config;

/// Initialize the global tracing subscriber
///
/// Failures are reported on stderr and otherwise ignored; the catalog
/// works without logging.
pub fn init(config: &Config, verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false);

    match config.log_file {
        Some(ref log_path) => {
            let log_file = match open_log_file(log_path) {
                Ok(f) => f,
                Err(e) => {
                    eprintln!("Warning: Could not open log file {:?}: {}", log_path, e);
                    return;
                }
            };
            // Ignore error if already initialized
            let _ = builder.with_ansi(false).with_writer(log_file).try_init();
            debug!("Logging to {:?}", log_path);
        }
        None => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
    }
}

/// Open `path` for appending, creating missing parent directories
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn default_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "warn" };
    format!("bookshelf_core={},bookshelf_cli={}", level, level)
}
