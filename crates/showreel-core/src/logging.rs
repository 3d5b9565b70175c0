//! Process-wide tracing setup
//!
//! `init` installs the subscriber at most once per process. Later calls,
//! from any entry point, return without touching it.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{Error, Result};

static INIT: OnceLock<std::result::Result<(), String>> = OnceLock::new();

/// Where log lines go
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    Stderr,
    /// Append to a file; used while the terminal UI owns the screen
    File(&'a Path),
}

/// Install the global subscriber. `RUST_LOG` wins over `default_level`.
/// Returns `true` for the call that actually installed it.
pub fn init(default_level: &str, target: LogTarget<'_>) -> Result<bool> {
    let mut installed = false;
    let outcome = INIT.get_or_init(|| {
        installed = true;
        install(default_level, target)
    });

    match outcome {
        Ok(()) => Ok(installed),
        Err(e) => Err(Error::Other(format!("Failed to initialize logging: {}", e))),
    }
}

fn install(default_level: &str, target: LogTarget<'_>) -> std::result::Result<(), String> {
    let directives = filter_directives(std::env::var("RUST_LOG").ok().as_deref(), default_level);
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("info"));

    match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
            .map_err(|e| e.to_string()),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| e.to_string())?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| format!("{}: {}", path.display(), e))?;

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .try_init()
                .map_err(|e| e.to_string())
        }
    }
}

/// Filter string to use: a non-blank `RUST_LOG`, else the configured level
fn filter_directives(rust_log: Option<&str>, default_level: &str) -> String {
    match rust_log.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ if !default_level.trim().is_empty() => default_level.trim().to_string(),
        _ => "info".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_precedence() {
        assert_eq!(filter_directives(Some("showreel_core=trace"), "warn"), "showreel_core=trace");
        assert_eq!(filter_directives(Some("  "), "warn"), "warn");
        assert_eq!(filter_directives(None, "debug"), "debug");
        assert_eq!(filter_directives(None, ""), "info");
    }

    #[test]
    fn test_init_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("showreel.log");

        let first = init("debug", LogTarget::File(&path)).unwrap();
        let second = init("trace", LogTarget::Stderr).unwrap();
        assert!(first);
        assert!(!second);
        assert!(path.exists());
    }
}
