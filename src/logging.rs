//! Opt-in diagnostic log for a single run.
//!
//! Nothing is logged unless `MODIFIER_KEYS_LOG` names a path prefix.
//! Stdout carries only the result line, so the log always goes to a file.

use std::ffi::OsString;
use std::fs::File;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::ModifierError;

/// Env var holding the log file path prefix.
pub const LOG_ENV_VAR: &str = "MODIFIER_KEYS_LOG";

/// Filter used when `RUST_LOG` is unset: includes the raw bitmask event.
pub const DEFAULT_FILTER: &str = "modifier_keys=debug";

/// Log file for one run: `{prefix}.{timestamp}.{pid}`.
///
/// The suffix keeps concurrent invocations from sharing a file.
pub fn log_file_path(prefix: impl Into<OsString>, timestamp: u64, pid: u32) -> PathBuf {
    let mut path = prefix.into();
    path.push(format!(".{}.{}", timestamp, pid));
    PathBuf::from(path)
}

fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the file logger if `MODIFIER_KEYS_LOG` is set.
///
/// Returns `Ok(())` without doing anything when the variable is absent.
pub fn init_tracing() -> Result<(), ModifierError> {
    let Some(prefix) = std::env::var_os(LOG_ENV_VAR) else {
        return Ok(());
    };

    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = log_file_path(prefix, timestamp, std::process::id());

    let file = File::create(&path).map_err(|source| ModifierError::LogFile {
        path: path.clone(),
        source,
    })?;

    tracing_subscriber::registry()
        .with(filter_from_env())
        .with(fmt::layer().with_writer(file).with_ansi(false))
        .try_init()?;

    tracing::debug!(path = %path.display(), "logging to file");
    Ok(())
}
