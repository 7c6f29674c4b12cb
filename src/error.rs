use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or reporting modifier state.
#[derive(Debug, Error)]
pub enum ModifierError {
    /// The host has no session-wide modifier state query.
    #[error("Modifier state query is not supported on {platform}")]
    Unsupported { platform: &'static str },

    /// Writing the result line failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),

    /// The diagnostic log file could not be created.
    #[error("Failed to create log file '{path}': {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A global tracing subscriber was already installed.
    #[error("Failed to install log subscriber: {0}")]
    LogInit(#[from] tracing_subscriber::util::TryInitError),
}
