//! Control panel error types.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while configuring or running the panel.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    /// The configuration file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    ConfigRead {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid JSON for [`crate::config::PanelConfig`].
    #[error("invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Reading the operator's input or writing the menu failed.
    #[error("console I/O error: {0}")]
    Io(#[from] io::Error),

    /// The operator entered something that is not a menu option.
    #[error("unknown menu choice: {0:?}")]
    UnknownChoice(String),
}
