//! Infrastructure-level errors (wraps application errors)

use std::path::Path;

use thiserror::Error;

use crate::application::ApplicationError;

/// Failures at the process boundary: working directory, config files on disk.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("cannot {action}: {source}")]
    Io {
        action: String,
        #[source]
        source: std::io::Error,
    },
}

impl InfraError {
    pub fn io(action: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            action: action.into(),
            source,
        }
    }

    /// I/O failure on a specific file, e.g. `write /home/x/.orgtree.toml`.
    pub fn at_path(verb: &str, path: &Path, source: std::io::Error) -> Self {
        Self::io(format!("{verb} {}", path.display()), source)
    }
}
