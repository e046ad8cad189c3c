use std::path::PathBuf;

use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop the wrapper before the child runs.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Dispatch -----------------------------------------------------------
    /// The OS refused to create the target process (missing file, not
    /// executable, permission denied, resource exhaustion...).
    #[error("Wrapper failed to spawn: {}\nError: {}", path.display(), source)]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ---- Config -------------------------------------------------------------
    /// Sidecar config present but unreadable or holding an invalid value.
    #[error("Config error: {0}")]
    Config(String),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    /// Helper to create a generic config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Helper to wrap a failed spawn attempt for `path`.
    pub fn spawn<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Error::Spawn {
            path: path.into(),
            source,
        }
    }
}
