//! Writing generated DDL to its destination.
//!
//! File output is appended in a single write and synced before returning. If
//! the write or the sync fails, the file is cut back to the length it had
//! before the append, so a failed run never leaves half a table block behind.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

/// Where generated DDL goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Append to a file, creating it if needed.
    File(PathBuf),
    /// Write to standard output.
    Stdout,
}

impl OutputTarget {
    /// `-` selects standard output, anything else is a file path.
    pub fn parse(value: &str) -> Self {
        if value == "-" {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(PathBuf::from(value))
        }
    }
}

impl std::fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputTarget::File(path) => write!(f, "{}", path.display()),
            OutputTarget::Stdout => write!(f, "<stdout>"),
        }
    }
}

/// Errors raised while writing output.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("failed to open output '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to sync output '{}': {source}", .path.display())]
    Sync {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Write `text` to `target`.
pub fn write_output(target: &OutputTarget, text: &str) -> Result<(), OutputError> {
    match target {
        OutputTarget::File(path) => append_durably(path, text),
        OutputTarget::Stdout => {
            let stdout = PathBuf::from("<stdout>");
            let mut handle = io::stdout().lock();
            handle
                .write_all(text.as_bytes())
                .and_then(|_| handle.flush())
                .map_err(|source| OutputError::Write {
                    path: stdout,
                    source,
                })
        }
    }
}

/// Append `text` to the file at `path` and sync it to disk.
///
/// On a failed write or sync the file is truncated back to its previous
/// length before the error is returned.
pub fn append_durably(path: &Path, text: &str) -> Result<(), OutputError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| OutputError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let original_len = file
        .metadata()
        .map_err(|source| OutputError::Open {
            path: path.to_path_buf(),
            source,
        })?
        .len();

    let result = file
        .write_all(text.as_bytes())
        .map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        })
        .and_then(|_| {
            file.sync_all().map_err(|source| OutputError::Sync {
                path: path.to_path_buf(),
                source,
            })
        });

    if let Err(err) = result {
        warn!(path = %path.display(), original_len, "append failed, rolling back");
        if let Err(rollback) = file.set_len(original_len).and_then(|_| file.sync_all()) {
            warn!(path = %path.display(), error = %rollback, "rollback failed");
        }
        return Err(err);
    }

    info!(path = %path.display(), bytes = text.len(), "output appended");
    Ok(())
}
