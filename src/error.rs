// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types shared by the enumerator, header inserter and translator.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RewriteError {
    /// Root directory missing or not a directory. Fatal for a run.
    #[error("directory not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// File content is not valid UTF-8. Only that file is skipped.
    #[error("{} is not valid UTF-8", .path.display())]
    Decode { path: PathBuf },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RewriteError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        RewriteError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Whether the error ends the whole run rather than a single file.
    pub fn is_fatal(&self) -> bool {
        matches!(self, RewriteError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, RewriteError>;

/// Read a whole file as UTF-8 without any lossy fallback.
pub(crate) fn read_utf8(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| RewriteError::io(path, e))?;
    String::from_utf8(bytes).map_err(|_| RewriteError::Decode {
        path: path.to_path_buf(),
    })
}

pub(crate) fn write_text(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|e| RewriteError::io(path, e))
}
