//! Site build errors.

use std::io;
use std::path::{Path, PathBuf};

use quill_renderer::FrontmatterError;

/// Error returned by the page and site builders.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// A required directory or file does not exist.
    #[error("{what} not found: {}", .path.display())]
    MissingResource {
        /// Human-readable resource name (e.g. "Pages directory").
        what: &'static str,
        /// Path that was looked up.
        path: PathBuf,
    },

    /// A content file has malformed front-matter.
    #[error("Failed to parse {}: {source}", .path.display())]
    Content {
        /// Offending content file.
        path: PathBuf,
        /// Underlying parse error.
        source: FrontmatterError,
    },

    /// Reading or writing a file failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

impl BuildError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Map "not found" to [`BuildError::MissingResource`], anything else to
    /// [`BuildError::Io`].
    pub(crate) fn required(what: &'static str, path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::MissingResource {
                what,
                path: path.to_path_buf(),
            }
        } else {
            Self::io(path, source)
        }
    }
}
