//! Error taxonomy for service worker injection.
//!
//! Every fallible operation in the crate returns [`InjectResult`]. The first
//! failure aborts the run; nothing is retried or rolled back.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate.
pub type InjectResult<T> = Result<T, InjectError>;

/// All errors that can occur while injecting a service worker.
#[derive(Error, Debug)]
pub enum InjectError {
    /// The base path does not start with `/`.
    #[error("base path must start with /, got {0:?}")]
    InvalidBasePath(String),

    /// A configuration file was named but could not be loaded.
    #[error("failed to load configuration {}: {reason}", path.display())]
    Config {
        /// Configuration file that was requested.
        path: PathBuf,
        /// Why loading failed.
        reason: String,
    },

    /// The entry HTML document could not be read.
    #[error("failed to read {}", path.display())]
    ReadIndex {
        /// Path of the entry document.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The entry HTML document has no `</head>` tag.
    #[error("could not find </head> tag in {}", path.display())]
    MalformedDocument {
        /// Document that was inspected.
        path: PathBuf,
    },

    /// A directory under the site root could not be listed.
    #[error("failed to enumerate {}: {source}", path.display())]
    Enumerate {
        /// Directory being listed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A generated artifact could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Artifact being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl InjectError {
    /// Create an enumeration error for the directory that failed.
    pub fn enumerate(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Enumerate {
            path: path.into(),
            source,
        }
    }

    /// Create a write error for the artifact that failed.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
