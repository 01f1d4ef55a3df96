//! Error types for build execution

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while executing a rule tree
///
/// The first error encountered during a run aborts the traversal and is
/// surfaced to the caller of `execute` unchanged. Already-written files are
/// left in place; no cleanup is attempted.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Failed to create an output directory
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to write an output file
    #[error("failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
