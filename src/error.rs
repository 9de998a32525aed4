use std::path::PathBuf;

use thiserror::Error;

/// Errors from writing a scaffold to disk.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("File already exists: {}", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Fatal outcomes of a generation run. Each maps to exit status 1.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Please provide a LeetCode problem number.")]
    MissingProblemNumber,

    #[error("Failed to determine the current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    #[error(transparent)]
    Scaffold(#[from] ScaffoldError),
}
