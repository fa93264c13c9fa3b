//! Error types for dataset loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading a resume dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The dataset file does not exist.
    #[error("File {} not found.", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be opened or read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The contents are not valid UTF-8 CSV.
    #[error("Failed to parse {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl LoadError {
    pub fn path(&self) -> &PathBuf {
        match self {
            LoadError::NotFound(path) => path,
            LoadError::Io { path, .. } => path,
            LoadError::Csv { path, .. } => path,
        }
    }
}
