// File: src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// The only way anything in this crate can fail: writing an export.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not create export directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV encoding error: {0}")]
    Csv(#[from] csv::Error),
}

impl ExportError {
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ExportError::Write { path, .. } | ExportError::CreateDir { path, .. } => Some(path.as_path()),
            ExportError::Csv(_) => None,
        }
    }
}
