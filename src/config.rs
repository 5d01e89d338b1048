// File: src/config.rs
use std::path::PathBuf;

pub const DEFAULT_FILE_STEM: &str = "gematria_log";

/// Where `save_logs` puts its files and what it calls them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    pub file_stem: String,
}

impl ExportConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into(), ..Self::default() }
    }

    pub fn with_stem(mut self, stem: impl Into<String>) -> Self {
        self.file_stem = stem.into();
        self
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            file_stem: DEFAULT_FILE_STEM.to_string(),
        }
    }
}
