use crate::config::ExportConfig;
use crate::core::{prime::is_prime, scorer::score, types::ScoreRecord};
use crate::error::ExportError;
use crate::persistence::ExportPaths;
use crate::session::SessionLog;
use chrono::Local;

// The calculator front-end: score, label, log, save.
// Any shell (terminal, GUI) drives one of these per session.
pub struct GematriaEngine {
    log: SessionLog,
    config: ExportConfig,
}

impl GematriaEngine {
    pub fn new() -> Self {
        Self::with_config(ExportConfig::default())
    }

    pub fn with_config(config: ExportConfig) -> Self {
        Self { log: SessionLog::new(), config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    /// Scores the trimmed input and appends the result to the session log.
    /// Blank input is not a calculation and returns `None`.
    pub fn calculate(&mut self, text: &str) -> Option<ScoreRecord> {
        let text = text.trim();
        if text.is_empty() {
            tracing::debug!("ignoring empty input");
            return None;
        }

        let value = score(text);
        let record = ScoreRecord::new(text, value, is_prime(value));
        tracing::debug!(input = text, score = value, prime = record.is_prime, "calculated");

        self.log.push(record.clone());
        Some(record)
    }

    /// Writes the whole log to a fresh timestamped `.txt`/`.csv` pair in the
    /// configured directory, creating the directory if needed.
    pub fn save_logs(&self) -> Result<ExportPaths, ExportError> {
        let result = self.try_save_logs();
        if let Err(e) = &result {
            tracing::warn!(error = %e, "saving logs failed");
        }
        result
    }

    fn try_save_logs(&self) -> Result<ExportPaths, ExportError> {
        let dir = &self.config.output_dir;
        std::fs::create_dir_all(dir)
            .map_err(|source| ExportError::CreateDir { path: dir.clone(), source })?;

        let paths = ExportPaths::timestamped(dir, &self.config.file_stem, &Local::now());
        self.log.export_plain_text(&paths.text)?;
        self.log.export_csv(&paths.csv)?;
        Ok(paths)
    }
}

impl Default for GematriaEngine {
    fn default() -> Self {
        Self::new()
    }
}
