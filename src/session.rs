// File: src/session.rs
use crate::core::types::ScoreRecord;
use crate::error::ExportError;
use crate::persistence::write_atomic;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::path::Path;

pub const CSV_HEADER: [&str; 3] = ["Input", "Gematria Value", "Prime?"];

/// Ordered, append-only record of every calculation in one run.
/// Single owner; wrap it in a lock before sharing across threads.
#[derive(Debug, Clone, Default)]
pub struct SessionLog {
    records: Vec<ScoreRecord>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, input: impl Into<String>, score: u64, is_prime: bool) {
        self.records.push(ScoreRecord::new(input, score, is_prime));
    }

    pub fn push(&mut self, record: ScoreRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// One `input → score (label)` line per record, each newline-terminated.
    pub fn render_plain_text(&self) -> String {
        let mut out = String::new();
        for record in &self.records {
            out.push_str(&record.log_line());
            out.push('\n');
        }
        out
    }

    /// Header plus one row per record, CRLF-terminated, quoting only the
    /// fields that need it.
    pub fn render_csv(&self) -> Result<String, ExportError> {
        let mut buffer = Vec::new();
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::CRLF)
            .quote_style(QuoteStyle::Necessary)
            .from_writer(&mut buffer);

        writer.write_record(CSV_HEADER)?;
        for record in &self.records {
            let score = record.score.to_string();
            writer.write_record([record.input.as_str(), score.as_str(), record.label().as_str()])?;
        }

        writer.flush().map_err(csv::Error::from)?;
        drop(writer);

        // Every field came in as UTF-8, so the buffer is UTF-8 too.
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    pub fn export_plain_text(&self, path: &Path) -> Result<(), ExportError> {
        write_atomic(path, &self.render_plain_text())?;
        tracing::info!(path = %path.display(), records = self.len(), "exported plain-text log");
        Ok(())
    }

    pub fn export_csv(&self, path: &Path) -> Result<(), ExportError> {
        write_atomic(path, &self.render_csv()?)?;
        tracing::info!(path = %path.display(), records = self.len(), "exported csv log");
        Ok(())
    }
}
