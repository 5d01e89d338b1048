// File: src/persistence.rs
use crate::error::ExportError;
use chrono::{DateTime, TimeZone};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::Builder;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// The sibling `.txt` and `.csv` files written by one save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub text: PathBuf,
    pub csv: PathBuf,
}

impl ExportPaths {
    /// `{dir}/{stem}_2024-05-01_13-45-09.txt` and the matching `.csv`.
    pub fn timestamped<Tz>(dir: &Path, stem: &str, at: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let base = format!("{}_{}", stem, at.format(TIMESTAMP_FORMAT));
        Self {
            text: dir.join(format!("{base}.txt")),
            csv: dir.join(format!("{base}.csv")),
        }
    }
}

/// Replaces `path` with `contents` via a temp file in the same directory,
/// so a failed write never leaves a truncated file behind.
/// The parent directory must already exist. An existing target keeps its
/// permissions, and a symlink is written through rather than replaced.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), ExportError> {
    let wrap = |source: std::io::Error| ExportError::Write { path: path.to_path_buf(), source };

    let existing = fs::metadata(path).ok();
    let target = match existing {
        Some(_) => fs::canonicalize(path).map_err(wrap)?,
        None => path.to_path_buf(),
    };

    let parent_dir = target
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let temp_file = temp_builder().tempfile_in(parent_dir).map_err(wrap)?;
    if let Some(metadata) = &existing {
        temp_file.as_file().set_permissions(metadata.permissions()).map_err(wrap)?;
    }
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        writer.write_all(contents.as_bytes()).map_err(wrap)?;
        writer.flush().map_err(wrap)?;
    }

    temp_file.persist(&target).map_err(|e| wrap(e.error))?;
    Ok(())
}

#[cfg(unix)]
fn temp_builder() -> Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;

    // 0666 less the umask, the same mode a plain create gets.
    let mut builder = Builder::new();
    builder.permissions(fs::Permissions::from_mode(0o666));
    builder
}

#[cfg(not(unix))]
fn temp_builder() -> Builder<'static, 'static> {
    Builder::new()
}
