//! Export behaviour of the session log, end to end through the filesystem.

use gematria_core::{is_prime, score, ExportConfig, ExportError, GematriaEngine, PrimeLabel, SessionLog};
use std::fs;
use std::path::Path;

/// Reads an exported CSV file back as (header, rows).
fn read_csv(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_path(path).unwrap();
    let header = reader.headers().unwrap().iter().map(str::to_string).collect();
    let rows = reader
        .records()
        .map(|row| row.unwrap().iter().map(str::to_string).collect())
        .collect();
    (header, rows)
}

fn scored(log: &mut SessionLog, text: &str) {
    let value = score(text);
    log.append(text, value, is_prime(value));
}

mod plain_text {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn shalom_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");

        let mut log = SessionLog::new();
        scored(&mut log, "שלום");
        log.export_plain_text(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "שלום → 52 (Composite)\n");
    }

    #[test]
    fn export_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");

        let mut log = SessionLog::new();
        scored(&mut log, "שלום");
        scored(&mut log, "אב");

        log.export_plain_text(&path).unwrap();
        let first = fs::read(&path).unwrap();
        log.export_plain_text(&path).unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn export_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        fs::write(&path, "stale contents that are much longer than the new log\n").unwrap();

        let mut log = SessionLog::new();
        scored(&mut log, "א");
        log.export_plain_text(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "א → 1 (Composite)\n");
    }
}

mod csv_export {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn header_and_rows_in_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");

        let mut log = SessionLog::new();
        scored(&mut log, "שלום");
        scored(&mut log, "אב");
        log.export_csv(&path).unwrap();

        let (header, rows) = read_csv(&path);
        assert_eq!(header, vec!["Input", "Gematria Value", "Prime?"]);
        assert_eq!(
            rows,
            vec![
                vec!["שלום".to_string(), "52".to_string(), "Composite".to_string()],
                vec!["אב".to_string(), "3".to_string(), "✅Prime!✅".to_string()],
            ]
        );
        assert!(fs::read_to_string(&path).unwrap().ends_with("✅Prime!✅\r\n"));
    }

    #[test]
    fn rows_read_back_to_the_same_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");

        let inputs = ["שלום, עולם", "he said \"אב\"", "שורה\nשנייה", "plain"];
        let mut log = SessionLog::new();
        for text in inputs {
            scored(&mut log, text);
        }
        log.export_csv(&path).unwrap();

        let (_, rows) = read_csv(&path);
        assert_eq!(rows.len(), inputs.len());
        for (row, record) in rows.iter().zip(log.records()) {
            let label: PrimeLabel = row[2].parse().unwrap();
            assert_eq!(row[0], record.input);
            assert_eq!(row[1].parse::<u64>().unwrap(), record.score);
            assert_eq!(label.is_prime(), record.is_prime);
        }
    }

    #[test]
    fn unwritable_path_reports_error_and_keeps_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("log.csv");

        let mut log = SessionLog::new();
        scored(&mut log, "שלום");
        let err = log.export_csv(&path).unwrap_err();

        assert!(matches!(err, ExportError::Write { .. }));
        assert!(err.to_string().contains("log.csv"));
        assert_eq!(log.len(), 1);
        assert!(!path.exists());
    }
}

mod engine {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn save_logs_writes_sibling_files() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("nested").join("logs");
        let mut engine = GematriaEngine::with_config(ExportConfig::new(&out_dir));

        engine.calculate("שלום");
        engine.calculate("אב");
        let paths = engine.save_logs().unwrap();

        assert_eq!(paths.text.parent(), Some(out_dir.as_path()));
        assert_eq!(paths.text.with_extension("csv"), paths.csv);
        let name = paths.text.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("gematria_log_"), "{name}");

        assert_eq!(
            fs::read_to_string(&paths.text).unwrap(),
            "שלום → 52 (Composite)\nאב → 3 (✅Prime!✅)\n"
        );
        assert_eq!(read_csv(&paths.csv).1.len(), 2);
    }

    #[test]
    fn save_logs_uses_configured_stem() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine =
            GematriaEngine::with_config(ExportConfig::new(dir.path()).with_stem("session"));
        engine.calculate("ת");

        let paths = engine.save_logs().unwrap();
        let name = paths.csv.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("session_") && name.ends_with(".csv"), "{name}");
    }

    #[test]
    fn save_logs_fails_when_output_dir_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, "").unwrap();

        let mut engine = GematriaEngine::with_config(ExportConfig::new(&blocker));
        engine.calculate("שלום");

        let err = engine.save_logs().unwrap_err();
        assert!(matches!(err, ExportError::CreateDir { .. }));
        assert_eq!(engine.log().len(), 1);
    }
}
