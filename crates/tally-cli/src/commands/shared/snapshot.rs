use std::io::Read;
use std::path::Path;

use anyhow::Context;
use tally_core::board::BoardSnapshot;
use tally_core::cleaned::CleanedBoard;
use tally_pipeline::{CleanOptions, clean_board};

/// Read snapshot JSON from a file, or from stdin when the path is `-`.
pub fn read_snapshot_text(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read snapshot from stdin")?;
        return Ok(text);
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot file {}", path.display()))
}

pub fn load_snapshot(path: &Path) -> anyhow::Result<BoardSnapshot> {
    let text = read_snapshot_text(path)?;
    BoardSnapshot::from_json(&text)
        .with_context(|| format!("invalid board snapshot in {}", path.display()))
}

/// Load and clean a snapshot in one step.
pub fn load_cleaned(path: &Path, options: &CleanOptions) -> anyhow::Result<CleanedBoard> {
    let snapshot = load_snapshot(path)?;
    Ok(clean_board(&snapshot, options))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use tally_pipeline::CleanOptions;

    use super::{load_cleaned, load_snapshot};

    #[test]
    fn loads_snapshot_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{"boardName": "Ops", "columns": [{{"id": "status", "title": "Status"}}],
                "records": [{{"id": "1", "displayName": "Pump", "fields": [{{"columnId": "status", "text": "Done"}}]}}]}}"#
        )
        .expect("write snapshot");

        let board = load_cleaned(file.path(), &CleanOptions::default()).expect("snapshot loads");
        assert_eq!(board.board_name, "Ops");
        assert_eq!(board.records.len(), 1);
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.json");
        let err = load_snapshot(&path).expect_err("file is missing");
        assert!(format!("{err:#}").contains("absent.json"));
    }

    #[test]
    fn malformed_snapshot_reports_field() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"boardName": "Ops", "columns": []}}"#).expect("write snapshot");
        let err = load_snapshot(file.path()).expect_err("records missing");
        assert!(format!("{err:#}").contains("records"));
    }
}
