// Custom dictionary selection
//
// Only file metadata is read. The dictionary contents are never opened or parsed here.

use crate::models::wizard_data::FileHandle;

use anyhow::{Context, Result};
use log::info;
use std::path::Path;

pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["csv", "json", "txt"];

pub fn select_custom_dictionary(path: &Path) -> Result<FileHandle> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    if !ACCEPTED_EXTENSIONS.contains(&ext.as_str()) {
        anyhow::bail!("Unsupported file type. Use .csv, .json or .txt");
    }

    let meta = std::fs::metadata(path).with_context(|| format!("File not found: {:?}", path))?;
    if !meta.is_file() {
        anyhow::bail!("Not a file: {:?}", path);
    }

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("Invalid file name: {:?}", path))?;

    info!(
        "[PHASE: discover] [STEP: custom_dictionary] Selected {} ({} bytes)",
        name,
        meta.len()
    );

    Ok(FileHandle {
        name,
        size_bytes: meta.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_csv_and_reports_size() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("terms.CSV");
        std::fs::write(&path, vec![b'a'; 2048]).unwrap();

        let handle = select_custom_dictionary(&path).unwrap();
        assert_eq!(handle.name, "terms.CSV");
        assert_eq!(handle.size_bytes, 2048);
        assert_eq!(handle.size_kb(), "2.00 KB");
    }

    #[test]
    fn rejects_other_extensions() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("terms.xlsx");
        std::fs::write(&path, b"x").unwrap();

        let err = select_custom_dictionary(&path).unwrap_err();
        assert!(
            err.to_string().contains("Unsupported"),
            "unexpected error: {}",
            err
        );
    }

    #[test]
    fn rejects_missing_file_and_directories() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(select_custom_dictionary(&tmp.path().join("missing.txt")).is_err());

        let dir = tmp.path().join("folder.json");
        std::fs::create_dir_all(&dir).unwrap();
        assert!(select_custom_dictionary(&dir).is_err());
    }
}
