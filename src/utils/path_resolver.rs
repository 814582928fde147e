use anyhow::Result;
use std::path::{Path, PathBuf};

pub const LOG_FOLDER_NAME: &str = "Wizard_Log";

/// Resolve log folder (absolute path), creating it when needed.
///
/// Order: explicit override, an existing `Wizard_Log/` found walking up from the CWD, then
/// `<data_local_dir>/digitization-wizard/Wizard_Log`.
pub fn resolve_log_folder(override_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        std::fs::create_dir_all(dir)
            .map_err(|e| anyhow::anyhow!("Failed to create log folder {:?}: {}", dir, e))?;
        return Ok(dir.to_path_buf());
    }

    if let Ok(cwd) = std::env::current_dir() {
        if let Some(found) = find_existing_log_folder(&cwd) {
            return Ok(found);
        }
    }

    let base = dirs::data_local_dir()
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));
    let log_dir = base.join("digitization-wizard").join(LOG_FOLDER_NAME);
    std::fs::create_dir_all(&log_dir)
        .map_err(|e| anyhow::anyhow!("Failed to create log folder: {}", e))?;
    Ok(log_dir)
}

/// Walk up at most 12 levels from `start` looking for an existing log folder.
pub fn find_existing_log_folder(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    for _ in 0..12 {
        let candidate = dir.join(LOG_FOLDER_NAME);
        if candidate.is_dir() {
            return Some(candidate);
        }
        dir = dir.parent()?.to_path_buf();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_is_created_and_returned() {
        let tmp = tempfile::tempdir().unwrap();
        let wanted = tmp.path().join("nested").join("logs");
        let got = resolve_log_folder(Some(&wanted)).unwrap();
        assert_eq!(got, wanted);
        assert!(wanted.is_dir(), "override folder should exist");
    }

    #[test]
    fn existing_folder_found_from_nested_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let logs = tmp.path().join(LOG_FOLDER_NAME);
        std::fs::create_dir_all(&logs).unwrap();
        let nested = tmp.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_existing_log_folder(&nested), Some(logs));
    }

    #[test]
    fn plain_file_named_like_log_folder_is_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("root");
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join(LOG_FOLDER_NAME), b"not a dir").unwrap();

        let found = find_existing_log_folder(&root);
        assert_ne!(found, Some(root.join(LOG_FOLDER_NAME)));
    }
}
