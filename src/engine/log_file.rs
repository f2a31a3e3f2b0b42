//! Saving the text buffer to disk.

use std::fs;
use std::path::Path;

use crate::error::{AppError, Result};

/// Replace the contents of `path` with `text`. Previous contents are discarded.
pub fn save(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| AppError::WriteLog {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrites_instead_of_appending() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");

        save(&path, "a much longer first body\n").unwrap();
        save(&path, "short\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "short\n");
    }

    #[test]
    fn empty_text_creates_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");

        save(&path, "").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn reports_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for writing.
        let err = save(dir.path(), "x").unwrap_err();
        let AppError::WriteLog { path, .. } = &err;
        assert_eq!(path, dir.path());
        assert!(!err.to_string().is_empty());
    }
}
