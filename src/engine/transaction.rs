//! Rollback guard for multi-step bundle operations
//!
//! ```ignore
//! let mut transaction = Transaction::new();
//! transaction.create_dir_all(parent)?;
//! transaction.track_file_created(&bundled);
//!
//! // On success:
//! transaction.commit();
//!
//! // On error (automatic via Drop if not committed):
//! // everything tracked is removed again
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, with_path};

/// Undo log of files and directories created by one operation
#[derive(Debug, Default)]
pub struct Transaction {
    /// Files created during this transaction
    created_files: Vec<PathBuf>,

    /// Directories created during this transaction, outermost first
    created_dirs: Vec<PathBuf>,

    /// Whether the transaction has been committed
    committed: bool,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create `dir` and any missing parents, remembering each one created
    pub fn create_dir_all(&mut self, dir: &Path) -> Result<()> {
        let mut missing: Vec<PathBuf> = dir
            .ancestors()
            .take_while(|ancestor| fs::symlink_metadata(ancestor).is_err())
            .map(Path::to_path_buf)
            .collect();
        missing.reverse();

        for path in missing {
            fs::create_dir(&path).map_err(|e| with_path("Failed to create directory", &path, e))?;
            self.created_dirs.push(path);
        }

        Ok(())
    }

    /// Track a file that is about to be created
    pub fn track_file_created(&mut self, path: impl Into<PathBuf>) {
        self.created_files.push(path.into());
    }

    /// Commit the transaction (prevent rollback)
    pub fn commit(mut self) {
        self.committed = true;
    }

    fn rollback(&mut self) {
        for path in self.created_files.iter().rev() {
            if fs::symlink_metadata(path).is_ok() {
                if let Err(e) = fs::remove_file(path) {
                    tracing::warn!(path = %path.display(), error = %e, "Rollback could not remove file");
                }
            }
        }

        // Innermost first; a directory that gained foreign content is kept
        for path in self.created_dirs.iter().rev() {
            if fs::remove_dir(path).is_err() {
                tracing::warn!(path = %path.display(), "Rollback kept non-empty directory");
            }
        }

        tracing::debug!(
            files = self.created_files.len(),
            dirs = self.created_dirs.len(),
            "Rolled back"
        );
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if !self.committed {
            self.rollback();
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_drop_rolls_back() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("a/b");
        let file = dir.join("file");

        {
            let mut transaction = Transaction::new();
            transaction.create_dir_all(&dir).unwrap();
            transaction.track_file_created(&file);
            fs::write(&file, "x").unwrap();
        }

        assert!(!file.exists());
        assert!(!temp.path().join("a").exists());
        assert!(temp.path().exists());
    }

    #[test]
    fn test_commit_keeps_everything() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("a");
        let file = dir.join("file");

        let mut transaction = Transaction::new();
        transaction.create_dir_all(&dir).unwrap();
        transaction.track_file_created(&file);
        fs::write(&file, "x").unwrap();
        transaction.commit();

        assert!(file.exists());
    }

    #[test]
    fn test_rollback_keeps_existing_dirs() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("existing")).unwrap();

        {
            let mut transaction = Transaction::new();
            transaction
                .create_dir_all(&temp.path().join("existing/new"))
                .unwrap();
        }

        assert!(temp.path().join("existing").is_dir());
        assert!(!temp.path().join("existing/new").exists());
    }
}
