//! Backlink records
//!
//! For every bundled file the bundle keeps a sidecar symlink named
//! `<file>.link` whose target is the absolute path the file was moved away
//! from. The record lives next to the file it describes, so a bundle stays
//! self-contained when it is copied or moved around as a directory.
//!
//! The record is the only persisted state besides file content. Losing it
//! turns the bundled file into an orphan that can no longer be restored.

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{CbundleError, Result, with_path};
use crate::paths;

/// Suffix reserved for backlink records
pub const RECORD_SUFFIX: &str = ".link";

/// Check whether `path` names a backlink record
pub fn is_record(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(RECORD_SUFFIX))
}

/// Backlink records of one bundle
#[derive(Debug, Clone)]
pub struct BacklinkStore {
    root: PathBuf,
}

impl BacklinkStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the record belonging to the bundled file at `relative`
    pub fn record_path(&self, relative: &Path) -> PathBuf {
        let mut name = OsString::from(self.root.join(relative));
        name.push(RECORD_SUFFIX);
        PathBuf::from(name)
    }

    /// Remember that `relative` came from `original`. Last write wins.
    pub fn record(&self, relative: &Path, original: &Path) -> Result<()> {
        let record = self.record_path(relative);

        if let Some(parent) = record.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| with_path("Failed to create directory", parent, e))?;
        }

        match fs::symlink_metadata(&record) {
            Ok(metadata) if metadata.is_dir() => {
                return Err(CbundleError::InvalidPath {
                    path: record.display().to_string(),
                    reason: "backlink record location is a directory".to_string(),
                });
            }
            Ok(_) => {
                fs::remove_file(&record)
                    .map_err(|e| with_path("Failed to replace backlink", &record, e))?;
            }
            Err(_) => {}
        }

        paths::symlink_file(original, &record)
            .map_err(|e| with_path("Failed to write backlink", &record, e))?;

        tracing::debug!(
            record = %record.display(),
            original = %original.display(),
            "Recorded backlink"
        );
        Ok(())
    }

    /// Original location of `relative`, `None` if the file is orphaned
    pub fn lookup(&self, relative: &Path) -> Result<Option<PathBuf>> {
        let record = self.record_path(relative);

        match fs::read_link(&record) {
            Ok(original) => Ok(Some(original)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) if e.kind() == ErrorKind::InvalidInput => Err(CbundleError::InvalidPath {
                path: record.display().to_string(),
                reason: "backlink record is not a link".to_string(),
            }),
            Err(e) => Err(with_path("Failed to read backlink", &record, e)),
        }
    }

    /// Drop the record of `relative`. Missing records are fine.
    pub fn forget(&self, relative: &Path) -> Result<()> {
        let record = self.record_path(relative);

        match fs::remove_file(&record) {
            Ok(()) => {
                tracing::debug!(record = %record.display(), "Removed backlink");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(with_path("Failed to remove backlink", &record, e)),
        }
    }
}
