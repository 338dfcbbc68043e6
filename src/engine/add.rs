//! Moving files into the bundle

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::Engine;
use super::transaction::Transaction;
use crate::error::{CbundleError, Result, with_path};
use crate::paths::{self, EntryKind};

/// Result of a successful add
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Added {
    /// Path relative to the bundle root
    pub name: PathBuf,
    /// Absolute path of the bundled copy
    pub bundled: PathBuf,
    /// Original location, now a link to `bundled`
    pub link: PathBuf,
}

impl Engine {
    /// Move `source` into the bundle and leave a link in its place.
    ///
    /// The member is named after the source file unless `name` is given.
    /// Content is copied and the backlink written before the original is
    /// touched; if any of that fails, everything created so far is removed
    /// again. Once the original is deleted the bundled copy is kept no matter
    /// what, so a failed link leaves a restorable member behind.
    pub fn add(&self, source: &Path, name: Option<&Path>) -> Result<Added> {
        self.add_with(source, name, paths::symlink_file)
    }

    /// [`Engine::add`] with the final link step supplied by the caller
    fn add_with<L>(&self, source: &Path, name: Option<&Path>, link: L) -> Result<Added>
    where
        L: FnOnce(&Path, &Path) -> io::Result<()>,
    {
        let source = paths::resolve(source)?;
        self.check_source(&source)?;

        let name = match name {
            Some(name) => super::member_name(name)?,
            None => super::member_name(Path::new(source.file_name().ok_or_else(|| {
                CbundleError::InvalidPath {
                    path: source.display().to_string(),
                    reason: "has no file name".to_string(),
                }
            })?))?,
        };

        let bundled = self.bundle.member_path(&name);
        if paths::classify(&bundled)?.exists() {
            return Err(CbundleError::AlreadyBundled {
                name: name.display().to_string(),
            });
        }

        tracing::debug!(
            source = %source.display(),
            name = %name.display(),
            "Adding file to bundle"
        );

        let mut transaction = Transaction::new();
        if let Some(parent) = bundled.parent() {
            transaction.create_dir_all(parent)?;
        }

        transaction.track_file_created(&bundled);
        fs::copy(&source, &bundled).map_err(|e| with_path("Failed to copy", &source, e))?;

        transaction.track_file_created(self.backlinks.record_path(&name));
        self.backlinks.record(&name, &source)?;

        fs::remove_file(&source).map_err(|e| with_path("Failed to remove", &source, e))?;
        transaction.commit();

        link(&bundled, &source).map_err(|e| CbundleError::LinkFailed {
            path: source.display().to_string(),
            name: name.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::debug!(link = %source.display(), bundled = %bundled.display(), "Linked");
        Ok(Added {
            name,
            bundled,
            link: source,
        })
    }

    fn check_source(&self, source: &Path) -> Result<()> {
        let not_regular = |reason: &str| CbundleError::NotARegularFile {
            path: source.display().to_string(),
            reason: reason.to_string(),
        };

        match paths::classify(source)? {
            EntryKind::RegularFile => {}
            EntryKind::Missing => {
                return Err(CbundleError::NotFound {
                    path: source.display().to_string(),
                    hint: None,
                });
            }
            EntryKind::Symlink {
                resolves_to: Some(resolved),
                ..
            } if resolved.starts_with(self.bundle.root()) => {
                return Err(not_regular("already a link into the bundle"));
            }
            other => return Err(not_regular(other.describe())),
        }

        if source.starts_with(self.bundle.root()) {
            return Err(CbundleError::InvalidPath {
                path: source.display().to_string(),
                reason: "file is already inside the bundle".to_string(),
            });
        }

        Ok(())
    }
}
