//! Bundle directory
//!
//! A bundle is a plain directory. Its members are the regular files directly
//! inside it (or inside one of its subdirectories when asked for), next to
//! the `.link` sidecars kept by [`crate::backlink`].

use normpath::PathExt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::backlink;
use crate::error::{CbundleError, Result, with_path};
use crate::paths;

/// What a bundle directory holds, counted recursively
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BundleContents {
    /// Bundled files and backlink records
    pub files: usize,
    pub dirs: usize,
}

impl BundleContents {
    pub fn is_empty(&self) -> bool {
        self.files == 0 && self.dirs == 0
    }
}

/// A bundle directory on disk
#[derive(Debug, Clone)]
pub struct Bundle {
    root: PathBuf,
}

impl Bundle {
    /// Create the bundle directory at `path`.
    ///
    /// An existing empty directory is accepted as is, so running `init`
    /// twice in a row succeeds.
    pub fn init(path: &Path) -> Result<Self> {
        let resolved = paths::resolve(path)?;

        match fs::metadata(&resolved) {
            Ok(metadata) if metadata.is_dir() => {
                let mut entries = fs::read_dir(&resolved)
                    .map_err(|e| with_path("Failed to read directory", &resolved, e))?;
                if entries.next().is_some() {
                    return Err(CbundleError::AlreadyExists {
                        path: resolved.display().to_string(),
                    });
                }
            }
            Ok(_) => {
                return Err(CbundleError::NotADirectory {
                    path: resolved.display().to_string(),
                });
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                fs::create_dir_all(&resolved)
                    .map_err(|e| with_path("Failed to create bundle", &resolved, e))?;
                tracing::debug!(bundle = %resolved.display(), "Created bundle directory");
            }
            Err(e) => return Err(with_path("Failed to inspect", &resolved, e)),
        }

        Self::open(&resolved)
    }

    /// Open an existing bundle directory
    pub fn open(path: &Path) -> Result<Self> {
        let resolved = paths::resolve(path)?;

        match fs::metadata(&resolved) {
            Ok(metadata) if metadata.is_dir() => {}
            Ok(_) => {
                return Err(CbundleError::NotADirectory {
                    path: resolved.display().to_string(),
                });
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(CbundleError::NotFound {
                    path: resolved.display().to_string(),
                    hint: Some("Run 'cb init' to create the bundle".to_string()),
                });
            }
            Err(e) => return Err(with_path("Failed to inspect", &resolved, e)),
        }

        let root = resolved
            .normalize()
            .map(|norm| norm.as_path().to_path_buf())
            .map_err(|e| with_path("Failed to normalize", &resolved, e))?;

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of the member at `relative`. No I/O.
    pub fn member_path(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }

    /// Regular files directly inside the bundle root, or inside `subdir`.
    ///
    /// Subdirectories are not descended into and backlink records are never
    /// reported. Paths are relative to the bundle root, sorted by name.
    pub fn list(&self, subdir: Option<&Path>) -> Result<Vec<PathBuf>> {
        let dir = subdir.map_or_else(|| self.root.clone(), |sub| self.root.join(sub));

        match paths::classify(&dir)? {
            paths::EntryKind::Directory => {}
            paths::EntryKind::Missing => {
                return Err(CbundleError::NotFound {
                    path: dir.display().to_string(),
                    hint: None,
                });
            }
            _ => {
                return Err(CbundleError::NotADirectory {
                    path: dir.display().to_string(),
                });
            }
        }

        let mut members = Vec::new();
        for entry in fs::read_dir(&dir).map_err(|e| with_path("Failed to read", &dir, e))? {
            let entry = entry.map_err(|e| with_path("Failed to read", &dir, e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| with_path("Failed to inspect", &entry.path(), e))?;

            if !file_type.is_file() || backlink::is_record(&entry.path()) {
                continue;
            }

            let name = PathBuf::from(entry.file_name());
            members.push(match subdir {
                Some(sub) => sub.join(name),
                None => name,
            });
        }

        members.sort();
        Ok(members)
    }

    /// Count everything below the bundle root
    pub fn contents(&self) -> Result<BundleContents> {
        count(&self.root)
    }

    /// Delete the subdirectory at `relative`.
    ///
    /// A directory that still holds anything is only deleted with `force`.
    /// Returns what was inside.
    pub fn remove_dir(&self, relative: &Path, force: bool) -> Result<BundleContents> {
        let dir = self.member_path(relative);

        match paths::classify(&dir)? {
            paths::EntryKind::Directory => {}
            paths::EntryKind::Missing => {
                return Err(CbundleError::NotFound {
                    path: relative.display().to_string(),
                    hint: Some("Run 'cb ls' to see what is bundled".to_string()),
                });
            }
            _ => {
                return Err(CbundleError::NotADirectory {
                    path: relative.display().to_string(),
                });
            }
        }

        let contents = count(&dir)?;
        if contents.is_empty() {
            fs::remove_dir(&dir).map_err(|e| with_path("Failed to remove", &dir, e))?;
        } else if force {
            fs::remove_dir_all(&dir).map_err(|e| with_path("Failed to remove", &dir, e))?;
        } else {
            return Err(CbundleError::DirectoryNotEmpty {
                path: relative.display().to_string(),
            });
        }

        tracing::debug!(
            dir = %dir.display(),
            files = contents.files,
            dirs = contents.dirs,
            "Removed bundle subdirectory"
        );
        Ok(contents)
    }

    /// Delete the bundle directory and everything in it
    pub fn remove(self) -> Result<BundleContents> {
        let contents = self.contents()?;
        fs::remove_dir_all(&self.root)
            .map_err(|e| with_path("Failed to remove bundle", &self.root, e))?;
        tracing::debug!(
            bundle = %self.root.display(),
            files = contents.files,
            dirs = contents.dirs,
            "Removed bundle directory"
        );
        Ok(contents)
    }
}

/// Count everything below `dir`
fn count(dir: &Path) -> Result<BundleContents> {
    let mut contents = BundleContents::default();

    for entry in WalkDir::new(dir).min_depth(1) {
        let entry = entry.map_err(|e| CbundleError::Io {
            message: format!("Failed to walk {}: {e}", dir.display()),
            source: e.into(),
        })?;
        if entry.file_type().is_dir() {
            contents.dirs += 1;
        } else {
            contents.files += 1;
        }
    }

    Ok(contents)
}
