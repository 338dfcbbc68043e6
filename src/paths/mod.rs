//! Path resolution and classification
//!
//! Every path that reaches the engine goes through [`resolve`] first, so the
//! rest of the crate can rely on absolute, lexically clean paths whose parent
//! chain contains no symbolic links. The final component is deliberately left
//! alone: a link at the final component is exactly what callers want to see.

pub mod member;

pub use member::{member_dir, member_path, parse_member_dir, parse_member_path};

use normpath::PathExt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::error::{CbundleError, Result, io_error};

/// What a path points at, inspected without following a final symlink
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Missing,
    RegularFile,
    Directory,
    Symlink {
        /// Raw link target as stored on disk
        target: PathBuf,
        /// Canonical path the link ends up at, `None` when dangling
        resolves_to: Option<PathBuf>,
    },
    /// Sockets, FIFOs, device nodes
    Other,
}

impl EntryKind {
    pub fn exists(&self) -> bool {
        !matches!(self, EntryKind::Missing)
    }

    /// True for a symlink that ends up at `file`
    pub fn is_link_to(&self, file: &Path) -> bool {
        match self {
            EntryKind::Symlink {
                resolves_to: Some(resolved),
                ..
            } => fs::canonicalize(file).is_ok_and(|canonical| &canonical == resolved),
            _ => false,
        }
    }

    /// True for a symlink whose target does not exist
    pub fn is_dangling_link(&self) -> bool {
        matches!(
            self,
            EntryKind::Symlink {
                resolves_to: None,
                ..
            }
        )
    }

    pub fn describe(&self) -> &'static str {
        match self {
            EntryKind::Missing => "missing",
            EntryKind::RegularFile => "regular file",
            EntryKind::Directory => "directory",
            EntryKind::Symlink { .. } => "symbolic link",
            EntryKind::Other => "special file",
        }
    }
}

/// Resolve `path` to an absolute, normalized path.
///
/// Expands a leading `~`, joins relative paths onto the current directory,
/// removes `.` and `..` lexically and normalizes the longest existing
/// ancestor of the parent. For paths that do not exist yet the missing
/// components are appended back unchanged.
pub fn resolve(path: &Path) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(invalid(path, "path is empty"));
    }

    let expanded = expand_home(path)?;
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        std::env::current_dir()
            .map_err(|e| io_error("Failed to get current directory", e))?
            .join(expanded)
    };
    let cleaned = clean(&absolute);

    match (cleaned.parent(), cleaned.file_name()) {
        (Some(parent), Some(file_name)) => Ok(normalize_ancestors(parent)?.join(file_name)),
        // Filesystem root
        _ => Ok(cleaned),
    }
}

/// Inspect `path` without following a symlink at its final component
pub fn classify(path: &Path) -> Result<EntryKind> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            return Ok(EntryKind::Missing);
        }
        Err(e) => return Err(crate::error::with_path("Failed to inspect", path, e)),
    };

    let file_type = metadata.file_type();
    let kind = if file_type.is_symlink() {
        let target =
            fs::read_link(path).map_err(|e| crate::error::with_path("Failed to read link", path, e))?;
        EntryKind::Symlink {
            target,
            resolves_to: fs::canonicalize(path).ok(),
        }
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::RegularFile
    } else {
        EntryKind::Other
    };

    Ok(kind)
}

/// Create a symbolic link at `link` pointing to `target`
pub fn symlink_file(target: &Path, link: &Path) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(target, link)
    }
    #[cfg(windows)]
    {
        std::os::windows::fs::symlink_file(target, link)
    }
}

/// Shorten a path under the home directory to `~/...` for display
pub fn display_path(path: &Path) -> String {
    let Some(home) = dirs::home_dir() else {
        return path.display().to_string();
    };
    match path.strip_prefix(&home) {
        Ok(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Ok(rest) => format!("~/{}", rest.display()),
        Err(_) => path.display().to_string(),
    }
}

fn invalid(path: &Path, reason: &str) -> CbundleError {
    CbundleError::InvalidPath {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

fn expand_home(path: &Path) -> Result<PathBuf> {
    let Ok(rest) = path.strip_prefix("~") else {
        return Ok(path.to_path_buf());
    };
    let home = dirs::home_dir().ok_or_else(|| invalid(path, "home directory is unknown"))?;
    Ok(home.join(rest))
}

/// Lexically drop `.` and fold `..` into its parent
fn clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `/..` stays `/`
                if matches!(cleaned.components().next_back(), Some(Component::Normal(_))) {
                    cleaned.pop();
                }
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    cleaned
}

/// Normalize the longest existing ancestor of `dir` and append the rest
fn normalize_ancestors(dir: &Path) -> Result<PathBuf> {
    let mut current = dir;
    let mut missing = Vec::new();

    while fs::symlink_metadata(current).is_err() {
        match (current.file_name(), current.parent()) {
            (Some(name), Some(parent)) => {
                missing.push(name);
                current = parent;
            }
            _ => return Ok(dir.to_path_buf()),
        }
    }

    let mut normalized = current
        .normalize()
        .map(|norm| norm.as_path().to_path_buf())
        .map_err(|e| invalid(current, &format!("unresolvable symbolic component: {e}")))?;

    for name in missing.iter().rev() {
        normalized.push(name);
    }

    Ok(normalized)
}
