//! Restoring links (or copies) at original locations
//!
//! Restoring depends entirely on the backlink record. A member without one
//! is an orphan: there is nothing to tell where it came from, and no attempt
//! is made to guess.

use std::fs;
use std::path::{Path, PathBuf};

use super::{Engine, replace_with_copy};
use crate::error::{CbundleError, Result, with_path};
use crate::paths::{self, EntryKind};

/// What `restore` did at the original location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Restored {
    /// A new link was created
    Linked(PathBuf),
    /// The link was already in place, nothing changed
    AlreadyLinked(PathBuf),
    /// A detached copy of the content was written
    Copied(PathBuf),
}

impl Restored {
    pub fn path(&self) -> &Path {
        match self {
            Restored::Linked(path) | Restored::AlreadyLinked(path) | Restored::Copied(path) => {
                path
            }
        }
    }
}

/// How the original location has to be prepared before writing to it
enum Slot {
    Free,
    Replace,
    LinkedHere,
}

impl Engine {
    /// Recreate the link at the recorded original location of `name`.
    ///
    /// A link that already resolves to the member is left as is. A dangling
    /// link is considered stale and replaced. Anything else at that path is
    /// only replaced with `force`; directories never are.
    pub fn restore(&self, name: &Path, force: bool) -> Result<Restored> {
        let (name, bundled) = self.require_member(name)?;
        let origin = self.origin_of(&name)?;

        match prepare_slot(&name, &bundled, &origin, force, false)? {
            Slot::LinkedHere => {
                tracing::debug!(link = %origin.display(), "Link already in place");
                return Ok(Restored::AlreadyLinked(origin));
            }
            Slot::Replace => {
                fs::remove_file(&origin)
                    .map_err(|e| with_path("Failed to replace", &origin, e))?;
            }
            Slot::Free => {}
        }

        paths::symlink_file(&bundled, &origin).map_err(|e| CbundleError::LinkFailed {
            path: origin.display().to_string(),
            name: name.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::debug!(link = %origin.display(), bundled = %bundled.display(), "Restored link");
        Ok(Restored::Linked(origin))
    }

    /// Write a detached copy of `name` to its recorded original location.
    ///
    /// A link into this member is swapped for the copy without `force`;
    /// other occupants need `force`.
    pub fn restore_copy(&self, name: &Path, force: bool) -> Result<Restored> {
        let (name, bundled) = self.require_member(name)?;
        let origin = self.origin_of(&name)?;

        prepare_slot(&name, &bundled, &origin, force, true)?;
        replace_with_copy(&bundled, &origin)?;

        tracing::debug!(path = %origin.display(), "Restored copy");
        Ok(Restored::Copied(origin))
    }

    fn origin_of(&self, name: &Path) -> Result<PathBuf> {
        self.backlinks
            .lookup(name)?
            .ok_or_else(|| CbundleError::OrphanedFile {
                name: name.display().to_string(),
            })
    }
}

/// Decide whether `origin` may receive a link or copy of `bundled`.
/// Creates missing parent directories for a free slot.
fn prepare_slot(
    name: &Path,
    bundled: &Path,
    origin: &Path,
    force: bool,
    replacing_own_link: bool,
) -> Result<Slot> {
    let kind = paths::classify(origin)?;
    let occupied = || CbundleError::TargetOccupied {
        path: origin.display().to_string(),
        name: name.display().to_string(),
    };

    if kind.is_link_to(bundled) {
        return Ok(if replacing_own_link {
            Slot::Replace
        } else {
            Slot::LinkedHere
        });
    }

    match kind {
        EntryKind::Missing => {
            if let Some(parent) = origin.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| with_path("Failed to create directory", parent, e))?;
            }
            Ok(Slot::Free)
        }
        EntryKind::Directory => Err(occupied()),
        stale if stale.is_dangling_link() => {
            tracing::debug!(link = %origin.display(), "Replacing dangling link");
            Ok(Slot::Replace)
        }
        _ if force => {
            tracing::warn!(path = %origin.display(), "Replacing existing file");
            Ok(Slot::Replace)
        }
        _ => Err(occupied()),
    }
}
