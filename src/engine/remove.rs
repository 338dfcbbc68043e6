//! Taking files back out of the bundle

use std::fs;
use std::path::{Path, PathBuf};

use super::{Engine, replace_with_copy};
use crate::bundle::BundleContents;
use crate::error::{Result, with_path};
use crate::paths;

/// What happened at the original location during `rm`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkCleanup {
    /// The link was replaced by the file content
    Restored(PathBuf),
    /// Nothing was at the original location
    Missing(PathBuf),
    /// Something other than our link was there and was left alone
    Foreign(PathBuf),
    /// No backlink, the original location is unknown
    NoRecord,
}

/// Result of a successful rm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removed {
    pub name: PathBuf,
    pub cleanup: LinkCleanup,
}

impl Engine {
    /// Remove the member `name` from the bundle.
    ///
    /// When the original location still holds the link to this member, the
    /// link is swapped for the file content, undoing `add`. A missing or
    /// foreign entry there is left untouched. The backlink and the bundled
    /// file are removed either way.
    pub fn rm(&self, name: &Path) -> Result<Removed> {
        let (name, bundled) = self.require_member(name)?;

        let cleanup = match self.origin_or_orphan(&name)? {
            None => LinkCleanup::NoRecord,
            Some(origin) => {
                let kind = paths::classify(&origin)?;
                if kind.is_link_to(&bundled) {
                    replace_with_copy(&bundled, &origin)?;
                    tracing::debug!(path = %origin.display(), "Put content back in place");
                    LinkCleanup::Restored(origin)
                } else if kind.exists() {
                    tracing::warn!(
                        path = %origin.display(),
                        kind = kind.describe(),
                        "Original location no longer links to the bundle, leaving it alone"
                    );
                    LinkCleanup::Foreign(origin)
                } else {
                    tracing::debug!(path = %origin.display(), "Link already gone");
                    LinkCleanup::Missing(origin)
                }
            }
        };

        self.backlinks.forget(&name)?;
        fs::remove_file(&bundled).map_err(|e| with_path("Failed to remove", &bundled, e))?;
        self.prune_empty_parents(&bundled);

        Ok(Removed { name, cleanup })
    }

    /// Delete the subdirectory `dir` of the bundle.
    ///
    /// Non-empty directories need `force`. Members inside are deleted with
    /// their backlinks and, as with a full teardown, links pointing at them
    /// are left dangling.
    pub fn remove_dir(&self, dir: &Path, force: bool) -> Result<BundleContents> {
        let dir = paths::member_dir(dir)?;
        self.bundle.remove_dir(&dir, force)
    }

    /// Remove directories inside the bundle that `member` leaves empty
    fn prune_empty_parents(&self, member: &Path) {
        let root = self.bundle.root();
        for dir in member.ancestors().skip(1) {
            if dir == root || !dir.starts_with(root) || fs::remove_dir(dir).is_err() {
                break;
            }
            tracing::debug!(dir = %dir.display(), "Removed empty directory");
        }
    }
}
