//! Bundling engine
//!
//! Ties the bundle directory, its backlink records and the links left at the
//! original locations together. Each operation reads the filesystem state it
//! needs when it runs; nothing about a member's link is cached, so a link the
//! user deleted by hand is noticed the next time it matters.
//!
//! Operations live in submodules by verb:
//! - [`add`]: move a file into the bundle and link it back
//! - [`copy`]: extract a detached copy of a member
//! - [`restore`]: recreate the link, or a copy, at the original location
//! - [`remove`]: take a member, or a whole subdirectory, out of the bundle

pub mod add;
pub mod copy;
pub mod remove;
pub mod restore;
mod transaction;

pub use add::Added;
pub use remove::{LinkCleanup, Removed};
pub use restore::Restored;

use serde::{Serialize, Serializer};
use std::fs;
use std::path::{Path, PathBuf};

use crate::backlink::BacklinkStore;
use crate::bundle::{Bundle, BundleContents};
use crate::error::{CbundleError, Result, with_path};
use crate::paths::{self, EntryKind};

/// Link state of a bundled file, derived from disk on every call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    /// Backlink recorded and the link resolves to the bundled file
    Linked,
    /// Backlink recorded but the link is missing, dangling or replaced
    Unlinked,
    /// No backlink, the original location is unknown
    Orphaned,
}

/// One line of a bundle listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberEntry {
    #[serde(serialize_with = "lossy_path")]
    pub name: PathBuf,
    pub status: MemberStatus,
    #[serde(serialize_with = "lossy_origin")]
    pub origin: Option<PathBuf>,
}

fn lossy_path<S: Serializer>(path: &Path, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

fn lossy_origin<S: Serializer>(
    origin: &Option<PathBuf>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match origin {
        Some(path) => lossy_path(path, serializer),
        None => serializer.serialize_none(),
    }
}

/// Operations on one bundle
#[derive(Debug, Clone)]
pub struct Engine {
    bundle: Bundle,
    backlinks: BacklinkStore,
}

impl Engine {
    pub fn new(bundle: Bundle) -> Self {
        let backlinks = BacklinkStore::new(bundle.root());
        Self { bundle, backlinks }
    }

    /// Open the bundle at `path` and wrap it
    pub fn open(path: &Path) -> Result<Self> {
        Bundle::open(path).map(Self::new)
    }

    pub fn bundle(&self) -> &Bundle {
        &self.bundle
    }

    pub fn backlinks(&self) -> &BacklinkStore {
        &self.backlinks
    }

    /// Members directly inside the bundle root or `subdir`
    pub fn ls(&self, subdir: Option<&Path>) -> Result<Vec<PathBuf>> {
        match subdir {
            Some(dir) => self.bundle.list(Some(&paths::member_dir(dir)?)),
            None => self.bundle.list(None),
        }
    }

    /// Like [`Engine::ls`], with each member's link status
    pub fn entries(&self, subdir: Option<&Path>) -> Result<Vec<MemberEntry>> {
        self.ls(subdir)?
            .into_iter()
            .map(|name| {
                let bundled = self.bundle.member_path(&name);
                let origin = self.origin_or_orphan(&name)?;
                let status = link_status(origin.as_deref(), &bundled)?;
                Ok(MemberEntry {
                    name,
                    status,
                    origin,
                })
            })
            .collect()
    }

    /// Link status of a single member
    pub fn status(&self, name: &Path) -> Result<MemberStatus> {
        let (name, bundled) = self.require_member(name)?;
        let origin = self.origin_or_orphan(&name)?;
        link_status(origin.as_deref(), &bundled)
    }

    /// Delete the whole bundle.
    ///
    /// Links at original locations are left alone and dangle afterwards.
    /// This is a teardown, not a bulk restore.
    pub fn rmdir(self) -> Result<BundleContents> {
        tracing::debug!(bundle = %self.bundle.root().display(), "Tearing down bundle");
        self.bundle.remove()
    }

    /// Recorded origin of `name`. A record that cannot be read as a link is
    /// logged and treated like a missing one.
    fn origin_or_orphan(&self, name: &Path) -> Result<Option<PathBuf>> {
        match self.backlinks.lookup(name) {
            Ok(origin) => Ok(origin),
            Err(CbundleError::InvalidPath { path, reason }) => {
                tracing::warn!(%path, %reason, "Ignoring unreadable backlink");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Validate `name` and return it together with the member's absolute path.
    /// Fails unless a regular file exists there.
    fn require_member(&self, name: &Path) -> Result<(PathBuf, PathBuf)> {
        let name = member_name(name)?;
        let bundled = self.bundle.member_path(&name);

        match paths::classify(&bundled)? {
            EntryKind::RegularFile => Ok((name, bundled)),
            EntryKind::Missing => Err(CbundleError::NotFound {
                path: name.display().to_string(),
                hint: Some("Run 'cb ls' to see what is bundled".to_string()),
            }),
            other => Err(CbundleError::NotARegularFile {
                path: name.display().to_string(),
                reason: other.describe().to_string(),
            }),
        }
    }
}

fn member_name(name: &Path) -> Result<PathBuf> {
    paths::member_path(name)
}

fn link_status(origin: Option<&Path>, bundled: &Path) -> Result<MemberStatus> {
    let Some(origin) = origin else {
        return Ok(MemberStatus::Orphaned);
    };

    if paths::classify(origin)?.is_link_to(bundled) {
        Ok(MemberStatus::Linked)
    } else {
        Ok(MemberStatus::Unlinked)
    }
}

/// Put a copy of `source` at `dest` in one rename.
///
/// An existing file or symlink at `dest` is replaced, never written through.
fn replace_with_copy(source: &Path, dest: &Path) -> Result<()> {
    let parent = dest.parent().ok_or_else(|| CbundleError::InvalidPath {
        path: dest.display().to_string(),
        reason: "has no parent directory".to_string(),
    })?;

    let mut input = fs::File::open(source).map_err(|e| with_path("Failed to open", source, e))?;
    let permissions = input
        .metadata()
        .map_err(|e| with_path("Failed to inspect", source, e))?
        .permissions();

    let mut staged = tempfile::Builder::new()
        .prefix(".cbundle-")
        .tempfile_in(parent)
        .map_err(|e| with_path("Failed to create temporary file in", parent, e))?;
    std::io::copy(&mut input, staged.as_file_mut())
        .map_err(|e| with_path("Failed to copy", source, e))?;
    fs::set_permissions(staged.path(), permissions)
        .map_err(|e| with_path("Failed to set permissions on", dest, e))?;

    staged
        .persist(dest)
        .map_err(|e| with_path("Failed to write", dest, e.error))?;
    Ok(())
}
