//! Extracting detached copies of bundled files

use std::fs;
use std::path::{Path, PathBuf};

use super::{Engine, replace_with_copy};
use crate::error::{CbundleError, Result};
use crate::paths::{self, EntryKind};

impl Engine {
    /// Copy the member `name` to `target` and return where it was written.
    ///
    /// If `target` is a directory the copy goes inside it under the member's
    /// file name. An existing destination is only replaced with `overwrite`,
    /// and directories never are. Neither a link nor a backlink is created.
    pub fn copy(&self, name: &Path, target: &Path, overwrite: bool) -> Result<PathBuf> {
        let (name, bundled) = self.require_member(name)?;

        let mut dest = paths::resolve(target)?;
        // Follows a link at the target, so a linked directory counts too
        if fs::metadata(&dest).is_ok_and(|metadata| metadata.is_dir()) {
            if let Some(file_name) = name.file_name() {
                dest = paths::resolve(&dest.join(file_name))?;
            }
        }

        if dest.starts_with(self.bundle.root()) {
            return Err(CbundleError::InvalidPath {
                path: dest.display().to_string(),
                reason: "copy target is inside the bundle".to_string(),
            });
        }

        match paths::classify(&dest)? {
            EntryKind::Missing => {}
            EntryKind::Directory => {
                return Err(CbundleError::AlreadyExists {
                    path: dest.display().to_string(),
                });
            }
            _ if !overwrite => {
                return Err(CbundleError::AlreadyExists {
                    path: dest.display().to_string(),
                });
            }
            existing => {
                tracing::debug!(
                    dest = %dest.display(),
                    kind = existing.describe(),
                    "Overwriting copy target"
                );
            }
        }

        replace_with_copy(&bundled, &dest)?;
        tracing::debug!(name = %name.display(), dest = %dest.display(), "Copied");
        Ok(dest)
    }
}
