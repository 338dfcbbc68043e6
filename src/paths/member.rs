//! Parsing of bundle-relative member arguments
//!
//! Users name bundled files the way they appear in `cb ls`, e.g. `.bashrc`
//! or `shell/aliases`. Sloppy input like `//shell///aliases` is accepted and
//! cleaned up; anything that could leave the bundle is rejected.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use crate::backlink::{self, RECORD_SUFFIX};
use crate::error::{CbundleError, Result};

/// Parse an argument naming a file inside the bundle
pub fn parse_member_path(arg: &str) -> Result<PathBuf> {
    if arg.ends_with('/') {
        return Err(invalid(arg, "must name a file, not a directory"));
    }
    sanitize(arg)
}

/// Parse an argument naming a directory inside the bundle
pub fn parse_member_dir(arg: &str) -> Result<PathBuf> {
    sanitize(arg)
}

/// [`parse_member_path`] for names that may not be valid UTF-8
pub fn member_path(name: &Path) -> Result<PathBuf> {
    match name.to_str() {
        Some(arg) => parse_member_path(arg),
        None => sanitize_components(name),
    }
}

/// [`parse_member_dir`] for names that may not be valid UTF-8
pub fn member_dir(name: &Path) -> Result<PathBuf> {
    match name.to_str() {
        Some(arg) => parse_member_dir(arg),
        None => sanitize_components(name),
    }
}

fn sanitize(arg: &str) -> Result<PathBuf> {
    if arg.trim().is_empty() {
        return Err(invalid(arg, "bundle path cannot be empty"));
    }

    let mut parts = PathBuf::new();
    for part in arg.split('/') {
        match part {
            "" | "." => {}
            ".." => return Err(invalid(arg, "must stay inside the bundle")),
            name => push_part(&mut parts, OsStr::new(name), arg)?,
        }
    }

    if parts.as_os_str().is_empty() {
        return Err(invalid(arg, "bundle path cannot be empty"));
    }

    Ok(parts)
}

fn sanitize_components(name: &Path) -> Result<PathBuf> {
    let arg = name.display().to_string();

    let mut parts = PathBuf::new();
    for component in name.components() {
        match component {
            Component::Normal(part) => push_part(&mut parts, part, &arg)?,
            Component::ParentDir => return Err(invalid(&arg, "must stay inside the bundle")),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }

    if parts.as_os_str().is_empty() {
        return Err(invalid(&arg, "bundle path cannot be empty"));
    }

    Ok(parts)
}

/// Append one component, rejecting names a backlink record could claim
fn push_part(parts: &mut PathBuf, part: &OsStr, arg: &str) -> Result<()> {
    if backlink::is_record(Path::new(part)) {
        return Err(invalid(
            arg,
            &format!("the '{RECORD_SUFFIX}' suffix is reserved for backlink records"),
        ));
    }
    parts.push(part);
    Ok(())
}

fn invalid(arg: &str, reason: &str) -> CbundleError {
    CbundleError::InvalidPath {
        path: arg.to_string(),
        reason: reason.to_string(),
    }
}
