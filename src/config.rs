//! Locating the bundle
//!
//! The bundle path comes from `--bundle`, then `CBUNDLE_DIR` (both handled
//! by clap), and finally falls back to a `configbundle` directory under the
//! platform's configuration directory (XDG on Linux, Application Support on
//! macOS).

use std::path::PathBuf;

use crate::error::{CbundleError, Result};

/// Environment variable overriding the bundle location
pub const BUNDLE_DIR_ENV: &str = "CBUNDLE_DIR";

/// Environment variable holding a log filter directive
pub const LOG_ENV: &str = "CBUNDLE_LOG";

/// Default bundle directory name under the user's config directory
const APP_DIR: &str = "configbundle";

/// Bundle location chosen by the user, or the default one
pub fn bundle_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => default_bundle_dir(),
    }
}

/// `<config dir>/configbundle`
pub fn default_bundle_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| CbundleError::InvalidPath {
        path: APP_DIR.to_string(),
        reason: format!("could not determine the config directory, set {BUNDLE_DIR_ENV}"),
    })?;
    Ok(base.join(APP_DIR))
}
