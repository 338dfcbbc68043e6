//! Copy command

use std::path::{Path, PathBuf};

use super::open_engine;
use crate::cli::CopyArgs;
use crate::error::{CbundleError, Result};
use crate::paths::display_path;
use crate::ui;

/// Copy a member out of the bundle.
///
/// An existing destination is replaced with `--force`, or after confirming
/// on a terminal.
pub fn run(bundle: Option<PathBuf>, args: CopyArgs) -> Result<()> {
    let engine = open_engine(bundle)?;
    let name = Path::new(&args.member);

    let written = match engine.copy(name, &args.target, args.force) {
        Err(CbundleError::AlreadyExists { path }) if !args.force && ui::is_interactive() => {
            let dest = PathBuf::from(&path);
            if dest.is_dir() {
                return Err(CbundleError::AlreadyExists { path });
            }
            if !ui::confirm(&format!("Overwrite {}?", display_path(&dest)))? {
                return Err(CbundleError::Cancelled);
            }
            engine.copy(name, &args.target, true)?
        }
        other => other?,
    };

    ui::success(&format!(
        "Copied {} to {}",
        ui::member(&args.member),
        display_path(&written)
    ));
    Ok(())
}
