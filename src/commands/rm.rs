//! Rm command

use std::path::{Path, PathBuf};

use super::open_engine;
use crate::cli::RmArgs;
use crate::engine::LinkCleanup;
use crate::error::{CbundleError, Result};
use crate::paths::display_path;
use crate::ui;

/// Take a member out of the bundle
pub fn run(bundle: Option<PathBuf>, args: RmArgs) -> Result<()> {
    let engine = open_engine(bundle)?;
    let name = Path::new(&args.member);

    if !args.yes
        && ui::is_interactive()
        && !ui::confirm(&format!("Remove {} from the bundle?", ui::member(&args.member)))?
    {
        return Err(CbundleError::Cancelled);
    }

    let removed = engine.rm(name)?;
    let member = ui::member(&removed.name.display().to_string());

    match removed.cleanup {
        LinkCleanup::Restored(path) => {
            ui::success(&format!("Moved {member} back to {}", display_path(&path)));
        }
        LinkCleanup::Missing(path) => {
            ui::success(&format!("Removed {member}"));
            ui::note(&format!("No link at {}, nothing put back", display_path(&path)));
        }
        LinkCleanup::Foreign(path) => {
            ui::success(&format!("Removed {member}"));
            ui::note(&format!(
                "{} is not a link to the bundle, left it alone",
                display_path(&path)
            ));
        }
        LinkCleanup::NoRecord => {
            ui::success(&format!("Removed {member}"));
            ui::note("It had no backlink, nothing put back");
        }
    }
    Ok(())
}
