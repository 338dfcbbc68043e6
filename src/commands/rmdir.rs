//! Rmdir command

use std::path::{Path, PathBuf};

use super::open_engine;
use crate::cli::RmdirArgs;
use crate::engine::Engine;
use crate::error::{CbundleError, Result};
use crate::paths::display_path;
use crate::ui;

/// Delete a subdirectory of the bundle, or the whole bundle.
pub fn run(bundle: Option<PathBuf>, args: RmdirArgs) -> Result<()> {
    let engine = open_engine(bundle)?;

    match args.dir {
        Some(dir) => {
            let removed = engine.remove_dir(Path::new(&dir), args.force)?;
            ui::success(&format!(
                "Deleted {} ({}, {})",
                ui::member(&dir),
                ui::plural(removed.files, "file", "files"),
                ui::plural(removed.dirs, "directory", "directories")
            ));
            Ok(())
        }
        None => teardown(engine, args.yes),
    }
}

/// Delete the whole bundle. Without `yes` this asks first, and refuses
/// outright when nobody can answer.
fn teardown(engine: Engine, yes: bool) -> Result<()> {
    let root = display_path(engine.bundle().root());

    if !yes {
        if !ui::is_interactive() {
            eprintln!("Refusing to delete {root} without --yes");
            return Err(CbundleError::Cancelled);
        }

        let contents = engine.bundle().contents()?;
        println!(
            "{root} holds {} and {}.",
            ui::plural(contents.files, "file", "files"),
            ui::plural(contents.dirs, "directory", "directories")
        );
        println!("Links pointing into it will be left dangling.");
        if !ui::confirm("Delete the bundle?")? {
            return Err(CbundleError::Cancelled);
        }
    }

    let removed = engine.rmdir()?;
    ui::success(&format!(
        "Deleted {root} ({}, {})",
        ui::plural(removed.files, "file", "files"),
        ui::plural(removed.dirs, "directory", "directories")
    ));
    Ok(())
}
