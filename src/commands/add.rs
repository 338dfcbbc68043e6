//! Add command

use std::path::{Path, PathBuf};

use super::open_engine;
use crate::cli::AddArgs;
use crate::error::Result;
use crate::paths::display_path;
use crate::ui;

pub fn run(bundle: Option<PathBuf>, args: AddArgs) -> Result<()> {
    let engine = open_engine(bundle)?;
    let added = engine.add(&args.file, args.name.as_deref().map(Path::new))?;

    ui::success(&format!(
        "Bundled {} as {}",
        display_path(&added.link),
        ui::member(&added.name.display().to_string())
    ));
    Ok(())
}
