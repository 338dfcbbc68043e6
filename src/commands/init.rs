//! Init command

use std::path::PathBuf;

use crate::bundle::Bundle;
use crate::config;
use crate::error::Result;
use crate::paths::display_path;
use crate::ui;

/// Create the bundle directory
pub fn run(bundle: Option<PathBuf>) -> Result<()> {
    let dir = config::bundle_dir(bundle)?;
    let bundle = Bundle::init(&dir)?;
    ui::success(&format!("Created bundle at {}", display_path(bundle.root())));
    Ok(())
}
