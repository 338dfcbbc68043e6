//! Restore command

use std::path::{Path, PathBuf};

use super::open_engine;
use crate::cli::RestoreArgs;
use crate::engine::Restored;
use crate::error::Result;
use crate::paths::display_path;
use crate::ui;

pub fn run(bundle: Option<PathBuf>, args: RestoreArgs) -> Result<()> {
    let engine = open_engine(bundle)?;
    let name = Path::new(&args.member);

    let restored = if args.copy {
        engine.restore_copy(name, args.force)?
    } else {
        engine.restore(name, args.force)?
    };

    let path = display_path(restored.path());
    match restored {
        Restored::Linked(_) => ui::success(&format!("Linked {path}")),
        Restored::AlreadyLinked(_) => ui::note(&format!("{path} already links to the bundle")),
        Restored::Copied(_) => ui::success(&format!("Copied {} to {path}", ui::member(&args.member))),
    }
    Ok(())
}
