//! Ls command

use std::path::{Path, PathBuf};

use super::open_engine;
use crate::cli::ListArgs;
use crate::error::{Result, io_error};
use crate::paths::display_path;
use crate::ui;

/// List members of the bundle root or of a subdirectory.
///
/// The plain listing prints one relative path per line and nothing else, so
/// it can be piped. `--long` adds link status and origin, `--json` prints
/// the same information as an array of objects.
pub fn run(bundle: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let engine = open_engine(bundle)?;
    let subdir = args.dir.as_deref().map(Path::new);

    if args.json {
        let entries = engine.entries(subdir)?;
        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| io_error("Failed to serialize listing", e.into()))?;
        println!("{json}");
        return Ok(());
    }

    if args.long {
        for entry in engine.entries(subdir)? {
            let origin = entry
                .origin
                .as_deref()
                .map_or_else(|| "-".to_string(), display_path);
            println!(
                "{}  {}  {}",
                ui::status_label(entry.status),
                entry.name.display(),
                origin
            );
        }
        return Ok(());
    }

    for name in engine.ls(subdir)? {
        println!("{}", name.display());
    }
    Ok(())
}
