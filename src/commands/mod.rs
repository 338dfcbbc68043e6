//! Command implementations for the cb CLI
//!
//! Each command opens the bundle, hands the work to [`crate::engine`] and
//! reports the outcome. No filesystem changes happen here.

pub mod add;
pub mod completions;
pub mod copy;
pub mod init;
pub mod list;
pub mod restore;
pub mod rm;
pub mod rmdir;

use std::path::PathBuf;

use crate::config;
use crate::engine::Engine;
use crate::error::Result;

/// Open the bundle chosen on the command line or the default one
fn open_engine(bundle: Option<PathBuf>) -> Result<Engine> {
    let dir = config::bundle_dir(bundle)?;
    Engine::open(&dir)
}
