//! configbundle - collect configuration files into one bundle directory
//!
//! Files are moved into the bundle and replaced by symbolic links to their
//! bundled copies. Every bundled file gets a backlink recording its original
//! location, which is what allows links to be restored and files to be taken
//! out of the bundle again.
//!
//! The engine in [`engine`] is usable without the CLI:
//!
//! ```rust,no_run
//! use std::path::Path;
//! use configbundle::bundle::Bundle;
//! use configbundle::engine::Engine;
//!
//! # fn main() -> configbundle::error::Result<()> {
//! let engine = Engine::new(Bundle::init(Path::new("/tmp/my-bundle"))?);
//! engine.add(Path::new("~/.bashrc"), None)?;
//! for entry in engine.entries(None)? {
//!     println!("{} {:?}", entry.name.display(), entry.status);
//! }
//! # Ok(())
//! # }
//! ```

pub mod backlink;
pub mod bundle;
pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod paths;
pub mod ui;
