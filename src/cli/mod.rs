//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - add, copy, list, restore, rm, rmdir: bundle commands
//! - completions: shell completion generation

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod add;
pub mod completions;
pub mod copy;
pub mod list;
pub mod restore;
pub mod rm;
pub mod rmdir;

pub use add::AddArgs;
pub use completions::CompletionsArgs;
pub use copy::CopyArgs;
pub use list::ListArgs;
pub use restore::RestoreArgs;
pub use rm::RmArgs;
pub use rmdir::RmdirArgs;

/// cb - configuration bundler
///
/// Collect configuration files in one directory and leave links behind.
#[derive(Parser, Debug)]
#[command(
    name = "cb",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Collect configuration files in one bundle directory",
    long_about = "cb moves configuration files into a single bundle directory and replaces \
                  each of them with a symbolic link to its bundled copy. A backlink next to \
                  every bundled file remembers where it came from, so links can be restored \
                  and files taken out of the bundle again.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  cb init                      \x1b[90m# Create the bundle directory\x1b[0m\n   \
                  cb add ~/.bashrc             \x1b[90m# Move a file into the bundle\x1b[0m\n   \
                  cb ls -l                     \x1b[90m# List bundled files with link status\x1b[0m\n   \
                  cb restore .bashrc           \x1b[90m# Recreate a missing link\x1b[0m\n   \
                  cb rm .bashrc                \x1b[90m# Put the file back and unbundle it\x1b[0m\n"
)]
pub struct Cli {
    /// Bundle directory (defaults to <config dir>/configbundle)
    #[arg(long, short = 'b', global = true, env = "CBUNDLE_DIR")]
    pub bundle: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the bundle directory
    Init,

    /// Move a file into the bundle and link it back
    Add(AddArgs),

    /// Copy a bundled file somewhere else
    Copy(CopyArgs),

    /// List bundled files
    Ls(ListArgs),

    /// Recreate the link at a bundled file's original location
    Restore(RestoreArgs),

    /// Take a file out of the bundle, putting its content back in place
    Rm(RmArgs),

    /// Delete a subdirectory of the bundle, or the whole bundle
    Rmdir(RmdirArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
