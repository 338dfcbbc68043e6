use clap::Parser;

/// Arguments for the rmdir command
#[derive(Parser, Debug)]
#[command(after_help = "Without SUBDIR the whole bundle is deleted.\n\
                  Links pointing into deleted files are NOT restored and will dangle.\n\
                  Use 'cb rm' per file to put content back first.\n\n\
                  EXAMPLES:\n  \
                  Delete an empty subdirectory:\n    cb rmdir git\n\n\
                  Delete a subdirectory with everything in it:\n    cb rmdir git --force\n\n\
                  Delete the bundle without confirmation:\n    cb rmdir -y")]
pub struct RmdirArgs {
    /// Subdirectory of the bundle to delete
    pub dir: Option<String>,

    /// Delete the subdirectory even if it is not empty
    #[arg(long, short = 'f', requires = "dir")]
    pub force: bool,

    /// Skip confirmation prompt when deleting the whole bundle
    #[arg(long, short = 'y', conflicts_with = "dir")]
    pub yes: bool,
}
