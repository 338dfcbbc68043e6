use clap::Parser;

/// Arguments for the restore command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Recreate a deleted link:\n    cb restore .bashrc\n\n\
                  Put a plain copy back instead of a link:\n    cb restore .bashrc --copy\n\n\
                  Replace whatever is at the original location:\n    cb restore .bashrc --force")]
pub struct RestoreArgs {
    /// Bundled file, as shown by 'cb ls'
    pub member: String,

    /// Write a copy of the file instead of a link
    #[arg(long)]
    pub copy: bool,

    /// Replace an existing file at the original location
    #[arg(long, short = 'f')]
    pub force: bool,
}
