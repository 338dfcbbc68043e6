use clap::Parser;

/// Arguments for the rm command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Take a file out of the bundle:\n    cb rm .bashrc\n\n\
                  Without confirmation:\n    cb rm .bashrc -y")]
pub struct RmArgs {
    /// Bundled file, as shown by 'cb ls'
    pub member: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}
