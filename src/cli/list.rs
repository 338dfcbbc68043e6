use clap::Parser;

/// Arguments for the ls command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List the bundle root:\n    cb ls\n\n\
                  List a subdirectory with link status:\n    cb ls git --long\n\n\
                  Machine-readable listing:\n    cb ls --json")]
pub struct ListArgs {
    /// Subdirectory of the bundle to list
    pub dir: Option<String>,

    /// Show link status and original location
    #[arg(long, short = 'l')]
    pub long: bool,

    /// Print the listing as JSON
    #[arg(long, conflicts_with = "long")]
    pub json: bool,
}
