use clap::Parser;
use std::path::PathBuf;

/// Arguments for the copy command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Extract a bundled file:\n    cb copy .bashrc /tmp/bashrc\n\n\
                  Extract into a directory, replacing what is there:\n    cb copy git/config ~/backup --force")]
pub struct CopyArgs {
    /// Bundled file, as shown by 'cb ls'
    pub member: String,

    /// Destination file or directory
    pub target: PathBuf,

    /// Overwrite an existing destination without asking
    #[arg(long, short = 'f')]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_cli_parsing_copy() {
        let cli = Cli::try_parse_from(["cb", "copy", ".bashrc", "/tmp/out", "-f"]).unwrap();
        match cli.command {
            Commands::Copy(args) => {
                assert_eq!(args.member, ".bashrc");
                assert_eq!(args.target, std::path::PathBuf::from("/tmp/out"));
                assert!(args.force);
            }
            _ => panic!("Expected Copy command"),
        }
    }
}
