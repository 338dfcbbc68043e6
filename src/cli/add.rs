use clap::Parser;
use std::path::PathBuf;

/// Arguments for the add command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Bundle a file under its own name:\n    cb add ~/.bashrc\n\n\
                  Bundle a file under another name:\n    cb add ~/.config/git/config --as git/config")]
pub struct AddArgs {
    /// File to move into the bundle
    pub file: PathBuf,

    /// Path inside the bundle (defaults to the file name)
    #[arg(long = "as", value_name = "NAME")]
    pub name: Option<String>,
}
