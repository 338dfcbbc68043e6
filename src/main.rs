//! cb - configuration bundler
//!
//! Moves configuration files into a single bundle directory and leaves
//! symbolic links behind in their place.

use clap::Parser;

use configbundle::cli::{Cli, Commands};
use configbundle::{commands, logging};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Init => commands::init::run(cli.bundle),
        Commands::Add(args) => commands::add::run(cli.bundle, args),
        Commands::Copy(args) => commands::copy::run(cli.bundle, args),
        Commands::Ls(args) => commands::list::run(cli.bundle, args),
        Commands::Restore(args) => commands::restore::run(cli.bundle, args),
        Commands::Rm(args) => commands::rm::run(cli.bundle, args),
        Commands::Rmdir(args) => commands::rmdir::run(cli.bundle, args),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        let code = e.exit_code();
        eprintln!("{:?}", miette::Report::new(e));
        std::process::exit(code);
    }
}
