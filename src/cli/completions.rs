use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    cb completions bash > ~/.bash_completion.d/cb\n\n\
                  Generate zsh completions:\n    cb completions zsh > ~/.zfunc/_cb\n\n\
                  Generate fish completions:\n    cb completions fish > ~/.config/fish/completions/cb.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
