//! Shell completion generation
//!
//! # Usage
//!
//! ```bash
//! # Bash - add to ~/.bashrc
//! source <(clubreg completions bash)
//!
//! # Zsh - add to ~/.zshrc
//! source <(clubreg completions zsh)
//!
//! # Fish
//! clubreg completions fish > ~/.config/fish/completions/clubreg.fish
//! ```

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use miette::Result;
use std::io;

use crate::cli::Cli;

#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "clubreg", &mut io::stdout());
    Ok(())
}
